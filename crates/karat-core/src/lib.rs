//! # karat-core
//!
//! Shared vocabulary for the karat jewelry-pricing engine:
//!
//! - Named inputs a formula can reference ([`ValueName`])
//! - Binary operators and their precedence ([`OperatorKind`])
//! - The evaluation context ([`PricingContext`])
//!
//! The expression tree, evaluator, renderer and token parser live in
//! `karat-formula`, which builds on these types.

pub mod context;
pub mod error;
pub mod operator;
pub mod value;

pub use context::PricingContext;
pub use error::{PricingError, PricingResult};
pub use operator::{OperatorKind, Precedence};
pub use value::ValueName;
