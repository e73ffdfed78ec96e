//! # karat-formula
//!
//! Expression-tree formula engine for karat jewelry pricing.
//!
//! This crate provides:
//! - The formula expression tree ([`FormulaNode`])
//! - Evaluation against a pricing context ([`evaluate`], [`evaluate_model`])
//! - Human-readable rendering ([`render`])
//! - Flat token sequences for the visual editor ([`to_tokens`], [`parse_tokens`])
//!
//! The engine is deliberately total: it sits behind a drag-and-drop formula
//! editor where input is transiently malformed, so every operation degrades
//! to a safe default (0, a placeholder string, a repaired tree) instead of
//! failing.
//!
//! ## Example
//!
//! ```rust
//! use karat_core::{OperatorKind, PricingContext, ValueName};
//! use karat_formula::{evaluate, render, FormulaNode};
//!
//! // metal + (labor × 2)
//! let tree = FormulaNode::op(
//!     OperatorKind::Add,
//!     FormulaNode::value(ValueName::Metal),
//!     FormulaNode::op(
//!         OperatorKind::Multiply,
//!         FormulaNode::value(ValueName::Labor),
//!         FormulaNode::constant(2.0),
//!     ),
//! );
//!
//! let ctx = PricingContext { metal_cost: 100.0, labor: 50.0, ..Default::default() };
//! assert_eq!(evaluate(Some(&tree), &ctx), 200.0);
//! assert_eq!(render(Some(&tree)), "Metal + (Labor × 2)");
//! ```

pub mod ast;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod render;
pub mod token;

pub use ast::{references_base, FormulaNode};
pub use evaluator::evaluate;
pub use model::{evaluate_model, ModelPrices, PricingModel};
pub use parser::parse_tokens;
pub use render::{render, NO_FORMULA};
pub use token::{to_tokens, FormulaToken};
