//! Formula evaluator
//!
//! Evaluates an expression tree against a [`PricingContext`]. The evaluator
//! is total: it always returns a number, never an error. It sits behind a
//! live editor where formulas are routinely half-built, so every degenerate
//! input has a defined safe result instead of a failure path:
//!
//! - an absent formula evaluates to 0
//! - a Base reference with no base in the context reads as 0
//! - division by zero yields 0, never infinity or NaN, because results feed
//!   directly into displayed prices

use karat_core::{OperatorKind, PricingContext};

use crate::ast::FormulaNode;

/// Evaluate a formula tree against a context.
///
/// Pure function of its inputs; both operands of a binary operation are
/// evaluated eagerly (no short-circuit).
pub fn evaluate(node: Option<&FormulaNode>, ctx: &PricingContext) -> f64 {
    let node = match node {
        Some(node) => node,
        None => return 0.0,
    };

    match node {
        FormulaNode::Constant { value } => *value,
        FormulaNode::Value { name } => ctx.value(*name),
        FormulaNode::Op { op, left, right } => {
            let l = evaluate(Some(left), ctx);
            let r = evaluate(Some(right), ctx);
            apply(*op, l, r)
        }
    }
}

fn apply(op: OperatorKind, l: f64, r: f64) -> f64 {
    match op {
        OperatorKind::Add => l + r,
        OperatorKind::Subtract => l - r,
        OperatorKind::Multiply => l * r,
        OperatorKind::Divide => {
            if r == 0.0 {
                0.0
            } else {
                l / r
            }
        }
        // "l percentOf r": l scaled by r percent
        OperatorKind::PercentOf => l * (r / 100.0),
    }
}
