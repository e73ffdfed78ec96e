//! Human-readable formula rendering
//!
//! Produces the infix string shown in formula lists and on the pricing
//! screen. Display only; the editable representation is the token sequence
//! (see [`crate::token`]), not this string, so nothing ever parses it back.

use karat_core::OperatorKind;

use crate::ast::FormulaNode;

/// Placeholder shown when no formula is set.
pub const NO_FORMULA: &str = "—";

/// Render a formula tree as a display string.
///
/// Additive operations join their operands bare; multiplicative operations
/// (multiply, divide, percent-of) parenthesize the whole combination so the
/// grouping implied by precedence stays visible:
///
/// `Metal + (Labor × 2)` rather than the ambiguous `Metal + Labor × 2`.
pub fn render(node: Option<&FormulaNode>) -> String {
    match node {
        None => NO_FORMULA.to_string(),
        Some(node) => render_node(node),
    }
}

fn render_node(node: &FormulaNode) -> String {
    match node {
        FormulaNode::Constant { value } => value.to_string(),
        FormulaNode::Value { name } => name.label().to_string(),
        FormulaNode::Op { op, left, right } => {
            let l = render_node(left);
            let r = render_node(right);
            match op {
                OperatorKind::Add | OperatorKind::Subtract => {
                    format!("{} {} {}", l, op.symbol(), r)
                }
                OperatorKind::Multiply | OperatorKind::Divide => {
                    format!("({} {} {})", l, op.symbol(), r)
                }
                // the right operand reads as a percentage
                OperatorKind::PercentOf => format!("({} {} {}%)", l, op.symbol(), r),
            }
        }
    }
}
