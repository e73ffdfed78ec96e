//! Flat token representation
//!
//! The drag-and-drop editor works on a linear sequence of tokens, one per
//! tree node, with no nesting and no grouping token. [`to_tokens`] flattens
//! a tree in-order for editing; the inverse direction needs precedence
//! resolution and lives in [`crate::parser`].

use karat_core::{OperatorKind, ValueName};
use serde::{Deserialize, Serialize};

use crate::ast::FormulaNode;

/// One editable unit in the formula editor.
///
/// Mirrors the three node kinds flat; a sequence may be malformed (operator
/// first, two values adjacent, ...) while the user is mid-drag, and stays
/// that way until [`crate::parser::parse_tokens`] repairs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FormulaToken {
    /// Reference to a named input
    Value { value: ValueName },
    /// Literal number
    Constant { value: f64 },
    /// Binary operator
    Op { op: OperatorKind },
}

impl FormulaToken {
    /// Label shown on the token's chip in the editor palette.
    ///
    /// Total over every token kind, which is where the "Constant" label
    /// lives: constants are their own token kind, not a value name.
    pub fn palette_label(&self) -> String {
        match self {
            FormulaToken::Value { value } => value.label().to_string(),
            FormulaToken::Constant { value } => value.to_string(),
            FormulaToken::Op { op } => op.symbol().to_string(),
        }
    }

    /// True for value and constant tokens (the operands).
    pub fn is_term(&self) -> bool {
        !matches!(self, FormulaToken::Op { .. })
    }
}

/// Flatten a tree into its in-order token sequence.
///
/// Left tokens, operator, right tokens; a leaf is a single token; an absent
/// formula is an empty sequence. Flattening is lossy with respect to tree
/// shape: re-parsing groups by precedence, which may reassociate chains of
/// equal-precedence operators without changing what they evaluate to.
pub fn to_tokens(node: Option<&FormulaNode>) -> Vec<FormulaToken> {
    let mut tokens = Vec::new();
    if let Some(node) = node {
        flatten(node, &mut tokens);
    }
    tokens
}

fn flatten(node: &FormulaNode, out: &mut Vec<FormulaToken>) {
    match node {
        FormulaNode::Value { name } => out.push(FormulaToken::Value { value: *name }),
        FormulaNode::Constant { value } => out.push(FormulaToken::Constant { value: *value }),
        FormulaNode::Op { op, left, right } => {
            flatten(left, out);
            out.push(FormulaToken::Op { op: *op });
            flatten(right, out);
        }
    }
}
