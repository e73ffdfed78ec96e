//! Formula expression tree types

use karat_core::{OperatorKind, ValueName};
use serde::{Deserialize, Serialize};

/// One node of a pricing formula.
///
/// Trees are built bottom-up and never mutated in place; an edit always
/// produces a whole new tree that replaces the old one. Each `Op` node
/// exclusively owns its children, so there is no sharing and no cycles.
///
/// The serde representation is the persisted shape the storage layer relies
/// on: a tagged object per node, nested through `left`/`right`:
///
/// ```json
/// {"kind":"op","op":"add","left":{"kind":"value","name":"metal"},
///  "right":{"kind":"constant","value":2.5}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FormulaNode {
    /// Reference to one named input in the context
    Value { name: ValueName },
    /// Literal number
    Constant { value: f64 },
    /// Binary operation over two sub-trees
    Op {
        op: OperatorKind,
        left: Box<FormulaNode>,
        right: Box<FormulaNode>,
    },
}

impl FormulaNode {
    /// Leaf referencing a named input.
    pub fn value(name: ValueName) -> Self {
        FormulaNode::Value { name }
    }

    /// Leaf holding a literal number.
    pub fn constant(value: f64) -> Self {
        FormulaNode::Constant { value }
    }

    /// Binary operation node.
    pub fn op(op: OperatorKind, left: FormulaNode, right: FormulaNode) -> Self {
        FormulaNode::Op {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// True if any value reference in the tree names [`ValueName::Base`].
///
/// Advisory check for the formula editor: a base formula that references
/// Base still evaluates (the reference reads as 0), but the result is
/// degenerate, so the editor warns before saving one.
pub fn references_base(node: Option<&FormulaNode>) -> bool {
    match node {
        None => false,
        Some(FormulaNode::Value { name }) => *name == ValueName::Base,
        Some(FormulaNode::Constant { .. }) => false,
        Some(FormulaNode::Op { left, right, .. }) => {
            references_base(Some(left)) || references_base(Some(right))
        }
    }
}
