//! Token sequence parser
//!
//! Rebuilds an expression tree from the editor's flat token sequence. The
//! sequence comes straight out of a drag-and-drop surface, so it is
//! routinely malformed mid-edit (operator dropped first, two values
//! adjacent, trailing operator). The parser never rejects input: it repairs
//! the sequence to the nearest well-formed one and builds a tree from that,
//! returning `None` only for an empty sequence.
//!
//! Repair is deterministic: excess operators truncate from the end, missing
//! ones pad with add at the end, and the tree is built by splitting at the
//! leftmost lowest-precedence operator in each range. Saved formulas depend
//! on reparsing a flattened tree reproducing the same tree, so these
//! tie-breaks are fixed.

use karat_core::OperatorKind;

use crate::ast::FormulaNode;
use crate::token::FormulaToken;

/// Parse a token sequence into a formula tree.
///
/// Empty input yields `None` (no formula). Anything else yields a tree:
///
/// 1. Tokens are partitioned into ordered terms (value/constant leaves) and
///    interior operators. An operator counts only when it sits between two
///    terms; leading, trailing, and consecutive-duplicate operators are
///    dropped silently.
/// 2. The operator list is repaired to exactly `terms - 1` entries: extras
///    truncate from the end, missing slots pad with [`OperatorKind::Add`].
/// 3. The tree is built by minimum-precedence split, multiplicative
///    operators binding tighter than additive ones.
pub fn parse_tokens(tokens: &[FormulaToken]) -> Option<FormulaNode> {
    let (mut terms, mut ops) = partition(tokens);

    if terms.is_empty() {
        return None;
    }
    if terms.len() == 1 {
        return Some(terms.remove(0));
    }

    let needed = terms.len() - 1;
    ops.truncate(needed);
    while ops.len() < needed {
        ops.push(OperatorKind::Add);
    }

    Some(build(&terms, &ops))
}

/// Split the sequence into leaf nodes and the operators between them.
fn partition(tokens: &[FormulaToken]) -> (Vec<FormulaNode>, Vec<OperatorKind>) {
    let mut terms = Vec::new();
    let mut ops = Vec::new();
    // operator seen since the last term, not yet anchored by a term on its right
    let mut pending: Option<OperatorKind> = None;

    for token in tokens {
        match token {
            FormulaToken::Value { value } => {
                if let Some(op) = pending.take() {
                    ops.push(op);
                }
                terms.push(FormulaNode::value(*value));
            }
            FormulaToken::Constant { value } => {
                if let Some(op) = pending.take() {
                    ops.push(op);
                }
                terms.push(FormulaNode::constant(*value));
            }
            FormulaToken::Op { op } => {
                // leading (no term yet) and duplicate (pending already set)
                // operators are dropped; the first of a run wins
                if !terms.is_empty() && pending.is_none() {
                    pending = Some(*op);
                }
            }
        }
    }

    // a still-pending operator is trailing: dropped
    (terms, ops)
}

/// Build a tree over `terms[..]` joined by `ops[..]` (one fewer op than
/// terms) by splitting at the leftmost lowest-precedence operator and
/// recursing on both sides.
fn build(terms: &[FormulaNode], ops: &[OperatorKind]) -> FormulaNode {
    debug_assert_eq!(ops.len() + 1, terms.len());

    if ops.is_empty() {
        return terms[0].clone();
    }

    let mut split = 0;
    for (i, op) in ops.iter().enumerate() {
        if op.precedence() < ops[split].precedence() {
            split = i;
        }
    }

    FormulaNode::op(
        ops[split],
        build(&terms[..=split], &ops[..split]),
        build(&terms[split + 1..], &ops[split + 1..]),
    )
}
