//! Pricing models
//!
//! A pricing model bundles the three formulas (base, wholesale, retail) a
//! user saved under one name. Models are owned by exactly one account;
//! items reference a model by id and must tolerate its deletion (the caller
//! falls back to a default formula, this crate has no opinion).

use karat_core::PricingContext;
use serde::{Deserialize, Serialize};

use crate::ast::FormulaNode;
use crate::evaluator::evaluate;

/// A named bundle of three formula trees.
///
/// Trees are only ever replaced wholesale: the editor rebuilds a tree from
/// its token sequence and swaps it in via the setters. There are no partial
/// in-place node edits. Serializes as a camelCase record with nested tree
/// objects, the shape the storage layer persists directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingModel {
    pub id: String,
    /// Account that owns this model
    pub owner: String,
    /// Display name chosen by the user
    pub name: String,
    pub formula_base: Option<FormulaNode>,
    pub formula_wholesale: Option<FormulaNode>,
    pub formula_retail: Option<FormulaNode>,
}

/// The three prices computed from one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrices {
    pub base: f64,
    pub wholesale: f64,
    pub retail: f64,
}

impl PricingModel {
    /// New model with no formulas set.
    pub fn new(id: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            name: name.into(),
            formula_base: None,
            formula_wholesale: None,
            formula_retail: None,
        }
    }

    /// Replace the base formula.
    pub fn set_base(&mut self, formula: Option<FormulaNode>) {
        self.formula_base = formula;
    }

    /// Replace the wholesale formula.
    pub fn set_wholesale(&mut self, formula: Option<FormulaNode>) {
        self.formula_wholesale = formula;
    }

    /// Replace the retail formula.
    pub fn set_retail(&mut self, formula: Option<FormulaNode>) {
        self.formula_retail = formula;
    }
}

/// Compute all three prices for a model.
///
/// The base formula runs first against a context with `base` absent; its
/// result is then placed into the context for the wholesale and retail
/// formulas. Callers must hand in a consistent triple of trees; this
/// function does not coordinate with concurrent model edits.
pub fn evaluate_model(model: &PricingModel, ctx: &PricingContext) -> ModelPrices {
    let base_ctx = PricingContext { base: None, ..*ctx };
    let base = evaluate(model.formula_base.as_ref(), &base_ctx);

    let priced_ctx = ctx.with_base(base);
    ModelPrices {
        base,
        wholesale: evaluate(model.formula_wholesale.as_ref(), &priced_ctx),
        retail: evaluate(model.formula_retail.as_ref(), &priced_ctx),
    }
}
