//! Evaluation context
//!
//! The flat record of numeric inputs a formula is evaluated against. The
//! caller (the inventory application) assembles one per item; the engine
//! only reads it.

use serde::{Deserialize, Serialize};

use crate::value::ValueName;

/// Named numeric inputs for one pricing computation.
///
/// All seven cost fields are required and expected to be finite; the caller
/// normalizes missing or non-numeric inputs to 0 before building a context.
/// `base` starts out absent: the base formula is evaluated without it, and
/// its result is filled in (via [`with_base`](Self::with_base)) before the
/// wholesale and retail formulas run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContext {
    pub metal_cost: f64,
    pub labor: f64,
    pub other: f64,
    pub stone_cost: f64,
    pub stone_retail: f64,
    pub overhead: f64,
    pub total_materials: f64,
    /// Computed base price; absent while the base formula itself runs.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub base: Option<f64>,
}

impl PricingContext {
    /// Look up a named value.
    ///
    /// `Base` reads as 0 while `base` is absent, which is what lets a base
    /// formula that (degenerately) references Base evaluate without a
    /// special case in the caller.
    pub fn value(&self, name: ValueName) -> f64 {
        match name {
            ValueName::Metal => self.metal_cost,
            ValueName::Labor => self.labor,
            ValueName::Other => self.other,
            ValueName::StoneCost => self.stone_cost,
            ValueName::StoneRetail => self.stone_retail,
            ValueName::Overhead => self.overhead,
            ValueName::TotalMaterials => self.total_materials,
            ValueName::Base => self.base.unwrap_or(0.0),
        }
    }

    /// Copy of this context with `base` populated.
    pub fn with_base(&self, base: f64) -> Self {
        Self {
            base: Some(base),
            ..*self
        }
    }
}
