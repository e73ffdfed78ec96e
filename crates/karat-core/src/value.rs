//! Named inputs a formula can reference
//!
//! A pricing formula is built from a fixed palette of named values (metal
//! cost, labor, stone cost, ...) rather than free-form variables. The set is
//! closed: adding a name here is a compile-time-enforced update to every
//! evaluate/render/tokenize match site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// A reference-able named input.
///
/// Constant literals are deliberately not a `ValueName`: a constant is its own
/// node/token kind, so a value reference to "constant" is unrepresentable.
/// The editor palette labels constants separately (see
/// `FormulaToken::palette_label` in `karat-formula`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueName {
    /// Cost of the metal content
    Metal,
    /// Labor cost
    Labor,
    /// Other costs (findings, packaging, ...)
    Other,
    /// Stone cost (what was paid)
    StoneCost,
    /// Stone retail value
    StoneRetail,
    /// Overhead allocation
    Overhead,
    /// Sum of all material costs
    TotalMaterials,
    /// The computed base price; only meaningful in wholesale/retail formulas
    Base,
}

impl ValueName {
    /// All names, in palette order.
    pub const ALL: [ValueName; 8] = [
        ValueName::Metal,
        ValueName::Labor,
        ValueName::Other,
        ValueName::StoneCost,
        ValueName::StoneRetail,
        ValueName::Overhead,
        ValueName::TotalMaterials,
        ValueName::Base,
    ];

    /// Display label shown in the editor and in rendered formulas.
    pub fn label(&self) -> &'static str {
        match self {
            ValueName::Metal => "Metal",
            ValueName::Labor => "Labor",
            ValueName::Other => "Other costs",
            ValueName::StoneCost => "Stone cost",
            ValueName::StoneRetail => "Stone retail",
            ValueName::Overhead => "Overhead",
            ValueName::TotalMaterials => "Total materials",
            ValueName::Base => "Base",
        }
    }

    /// The stable wire name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueName::Metal => "metal",
            ValueName::Labor => "labor",
            ValueName::Other => "other",
            ValueName::StoneCost => "stoneCost",
            ValueName::StoneRetail => "stoneRetail",
            ValueName::Overhead => "overhead",
            ValueName::TotalMaterials => "totalMaterials",
            ValueName::Base => "base",
        }
    }
}

impl fmt::Display for ValueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueName {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metal" => Ok(ValueName::Metal),
            "labor" => Ok(ValueName::Labor),
            "other" => Ok(ValueName::Other),
            "stoneCost" => Ok(ValueName::StoneCost),
            "stoneRetail" => Ok(ValueName::StoneRetail),
            "overhead" => Ok(ValueName::Overhead),
            "totalMaterials" => Ok(ValueName::TotalMaterials),
            "base" => Ok(ValueName::Base),
            _ => Err(PricingError::UnknownValueName(s.to_string())),
        }
    }
}
