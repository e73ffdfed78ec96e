//! Binary operators
//!
//! All operators are binary; there is no grouping token. Grouping falls out
//! of precedence alone: the multiplicative operators bind tighter than the
//! additive ones, ties resolve left to right.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Binary operators available in pricing formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `left percentOf right` reads as left scaled by right percent:
    /// `200 percentOf 15` is 15% of 200, i.e. 30.
    PercentOf,
}

/// Binding strength; higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Additive,
    Multiplicative,
}

impl OperatorKind {
    /// All operators, in palette order.
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::PercentOf,
    ];

    pub fn precedence(&self) -> Precedence {
        match self {
            OperatorKind::Add | OperatorKind::Subtract => Precedence::Additive,
            OperatorKind::Multiply | OperatorKind::Divide | OperatorKind::PercentOf => {
                Precedence::Multiplicative
            }
        }
    }

    /// Display glyph used by the renderer and the editor palette.
    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "×",
            OperatorKind::Divide => "÷",
            OperatorKind::PercentOf => "×",
        }
    }

    /// The stable wire name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Add => "add",
            OperatorKind::Subtract => "subtract",
            OperatorKind::Multiply => "multiply",
            OperatorKind::Divide => "divide",
            OperatorKind::PercentOf => "percentOf",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(OperatorKind::Add),
            "subtract" => Ok(OperatorKind::Subtract),
            "multiply" => Ok(OperatorKind::Multiply),
            "divide" => Ok(OperatorKind::Divide),
            "percentOf" => Ok(OperatorKind::PercentOf),
            _ => Err(PricingError::UnknownOperator(s.to_string())),
        }
    }
}
