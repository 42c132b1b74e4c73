//! # Equation Registry
//!
//! Metadata for the formulas the engine applies, so that a reporting layer
//! can show a "formulas used" section next to a load sheet without keeping
//! its own copy of the text.
//!
//! ## Usage
//!
//! ```rust
//! use wb_core::equations::registry::Equation;
//!
//! for eq in Equation::ALL {
//!     let meta = eq.metadata();
//!     println!("{} = {}", meta.symbol, meta.formula);
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A formula applied during a weight-and-balance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    ZeroFuelWeight,
    Moment,
    CenterOfGravity,
    StabilizerTrim,
    BagMove,
    LandingWeight,
}

/// Display metadata for an [`Equation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquationMetadata {
    /// Short symbol shown on the left-hand side
    pub symbol: &'static str,
    /// Full name
    pub name: &'static str,
    /// Plain-text formula (right-hand side)
    pub formula: &'static str,
    /// One-line explanation
    pub description: &'static str,
}

impl Equation {
    /// All equations in display order
    pub const ALL: [Equation; 6] = [
        Equation::ZeroFuelWeight,
        Equation::Moment,
        Equation::CenterOfGravity,
        Equation::StabilizerTrim,
        Equation::BagMove,
        Equation::LandingWeight,
    ];

    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ZeroFuelWeight => EquationMetadata {
                symbol: "ZFW",
                name: "Zero Fuel Weight",
                formula: "OEW + Pax + Bags",
                description: "Total weight before fuel is loaded",
            },
            Equation::Moment => EquationMetadata {
                symbol: "M",
                name: "Moment",
                formula: "Weight × Arm",
                description: "Turning effect of an item about the datum",
            },
            Equation::CenterOfGravity => EquationMetadata {
                symbol: "CG",
                name: "Center of Gravity",
                formula: "Σ(Moment) / Σ(Weight)",
                description: "Moment-weighted balance point aft of the datum",
            },
            Equation::StabilizerTrim => EquationMetadata {
                symbol: "Stab Trim",
                name: "Stabilizer Trim",
                formula: "f(⌊CG⌋) [Table Lookup, 0 if absent]",
                description: "Trim setting for the truncated CG",
            },
            Equation::BagMove => EquationMetadata {
                symbol: "Bag Move",
                name: "Bag Redistribution",
                formula: "min(Bags, (Target CG − Current CG) × Total Weight / (Aft Arm − Fwd Arm))",
                description: "Bag weight moved aft to bring a forward CG to the target",
            },
            Equation::LandingWeight => EquationMetadata {
                symbol: "LW",
                name: "Estimated Landing Weight",
                formula: "Total Weight − 0.75 × Fuel",
                description: "Assumes three quarters of loaded fuel is burned",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_formulas() {
        for eq in Equation::ALL {
            let meta = eq.metadata();
            assert!(!meta.symbol.is_empty());
            assert!(!meta.formula.is_empty());
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Equation::BagMove).unwrap();
        assert_eq!(json, "\"BagMove\"");
    }
}
