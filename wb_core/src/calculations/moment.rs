//! # Moment Accumulator
//!
//! Sums a list of weighted items into total weight, total moment and CG.
//! Every other calculation step goes through [`accumulate`].

use serde::{Deserialize, Serialize};

use crate::equations::balance::{center_of_gravity, moment};
use crate::errors::{WbError, WbResult};
use crate::units::{Feet, PoundFeet, Pounds};

/// One weight at one arm, contributing to the moment sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub weight: Pounds,
    pub arm: Feet,
}

impl WeightedItem {
    pub fn new(weight: Pounds, arm: Feet) -> Self {
        WeightedItem { weight, arm }
    }

    pub fn moment(&self) -> PoundFeet {
        moment(self.weight, self.arm)
    }
}

/// Aggregates of a list of weighted items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentSummary {
    pub total_weight: Pounds,
    pub total_moment: PoundFeet,
    pub cg: Feet,
}

/// Compute total weight, total moment and CG = ΣM / ΣW.
///
/// # Errors
///
/// * `DivisionUndefined` - the items are empty or weigh zero in total
pub fn accumulate(items: &[WeightedItem]) -> WbResult<MomentSummary> {
    if items.is_empty() {
        return Err(WbError::division_undefined("center of gravity of an empty item list"));
    }

    let total_weight: Pounds = items.iter().map(|item| item.weight).sum();
    let total_moment: PoundFeet = items.iter().map(WeightedItem::moment).sum();
    let cg = center_of_gravity(total_moment, total_weight)?;

    Ok(MomentSummary {
        total_weight,
        total_moment,
        cg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<WeightedItem> {
        vec![
            WeightedItem::new(Pounds(900.0), Feet(60.0)),
            WeightedItem::new(Pounds(100.0), Feet(50.0)),
        ]
    }

    #[test]
    fn test_accumulate() {
        let summary = accumulate(&items()).unwrap();
        assert_eq!(summary.total_weight, Pounds(1_000.0));
        assert_eq!(summary.total_moment, PoundFeet(59_000.0));
        assert!((summary.cg.0 - 59.0).abs() < 1e-9);
    }

    #[test]
    fn test_cg_matches_definition() {
        let items = vec![
            WeightedItem::new(Pounds(87_202.0), Feet(64.8)),
            WeightedItem::new(Pounds(27_000.0), Feet(70.0)),
            WeightedItem::new(Pounds(6_400.0), Feet(60.0)),
            WeightedItem::new(Pounds(0.0), Feet(80.0)),
        ];
        let summary = accumulate(&items).unwrap();
        let w: f64 = items.iter().map(|i| i.weight.0).sum();
        let m: f64 = items.iter().map(|i| i.weight.0 * i.arm.0).sum();
        assert!(((summary.cg.0 - m / w) / (m / w)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_is_division_undefined() {
        let items = vec![WeightedItem::new(Pounds(0.0), Feet(60.0))];
        assert!(matches!(accumulate(&items), Err(WbError::DivisionUndefined { .. })));
    }

    #[test]
    fn test_empty_is_division_undefined() {
        assert!(matches!(accumulate(&[]), Err(WbError::DivisionUndefined { .. })));
    }
}
