//! # CG Optimizer
//!
//! When the as-loaded CG is forward of the target, moves bag weight from the
//! forward to the aft compartment until CG reaches the target or the bags run
//! out. Only the two compartment items change; passengers and fuel stay put.
//!
//! ## Algorithm
//!
//! ```text
//! if CG ≥ target:  no change (weight is never moved forward)
//! else:
//!     shift = (target − CG) · ΣW / (a_aft − a_fwd)
//!     move  = min(bag_weight, shift)
//!     forward −= move, aft += move
//!     recompute ΣW, ΣM, CG
//! ```
//!
//! When there is not enough bag weight, all of it ends up aft and the final CG
//! stays forward of the target.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::load::ComposedLoad;
use crate::calculations::moment::{accumulate, MomentSummary, WeightedItem};
use crate::config::CompartmentArms;
use crate::equations::balance::cg_shift_weight;
use crate::errors::{WbError, WbResult};
use crate::units::{Feet, Pounds};

/// Bag weight per cargo compartment.
///
/// `forward + aft` always equals the total bag weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagDistribution {
    pub forward: Pounds,
    pub aft: Pounds,
}

impl BagDistribution {
    /// Everything in the forward compartment
    pub fn all_forward(total: Pounds) -> Self {
        BagDistribution {
            forward: total,
            aft: Pounds(0.0),
        }
    }

    pub fn total(&self) -> Pounds {
        self.forward + self.aft
    }
}

/// Outcome of the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    /// Items after redistribution (same order as the input)
    pub items: Vec<WeightedItem>,

    /// Aggregates of `items`
    pub summary: MomentSummary,

    /// Final compartment split
    pub distribution: BagDistribution,

    /// Weight moved from forward to aft (zero when nothing moved)
    pub moved_aft: Pounds,

    /// Whether the move was limited by the available bag weight
    pub clamped: bool,
}

/// Redistribute bags to bring a forward CG to `target_cg`.
///
/// # Arguments
///
/// * `load` - Composed load, all bags forward
/// * `initial` - Aggregates of `load.items`
/// * `target_cg` - CG to aim for
/// * `arms` - Compartment arms (forward ahead of aft)
///
/// # Errors
///
/// * `InvalidConfiguration` - forward and aft arms are equal
/// * `DivisionUndefined` - recomputed total weight is zero
pub fn optimize(
    load: &ComposedLoad,
    initial: &MomentSummary,
    target_cg: Feet,
    arms: &CompartmentArms,
) -> WbResult<Optimization> {
    if arms.forward == arms.aft {
        return Err(WbError::invalid_configuration(
            "compartment_arms",
            "Forward and aft compartment arms are equal",
        ));
    }

    let unchanged = |clamped| Optimization {
        items: load.items.clone(),
        summary: *initial,
        distribution: BagDistribution::all_forward(load.bag_weight),
        moved_aft: Pounds(0.0),
        clamped,
    };

    if initial.cg.0 >= target_cg.0 {
        debug!(cg = initial.cg.0, target = target_cg.0, "CG at or aft of target, bags stay forward");
        return Ok(unchanged(false));
    }

    let shift = cg_shift_weight(target_cg, initial.cg, initial.total_weight, arms.forward, arms.aft)?;
    let clamped = shift.0 > load.bag_weight.0;
    let moved = load.bag_weight.min(shift);

    if moved.0 == 0.0 {
        debug!(cg = initial.cg.0, "no bag weight to move");
        return Ok(unchanged(clamped));
    }
    if clamped {
        warn!(
            required = shift.0,
            available = load.bag_weight.0,
            "not enough bag weight to reach target CG, moving all bags aft"
        );
    }

    let mut items = load.items.clone();
    let (fwd, aft) = (load.forward_index(), load.aft_index());
    items[fwd].weight = items[fwd].weight - moved;
    items[aft].weight = items[aft].weight + moved;

    let summary = accumulate(&items)?;
    debug!(moved = moved.0, cg = summary.cg.0, "moved bag weight aft");

    Ok(Optimization {
        distribution: BagDistribution {
            forward: items[fwd].weight,
            aft: items[aft].weight,
        },
        items,
        summary,
        moved_aft: moved,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn arms() -> CompartmentArms {
        CompartmentArms {
            forward: Feet(50.0),
            aft: Feet(80.0),
        }
    }

    /// 900 lb at 60 ft plus `bags` lb forward at 50 ft
    fn load(bags: f64) -> (ComposedLoad, MomentSummary) {
        let items = vec![
            WeightedItem::new(Pounds(900.0), Feet(60.0)),
            WeightedItem::new(Pounds(0.0), Feet(70.0)),
            WeightedItem::new(Pounds(bags), Feet(50.0)),
            WeightedItem::new(Pounds(0.0), Feet(80.0)),
        ];
        let summary = accumulate(&items).unwrap();
        let load = ComposedLoad {
            items,
            zone_weights: Vec::new(),
            passenger_weight: Pounds(0.0),
            bag_weight: Pounds(bags),
            fuel: Pounds(0.0),
            zfw: Pounds(900.0 + bags),
        };
        (load, summary)
    }

    #[test]
    fn test_reaches_target_when_enough_bags() {
        let (load, initial) = load(100.0);
        assert!((initial.cg.0 - 59.0).abs() < TOL);

        let result = optimize(&load, &initial, Feet(60.0), &arms()).unwrap();
        assert!((result.summary.cg.0 - 60.0).abs() < TOL);
        assert!((result.moved_aft.0 - 1_000.0 / 30.0).abs() < TOL);
        assert!(!result.clamped);
        assert_eq!(result.summary.total_weight, initial.total_weight);
        assert!((result.distribution.total().0 - 100.0).abs() < TOL);
    }

    #[test]
    fn test_clamps_to_available_bags() {
        let (load, initial) = load(100.0);
        // needs 116.7 lb, only 100 lb available
        let result = optimize(&load, &initial, Feet(62.5), &arms()).unwrap();
        assert!(result.clamped);
        assert_eq!(result.moved_aft, Pounds(100.0));
        assert_eq!(result.distribution, BagDistribution { forward: Pounds(0.0), aft: Pounds(100.0) });
        assert!((result.summary.cg.0 - 62.0).abs() < TOL);
        assert!(result.summary.cg.0 < 62.5);
    }

    #[test]
    fn test_no_move_when_at_or_aft_of_target() {
        let (load, initial) = load(100.0);
        let result = optimize(&load, &initial, Feet(59.0), &arms()).unwrap();
        assert_eq!(result.moved_aft, Pounds(0.0));
        assert_eq!(result.items, load.items);
        assert_eq!(result.distribution, BagDistribution::all_forward(Pounds(100.0)));

        let result = optimize(&load, &initial, Feet(55.0), &arms()).unwrap();
        assert_eq!(result.summary, initial);
    }

    #[test]
    fn test_zero_bags_is_noop() {
        let (load, initial) = load(0.0);
        let result = optimize(&load, &initial, Feet(62.5), &arms()).unwrap();
        assert_eq!(result.moved_aft, Pounds(0.0));
        assert_eq!(result.distribution, BagDistribution::all_forward(Pounds(0.0)));
        assert_eq!(result.summary, initial);
    }

    #[test]
    fn test_only_compartment_items_change() {
        let (load, initial) = load(100.0);
        let result = optimize(&load, &initial, Feet(60.0), &arms()).unwrap();
        assert_eq!(result.items[..2], load.items[..2]);
        assert_eq!(result.items.len(), load.items.len());
    }

    #[test]
    fn test_equal_arms_rejected() {
        let (load, initial) = load(100.0);
        let arms = CompartmentArms {
            forward: Feet(50.0),
            aft: Feet(50.0),
        };
        let err = optimize(&load, &initial, Feet(62.5), &arms).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }
}
