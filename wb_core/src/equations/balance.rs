//! # Weight-and-Balance Formulas
//!
//! The moment arithmetic every component of the engine is built on.
//!
//! ## Notation
//!
//! - `W` = Weight
//! - `a` = Arm (distance aft of datum)
//! - `M` = Moment = W·a
//! - `CG` = ΣM / ΣW
//! - `a_fwd`, `a_aft` = Forward and aft compartment arms
//!
//! ## Sign Conventions
//!
//! - Arms: Positive aft of the datum
//! - A CG smaller than the target is "forward" of it

use crate::errors::{WbError, WbResult};
use crate::units::{Feet, PoundFeet, Pounds};

/// Share of loaded fuel assumed burned by landing.
///
/// A planning heuristic, not a fuel-burn computation.
pub const FUEL_BURN_FRACTION: f64 = 0.75;

/// Moment of a weight at an arm
///
/// # Formula
/// - M = W·a
#[inline]
pub fn moment(weight: Pounds, arm: Feet) -> PoundFeet {
    weight * arm
}

/// Center of gravity from summed moment and weight
///
/// # Formula
/// - CG = ΣM / ΣW
///
/// # Errors
/// `DivisionUndefined` when the total weight is zero, or when the weight, the
/// moment or the quotient is not finite, instead of letting NaN or ∞ escape.
pub fn center_of_gravity(total_moment: PoundFeet, total_weight: Pounds) -> WbResult<Feet> {
    if total_weight.0 == 0.0 || !total_weight.0.is_finite() {
        return Err(WbError::division_undefined(format!(
            "center of gravity with total weight {}",
            total_weight.0
        )));
    }
    if !total_moment.0.is_finite() {
        return Err(WbError::division_undefined(format!(
            "center of gravity with total moment {}",
            total_moment.0
        )));
    }
    let cg = total_moment / total_weight;
    if !cg.0.is_finite() {
        return Err(WbError::division_undefined(format!(
            "center of gravity {} / {} is not finite",
            total_moment.0, total_weight.0
        )));
    }
    Ok(cg)
}

/// Passenger weight seated in one zone
///
/// # Formula
/// - W = n_adult·W_adult + n_child·W_child + n_infant·W_infant
#[inline]
pub fn passenger_zone_weight(
    adults: u32,
    children: u32,
    infants: u32,
    adult_weight: Pounds,
    child_weight: Pounds,
    infant_weight: Pounds,
) -> Pounds {
    adult_weight * f64::from(adults) + child_weight * f64::from(children) + infant_weight * f64::from(infants)
}

/// Total checked bag weight
///
/// # Formula
/// - W = n_standard·W_standard + n_heavy·W_heavy
#[inline]
pub fn bag_weight(standard: u32, heavy: u32, standard_weight: Pounds, heavy_weight: Pounds) -> Pounds {
    standard_weight * f64::from(standard) + heavy_weight * f64::from(heavy)
}

/// Weight to move from the forward to the aft compartment to shift CG to `target`
///
/// Moving w from a_fwd to a_aft changes ΣM by w·(a_aft − a_fwd) at constant ΣW.
///
/// # Formula
/// - w = (CG_target − CG)·ΣW / (a_aft − a_fwd)
///
/// The result is unclamped and negative when `cg` is already aft of `target`.
///
/// # Errors
/// `InvalidConfiguration` when the two arms coincide.
pub fn cg_shift_weight(
    target: Feet,
    cg: Feet,
    total_weight: Pounds,
    forward_arm: Feet,
    aft_arm: Feet,
) -> WbResult<Pounds> {
    let span = aft_arm - forward_arm;
    if span.0 == 0.0 {
        return Err(WbError::invalid_configuration(
            "compartment_arms",
            "Forward and aft compartment arms are equal",
        ));
    }
    Ok(Pounds((target - cg).0 * total_weight.0 / span.0))
}

/// Landing weight estimate
///
/// # Formula
/// - W_land = W_total − 0.75·W_fuel
#[inline]
pub fn estimated_landing_weight(total_weight: Pounds, fuel: Pounds) -> Pounds {
    total_weight - fuel * FUEL_BURN_FRACTION
}
