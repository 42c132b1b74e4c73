//! # Weight-and-Balance Equations
//!
//! All formulas used by the calculation engine live here, so they can be
//! checked against the load planning manual in one place.
//!
//! ## Modules
//!
//! - [`balance`] - Moment, CG, bag move and landing weight formulas
//! - [`registry`] - Equation metadata for "formulas used" displays

pub mod balance;
pub mod registry;

pub use balance::{
    bag_weight,
    center_of_gravity,
    cg_shift_weight,
    estimated_landing_weight,
    moment,
    passenger_zone_weight,
    FUEL_BURN_FRACTION,
};

pub use registry::{Equation, EquationMetadata};
