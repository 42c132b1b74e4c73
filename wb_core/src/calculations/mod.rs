//! # Weight-and-Balance Calculations
//!
//! The calculation engine, one file per component. The entry point follows
//! the pattern:
//!
//! - [`LoadRequest`] - Input parameters (JSON-serializable)
//! - [`CalculationResult`] - Calculation results (JSON-serializable)
//! - `calculate(config, request) -> Result<CalculationResult, WbError>` - Pure calculation function
//!
//! ## Components
//!
//! - [`moment`] - Moment Accumulator (ΣW, ΣM, CG)
//! - [`load`] - Load Composer (request → weighted items, ZFW)
//! - [`optimizer`] - CG Optimizer (forward → aft bag move)
//! - [`trim`] - Stabilizer Trim Lookup
//! - [`safety`] - Safety Evaluator (ZFW, MTOW, CG, landing weight)
//! - [`weight_balance`] - The pipeline tying them together

pub mod load;
pub mod moment;
pub mod optimizer;
pub mod safety;
pub mod trim;
pub mod weight_balance;

// Re-export commonly used types
pub use load::{BagManifest, ComposedLoad, LoadRequest, ZoneOccupancy};
pub use moment::{MomentSummary, WeightedItem};
pub use optimizer::BagDistribution;
pub use safety::{SafetyCheck, SafetyChecks};
pub use weight_balance::{calculate, CalculationResult};
