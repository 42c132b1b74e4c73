//! # Weight-and-Balance Calculation
//!
//! The engine entry point: `LoadRequest × Configuration → CalculationResult`.
//!
//! ## Pipeline
//!
//! ```text
//! compose (Load Composer) → accumulate (Moment Accumulator)
//!     → optimize (CG Optimizer) → stabilizer_trim + evaluate
//! ```
//!
//! Nothing is cached between calls; identical inputs give identical results.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::calculations::weight_balance::calculate;
//! use wb_core::calculations::load::{BagManifest, LoadRequest, ZoneOccupancy};
//! use wb_core::config::{Configuration, Zone};
//! use wb_core::units::Pounds;
//!
//! let config = Configuration::reference();
//! let request = LoadRequest {
//!     aircraft_id: "N001".to_string(),
//!     zones: vec![
//!         ZoneOccupancy::new(Zone::A, 30, 5, 0),
//!         ZoneOccupancy::new(Zone::B, 40, 0, 0),
//!         ZoneOccupancy::new(Zone::C, 20, 0, 0),
//!     ],
//!     bags: BagManifest::new(80, 20),
//!     fuel: Pounds(27_000.0),
//! };
//!
//! let result = calculate(&config, &request).unwrap();
//! assert_eq!(result.bag_distribution.total(), result.bag_weight);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::load::{compose, LoadRequest};
use crate::calculations::moment::accumulate;
use crate::calculations::optimizer::{optimize, BagDistribution};
use crate::calculations::safety::{evaluate, SafetyCheck, SafetyChecks};
use crate::calculations::trim::stabilizer_trim;
use crate::config::Configuration;
use crate::errors::WbResult;
use crate::units::{Degrees, Feet, PoundFeet, Pounds};

/// Results from a weight-and-balance calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "aircraft_id": "N001",
///   "zfw": 111002.0,
///   "total_weight": 138002.0,
///   "cg": 65.76,
///   "stab_trim": 0.0,
///   "bag_distribution": { "forward": 5400.0, "aft": 0.0 },
///   "estimated_landing_weight": 117752.0,
///   "safe": false,
///   "checks": { "zfw_ok": true, "mtow_ok": true, "cg_ok": false, "landing_ok": true },
///   "passenger_weight": 18400.0,
///   "bag_weight": 5400.0,
///   "fuel": 27000.0,
///   "total_moment": 9074689.6,
///   "initial_cg": 65.76,
///   "moved_aft": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Tail the load was computed for
    pub aircraft_id: String,

    /// Zero fuel weight
    pub zfw: Pounds,

    /// Takeoff weight
    pub total_weight: Pounds,

    /// Final CG after bag redistribution
    pub cg: Feet,

    /// Stabilizer trim for the final CG
    pub stab_trim: Degrees,

    /// Final bag split between compartments
    pub bag_distribution: BagDistribution,

    /// Total − 0.75·fuel, present when the tail has a landing limit
    pub estimated_landing_weight: Option<Pounds>,

    /// AND of all itemized checks
    pub safe: bool,

    /// Itemized check outcomes
    pub checks: SafetyChecks,

    /// Total passenger weight
    pub passenger_weight: Pounds,

    /// Total bag weight
    pub bag_weight: Pounds,

    /// Fuel on board
    pub fuel: Pounds,

    /// Final total moment
    pub total_moment: PoundFeet,

    /// CG as loaded, before redistribution
    pub initial_cg: Feet,

    /// Bag weight moved from forward to aft
    pub moved_aft: Pounds,
}

impl CalculationResult {
    /// Check if every limit is respected
    pub fn passes(&self) -> bool {
        self.safe
    }

    /// Checks that failed
    pub fn failed_checks(&self) -> Vec<SafetyCheck> {
        self.checks.failed()
    }
}

/// Calculate weight and balance for one load.
///
/// # Arguments
///
/// * `config` - Configuration snapshot (validated before use)
/// * `request` - Passengers, bags, fuel and tail
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Complete result, safe or not
/// * `Err(WbError)` - InvalidInput, NotFound, InvalidConfiguration or DivisionUndefined
pub fn calculate(config: &Configuration, request: &LoadRequest) -> WbResult<CalculationResult> {
    request.validate()?;
    config.validate()?;

    let aircraft = config.aircraft(&request.aircraft_id)?;
    let load = compose(config, request)?;
    let initial = accumulate(&load.items)?;
    debug!(
        aircraft = %aircraft.id,
        zfw = load.zfw.0,
        total_weight = initial.total_weight.0,
        cg = initial.cg.0,
        "composed load"
    );

    let optimized = optimize(&load, &initial, config.target_cg, &config.compartment_arms)?;
    let summary = optimized.summary;

    let stab_trim = stabilizer_trim(summary.cg, &config.trim_table);
    let safety = evaluate(config, aircraft, load.zfw, summary.total_weight, summary.cg, load.fuel);
    let safe = safety.checks.all_ok();
    debug!(cg = summary.cg.0, stab_trim = stab_trim.0, safe, "weight and balance complete");

    Ok(CalculationResult {
        aircraft_id: aircraft.id.clone(),
        zfw: load.zfw,
        total_weight: summary.total_weight,
        cg: summary.cg,
        stab_trim,
        bag_distribution: optimized.distribution,
        estimated_landing_weight: safety.estimated_landing_weight,
        safe,
        checks: safety.checks,
        passenger_weight: load.passenger_weight,
        bag_weight: load.bag_weight,
        fuel: load.fuel,
        total_moment: summary.total_moment,
        initial_cg: initial.cg,
        moved_aft: optimized.moved_aft,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::load::{BagManifest, ZoneOccupancy};
    use crate::config::Zone;
    use crate::errors::WbError;

    const TOL: f64 = 1e-6;

    fn config() -> Configuration {
        let mut config = Configuration::reference();
        config.aircraft.get_mut("N001").unwrap().oew = Pounds(87_202.0);
        config
    }

    /// Same tail with its OEW arm moved forward to 60 ft
    fn forward_config() -> Configuration {
        let mut config = config();
        config.aircraft.get_mut("N001").unwrap().oew_arm = Feet(60.0);
        config
    }

    fn request(fuel: f64, bags: BagManifest) -> LoadRequest {
        LoadRequest {
            aircraft_id: "N001".to_string(),
            zones: vec![
                ZoneOccupancy::new(Zone::A, 30, 5, 0),
                ZoneOccupancy::new(Zone::B, 40, 0, 0),
                ZoneOccupancy::new(Zone::C, 20, 0, 0),
            ],
            bags,
            fuel: Pounds(fuel),
        }
    }

    #[test]
    fn test_boundary_scenario() {
        let result = calculate(&config(), &request(27_000.0, BagManifest::new(80, 20))).unwrap();

        assert_eq!(result.zfw, Pounds(111_002.0));
        assert_eq!(result.total_weight, Pounds(138_002.0));
        assert_eq!(result.bag_weight, Pounds(5_400.0));
        assert_eq!(result.passenger_weight, Pounds(18_400.0));

        // ΣM = 87202×64.8 + 27000×70 + 6400×60 + 8000×70 + 4000×80 + 5400×50
        let expected_cg = 9_074_689.6 / 138_002.0;
        assert!((result.initial_cg.0 - expected_cg).abs() < TOL);

        // CG is aft of 62.5, so no bags move
        assert_eq!(result.cg, result.initial_cg);
        assert_eq!(result.bag_distribution, BagDistribution::all_forward(Pounds(5_400.0)));
        assert_eq!(result.moved_aft, Pounds(0.0));

        // 65.76 ft: outside the envelope, no trim entry for 65
        assert_eq!(result.stab_trim, Degrees(0.0));
        assert!(!result.checks.cg_ok);
        assert!(result.checks.mtow_ok);
        assert!(result.checks.zfw_ok);
        assert!(result.checks.landing_ok);
        assert!(!result.safe);
        assert_eq!(result.failed_checks(), vec![SafetyCheck::Cg]);
        assert_eq!(result.estimated_landing_weight, Some(Pounds(117_752.0)));
    }

    #[test]
    fn test_forward_cg_reaches_target() {
        // ΣW = 121002, ΣM = 7466120, CG = 61.70; needs 3216.8 lb of the 5400 lb aft
        let result = calculate(&forward_config(), &request(10_000.0, BagManifest::new(80, 20))).unwrap();

        assert!(result.initial_cg.0 < 62.5);
        assert!((result.cg.0 - 62.5).abs() < TOL);
        assert!((result.moved_aft.0 - 96_505.0 / 30.0).abs() < TOL);
        assert!((result.bag_distribution.forward.0 - (5_400.0 - 96_505.0 / 30.0)).abs() < TOL);
        assert!((result.bag_distribution.total().0 - 5_400.0).abs() < TOL);
        assert_eq!(result.total_weight, Pounds(121_002.0));

        assert_eq!(result.stab_trim, Degrees(0.0));
        assert!(result.safe);
        assert!(result.passes());
    }

    #[test]
    fn test_forward_cg_insufficient_bags() {
        // Needs 5716.8 lb, only 5400 lb available
        let result = calculate(&forward_config(), &request(0.0, BagManifest::new(80, 20))).unwrap();

        assert_eq!(result.bag_distribution, BagDistribution { forward: Pounds(0.0), aft: Pounds(5_400.0) });
        assert_eq!(result.moved_aft, Pounds(5_400.0));
        assert!((result.cg.0 - 6_928_120.0 / 111_002.0).abs() < TOL);
        assert!(result.cg.0 < 62.5);
        assert_eq!(result.stab_trim, Degrees(0.0));
    }

    #[test]
    fn test_zero_bags() {
        let result = calculate(&forward_config(), &request(0.0, BagManifest::new(0, 0))).unwrap();
        assert_eq!(result.bag_distribution, BagDistribution::all_forward(Pounds(0.0)));
        assert_eq!(result.moved_aft, Pounds(0.0));
        assert_eq!(result.cg, result.initial_cg);
    }

    #[test]
    fn test_trim_from_table() {
        // Empty cabin, no bags: CG = (87202×60 + 10000×70) / 97202 = 61.03
        let mut request = request(10_000.0, BagManifest::new(0, 0));
        for zone in &mut request.zones {
            *zone = ZoneOccupancy::new(zone.zone, 0, 0, 0);
        }
        let result = calculate(&forward_config(), &request).unwrap();
        assert_eq!(result.cg.0.trunc(), 61.0);
        assert_eq!(result.stab_trim, Degrees(2.0));
    }

    #[test]
    fn test_missing_limits() {
        let mut request = request(27_000.0, BagManifest::new(80, 20));
        request.aircraft_id = "N002".to_string();
        let mut config = config();
        let n002 = config.aircraft.get_mut("N002").unwrap();
        n002.oew = Pounds(200_000.0);

        let result = calculate(&config, &request).unwrap();
        assert!(result.checks.zfw_ok);
        assert!(result.checks.landing_ok);
        assert!(!result.checks.mtow_ok);
        assert_eq!(result.estimated_landing_weight, None);
    }

    #[test]
    fn test_idempotent() {
        let config = forward_config();
        let request = request(10_000.0, BagManifest::new(80, 20));
        let a = calculate(&config, &request).unwrap();
        let b = calculate(&config, &request).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cg.0.to_bits(), b.cg.0.to_bits());
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_bag_invariant_and_conjunction() {
        for (fuel, standard, heavy) in [(0.0, 0, 0), (0.0, 80, 20), (10_000.0, 10, 0), (27_000.0, 200, 50), (5_000.0, 1, 1)] {
            for config in [config(), forward_config()] {
                let result = calculate(&config, &request(fuel, BagManifest::new(standard, heavy))).unwrap();
                let expected = f64::from(standard) * 50.0 + f64::from(heavy) * 70.0;
                assert!((result.bag_distribution.total().0 - expected).abs() < TOL);
                assert_eq!(result.safe, result.checks.all_ok());
                assert!(result.cg.0 >= result.initial_cg.0);
            }
        }
    }

    #[test]
    fn test_errors() {
        let mut bad = request(0.0, BagManifest::new(-1, 0));
        assert_eq!(calculate(&config(), &bad).unwrap_err().error_code(), "INVALID_INPUT");

        bad = request(0.0, BagManifest::new(1, 0));
        bad.aircraft_id = "N404".to_string();
        assert_eq!(
            calculate(&config(), &bad),
            Err(WbError::not_found("aircraft", "N404"))
        );

        let mut broken = config();
        broken.compartment_arms.aft = broken.compartment_arms.forward;
        let err = calculate(&broken, &request(0.0, BagManifest::new(1, 0))).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_overflowing_fuel_is_division_undefined() {
        let mut request = request(5.0e307, BagManifest::new(0, 0));
        for zone in &mut request.zones {
            *zone = ZoneOccupancy::new(zone.zone, 0, 0, 0);
        }
        let err = calculate(&Configuration::reference(), &request).unwrap_err();
        assert!(matches!(err, WbError::DivisionUndefined { .. }));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&config(), &request(27_000.0, BagManifest::new(80, 20))).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"cg_ok\": false"));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.zfw, result.zfw);
        assert_eq!(roundtrip.checks, result.checks);
    }
}
