//! # Configuration Model
//!
//! Everything the engine reads besides the load itself: the fleet, cabin zone
//! arms, unit weights, compartment arms, limits, the CG target and the
//! stabilizer trim table.
//!
//! A [`Configuration`] is an immutable snapshot as far as the engine is
//! concerned. Edits go through [`crate::store::ConfigStore`], which publishes
//! a fresh snapshot only after [`Configuration::validate`] succeeds.
//!
//! ## Structure
//!
//! ```text
//! Configuration
//! ├── aircraft: BTreeMap<String, AircraftProfile>   (OEW, OEW arm, optional limits)
//! ├── zone_arms: Vec<ZoneArm>                        (configured order = item order)
//! ├── bag_weights / compartment_arms / fuel_arm
//! ├── passenger_weights
//! ├── target_cg, mtow, cg_envelope
//! └── trim_table: BTreeMap<i32, Degrees>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wb_core::config::{Configuration, Zone};
//!
//! let config = Configuration::reference();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.zone_arm(Zone::B).unwrap().0, 70.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{WbError, WbResult};
use crate::units::{Degrees, Feet, Pounds};

// ============================================================================
// Identifiers
// ============================================================================

/// Cabin seating zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
}

impl Zone {
    /// All cabin zones, front to back
    pub const ALL: [Zone; 3] = [Zone::A, Zone::B, Zone::C];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Zone::A => "A",
            Zone::B => "B",
            Zone::C => "C",
        };
        f.write_str(name)
    }
}

/// Passenger weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerClass {
    Adult,
    Child,
    Infant,
}

/// Checked baggage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BagClass {
    Standard,
    Heavy,
}

/// Cargo compartment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compartment {
    Forward,
    Aft,
}

impl Compartment {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Compartment::Forward => "forward",
            Compartment::Aft => "aft",
        }
    }
}

// ============================================================================
// Aircraft
// ============================================================================

/// Weight data and limits for one airframe (tail).
///
/// Limits are optional; an absent limit means the corresponding check always
/// passes (MTOW falls back to the global value instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    /// Tail number / identifier
    pub id: String,

    /// Operating empty weight
    pub oew: Pounds,

    /// Arm of the operating empty weight
    pub oew_arm: Feet,

    /// Maximum zero fuel weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zfw_limit: Option<Pounds>,

    /// Maximum takeoff weight for this tail (overrides the global MTOW)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtow_limit: Option<Pounds>,

    /// Maximum landing weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_limit: Option<Pounds>,
}

impl AircraftProfile {
    /// Create a profile with no aircraft-specific limits.
    pub fn new(id: impl Into<String>, oew: Pounds, oew_arm: Feet) -> Self {
        AircraftProfile {
            id: id.into(),
            oew,
            oew_arm,
            zfw_limit: None,
            mtow_limit: None,
            landing_limit: None,
        }
    }

    pub fn with_zfw_limit(mut self, limit: Pounds) -> Self {
        self.zfw_limit = Some(limit);
        self
    }

    pub fn with_mtow_limit(mut self, limit: Pounds) -> Self {
        self.mtow_limit = Some(limit);
        self
    }

    pub fn with_landing_limit(mut self, limit: Pounds) -> Self {
        self.landing_limit = Some(limit);
        self
    }

    fn validate(&self, key: &str) -> WbResult<()> {
        let field = |name: &str| format!("aircraft[{}].{}", key, name);

        if self.id != key {
            return Err(WbError::invalid_configuration(
                field("id"),
                format!("Profile id '{}' does not match its key", self.id),
            ));
        }
        require_finite(&field("oew"), self.oew.0)?;
        require_finite(&field("oew_arm"), self.oew_arm.0)?;
        if self.oew.0 <= 0.0 {
            return Err(WbError::invalid_configuration(
                field("oew"),
                "Operating empty weight must be positive",
            ));
        }
        for (name, limit) in [
            ("zfw_limit", self.zfw_limit),
            ("mtow_limit", self.mtow_limit),
            ("landing_limit", self.landing_limit),
        ] {
            if let Some(limit) = limit {
                require_finite(&field(name), limit.0)?;
                if limit.0 <= 0.0 {
                    return Err(WbError::invalid_configuration(field(name), "Limit must be positive"));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Arms and unit weights
// ============================================================================

/// Arm of one cabin zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneArm {
    pub zone: Zone,
    pub arm: Feet,
}

/// Standard passenger weights by class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassengerWeights {
    pub adult: Pounds,
    pub child: Pounds,
    pub infant: Pounds,
}

impl PassengerWeights {
    pub fn weight(&self, class: PassengerClass) -> Pounds {
        match class {
            PassengerClass::Adult => self.adult,
            PassengerClass::Child => self.child,
            PassengerClass::Infant => self.infant,
        }
    }
}

/// Unit weight per bag class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BagWeights {
    pub standard: Pounds,
    pub heavy: Pounds,
}

impl BagWeights {
    pub fn weight(&self, class: BagClass) -> Pounds {
        match class {
            BagClass::Standard => self.standard,
            BagClass::Heavy => self.heavy,
        }
    }
}

/// Arms of the two cargo compartments (forward must be ahead of aft)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompartmentArms {
    pub forward: Feet,
    pub aft: Feet,
}

impl CompartmentArms {
    pub fn arm(&self, compartment: Compartment) -> Feet {
        match compartment {
            Compartment::Forward => self.forward,
            Compartment::Aft => self.aft,
        }
    }
}

/// Allowed CG range, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgEnvelope {
    pub min: Feet,
    pub max: Feet,
}

impl CgEnvelope {
    pub fn contains(&self, cg: Feet) -> bool {
        self.min.0 <= cg.0 && cg.0 <= self.max.0
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Fully-resolved configuration snapshot read by every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Fleet, keyed by tail identifier
    pub aircraft: BTreeMap<String, AircraftProfile>,

    /// Cabin zone arms in configured order
    pub zone_arms: Vec<ZoneArm>,

    /// Unit weight per bag class
    pub bag_weights: BagWeights,

    /// Forward and aft cargo compartment arms
    pub compartment_arms: CompartmentArms,

    /// Arm of the fuel load
    pub fuel_arm: Feet,

    /// CG the bag optimizer aims for. Not checked against the envelope.
    pub target_cg: Feet,

    /// Global maximum takeoff weight, used when a tail has no own limit
    pub mtow: Pounds,

    /// Allowed CG range
    pub cg_envelope: CgEnvelope,

    /// Standard passenger weights
    pub passenger_weights: PassengerWeights,

    /// Integer CG (ft) to stabilizer trim setting
    pub trim_table: BTreeMap<i32, Degrees>,
}

static REFERENCE: Lazy<Configuration> = Lazy::new(|| {
    let mut aircraft = BTreeMap::new();
    for profile in [
        AircraftProfile::new("N001", Pounds(87_300.0), Feet(64.8))
            .with_zfw_limit(Pounds(123_000.0))
            .with_mtow_limit(Pounds(149_000.0))
            .with_landing_limit(Pounds(129_500.0)),
        AircraftProfile::new("N002", Pounds(87_500.0), Feet(64.9)),
    ] {
        aircraft.insert(profile.id.clone(), profile);
    }

    Configuration {
        aircraft,
        zone_arms: vec![
            ZoneArm { zone: Zone::A, arm: Feet(60.0) },
            ZoneArm { zone: Zone::B, arm: Feet(70.0) },
            ZoneArm { zone: Zone::C, arm: Feet(80.0) },
        ],
        bag_weights: BagWeights {
            standard: Pounds(50.0),
            heavy: Pounds(70.0),
        },
        compartment_arms: CompartmentArms {
            forward: Feet(50.0),
            aft: Feet(80.0),
        },
        fuel_arm: Feet(70.0),
        target_cg: Feet(62.5),
        mtow: Pounds(149_000.0),
        cg_envelope: CgEnvelope {
            min: Feet(61.0),
            max: Feet(63.0),
        },
        passenger_weights: PassengerWeights {
            adult: Pounds(200.0),
            child: Pounds(80.0),
            infant: Pounds(22.0),
        },
        trim_table: BTreeMap::from([(61, Degrees(2.0)), (62, Degrees(0.0)), (63, Degrees(-2.0))]),
    }
});

impl Configuration {
    /// Built-in demonstration configuration: two A220 tails with mock data.
    ///
    /// N001 carries ZFW, MTOW and landing limits; N002 carries none.
    pub fn reference() -> Self {
        REFERENCE.clone()
    }

    /// Look up an aircraft profile by tail identifier.
    pub fn aircraft(&self, id: &str) -> WbResult<&AircraftProfile> {
        self.aircraft
            .get(id)
            .ok_or_else(|| WbError::not_found("aircraft", id))
    }

    /// Look up the arm of a cabin zone.
    pub fn zone_arm(&self, zone: Zone) -> WbResult<Feet> {
        self.zone_arms
            .iter()
            .find(|z| z.zone == zone)
            .map(|z| z.arm)
            .ok_or_else(|| WbError::not_found("zone", zone.to_string()))
    }

    pub fn passenger_weight(&self, class: PassengerClass) -> Pounds {
        self.passenger_weights.weight(class)
    }

    pub fn bag_unit_weight(&self, class: BagClass) -> Pounds {
        self.bag_weights.weight(class)
    }

    pub fn compartment_arm(&self, compartment: Compartment) -> Feet {
        self.compartment_arms.arm(compartment)
    }

    /// MTOW that applies to a tail: its own limit if set, else the global one.
    pub fn effective_mtow(&self, profile: &AircraftProfile) -> Pounds {
        profile.mtow_limit.unwrap_or(self.mtow)
    }

    /// Check the configuration for structural errors.
    ///
    /// The target CG is deliberately not checked against the envelope.
    pub fn validate(&self) -> WbResult<()> {
        if self.aircraft.is_empty() {
            return Err(WbError::invalid_configuration("aircraft", "No aircraft configured"));
        }
        for (key, profile) in &self.aircraft {
            profile.validate(key)?;
        }

        if self.zone_arms.is_empty() {
            return Err(WbError::invalid_configuration("zone_arms", "No cabin zones configured"));
        }
        for (i, zone_arm) in self.zone_arms.iter().enumerate() {
            require_finite(&format!("zone_arms[{}]", zone_arm.zone), zone_arm.arm.0)?;
            if self.zone_arms[..i].iter().any(|z| z.zone == zone_arm.zone) {
                return Err(WbError::invalid_configuration(
                    format!("zone_arms[{}]", zone_arm.zone),
                    "Zone configured more than once",
                ));
            }
        }

        for (field, weight) in [
            ("passenger_weights.adult", self.passenger_weights.adult),
            ("passenger_weights.child", self.passenger_weights.child),
            ("passenger_weights.infant", self.passenger_weights.infant),
            ("bag_weights.standard", self.bag_weights.standard),
            ("bag_weights.heavy", self.bag_weights.heavy),
        ] {
            require_finite(field, weight.0)?;
            if weight.0 < 0.0 {
                return Err(WbError::invalid_configuration(field, "Unit weight cannot be negative"));
            }
        }

        require_finite("compartment_arms.forward", self.compartment_arms.forward.0)?;
        require_finite("compartment_arms.aft", self.compartment_arms.aft.0)?;
        if self.compartment_arms.forward.0 >= self.compartment_arms.aft.0 {
            return Err(WbError::invalid_configuration(
                "compartment_arms",
                format!(
                    "Forward arm {} must be ahead of aft arm {}",
                    self.compartment_arms.forward.0, self.compartment_arms.aft.0
                ),
            ));
        }

        require_finite("fuel_arm", self.fuel_arm.0)?;
        require_finite("target_cg", self.target_cg.0)?;
        require_finite("mtow", self.mtow.0)?;
        if self.mtow.0 <= 0.0 {
            return Err(WbError::invalid_configuration("mtow", "MTOW must be positive"));
        }

        require_finite("cg_envelope.min", self.cg_envelope.min.0)?;
        require_finite("cg_envelope.max", self.cg_envelope.max.0)?;
        if self.cg_envelope.min.0 > self.cg_envelope.max.0 {
            return Err(WbError::invalid_configuration(
                "cg_envelope",
                format!(
                    "CG_MIN {} is greater than CG_MAX {}",
                    self.cg_envelope.min.0, self.cg_envelope.max.0
                ),
            ));
        }

        for (cg, trim) in &self.trim_table {
            require_finite(&format!("trim_table[{}]", cg), trim.0)?;
        }

        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::reference()
    }
}

fn require_finite(field: &str, value: f64) -> WbResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WbError::invalid_configuration(field, format!("{} is not a finite number", value)))
    }
}
