//! # Load Composer
//!
//! Turns a [`LoadRequest`] (passengers per zone, bags, fuel, tail) into the
//! ordered list of weighted items the rest of the engine works on.
//!
//! ## Item Order
//!
//! ```text
//! [ OEW @ oew_arm,
//!   fuel @ fuel_arm,
//!   pax(zone) @ zone_arm      for each configured zone, in configured order
//!   bags(forward) @ fwd_arm,  all bag weight starts here
//!   bags(aft) @ aft_arm ]     starts at zero
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "aircraft_id": "N001",
//!   "zones": [
//!     { "zone": "A", "adults": 30, "children": 5, "infants": 0 },
//!     { "zone": "B", "adults": 40, "children": 0, "infants": 0 },
//!     { "zone": "C", "adults": 20, "children": 0, "infants": 0 }
//!   ],
//!   "bags": { "standard": 80, "heavy": 20 },
//!   "fuel": 27000.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::moment::WeightedItem;
use crate::config::{BagClass, Compartment, Configuration, PassengerClass, Zone};
use crate::equations::balance::{bag_weight, passenger_zone_weight};
use crate::errors::{WbError, WbResult};
use crate::units::Pounds;

/// Index of the fuel item in [`ComposedLoad::items`]
pub const FUEL_ITEM: usize = 1;

/// Passengers seated in one cabin zone.
///
/// Counts are signed so that a negative value coming from a caller is
/// reported as `InvalidInput` instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOccupancy {
    pub zone: Zone,
    #[serde(default)]
    pub adults: i32,
    #[serde(default)]
    pub children: i32,
    #[serde(default)]
    pub infants: i32,
}

impl ZoneOccupancy {
    pub fn new(zone: Zone, adults: i32, children: i32, infants: i32) -> Self {
        ZoneOccupancy {
            zone,
            adults,
            children,
            infants,
        }
    }

    /// Number of passengers of one class
    pub fn count(&self, class: PassengerClass) -> i32 {
        match class {
            PassengerClass::Adult => self.adults,
            PassengerClass::Child => self.children,
            PassengerClass::Infant => self.infants,
        }
    }
}

/// Checked bags by class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BagManifest {
    #[serde(default)]
    pub standard: i32,
    #[serde(default)]
    pub heavy: i32,
}

impl BagManifest {
    pub fn new(standard: i32, heavy: i32) -> Self {
        BagManifest { standard, heavy }
    }

    pub fn count(&self, class: BagClass) -> i32 {
        match class {
            BagClass::Standard => self.standard,
            BagClass::Heavy => self.heavy,
        }
    }
}

/// Input for one weight-and-balance calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Tail identifier of the aircraft
    pub aircraft_id: String,

    /// Passengers per zone; every configured zone must appear exactly once
    pub zones: Vec<ZoneOccupancy>,

    /// Checked bags
    pub bags: BagManifest,

    /// Fuel on board
    pub fuel: Pounds,
}

impl LoadRequest {
    /// Validate counts and quantities.
    ///
    /// Runs before any lookup or arithmetic; does not need the configuration.
    pub fn validate(&self) -> WbResult<()> {
        for occupancy in &self.zones {
            for (name, class) in [
                ("adults", PassengerClass::Adult),
                ("children", PassengerClass::Child),
                ("infants", PassengerClass::Infant),
            ] {
                non_negative_count(&format!("zones[{}].{}", occupancy.zone, name), occupancy.count(class))?;
            }
        }

        for (i, occupancy) in self.zones.iter().enumerate() {
            if self.zones[..i].iter().any(|z| z.zone == occupancy.zone) {
                return Err(WbError::invalid_input(
                    "zones",
                    occupancy.zone.to_string(),
                    "Zone listed more than once",
                ));
            }
        }

        non_negative_count("bags.standard", self.bags.standard)?;
        non_negative_count("bags.heavy", self.bags.heavy)?;

        if !self.fuel.0.is_finite() || self.fuel.0 < 0.0 {
            return Err(WbError::invalid_input(
                "fuel",
                self.fuel.0.to_string(),
                "Fuel quantity must be a non-negative number",
            ));
        }

        Ok(())
    }
}

fn non_negative_count(field: &str, value: i32) -> WbResult<()> {
    if value < 0 {
        return Err(WbError::invalid_input(field, value.to_string(), "Count cannot be negative"));
    }
    Ok(())
}

/// Weighted items and derived aggregates for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedLoad {
    /// Items in fixed order (see module docs)
    pub items: Vec<WeightedItem>,

    /// Passenger weight per configured zone, in configured order
    pub zone_weights: Vec<(Zone, Pounds)>,

    /// Total passenger weight
    pub passenger_weight: Pounds,

    /// Total bag weight (forward + aft)
    pub bag_weight: Pounds,

    /// Fuel on board
    pub fuel: Pounds,

    /// Zero fuel weight: OEW + passengers + bags
    pub zfw: Pounds,
}

impl ComposedLoad {
    /// Index of the forward compartment item
    pub fn forward_index(&self) -> usize {
        self.items.len() - 2
    }

    /// Index of the aft compartment item
    pub fn aft_index(&self) -> usize {
        self.items.len() - 1
    }

    /// Bag weight currently in a compartment
    pub fn compartment_weight(&self, compartment: Compartment) -> Pounds {
        match compartment {
            Compartment::Forward => self.items[self.forward_index()].weight,
            Compartment::Aft => self.items[self.aft_index()].weight,
        }
    }
}

/// Build the initial weighted items for a request.
///
/// # Errors
///
/// * `InvalidInput` - negative count or fuel, duplicate zone, configured zone missing
/// * `NotFound` - unknown aircraft, or a zone the configuration has no arm for
pub fn compose(config: &Configuration, request: &LoadRequest) -> WbResult<ComposedLoad> {
    request.validate()?;

    let aircraft = config.aircraft(&request.aircraft_id)?;

    for occupancy in &request.zones {
        config.zone_arm(occupancy.zone)?;
    }

    let mut zone_weights = Vec::with_capacity(config.zone_arms.len());
    let mut pax_items = Vec::with_capacity(config.zone_arms.len());
    for zone_arm in &config.zone_arms {
        let occupancy = request
            .zones
            .iter()
            .find(|z| z.zone == zone_arm.zone)
            .ok_or_else(|| {
                WbError::invalid_input(
                    "zones",
                    zone_arm.zone.to_string(),
                    "Configured zone missing from the request",
                )
            })?;

        // counts are non-negative after validate()
        let weight = passenger_zone_weight(
            occupancy.adults.unsigned_abs(),
            occupancy.children.unsigned_abs(),
            occupancy.infants.unsigned_abs(),
            config.passenger_weight(PassengerClass::Adult),
            config.passenger_weight(PassengerClass::Child),
            config.passenger_weight(PassengerClass::Infant),
        );
        zone_weights.push((zone_arm.zone, weight));
        pax_items.push(WeightedItem::new(weight, zone_arm.arm));
    }

    let bags = bag_weight(
        request.bags.count(BagClass::Standard).unsigned_abs(),
        request.bags.count(BagClass::Heavy).unsigned_abs(),
        config.bag_unit_weight(BagClass::Standard),
        config.bag_unit_weight(BagClass::Heavy),
    );
    let passenger_weight: Pounds = zone_weights.iter().map(|(_, w)| *w).sum();
    let zfw = aircraft.oew + passenger_weight + bags;

    let mut items = Vec::with_capacity(pax_items.len() + 4);
    items.push(WeightedItem::new(aircraft.oew, aircraft.oew_arm));
    items.push(WeightedItem::new(request.fuel, config.fuel_arm));
    items.extend(pax_items);
    items.push(WeightedItem::new(bags, config.compartment_arm(Compartment::Forward)));
    items.push(WeightedItem::new(Pounds(0.0), config.compartment_arm(Compartment::Aft)));

    Ok(ComposedLoad {
        items,
        zone_weights,
        passenger_weight,
        bag_weight: bags,
        fuel: request.fuel,
        zfw,
    })
}
