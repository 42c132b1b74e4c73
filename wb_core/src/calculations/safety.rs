//! # Safety Evaluator
//!
//! Four independent checks, conjoined into one verdict:
//!
//! | Check   | Passes when                                                        |
//! |---------|--------------------------------------------------------------------|
//! | MTOW    | total weight ≤ tail MTOW, or global MTOW if the tail has none      |
//! | CG      | CG_MIN ≤ CG ≤ CG_MAX                                               |
//! | ZFW     | no ZFW limit configured, or ZFW ≤ limit                            |
//! | Landing | no landing limit configured, or (total − 0.75·fuel) ≤ limit        |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AircraftProfile, Configuration};
use crate::equations::balance::estimated_landing_weight;
use crate::units::{Feet, Pounds};

/// Identifies one safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyCheck {
    Zfw,
    Mtow,
    Cg,
    Landing,
}

impl SafetyCheck {
    pub const ALL: [SafetyCheck; 4] = [SafetyCheck::Zfw, SafetyCheck::Mtow, SafetyCheck::Cg, SafetyCheck::Landing];
}

impl fmt::Display for SafetyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SafetyCheck::Zfw => "ZFW",
            SafetyCheck::Mtow => "MTOW",
            SafetyCheck::Cg => "CG",
            SafetyCheck::Landing => "Landing weight",
        };
        f.write_str(name)
    }
}

/// Itemized check outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyChecks {
    pub zfw_ok: bool,
    pub mtow_ok: bool,
    pub cg_ok: bool,
    pub landing_ok: bool,
}

impl SafetyChecks {
    /// Logical AND of all four checks
    pub fn all_ok(&self) -> bool {
        self.zfw_ok && self.mtow_ok && self.cg_ok && self.landing_ok
    }

    pub fn passed(&self, check: SafetyCheck) -> bool {
        match check {
            SafetyCheck::Zfw => self.zfw_ok,
            SafetyCheck::Mtow => self.mtow_ok,
            SafetyCheck::Cg => self.cg_ok,
            SafetyCheck::Landing => self.landing_ok,
        }
    }

    /// Checks that failed, in [`SafetyCheck::ALL`] order
    pub fn failed(&self) -> Vec<SafetyCheck> {
        SafetyCheck::ALL.into_iter().filter(|c| !self.passed(*c)).collect()
    }
}

/// Checks plus the landing weight estimate (present only with a landing limit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyEvaluation {
    pub checks: SafetyChecks,
    pub estimated_landing_weight: Option<Pounds>,
}

/// Evaluate the final aggregates against the configured limits.
pub fn evaluate(
    config: &Configuration,
    aircraft: &AircraftProfile,
    zfw: Pounds,
    total_weight: Pounds,
    cg: Feet,
    fuel: Pounds,
) -> SafetyEvaluation {
    let mtow_ok = total_weight.0 <= config.effective_mtow(aircraft).0;
    let cg_ok = config.cg_envelope.contains(cg);
    let zfw_ok = aircraft.zfw_limit.map_or(true, |limit| zfw.0 <= limit.0);

    let landing_weight = aircraft
        .landing_limit
        .map(|_| estimated_landing_weight(total_weight, fuel));
    let landing_ok = match (aircraft.landing_limit, landing_weight) {
        (Some(limit), Some(landing)) => landing.0 <= limit.0,
        _ => true,
    };

    SafetyEvaluation {
        checks: SafetyChecks {
            zfw_ok,
            mtow_ok,
            cg_ok,
            landing_ok,
        },
        estimated_landing_weight: landing_weight,
    }
}
