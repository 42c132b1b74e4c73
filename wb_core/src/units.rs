//! # Unit Types
//!
//! Type-safe wrappers for weight-and-balance units. These provide compile-time
//! safety against mixing a weight with an arm while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Units
//!
//! Loadsheet works in US customary units, matching the aircraft manuals it
//! is fed from:
//! - Weight: pounds (lb)
//! - Arm: feet (ft) aft of the reference datum
//! - Moment: pound-feet (lb-ft)
//! - Stabilizer trim: degrees
//!
//! ## Example
//!
//! ```rust
//! use wb_core::units::{Feet, PoundFeet, Pounds};
//!
//! let bags = Pounds(5400.0);
//! let arm = Feet(50.0);
//! let moment: PoundFeet = bags * arm;
//! assert_eq!(moment.0, 270_000.0);
//! assert_eq!((moment / bags).0, 50.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Weight
// ============================================================================

/// Weight in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

// ============================================================================
// Length
// ============================================================================

/// Arm (distance aft of datum) in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

// ============================================================================
// Moment
// ============================================================================

/// Moment in pound-feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundFeet(pub f64);

impl Mul<Feet> for Pounds {
    type Output = PoundFeet;
    fn mul(self, rhs: Feet) -> PoundFeet {
        PoundFeet(self.0 * rhs.0)
    }
}

impl Div<Pounds> for PoundFeet {
    type Output = Feet;
    fn div(self, rhs: Pounds) -> Feet {
        Feet(self.0 / rhs.0)
    }
}

// ============================================================================
// Angle
// ============================================================================

/// Stabilizer trim angle in degrees (positive = nose up)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0.0), |acc, x| acc + x)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Smaller of two values
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }
        }
    };
}

impl_arithmetic!(Pounds);
impl_arithmetic!(Feet);
impl_arithmetic!(PoundFeet);
impl_arithmetic!(Degrees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_from_weight_and_arm() {
        let m = Pounds(200.0) * Feet(60.0);
        assert_eq!(m, PoundFeet(12_000.0));
        assert_eq!(m / Pounds(200.0), Feet(60.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Pounds(10.0);
        let b = Pounds(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_sum() {
        let total: Pounds = [Pounds(1.0), Pounds(2.5), Pounds(3.5)].into_iter().sum();
        assert_eq!(total, Pounds(7.0));
    }

    #[test]
    fn test_serialization() {
        let arm = Feet(62.5);
        let json = serde_json::to_string(&arm).unwrap();
        assert_eq!(json, "62.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(arm, roundtrip);
    }
}
