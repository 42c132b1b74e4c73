//! # Stabilizer Trim Lookup
//!
//! Maps the final CG to a stabilizer trim setting via the configured table.
//! The CG is truncated toward zero (61.9 ft reads the 61 entry); a CG with no
//! table entry yields 0°.

use std::collections::BTreeMap;

use tracing::warn;

use crate::units::{Degrees, Feet};

/// Trim setting for a CG.
pub fn stabilizer_trim(cg: Feet, table: &BTreeMap<i32, Degrees>) -> Degrees {
    // `as` saturates, so an absurd CG just misses the table
    let key = cg.0.trunc() as i32;
    match table.get(&key) {
        Some(trim) => *trim,
        None => {
            warn!(cg = cg.0, key, "no stabilizer trim entry for CG, using 0");
            Degrees(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BTreeMap<i32, Degrees> {
        BTreeMap::from([(61, Degrees(2.0)), (62, Degrees(0.0)), (63, Degrees(-2.0))])
    }

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(stabilizer_trim(Feet(61.99), &table()), Degrees(2.0));
        assert_eq!(stabilizer_trim(Feet(63.0), &table()), Degrees(-2.0));
        assert_eq!(stabilizer_trim(Feet(62.5), &table()), Degrees(0.0));
    }

    #[test]
    fn test_missing_entry_defaults_to_zero() {
        assert_eq!(stabilizer_trim(Feet(65.76), &table()), Degrees(0.0));
        assert_eq!(stabilizer_trim(Feet(60.99), &table()), Degrees(0.0));
        assert_eq!(stabilizer_trim(Feet(61.5), &BTreeMap::new()), Degrees(0.0));
    }
}
