//! # Configuration Store
//!
//! The caller-owned holder of the live configuration. Calculations never see
//! the store itself, only an immutable [`Arc<Configuration>`] snapshot taken
//! from it, so a settings edit can never be observed half-applied.
//!
//! ## Structure
//!
//! ```text
//! ConfigStore
//! ├── meta: StoreMetadata (schema version, snapshot id, revision, timestamps)
//! └── current: Arc<Configuration> (published snapshot)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wb_core::store::ConfigStore;
//! use wb_core::units::Pounds;
//!
//! let mut store = ConfigStore::new(Default::default()).unwrap();
//! let before = store.snapshot();
//!
//! store.update(|config| config.passenger_weights.adult = Pounds(190.0)).unwrap();
//!
//! // Earlier snapshots are untouched
//! assert_eq!(before.passenger_weights.adult, Pounds(200.0));
//! assert_eq!(store.snapshot().passenger_weights.adult, Pounds(190.0));
//! assert_eq!(store.meta.revision, 1);
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculations::{calculate, CalculationResult, LoadRequest};
use crate::config::Configuration;
use crate::errors::WbResult;

/// Current schema version for configuration documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Metadata describing the published snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Identifier of the published snapshot, new on every publish
    pub snapshot_id: Uuid,

    /// Number of publishes since the store was created
    pub revision: u64,

    /// When the store was created
    pub created: DateTime<Utc>,

    /// When the current snapshot was published
    pub modified: DateTime<Utc>,
}

/// Publishes validated configuration snapshots.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Snapshot metadata
    pub meta: StoreMetadata,

    current: Arc<Configuration>,
}

impl ConfigStore {
    /// Create a store from an initial configuration.
    ///
    /// # Errors
    ///
    /// * `InvalidConfiguration` - the configuration fails validation
    pub fn new(configuration: Configuration) -> WbResult<Self> {
        configuration.validate()?;
        let now = Utc::now();
        Ok(ConfigStore {
            meta: StoreMetadata {
                version: SCHEMA_VERSION.to_string(),
                snapshot_id: Uuid::new_v4(),
                revision: 0,
                created: now,
                modified: now,
            },
            current: Arc::new(configuration),
        })
    }

    /// Immutable snapshot of the current configuration
    pub fn snapshot(&self) -> Arc<Configuration> {
        Arc::clone(&self.current)
    }

    /// Edit a copy of the current configuration and publish it if valid.
    ///
    /// On error the published snapshot stays as it was.
    pub fn update<F>(&mut self, edit: F) -> WbResult<()>
    where
        F: FnOnce(&mut Configuration),
    {
        let mut next = (*self.current).clone();
        edit(&mut next);
        self.replace(next)
    }

    /// Validate and publish a whole new configuration.
    pub fn replace(&mut self, configuration: Configuration) -> WbResult<()> {
        configuration.validate()?;
        self.current = Arc::new(configuration);
        self.touch();
        info!(
            snapshot_id = %self.meta.snapshot_id,
            revision = self.meta.revision,
            "published configuration snapshot"
        );
        Ok(())
    }

    /// Run a calculation against the current snapshot.
    pub fn calculate(&self, request: &LoadRequest) -> WbResult<CalculationResult> {
        calculate(&self.snapshot(), request)
    }

    fn touch(&mut self) {
        self.meta.snapshot_id = Uuid::new_v4();
        self.meta.revision += 1;
        self.meta.modified = Utc::now();
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        let now = Utc::now();
        ConfigStore {
            meta: StoreMetadata {
                version: SCHEMA_VERSION.to_string(),
                snapshot_id: Uuid::new_v4(),
                revision: 0,
                created: now,
                modified: now,
            },
            current: Arc::new(Configuration::reference()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BagManifest, ZoneOccupancy};
    use crate::config::Zone;
    use crate::units::{Feet, Pounds};

    fn request() -> LoadRequest {
        LoadRequest {
            aircraft_id: "N002".to_string(),
            zones: Zone::ALL.iter().map(|z| ZoneOccupancy::new(*z, 10, 0, 0)).collect(),
            bags: BagManifest::new(10, 0),
            fuel: Pounds(5_000.0),
        }
    }

    #[test]
    fn test_store_creation() {
        let store = ConfigStore::new(Configuration::reference()).unwrap();
        assert_eq!(store.meta.version, SCHEMA_VERSION);
        assert_eq!(store.meta.revision, 0);
        assert_eq!(*store.snapshot(), Configuration::reference());
    }

    #[test]
    fn test_invalid_initial_configuration() {
        let mut config = Configuration::reference();
        config.aircraft.clear();
        assert!(ConfigStore::new(config).is_err());
    }

    #[test]
    fn test_update_publishes_new_snapshot() {
        let mut store = ConfigStore::default();
        let old_id = store.meta.snapshot_id;
        let old = store.snapshot();

        store.update(|c| c.target_cg = Feet(62.0)).unwrap();

        assert_eq!(old.target_cg, Feet(62.5));
        assert_eq!(store.snapshot().target_cg, Feet(62.0));
        assert_ne!(store.meta.snapshot_id, old_id);
        assert_eq!(store.meta.revision, 1);
    }

    #[test]
    fn test_rejected_update_keeps_snapshot() {
        let mut store = ConfigStore::default();
        let old_id = store.meta.snapshot_id;

        let result = store.update(|c| c.compartment_arms.aft = c.compartment_arms.forward);

        assert_eq!(result.unwrap_err().error_code(), "INVALID_CONFIGURATION");
        assert_eq!(*store.snapshot(), Configuration::reference());
        assert_eq!(store.meta.snapshot_id, old_id);
        assert_eq!(store.meta.revision, 0);
    }

    #[test]
    fn test_calculate_reads_current_snapshot() {
        let mut store = ConfigStore::default();
        let before = store.calculate(&request()).unwrap();

        store.update(|c| c.passenger_weights.adult = Pounds(210.0)).unwrap();
        let after = store.calculate(&request()).unwrap();

        // 30 adults × 10 lb
        assert_eq!((after.passenger_weight - before.passenger_weight).0, 300.0);
    }

    #[test]
    fn test_metadata_serialization() {
        let store = ConfigStore::default();
        let json = serde_json::to_string(&store.meta).unwrap();
        let roundtrip: StoreMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, store.meta);
    }
}
