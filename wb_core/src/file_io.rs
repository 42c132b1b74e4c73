//! # File I/O Module
//!
//! Reads and writes configuration documents:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//! - **Validation on load**: A document that loads is ready for the engine
//!
//! ## File Format
//!
//! Configuration documents are JSON:
//!
//! ```json
//! {
//!   "meta": { "version": "0.1.0", "name": "A220 fleet", "created": "...", "modified": "..." },
//!   "configuration": { "aircraft": { ... }, "zone_arms": [ ... ], ... }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wb_core::config::Configuration;
//! use wb_core::file_io::{load_configuration, save_configuration, ConfigDocument};
//! use std::path::Path;
//!
//! let doc = ConfigDocument::new("A220 fleet", Configuration::reference());
//! save_configuration(&doc, Path::new("fleet.json"))?;
//!
//! let loaded = load_configuration(Path::new("fleet.json"))?;
//! assert_eq!(loaded.configuration, doc.configuration);
//! # Ok::<(), wb_core::errors::WbError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Configuration;
use crate::errors::{WbError, WbResult};
use crate::store::SCHEMA_VERSION;

/// Header of a configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Free-form name (fleet, operator, ...)
    pub name: String,

    /// When the document was created
    pub created: DateTime<Utc>,

    /// When the document was last modified
    pub modified: DateTime<Utc>,
}

/// A configuration together with its header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub meta: DocumentMetadata,
    pub configuration: Configuration,
}

impl ConfigDocument {
    /// Wrap a configuration in a fresh document.
    pub fn new(name: impl Into<String>, configuration: Configuration) -> Self {
        let now = Utc::now();
        ConfigDocument {
            meta: DocumentMetadata {
                version: SCHEMA_VERSION.to_string(),
                name: name.into(),
                created: now,
                modified: now,
            },
            configuration,
        }
    }
}

/// Save a configuration document with atomic write semantics.
///
/// The save process:
/// 1. Serialize document to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target (atomic on most filesystems)
///
/// # Arguments
///
/// * `doc` - The document to save
/// * `path` - Path to save to
pub fn save_configuration(doc: &ConfigDocument, path: &Path) -> WbResult<()> {
    let json = serde_json::to_string_pretty(doc).map_err(|e| WbError::serialization_error(e.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        WbError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        WbError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        WbError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        WbError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "saved configuration document");
    Ok(())
}

/// Load a configuration document.
///
/// # Returns
///
/// * `Ok(ConfigDocument)` - Loaded and validated document
/// * `Err(WbError::VersionMismatch)` - File version is incompatible
/// * `Err(WbError::SerializationError)` - Invalid JSON
/// * `Err(WbError::InvalidConfiguration)` - Configuration fails validation
/// * `Err(WbError::FileError)` - I/O error
pub fn load_configuration(path: &Path) -> WbResult<ConfigDocument> {
    let mut file = File::open(path).map_err(|e| {
        WbError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        WbError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let doc: ConfigDocument =
        serde_json::from_str(&contents).map_err(|e| {
            WbError::serialization_error(format!("Invalid JSON in {}: {}", path.display(), e))
        })?;

    validate_version(&doc.meta.version)?;
    doc.configuration.validate()?;

    debug!(path = %path.display(), name = %doc.meta.name, "loaded configuration document");
    Ok(doc)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> WbResult<()> {
    let mismatch = || WbError::version_mismatch(file_version, SCHEMA_VERSION);

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a minor bump may add or rename configuration fields, and serde
    // would silently drop the ones this build does not know
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Feet;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_config_path(name: &str) -> PathBuf {
        temp_dir().join(format!("loadsheet_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let doc = ConfigDocument::new("Test fleet", Configuration::reference());
        save_configuration(&doc, &path).unwrap();

        let loaded = load_configuration(&path).unwrap();
        assert_eq!(loaded.meta.name, "Test fleet");
        assert_eq!(loaded.configuration, doc.configuration);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_config_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        let doc = ConfigDocument::new("Test", Configuration::reference());
        save_configuration(&doc, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_configuration_rejected_on_load() {
        let path = temp_config_path("invalid");

        let mut config = Configuration::reference();
        config.compartment_arms.aft = Feet(40.0);
        save_configuration(&ConfigDocument::new("Broken", config), &path).unwrap();

        let err = load_configuration(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_json() {
        let path = temp_config_path("bad_json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_configuration(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_configuration(&temp_config_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_newer_minor_reports_both_versions() {
        assert_eq!(
            validate_version("0.2.0").unwrap_err(),
            WbError::version_mismatch("0.2.0", SCHEMA_VERSION)
        );
    }
}
