//! # wb_core - Aircraft Weight-and-Balance Engine
//!
//! `wb_core` is the computational heart of Loadsheet. It turns passenger,
//! baggage and fuel figures into Zero Fuel Weight, takeoff weight, CG and
//! stabilizer trim, redistributes bags to move a forward CG toward a target,
//! and says whether the result is within the configured limits.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate(config, request)` is a pure function
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Typed errors, never a NaN or a half-filled result
//! - **Snapshots**: Configuration edits publish new immutable snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use wb_core::{calculate, BagManifest, Configuration, LoadRequest, Zone, ZoneOccupancy};
//! use wb_core::units::Pounds;
//!
//! let config = Configuration::reference();
//! let request = LoadRequest {
//!     aircraft_id: "N002".to_string(),
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
//! println!("CG {:.2} ft, safe: {}", result.cg.0, result.safe);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The engine (load composer, moment accumulator, optimizer, trim, safety)
//! - [`config`] - Configuration model and validation
//! - [`store`] - Snapshot-publishing configuration store
//! - [`equations`] - Weight-and-balance formulas and their metadata
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Configuration documents with atomic saves

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BagManifest, CalculationResult, LoadRequest, ZoneOccupancy};
pub use config::{AircraftProfile, Configuration, Zone};
pub use errors::{WbError, WbResult};
pub use file_io::{load_configuration, save_configuration, ConfigDocument};
pub use store::ConfigStore;
