//! fwid-catalog - Fingerprint catalog for Hyundai, Kia and Genesis vehicles
//!
//! Holds the firmware versions collected from the field, per-platform
//! properties, the diagnostic query definitions, and the
//! [`FingerprintDatabase`] that validates all of it at load time.
//!
//! # Quick Start
//!
//! ```rust
//! use fwid_catalog::{FingerprintDatabase, ecus};
//! use fwid_core::{CarModel, PlatformCode};
//!
//! let db = FingerprintDatabase::builtin().unwrap();
//! let codes = db.codes_for(CarModel::KiaEv6, &ecus::FWD_RADAR).unwrap();
//! assert!(codes.contains(&PlatformCode::undated(b"CV1-CV000")));
//! ```
//!
//! # Load-time invariants
//!
//! | Check | Scope |
//! |-------|-------|
//! | Firmware yields exactly one platform code | platform-code ECUs |
//! | Date present iff date-bearing and not in the no-dates set | platform-code ECUs |
//! | ECU is in an auxiliary request whitelist | CAN FD models |
//! | Code carries a part number unless the model has none | platform-code ECUs |
//! | No CAN-only features | CAN FD models |
//! | Every platform-code family registered, barring exceptions | all models |
//! | Firmware lists are non-empty | all ECUs |
//! | Ambiguity groups are disjoint pairs or larger | declared groups |

pub mod catalog;
pub mod database;
pub mod error;
mod fw_versions;
pub mod platforms;
pub mod query;
pub mod validate;

pub use catalog::{AmbiguityGroup, AmbiguityReason, Catalog, EcuFirmware};
pub use database::FingerprintDatabase;
pub use error::{CatalogError, CatalogResult, Violation};
pub use platforms::{builtin_platform, PlatformInfo};
pub use query::{QueryConfig, QueryRequest};
pub use validate::validate;

/// ECU slots used by the builtin catalog
pub mod ecus {
    pub use crate::fw_versions::{
        ABS, ADAS, CORNER_RADAR, ENGINE, EPS, FWD_CAMERA, FWD_RADAR, HVAC, TRANSMISSION,
    };
}
