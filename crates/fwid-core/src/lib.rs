//! fwid-core - Core types for ECU firmware fingerprinting
//!
//! Provides the closed enumerations of car models and ECU families, the
//! [`EcuIdentifier`] key, and the firmware string parser that turns raw
//! version strings into [`PlatformCode`]s.
//!
//! # Quick Start
//!
//! ```rust
//! use fwid_core::{parse_platform_codes, PlatformCode};
//!
//! let codes = parse_platform_codes([
//!     b"\xf1\x00CV1_ RDR -----      1.00 1.01 99110-CV000         ".as_slice(),
//!     b"\xf1\x00DH LKAS 1.1 -150210".as_slice(),
//! ]);
//!
//! assert!(codes.contains(&PlatformCode::undated(b"CV1-CV000")));
//! assert!(codes.contains(&PlatformCode::dated(b"DH", b"150210").unwrap()));
//! ```

pub mod car;
pub mod ecu;
pub mod error;
pub mod platform;

pub use car::{BusGeneration, CanFeature, CarModel, Powertrain};
pub use ecu::{EcuFamily, EcuIdentifier};
pub use error::{NameError, NameResult};
pub use platform::{
    parse_platform_code, parse_platform_codes, tokenize, FirmwareDate, PlatformCode,
    PART_NUMBER_MARKER, SUPPLIER_PREFIX,
};
