//! fwid-match - Fuzzy firmware fingerprinting
//!
//! Identifies a vehicle model from the firmware versions its ECUs report when
//! no single version matches the catalog exactly.
//!
//! # Data flow
//!
//! ```text
//! query responses ──► ObservedFirmware ──► FuzzyMatcher ──► MatchOutcome
//!                                              │
//!                                              ▼
//!                                    FingerprintDatabase
//!                                  (codes parsed at load)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use fwid_catalog::{ecus, FingerprintDatabase};
//! use fwid_core::CarModel;
//! use fwid_match::{FuzzyMatcher, FwResponse, MatchOutcome, ObservedFirmware};
//!
//! let db = FingerprintDatabase::builtin().unwrap();
//! let matcher = FuzzyMatcher::new(&db);
//!
//! let observed = ObservedFirmware::from_responses([FwResponse::new(
//!     ecus::FWD_RADAR,
//!     b"\xf1\x00CV1_ RDR -----      1.00 1.01 99110-CV000         ".to_vec(),
//! )]);
//!
//! assert_eq!(
//!     matcher.identify(&observed),
//!     MatchOutcome::Confident { model: CarModel::KiaEv6 }
//! );
//! ```

pub mod audit;
pub mod fuzzy;
pub mod observed;

pub use audit::{audit, observed_from_catalog, AuditReport};
pub use fuzzy::{Evidence, FuzzyMatcher, MatchOutcome};
pub use observed::{FwResponse, ObservedError, ObservedFirmware, ObservedResult};
