//! Error types for catalog loading

use fwid_core::{CanFeature, CarModel, EcuFamily, EcuIdentifier, PlatformCode};
use thiserror::Error;

/// A single broken catalog invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Registered firmware string yields no platform code
    #[error("{model} {ecu}: firmware has no platform code: {fw}")]
    Unparseable {
        model: CarModel,
        ecu: EcuIdentifier,
        fw: String,
    },

    /// Date-bearing ECU produced a code without a date
    #[error("{model} {ecu}: code {code} is missing a date")]
    MissingDate {
        model: CarModel,
        ecu: EcuIdentifier,
        code: PlatformCode,
    },

    /// Date found where none is expected
    #[error("{model} {ecu}: code {code} has an unexpected date")]
    UnexpectedDate {
        model: CarModel,
        ecu: EcuIdentifier,
        code: PlatformCode,
    },

    /// Part number missing for a model that records part numbers
    #[error("{model} {ecu}: code {code} has no part number")]
    MissingPartNumber {
        model: CarModel,
        ecu: EcuIdentifier,
        code: PlatformCode,
    },

    /// CAN FD car registers an ECU no auxiliary request asks for
    #[error("{model}: {ecu} is not in any auxiliary request whitelist")]
    NotInAuxiliaryWhitelist { model: CarModel, ecu: EcuIdentifier },

    /// ECU no query request is sent to
    #[error("{model}: {ecu} is not in any request whitelist")]
    NotQueried { model: CarModel, ecu: EcuIdentifier },

    /// ECU registered with an empty firmware list
    #[error("{model} {ecu}: no firmware versions registered")]
    EmptyFirmwareList { model: CarModel, ecu: EcuIdentifier },

    /// Platform-code ECU family absent without an exception
    #[error("{model}: missing required {family} ECU")]
    MissingRequiredEcu { model: CarModel, family: EcuFamily },

    #[error("{model}: no platform info")]
    MissingPlatformInfo { model: CarModel },

    /// CAN FD platform listed in a CAN-only feature set
    #[error("{model}: CAN FD car has CAN-only feature {feature:?}")]
    CanFeatureOnCanFd {
        model: CarModel,
        feature: CanFeature,
    },

    /// Exception set or ambiguity group names a model with no firmware
    #[error("{set} references {model}, which is not in the catalog")]
    UnknownModelReference { set: &'static str, model: CarModel },

    #[error("ambiguity group {index} has fewer than two models")]
    AmbiguityGroupTooSmall { index: usize },

    #[error("{model} is in more than one ambiguity group")]
    OverlappingAmbiguityGroups { model: CarModel },
}

/// Errors that can occur while loading the fingerprint database
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more invariants do not hold
    #[error("catalog failed validation with {} violation(s)", violations.len())]
    Invalid { violations: Vec<Violation> },
}

impl CatalogError {
    /// Violations behind the failure
    pub fn violations(&self) -> &[Violation] {
        match self {
            CatalogError::Invalid { violations } => violations,
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fwid_core::EcuFamily;

    #[test]
    fn test_violation_display() {
        let ecu = EcuIdentifier::new(EcuFamily::FwdCamera, 0x7c4, None);
        let v = Violation::MissingDate {
            model: CarModel::KiaEv6,
            ecu,
            code: PlatformCode::undated(b"CV1-CV000"),
        };
        assert_eq!(
            v.to_string(),
            "KIA_EV6 fwdCamera@0x7c4: code CV1-CV000 is missing a date"
        );
    }

    #[test]
    fn test_invalid_counts_violations() {
        let err = CatalogError::Invalid {
            violations: vec![
                Violation::AmbiguityGroupTooSmall { index: 0 },
                Violation::MissingPlatformInfo {
                    model: CarModel::KiaEv6,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "catalog failed validation with 2 violation(s)"
        );
        assert_eq!(err.violations().len(), 2);
    }
}
