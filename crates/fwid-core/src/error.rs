//! Error types for catalog name lookups

use thiserror::Error;

/// Result type for name lookups
pub type NameResult<T> = Result<T, NameError>;

/// Errors raised when resolving a name against one of the closed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Name is not a known car model
    #[error("unknown car model: {0}")]
    UnknownCarModel(String),

    /// Name is not a known ECU family
    #[error("unknown ECU family: {0}")]
    UnknownEcuFamily(String),
}
