//! ECU families and identifiers
//!
//! An ECU slot on the diagnostic bus is identified by its family tag, its
//! request address and an optional sub-address (used behind gateways).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// Closed set of ECU families known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EcuFamily {
    /// Engine control module
    Engine,
    /// Transmission control unit
    Transmission,
    /// ABS / ESC module
    Abs,
    /// Electric power steering
    Eps,
    /// Front radar (SCC)
    FwdRadar,
    /// Front camera (LKAS / MFC)
    FwdCamera,
    /// Corner radars
    CornerRadar,
    /// ADAS driving computer
    Adas,
    /// Climate control
    Hvac,
}

impl EcuFamily {
    /// Every family, in declaration order
    pub const ALL: [EcuFamily; 9] = [
        EcuFamily::Engine,
        EcuFamily::Transmission,
        EcuFamily::Abs,
        EcuFamily::Eps,
        EcuFamily::FwdRadar,
        EcuFamily::FwdCamera,
        EcuFamily::CornerRadar,
        EcuFamily::Adas,
        EcuFamily::Hvac,
    ];

    /// Canonical name, as used in query logs and observed-firmware files
    pub const fn name(self) -> &'static str {
        match self {
            EcuFamily::Engine => "engine",
            EcuFamily::Transmission => "transmission",
            EcuFamily::Abs => "abs",
            EcuFamily::Eps => "eps",
            EcuFamily::FwdRadar => "fwdRadar",
            EcuFamily::FwdCamera => "fwdCamera",
            EcuFamily::CornerRadar => "cornerRadar",
            EcuFamily::Adas => "adas",
            EcuFamily::Hvac => "hvac",
        }
    }
}

impl fmt::Display for EcuFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EcuFamily {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EcuFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| NameError::UnknownEcuFamily(s.to_string()))
    }
}

/// Identifies one ECU slot: (family, bus address, optional sub-address)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EcuIdentifier {
    /// ECU family tag
    pub family: EcuFamily,
    /// Diagnostic request address (e.g. `0x7c4`)
    pub address: u32,
    /// Sub-address behind a gateway, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_address: Option<u8>,
}

impl EcuIdentifier {
    pub const fn new(family: EcuFamily, address: u32, sub_address: Option<u8>) -> Self {
        Self {
            family,
            address,
            sub_address,
        }
    }
}

impl fmt::Display for EcuIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_address {
            Some(sub) => write!(f, "{}@0x{:x}.0x{:02x}", self.family, self.address, sub),
            None => write!(f, "{}@0x{:x}", self.family, self.address),
        }
    }
}
