//! Firmware observed on one vehicle
//!
//! Query responses arrive one per ECU answer; [`ObservedFirmware`] groups them
//! into the per-ECU lists the matcher consumes. Files use hex for the raw
//! bytes so padding and the supplier prefix survive exactly:
//!
//! ```json
//! { "car_fw": [
//!     { "ecu": "fwdRadar", "address": 2000, "fw_version": "f100435631..." }
//! ] }
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

use fwid_core::{EcuFamily, EcuIdentifier};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading observed firmware
#[derive(Debug, Error)]
pub enum ObservedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for loading observed firmware
pub type ObservedResult<T> = Result<T, ObservedError>;

/// One firmware version reported by one ECU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FwResponse {
    pub ecu: EcuFamily,
    pub address: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_address: Option<u8>,
    /// Raw version bytes, hex-encoded on the wire
    #[serde(with = "hex_bytes")]
    pub fw_version: Vec<u8>,
}

impl FwResponse {
    pub fn new(ecu: EcuIdentifier, fw_version: impl Into<Vec<u8>>) -> Self {
        Self {
            ecu: ecu.family,
            address: ecu.address,
            sub_address: ecu.sub_address,
            fw_version: fw_version.into(),
        }
    }

    pub fn identifier(&self) -> EcuIdentifier {
        EcuIdentifier::new(self.ecu, self.address, self.sub_address)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ObservedFile {
    car_fw: Vec<FwResponse>,
}

/// Raw firmware strings per ECU, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedFirmware {
    firmware: BTreeMap<EcuIdentifier, Vec<Vec<u8>>>,
}

impl ObservedFirmware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group query responses per ECU
    ///
    /// Arrival order is kept; exact duplicates of an earlier string are dropped.
    pub fn from_responses(responses: impl IntoIterator<Item = FwResponse>) -> Self {
        let mut observed = Self::new();
        for response in responses {
            observed.insert(response.identifier(), response.fw_version);
        }
        observed
    }

    pub fn from_json(json: &str) -> ObservedResult<Self> {
        let file: ObservedFile = serde_json::from_str(json)?;
        Ok(Self::from_responses(file.car_fw))
    }

    pub fn from_toml(content: &str) -> ObservedResult<Self> {
        let file: ObservedFile = toml::from_str(content)?;
        Ok(Self::from_responses(file.car_fw))
    }

    /// Load from a `.toml` file, or JSON for any other extension
    pub fn from_file(path: impl AsRef<Path>) -> ObservedResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content),
            _ => Self::from_json(&content),
        }
    }

    /// Add a firmware string; returns `false` if it was already recorded
    pub fn insert(&mut self, ecu: EcuIdentifier, fw: impl Into<Vec<u8>>) -> bool {
        let fw = fw.into();
        let versions = self.firmware.entry(ecu).or_default();
        if versions.contains(&fw) {
            return false;
        }
        versions.push(fw);
        true
    }

    pub fn get(&self, ecu: &EcuIdentifier) -> Option<&[Vec<u8>]> {
        self.firmware.get(ecu).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, EcuIdentifier, Vec<Vec<u8>>> {
        self.firmware.iter()
    }

    /// Number of ECUs with at least one response
    pub fn len(&self) -> usize {
        self.firmware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firmware.is_empty()
    }

    /// Flatten back into one response per firmware string
    pub fn to_responses(&self) -> Vec<FwResponse> {
        self.firmware
            .iter()
            .flat_map(|(ecu, versions)| {
                versions.iter().map(|fw| FwResponse::new(*ecu, fw.clone()))
            })
            .collect()
    }

    pub fn to_json(&self) -> ObservedResult<String> {
        let file = ObservedFile {
            car_fw: self.to_responses(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl<'a> IntoIterator for &'a ObservedFirmware {
    type Item = (&'a EcuIdentifier, &'a Vec<Vec<u8>>);
    type IntoIter = btree_map::Iter<'a, EcuIdentifier, Vec<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(EcuIdentifier, Vec<u8>)> for ObservedFirmware {
    fn from_iter<I: IntoIterator<Item = (EcuIdentifier, Vec<u8>)>>(iter: I) -> Self {
        let mut observed = Self::new();
        for (ecu, fw) in iter {
            observed.insert(ecu, fw);
        }
        observed
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
