//! Car models and per-platform properties
//!
//! The catalog of supported models is closed: every model is a variant of
//! [`CarModel`], and its canonical name comes from a compile-time table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NameError;

/// Closed catalog of supported car models
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CarModel {
    HyundaiSonata,
    HyundaiSonataLf,
    HyundaiElantra2021,
    HyundaiSantaFe,
    HyundaiPalisade,
    HyundaiKona,
    HyundaiKonaEv,
    HyundaiGenesis,
    HyundaiIoniq5,
    HyundaiIoniq6,
    HyundaiTucson4thGen,
    HyundaiTucsonHybrid4thGen,
    KiaTelluride,
    KiaStinger,
    KiaEv6,
    KiaSportage5thGen,
    KiaSportageHybrid5thGen,
    KiaSorento4thGen,
    KiaSorentoHev4thGen,
    GenesisG70,
    GenesisG70_2020,
}

/// (model, canonical name, marketing name)
const NAME_TABLE: [(CarModel, &str, &str); 21] = [
    (
        CarModel::HyundaiSonata,
        "HYUNDAI_SONATA",
        "Hyundai Sonata 2020-23",
    ),
    (
        CarModel::HyundaiSonataLf,
        "HYUNDAI_SONATA_LF",
        "Hyundai Sonata 2018-19",
    ),
    (
        CarModel::HyundaiElantra2021,
        "HYUNDAI_ELANTRA_2021",
        "Hyundai Elantra 2021-23",
    ),
    (
        CarModel::HyundaiSantaFe,
        "HYUNDAI_SANTA_FE",
        "Hyundai Santa Fe 2019-20",
    ),
    (
        CarModel::HyundaiPalisade,
        "HYUNDAI_PALISADE",
        "Hyundai Palisade 2020-22",
    ),
    (CarModel::HyundaiKona, "HYUNDAI_KONA", "Hyundai Kona 2020"),
    (
        CarModel::HyundaiKonaEv,
        "HYUNDAI_KONA_EV",
        "Hyundai Kona Electric 2018-21",
    ),
    (
        CarModel::HyundaiGenesis,
        "HYUNDAI_GENESIS",
        "Hyundai Genesis 2015-16",
    ),
    (
        CarModel::HyundaiIoniq5,
        "HYUNDAI_IONIQ_5",
        "Hyundai Ioniq 5 2022-23",
    ),
    (
        CarModel::HyundaiIoniq6,
        "HYUNDAI_IONIQ_6",
        "Hyundai Ioniq 6 2023",
    ),
    (
        CarModel::HyundaiTucson4thGen,
        "HYUNDAI_TUCSON_4TH_GEN",
        "Hyundai Tucson 2022-23",
    ),
    (
        CarModel::HyundaiTucsonHybrid4thGen,
        "HYUNDAI_TUCSON_HYBRID_4TH_GEN",
        "Hyundai Tucson Hybrid 2022-23",
    ),
    (
        CarModel::KiaTelluride,
        "KIA_TELLURIDE",
        "Kia Telluride 2020-22",
    ),
    (CarModel::KiaStinger, "KIA_STINGER", "Kia Stinger 2018-20"),
    (CarModel::KiaEv6, "KIA_EV6", "Kia EV6 2022-23"),
    (
        CarModel::KiaSportage5thGen,
        "KIA_SPORTAGE_5TH_GEN",
        "Kia Sportage 2023",
    ),
    (
        CarModel::KiaSportageHybrid5thGen,
        "KIA_SPORTAGE_HYBRID_5TH_GEN",
        "Kia Sportage Hybrid 2023",
    ),
    (
        CarModel::KiaSorento4thGen,
        "KIA_SORENTO_4TH_GEN",
        "Kia Sorento 2021-23",
    ),
    (
        CarModel::KiaSorentoHev4thGen,
        "KIA_SORENTO_HEV_4TH_GEN",
        "Kia Sorento Hybrid 2022-23",
    ),
    (CarModel::GenesisG70, "GENESIS_G70", "Genesis G70 2018-19"),
    (
        CarModel::GenesisG70_2020,
        "GENESIS_G70_2020",
        "Genesis G70 2020",
    ),
];

impl CarModel {
    /// Every model, in catalog order
    pub const ALL: [CarModel; 21] = {
        let mut all = [CarModel::HyundaiSonata; 21];
        let mut i = 0;
        while i < NAME_TABLE.len() {
            all[i] = NAME_TABLE[i].0;
            i += 1;
        }
        all
    };

    /// Canonical identifier, e.g. `HYUNDAI_SONATA`
    pub fn name(self) -> &'static str {
        NAME_TABLE[self as usize].1
    }

    /// Human-readable make, model and years
    pub fn marketing_name(self) -> &'static str {
        NAME_TABLE[self as usize].2
    }
}

impl fmt::Display for CarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CarModel {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TABLE
            .iter()
            .find(|(_, name, _)| *name == s)
            .map(|(model, _, _)| *model)
            .ok_or_else(|| NameError::UnknownCarModel(s.to_string()))
    }
}

impl Serialize for CarModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CarModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Platform properties
// =============================================================================

/// Bus generation a platform is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusGeneration {
    /// Classic CAN, queried from the OBD port
    Can,
    /// CAN FD; ECUs are reached through the auxiliary (camera-side) queries
    CanFd,
}

impl BusGeneration {
    /// Whether this generation is only reachable through auxiliary requests
    pub fn is_auxiliary(self) -> bool {
        matches!(self, BusGeneration::CanFd)
    }
}

impl fmt::Display for BusGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusGeneration::Can => f.write_str("CAN"),
            BusGeneration::CanFd => f.write_str("CAN FD"),
        }
    }
}

/// Powertrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Powertrain {
    Ice,
    Hybrid,
    Electric,
}

impl fmt::Display for Powertrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Powertrain::Ice => "ice",
            Powertrain::Hybrid => "hybrid",
            Powertrain::Electric => "electric",
        };
        f.write_str(s)
    }
}

/// Controls that only exist on classic-CAN platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanFeature {
    /// Gear position read from the instrument cluster
    ClusterGears,
    /// Gear position read from the TCU
    TcuGears,
    /// Gear position read from the EV/hybrid gear message
    ElectricGears,
    /// CRC8 message checksum
    Crc8Checksum,
    /// 0x6B-seeded checksum
    Checksum6B,
    /// 0x7B-seeded checksum
    Checksum7B,
    /// Panda legacy safety mode
    LegacySafetyMode,
    /// SCC runs in the camera rather than the radar
    CameraScc,
}
