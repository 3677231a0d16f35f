//! Per-platform properties

use std::collections::BTreeSet;

use fwid_core::{BusGeneration, CanFeature, CarModel, Powertrain};
use serde::Serialize;

/// Static properties of one car platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub generation: BusGeneration,
    pub powertrain: Powertrain,
    /// CAN-only controls this platform needs
    pub features: BTreeSet<CanFeature>,
}

impl PlatformInfo {
    fn can(powertrain: Powertrain, features: &[CanFeature]) -> Self {
        Self {
            generation: BusGeneration::Can,
            powertrain,
            features: features.iter().copied().collect(),
        }
    }

    fn can_fd(powertrain: Powertrain) -> Self {
        Self {
            generation: BusGeneration::CanFd,
            powertrain,
            features: BTreeSet::new(),
        }
    }
}

/// Platform info for every builtin model
pub fn builtin_platform(model: CarModel) -> PlatformInfo {
    use CanFeature::*;
    use CarModel::*;
    use Powertrain::*;

    match model {
        HyundaiSonata | HyundaiSantaFe | HyundaiPalisade | KiaTelluride | HyundaiElantra2021 => {
            PlatformInfo::can(Ice, &[Crc8Checksum])
        }
        HyundaiSonataLf => PlatformInfo::can(Ice, &[TcuGears, Checksum6B, LegacySafetyMode]),
        HyundaiKona => PlatformInfo::can(Ice, &[TcuGears]),
        HyundaiKonaEv => PlatformInfo::can(Electric, &[ElectricGears]),
        HyundaiGenesis => PlatformInfo::can(Ice, &[ClusterGears, Checksum6B, LegacySafetyMode]),
        KiaStinger | GenesisG70 | GenesisG70_2020 => PlatformInfo::can(Ice, &[ClusterGears]),

        HyundaiIoniq5 | HyundaiIoniq6 | KiaEv6 => PlatformInfo::can_fd(Electric),
        HyundaiTucson4thGen | KiaSportage5thGen | KiaSorento4thGen => PlatformInfo::can_fd(Ice),
        HyundaiTucsonHybrid4thGen | KiaSportageHybrid5thGen | KiaSorentoHev4thGen => {
            PlatformInfo::can_fd(Hybrid)
        }
    }
}
