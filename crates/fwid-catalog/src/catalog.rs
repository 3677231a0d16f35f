//! Catalog data as loaded into the fingerprint database
//!
//! [`Catalog::builtin`] assembles the compiled-in tables. Fields are public so
//! alternative catalogs can be built and validated the same way.

use std::collections::{BTreeMap, BTreeSet};

use fwid_core::{CarModel, EcuFamily, EcuIdentifier};
use serde::Serialize;

use crate::fw_versions::FW_VERSIONS;
use crate::platforms::{builtin_platform, PlatformInfo};

/// Firmware versions per ECU for one model
pub type EcuFirmware = BTreeMap<EcuIdentifier, Vec<Vec<u8>>>;

/// Why a group of models cannot be told apart by platform codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityReason {
    /// Same platform code, part number and date on every ECU
    SharedCodePartAndDate,
    /// Same platform code and part number; no dates recorded
    SharedCodeAndPart,
    /// CAN FD platform codes shared across powertrains
    SharedAcrossPowertrains,
}

/// Models expected to match each other's firmware
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguityGroup {
    pub reason: AmbiguityReason,
    pub models: BTreeSet<CarModel>,
}

impl AmbiguityGroup {
    pub fn new(reason: AmbiguityReason, models: impl IntoIterator<Item = CarModel>) -> Self {
        Self {
            reason,
            models: models.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Model → ECU → firmware versions, in collection order
    pub firmware: BTreeMap<CarModel, EcuFirmware>,
    pub platforms: BTreeMap<CarModel, PlatformInfo>,
    /// Families whose firmware carries a platform code
    pub platform_code_families: BTreeSet<EcuFamily>,
    /// Platform-code families whose firmware also carries a date
    pub date_families: BTreeSet<EcuFamily>,
    /// Models whose date-bearing firmware has no date
    pub no_dates: BTreeSet<CarModel>,
    /// Models whose firmware has no part numbers
    pub no_part_numbers: BTreeSet<CarModel>,
    /// Platform-code families a model is allowed to lack
    pub missing_ecu_exceptions: BTreeMap<CarModel, BTreeSet<EcuFamily>>,
    pub ambiguity_groups: Vec<AmbiguityGroup>,
}

impl Catalog {
    /// Hyundai, Kia and Genesis catalog shipped with this crate
    pub fn builtin() -> Self {
        use CarModel::*;

        let firmware: BTreeMap<CarModel, EcuFirmware> = FW_VERSIONS
            .iter()
            .map(|(model, table)| {
                let ecus = table
                    .iter()
                    .map(|(ecu, versions)| (*ecu, versions.iter().map(|fw| fw.to_vec()).collect()))
                    .collect();
                (*model, ecus)
            })
            .collect();

        let platforms: BTreeMap<_, _> = CarModel::ALL
            .into_iter()
            .map(|model| (model, builtin_platform(model)))
            .collect();

        // CAN FD platforms are not queried for EPS
        let mut missing_ecu_exceptions: BTreeMap<CarModel, BTreeSet<EcuFamily>> = platforms
            .iter()
            .filter(|(_, info)| info.generation.is_auxiliary())
            .map(|(model, _)| (*model, BTreeSet::from([EcuFamily::Eps])))
            .collect();
        missing_ecu_exceptions.insert(HyundaiSonataLf, BTreeSet::from([EcuFamily::Eps]));
        missing_ecu_exceptions.insert(
            HyundaiGenesis,
            BTreeSet::from([EcuFamily::FwdRadar, EcuFamily::Eps]),
        );

        Self {
            firmware,
            platforms,
            platform_code_families: BTreeSet::from([
                EcuFamily::FwdRadar,
                EcuFamily::FwdCamera,
                EcuFamily::Eps,
            ]),
            date_families: BTreeSet::from([EcuFamily::FwdCamera]),
            no_dates: BTreeSet::from([
                HyundaiSonataLf,
                HyundaiKona,
                HyundaiKonaEv,
                HyundaiTucson4thGen,
                HyundaiTucsonHybrid4thGen,
                KiaSportage5thGen,
                KiaSportageHybrid5thGen,
            ]),
            no_part_numbers: BTreeSet::from([HyundaiGenesis]),
            missing_ecu_exceptions,
            ambiguity_groups: vec![
                AmbiguityGroup::new(
                    AmbiguityReason::SharedCodePartAndDate,
                    [GenesisG70, GenesisG70_2020],
                ),
                AmbiguityGroup::new(
                    AmbiguityReason::SharedCodeAndPart,
                    [HyundaiTucson4thGen, HyundaiTucsonHybrid4thGen],
                ),
                AmbiguityGroup::new(
                    AmbiguityReason::SharedAcrossPowertrains,
                    [KiaSportage5thGen, KiaSportageHybrid5thGen],
                ),
                AmbiguityGroup::new(
                    AmbiguityReason::SharedAcrossPowertrains,
                    [KiaSorento4thGen, KiaSorentoHev4thGen],
                ),
            ],
        }
    }

    /// Union of every ambiguity group
    pub fn ambiguous_models(&self) -> BTreeSet<CarModel> {
        self.ambiguity_groups
            .iter()
            .flat_map(|group| group.models.iter().copied())
            .collect()
    }

    /// Ambiguity group containing `model`, if any
    pub fn group_of(&self, model: CarModel) -> Option<&AmbiguityGroup> {
        self.ambiguity_groups
            .iter()
            .find(|group| group.models.contains(&model))
    }

    pub fn is_platform_code_family(&self, family: EcuFamily) -> bool {
        self.platform_code_families.contains(&family)
    }

    pub fn is_date_family(&self, family: EcuFamily) -> bool {
        self.date_families.contains(&family)
    }

    /// Whether `model` is allowed to lack an ECU of `family`
    pub fn may_lack(&self, model: CarModel, family: EcuFamily) -> bool {
        self.missing_ecu_exceptions
            .get(&model)
            .is_some_and(|families| families.contains(&family))
    }
}
