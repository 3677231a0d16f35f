//! Fingerprint database
//!
//! Built once at startup from a [`Catalog`]. Platform codes for every
//! registered firmware list are parsed during load and cached, so matching
//! never re-parses catalog data.

use std::collections::{BTreeMap, BTreeSet};

use fwid_core::{CarModel, EcuFamily, EcuIdentifier, PlatformCode};
use tracing::{info, warn};

use crate::catalog::{AmbiguityGroup, Catalog, EcuFirmware};
use crate::error::{CatalogError, CatalogResult};
use crate::platforms::PlatformInfo;
use crate::query::QueryConfig;
use crate::validate::{codes_of, validate};

/// Validated, immutable fingerprint database
#[derive(Debug)]
pub struct FingerprintDatabase {
    catalog: Catalog,
    /// Model → platform-code ECU → codes of its registered firmware
    codes: BTreeMap<CarModel, BTreeMap<EcuIdentifier, BTreeSet<PlatformCode>>>,
    /// Models listed in any CAN-only feature set
    can_feature_models: BTreeSet<CarModel>,
    ambiguous_models: BTreeSet<CarModel>,
}

impl FingerprintDatabase {
    /// Validate `catalog` against `query` and build the code cache
    ///
    /// Fails with every violation found if any invariant does not hold.
    pub fn load(catalog: Catalog, query: &QueryConfig) -> CatalogResult<Self> {
        let violations = validate(&catalog, query);
        if !violations.is_empty() {
            for violation in &violations {
                warn!(%violation, "Catalog violation");
            }
            return Err(CatalogError::Invalid { violations });
        }

        let codes: BTreeMap<_, BTreeMap<_, _>> = catalog
            .firmware
            .iter()
            .map(|(model, ecus)| {
                let model_codes = ecus
                    .iter()
                    .filter(|(ecu, _)| catalog.is_platform_code_family(ecu.family))
                    .map(|(ecu, versions)| (*ecu, codes_of(versions)))
                    .collect();
                (*model, model_codes)
            })
            .collect();

        let can_feature_models = catalog
            .platforms
            .iter()
            .filter(|(_, info)| !info.features.is_empty())
            .map(|(model, _)| *model)
            .collect();
        let ambiguous_models = catalog.ambiguous_models();

        let code_count: usize = codes
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum();
        info!(
            models = catalog.firmware.len(),
            platform_codes = code_count,
            ambiguous = ambiguous_models.len(),
            "Fingerprint database loaded"
        );

        Ok(Self {
            catalog,
            codes,
            can_feature_models,
            ambiguous_models,
        })
    }

    /// Load the compiled-in catalog with the builtin query config
    pub fn builtin() -> CatalogResult<Self> {
        Self::load(Catalog::builtin(), &QueryConfig::builtin())
    }

    /// Cached platform codes for a model's ECU
    ///
    /// `None` when the model has no entry for `ecu` or the ECU family does
    /// not carry platform codes.
    pub fn codes_for(
        &self,
        model: CarModel,
        ecu: &EcuIdentifier,
    ) -> Option<&BTreeSet<PlatformCode>> {
        self.codes.get(&model)?.get(ecu)
    }

    /// Every model in the catalog
    pub fn models(&self) -> impl Iterator<Item = CarModel> + '_ {
        self.catalog.firmware.keys().copied()
    }

    /// Raw firmware registered for a model
    pub fn firmware(&self, model: CarModel) -> Option<&EcuFirmware> {
        self.catalog.firmware.get(&model)
    }

    pub fn platform(&self, model: CarModel) -> Option<&PlatformInfo> {
        self.catalog.platforms.get(&model)
    }

    pub fn is_platform_code_ecu(&self, ecu: &EcuIdentifier) -> bool {
        self.catalog.is_platform_code_family(ecu.family)
    }

    pub fn is_date_family(&self, family: EcuFamily) -> bool {
        self.catalog.is_date_family(family)
    }

    /// Models that declare at least one CAN-only feature
    pub fn can_feature_models(&self) -> &BTreeSet<CarModel> {
        &self.can_feature_models
    }

    /// Union of the declared ambiguity groups
    pub fn ambiguous_models(&self) -> &BTreeSet<CarModel> {
        &self.ambiguous_models
    }

    pub fn ambiguity_groups(&self) -> &[AmbiguityGroup] {
        &self.catalog.ambiguity_groups
    }

    pub fn group_of(&self, model: CarModel) -> Option<&AmbiguityGroup> {
        self.catalog.group_of(model)
    }

    pub fn no_dates(&self) -> &BTreeSet<CarModel> {
        &self.catalog.no_dates
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use crate::fw_versions::{ABS, EPS, FWD_CAMERA, FWD_RADAR};
    use fwid_core::BusGeneration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_loads() {
        let db = FingerprintDatabase::builtin().unwrap();
        assert_eq!(db.models().count(), CarModel::ALL.len());
        assert_eq!(db.ambiguous_models().len(), 8);
    }

    #[test]
    fn test_codes_for() {
        let db = FingerprintDatabase::builtin().unwrap();

        let radar = db.codes_for(CarModel::KiaEv6, &FWD_RADAR).unwrap();
        assert_eq!(
            radar,
            &BTreeSet::from([PlatformCode::undated(b"CV1-CV000")])
        );

        let camera = db.codes_for(CarModel::HyundaiGenesis, &FWD_CAMERA).unwrap();
        assert!(camera.contains(&PlatformCode::dated(b"DH", b"150210").unwrap()));
    }

    #[test]
    fn test_codes_for_skips_non_platform_ecus() {
        let db = FingerprintDatabase::builtin().unwrap();
        assert!(db
            .firmware(CarModel::HyundaiSonata)
            .unwrap()
            .contains_key(&ABS));
        assert!(db.codes_for(CarModel::HyundaiSonata, &ABS).is_none());
        assert!(db.codes_for(CarModel::KiaEv6, &EPS).is_none());
    }

    #[test]
    fn test_can_feature_models_exclude_can_fd() {
        let db = FingerprintDatabase::builtin().unwrap();
        assert!(db.can_feature_models().contains(&CarModel::HyundaiSonata));
        for model in db.can_feature_models() {
            assert_eq!(db.platform(*model).unwrap().generation, BusGeneration::Can);
        }
    }

    #[test]
    fn test_load_rejects_invalid_catalog() {
        let mut catalog = Catalog::builtin();
        catalog.no_part_numbers.clear();

        let err = FingerprintDatabase::load(catalog, &QueryConfig::builtin()).unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(matches!(err.violations()[0], Violation::MissingPartNumber { .. }));
    }
}
