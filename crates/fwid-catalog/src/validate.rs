//! Load-time catalog validation
//!
//! Every check runs over the whole catalog and all violations are collected,
//! so one failed load reports everything that needs fixing.

use std::collections::BTreeSet;

use fwid_core::{parse_platform_code, BusGeneration, CarModel, EcuIdentifier, PlatformCode};

use crate::catalog::Catalog;
use crate::error::Violation;
use crate::query::QueryConfig;

/// Check every catalog invariant, returning the violations found
pub fn validate(catalog: &Catalog, query: &QueryConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (model, ecus) in &catalog.firmware {
        let model = *model;
        check_platform(catalog, model, &mut violations);

        for family in &catalog.platform_code_families {
            let registered = ecus.keys().any(|ecu| ecu.family == *family);
            if !registered && !catalog.may_lack(model, *family) {
                violations.push(Violation::MissingRequiredEcu {
                    model,
                    family: *family,
                });
            }
        }

        let auxiliary_only = catalog
            .platforms
            .get(&model)
            .is_some_and(|info| info.generation.is_auxiliary());

        for (ecu, versions) in ecus {
            let ecu = *ecu;
            if versions.is_empty() {
                violations.push(Violation::EmptyFirmwareList { model, ecu });
            }
            if auxiliary_only {
                if !query.auxiliary_whitelist().contains(&ecu) {
                    violations.push(Violation::NotInAuxiliaryWhitelist { model, ecu });
                }
            } else if !query.requests().iter().any(|request| request.allows(&ecu)) {
                violations.push(Violation::NotQueried { model, ecu });
            }
            if catalog.is_platform_code_family(ecu.family) {
                check_codes(catalog, model, ecu, versions, &mut violations);
            }
        }
    }

    check_references(catalog, &mut violations);
    check_groups(catalog, &mut violations);
    violations
}

fn check_platform(catalog: &Catalog, model: CarModel, violations: &mut Vec<Violation>) {
    let Some(info) = catalog.platforms.get(&model) else {
        violations.push(Violation::MissingPlatformInfo { model });
        return;
    };
    if info.generation == BusGeneration::CanFd {
        for feature in &info.features {
            violations.push(Violation::CanFeatureOnCanFd {
                model,
                feature: *feature,
            });
        }
    }
}

fn check_codes(
    catalog: &Catalog,
    model: CarModel,
    ecu: EcuIdentifier,
    versions: &[Vec<u8>],
    violations: &mut Vec<Violation>,
) {
    let expects_date = catalog.is_date_family(ecu.family) && !catalog.no_dates.contains(&model);
    let expects_part = !catalog.no_part_numbers.contains(&model);

    let mut codes = BTreeSet::new();
    for fw in versions {
        match parse_platform_code(fw) {
            Some(code) => {
                codes.insert(code);
            }
            None => violations.push(Violation::Unparseable {
                model,
                ecu,
                fw: fw.escape_ascii().to_string(),
            }),
        }
    }

    for code in codes {
        match (expects_date, code.date().is_some()) {
            (true, false) => violations.push(Violation::MissingDate {
                model,
                ecu,
                code: code.clone(),
            }),
            (false, true) => violations.push(Violation::UnexpectedDate {
                model,
                ecu,
                code: code.clone(),
            }),
            _ => {}
        }
        if expects_part && !code.has_part_number() {
            violations.push(Violation::MissingPartNumber { model, ecu, code });
        }
    }
}

fn check_references(catalog: &Catalog, violations: &mut Vec<Violation>) {
    let sets: [(&'static str, Vec<CarModel>); 4] = [
        ("no-dates set", catalog.no_dates.iter().copied().collect()),
        (
            "no-part-numbers set",
            catalog.no_part_numbers.iter().copied().collect(),
        ),
        (
            "missing-ECU exceptions",
            catalog.missing_ecu_exceptions.keys().copied().collect(),
        ),
        (
            "ambiguity groups",
            catalog.ambiguous_models().into_iter().collect(),
        ),
    ];

    for (set, models) in sets {
        for model in models {
            if !catalog.firmware.contains_key(&model) {
                violations.push(Violation::UnknownModelReference { set, model });
            }
        }
    }
}

fn check_groups(catalog: &Catalog, violations: &mut Vec<Violation>) {
    let mut seen = BTreeSet::new();
    for (index, group) in catalog.ambiguity_groups.iter().enumerate() {
        if group.models.len() < 2 {
            violations.push(Violation::AmbiguityGroupTooSmall { index });
        }
        for model in &group.models {
            if !seen.insert(*model) {
                violations.push(Violation::OverlappingAmbiguityGroups { model: *model });
            }
        }
    }
}

/// Codes for one ECU's firmware list, as the validator sees them
pub(crate) fn codes_of(versions: &[Vec<u8>]) -> BTreeSet<PlatformCode> {
    versions
        .iter()
        .filter_map(|fw| parse_platform_code(fw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AmbiguityGroup, AmbiguityReason};
    use crate::fw_versions::{ADAS, EPS, FWD_CAMERA, FWD_RADAR};
    use fwid_core::{CanFeature, EcuFamily};
    use pretty_assertions::assert_eq;

    fn builtin() -> (Catalog, QueryConfig) {
        (Catalog::builtin(), QueryConfig::builtin())
    }

    fn set_firmware(catalog: &mut Catalog, model: CarModel, ecu: EcuIdentifier, fw: &[u8]) {
        catalog
            .firmware
            .get_mut(&model)
            .unwrap()
            .insert(ecu, vec![fw.to_vec()]);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let (catalog, query) = builtin();
        assert_eq!(validate(&catalog, &query), Vec::<Violation>::new());
    }

    #[test]
    fn test_unparseable_firmware() {
        let (mut catalog, query) = builtin();
        set_firmware(
            &mut catalog,
            CarModel::KiaStinger,
            EPS,
            b"\xf1\x00 1.00 56300-J5200",
        );

        let violations = validate(&catalog, &query);
        assert!(matches!(
            violations.as_slice(),
            [Violation::Unparseable { model: CarModel::KiaStinger, ecu, .. }] if *ecu == EPS
        ));
    }

    #[test]
    fn test_missing_and_unexpected_dates() {
        let (mut catalog, query) = builtin();
        set_firmware(
            &mut catalog,
            CarModel::KiaEv6,
            FWD_CAMERA,
            b"\xf1\x00CV1 MFC  AT USA LHD 1.00 1.05 99210-CV000",
        );
        set_firmware(
            &mut catalog,
            CarModel::KiaEv6,
            FWD_RADAR,
            b"\xf1\x00CV1_ RDR -----      1.00 1.01 99110-CV000 211027",
        );

        let violations = validate(&catalog, &query);
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0], Violation::UnexpectedDate { .. }));
        assert!(matches!(violations[1], Violation::MissingDate { .. }));
    }

    #[test]
    fn test_no_dates_exception_rejects_dates() {
        let (mut catalog, query) = builtin();
        catalog.no_dates.insert(CarModel::KiaEv6);

        let violations = validate(&catalog, &query);
        assert!(!violations.is_empty());
        assert!(violations
            .iter()
            .all(|v| matches!(v, Violation::UnexpectedDate { model: CarModel::KiaEv6, .. })));
    }

    #[test]
    fn test_missing_part_number() {
        let (mut catalog, query) = builtin();
        catalog.no_part_numbers.clear();

        let violations = validate(&catalog, &query);
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| matches!(
            v,
            Violation::MissingPartNumber { model: CarModel::HyundaiGenesis, .. }
        )));
    }

    #[test]
    fn test_can_fd_ecu_outside_auxiliary_whitelist() {
        let (catalog, _) = builtin();
        let query = QueryConfig::new(
            QueryConfig::builtin()
                .requests()
                .iter()
                .filter(|r| r.bus == 0)
                .cloned()
                .collect(),
        );

        let violations = validate(&catalog, &query);
        assert_eq!(
            violations,
            vec![Violation::NotInAuxiliaryWhitelist {
                model: CarModel::KiaSorento4thGen,
                ecu: ADAS,
            }]
        );
    }

    #[test]
    fn test_can_fd_camera_at_unlisted_address() {
        let (mut catalog, query) = builtin();
        let moved = EcuIdentifier::new(EcuFamily::FwdCamera, 0x7c5, None);
        let ecus = catalog.firmware.get_mut(&CarModel::KiaEv6).unwrap();
        let versions = ecus.remove(&FWD_CAMERA).unwrap();
        ecus.insert(moved, versions);

        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::NotInAuxiliaryWhitelist {
                model: CarModel::KiaEv6,
                ecu: moved,
            }]
        );
    }

    #[test]
    fn test_ecu_outside_every_request() {
        let (mut catalog, query) = builtin();
        let unlisted = EcuIdentifier::new(EcuFamily::Hvac, 0x7b4, None);
        set_firmware(
            &mut catalog,
            CarModel::KiaStinger,
            unlisted,
            b"\xf1\x00CK HVAC 1.00",
        );

        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::NotQueried {
                model: CarModel::KiaStinger,
                ecu: unlisted,
            }]
        );
    }

    #[test]
    fn test_can_feature_on_can_fd() {
        let (mut catalog, query) = builtin();
        catalog
            .platforms
            .get_mut(&CarModel::HyundaiIoniq5)
            .unwrap()
            .features
            .insert(CanFeature::CameraScc);

        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::CanFeatureOnCanFd {
                model: CarModel::HyundaiIoniq5,
                feature: CanFeature::CameraScc,
            }]
        );
    }

    #[test]
    fn test_missing_platform_info() {
        let (mut catalog, query) = builtin();
        catalog.platforms.remove(&CarModel::KiaTelluride);
        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::MissingPlatformInfo {
                model: CarModel::KiaTelluride
            }]
        );
    }

    #[test]
    fn test_missing_required_ecu() {
        let (mut catalog, query) = builtin();
        catalog
            .firmware
            .get_mut(&CarModel::KiaTelluride)
            .unwrap()
            .remove(&EPS);

        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::MissingRequiredEcu {
                model: CarModel::KiaTelluride,
                family: EcuFamily::Eps,
            }]
        );
    }

    #[test]
    fn test_empty_firmware_list() {
        let (mut catalog, query) = builtin();
        catalog
            .firmware
            .get_mut(&CarModel::KiaStinger)
            .unwrap()
            .insert(EPS, Vec::new());

        assert_eq!(
            validate(&catalog, &query),
            vec![Violation::EmptyFirmwareList {
                model: CarModel::KiaStinger,
                ecu: EPS,
            }]
        );
    }

    #[test]
    fn test_exception_sets_reference_catalog_models() {
        let (mut catalog, query) = builtin();
        catalog.firmware.remove(&CarModel::HyundaiGenesis);

        let violations = validate(&catalog, &query);
        assert_eq!(
            violations,
            vec![
                Violation::UnknownModelReference {
                    set: "no-part-numbers set",
                    model: CarModel::HyundaiGenesis,
                },
                Violation::UnknownModelReference {
                    set: "missing-ECU exceptions",
                    model: CarModel::HyundaiGenesis,
                },
            ]
        );
    }

    #[test]
    fn test_ambiguity_group_shape() {
        let (mut catalog, query) = builtin();
        catalog
            .ambiguity_groups
            .push(AmbiguityGroup::new(AmbiguityReason::SharedCodeAndPart, [CarModel::KiaEv6]));
        catalog.ambiguity_groups.push(AmbiguityGroup::new(
            AmbiguityReason::SharedCodeAndPart,
            [CarModel::GenesisG70, CarModel::KiaStinger],
        ));

        assert_eq!(
            validate(&catalog, &query),
            vec![
                Violation::AmbiguityGroupTooSmall { index: 4 },
                Violation::OverlappingAmbiguityGroups {
                    model: CarModel::GenesisG70
                },
            ]
        );
    }

    #[test]
    fn test_codes_of_skips_unparseable() {
        let versions = vec![
            b"\xf1\x00DH LKAS 1.1 -150210".to_vec(),
            b"\xf1\x00 garbage".to_vec(),
        ];
        let codes = codes_of(&versions);
        assert_eq!(codes.len(), 1);
        assert!(codes.contains(&PlatformCode::dated(b"DH", b"150210").unwrap()));
    }
}
