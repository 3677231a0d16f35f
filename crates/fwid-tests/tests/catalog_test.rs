//! Load-time invariants over the builtin catalog
//!
//! The database refuses to load when any of these fail; the checks here walk
//! the catalog directly so a regression names the offending entry.

use std::collections::BTreeSet;

use fwid_catalog::{FingerprintDatabase, QueryConfig};
use fwid_core::{parse_platform_code, BusGeneration, CarModel, EcuFamily};
use pretty_assertions::assert_eq;

fn db() -> FingerprintDatabase {
    FingerprintDatabase::builtin().expect("builtin catalog must load")
}

#[test]
fn test_every_platform_code_firmware_yields_one_code() {
    let db = db();
    for model in db.models() {
        for (ecu, versions) in db.firmware(model).unwrap() {
            if !db.is_platform_code_ecu(ecu) {
                continue;
            }
            let cached = db.codes_for(model, ecu).unwrap();
            for fw in versions {
                let code = parse_platform_code(fw)
                    .unwrap_or_else(|| panic!("{model} {ecu}: no code for {}", fw.escape_ascii()));
                assert!(cached.contains(&code), "{model} {ecu}: {code} not cached");
            }
            assert!(cached.len() <= versions.len());
        }
    }
}

#[test]
fn test_dates_follow_family_and_exceptions() {
    let db = db();
    for model in db.models() {
        for (ecu, _) in db.firmware(model).unwrap() {
            let Some(codes) = db.codes_for(model, ecu) else {
                continue;
            };
            let expects_date = db.is_date_family(ecu.family) && !db.no_dates().contains(&model);
            for code in codes {
                assert_eq!(code.date().is_some(), expects_date, "{model} {ecu}: {code}");
            }
        }
    }
}

#[test]
fn test_can_fd_ecus_are_auxiliary() {
    let db = db();
    let query = QueryConfig::builtin();
    for model in db.models() {
        if db.platform(model).unwrap().generation != BusGeneration::CanFd {
            continue;
        }
        for ecu in db.firmware(model).unwrap().keys() {
            assert!(
                query.auxiliary_whitelist().contains(ecu),
                "{model}: {ecu} is not in an auxiliary whitelist"
            );
        }
    }
}

#[test]
fn test_part_numbers_present_unless_excepted() {
    let db = db();
    let without_parts: BTreeSet<CarModel> = db
        .models()
        .filter(|model| {
            db.firmware(*model)
                .unwrap()
                .keys()
                .filter_map(|ecu| db.codes_for(*model, ecu))
                .flatten()
                .any(|code| !code.has_part_number())
        })
        .collect();

    assert_eq!(without_parts, db.catalog().no_part_numbers);
}

#[test]
fn test_can_features_only_on_can_platforms() {
    let db = db();
    for model in db.can_feature_models() {
        assert_eq!(db.platform(*model).unwrap().generation, BusGeneration::Can);
    }
    assert!(!db.can_feature_models().contains(&CarModel::KiaEv6));
    assert!(db.can_feature_models().contains(&CarModel::KiaStinger));
}

#[test]
fn test_required_families_registered() {
    let db = db();
    let catalog = db.catalog();
    for model in db.models() {
        let families: BTreeSet<EcuFamily> = db
            .firmware(model)
            .unwrap()
            .keys()
            .map(|ecu| ecu.family)
            .collect();
        for family in &catalog.platform_code_families {
            assert!(
                families.contains(family) || catalog.may_lack(model, *family),
                "{model}: missing {family}"
            );
        }
    }
}

#[test]
fn test_no_dates_models_are_real_exceptions() {
    // Each no-dates model must actually register a date-bearing ECU
    let db = db();
    for model in db.no_dates() {
        let has_date_ecu = db
            .firmware(*model)
            .unwrap()
            .keys()
            .any(|ecu| db.is_date_family(ecu.family));
        assert!(has_date_ecu, "{model}");
    }
}

#[test]
fn test_ambiguity_groups_are_disjoint() {
    let db = db();
    let mut seen = BTreeSet::new();
    for group in db.ambiguity_groups() {
        assert!(group.models.len() >= 2);
        for model in &group.models {
            assert!(seen.insert(*model), "{model} in two groups");
        }
    }
    assert_eq!(&seen, db.ambiguous_models());
}
