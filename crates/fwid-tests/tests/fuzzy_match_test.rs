//! Self-matching over the whole catalog
//!
//! Feeding a model's own registered firmware back through the matcher must
//! identify it uniquely, except for the declared ambiguity groups, which must
//! match exactly their own members.

use std::collections::BTreeSet;
use std::io::Write;
use std::thread;

use fwid_catalog::{ecus, FingerprintDatabase};
use fwid_core::{CarModel, EcuFamily};
use fwid_match::{
    audit, observed_from_catalog, FuzzyMatcher, FwResponse, MatchOutcome, ObservedFirmware,
};
use pretty_assertions::assert_eq;

fn db() -> FingerprintDatabase {
    FingerprintDatabase::builtin().expect("builtin catalog must load")
}

#[test]
fn test_self_match_is_exact_outside_declared_groups() {
    let db = db();
    let matcher = FuzzyMatcher::new(&db);
    let mut ambiguous = BTreeSet::new();

    for model in db.models() {
        let candidates = matcher.match_fuzzy(&observed_from_catalog(&db, model));
        match db.group_of(model) {
            Some(group) => assert_eq!(candidates, group.models, "{model}"),
            None => assert_eq!(candidates, BTreeSet::from([model]), "{model}"),
        }
        if candidates.len() > 1 {
            ambiguous.insert(model);
        }
    }

    assert_eq!(&ambiguous, db.ambiguous_models());
}

#[test]
fn test_declared_ambiguous_set() {
    let db = db();
    assert_eq!(
        db.ambiguous_models(),
        &BTreeSet::from([
            CarModel::GenesisG70,
            CarModel::GenesisG70_2020,
            CarModel::HyundaiTucson4thGen,
            CarModel::HyundaiTucsonHybrid4thGen,
            CarModel::KiaSportage5thGen,
            CarModel::KiaSportageHybrid5thGen,
            CarModel::KiaSorento4thGen,
            CarModel::KiaSorentoHev4thGen,
        ])
    );
}

#[test]
fn test_audit_report_is_clean() {
    let db = db();
    let report = audit(&FuzzyMatcher::new(&db));
    assert!(report.is_clean(), "{report:?}");
    assert!(report.undeclared().is_empty());
    assert!(report.unexpectedly_unique().is_empty());
}

#[test]
fn test_single_ecu_observation() {
    // Camera alone is enough when its code and date are unique
    let db = db();
    let matcher = FuzzyMatcher::new(&db);

    for model in db.models() {
        if db.group_of(model).is_some() {
            continue;
        }
        let Some(cameras) = db.firmware(model).unwrap().get(&ecus::FWD_CAMERA) else {
            continue;
        };
        let observed = ObservedFirmware::from_responses([FwResponse::new(
            ecus::FWD_CAMERA,
            cameras[0].clone(),
        )]);
        assert!(
            matcher.match_fuzzy(&observed).contains(&model),
            "{model} camera alone does not match"
        );
    }
}

#[test]
fn test_noise_ecus_do_not_block_identification() {
    let db = db();
    let matcher = FuzzyMatcher::new(&db);

    let mut observed = observed_from_catalog(&db, CarModel::KiaStinger);
    // Unknown ECU on a gateway sub-address and an unparseable radar answer
    let gated = fwid_core::EcuIdentifier::new(EcuFamily::FwdRadar, 0x7d0, Some(2));
    observed.insert(gated, b"\xf1\x00 garbage".to_vec());
    observed.insert(ecus::HVAC, b"\xf1\x00XX HVAC 1.00".to_vec());

    assert_eq!(
        matcher.identify(&observed),
        MatchOutcome::Confident {
            model: CarModel::KiaStinger
        }
    );
}

#[test]
fn test_cross_model_mix_is_unidentified() {
    let db = db();
    let matcher = FuzzyMatcher::new(&db);

    let stinger = db.firmware(CarModel::KiaStinger).unwrap();
    let telluride = db.firmware(CarModel::KiaTelluride).unwrap();
    let observed = ObservedFirmware::from_responses([
        FwResponse::new(ecus::FWD_RADAR, stinger[&ecus::FWD_RADAR][0].clone()),
        FwResponse::new(ecus::FWD_CAMERA, telluride[&ecus::FWD_CAMERA][0].clone()),
    ]);

    assert_eq!(matcher.identify(&observed), MatchOutcome::Unidentified);
}

#[test]
fn test_concurrent_matching() {
    let db = db();
    let matcher = FuzzyMatcher::new(&db);

    thread::scope(|scope| {
        let handles: Vec<_> = db
            .models()
            .map(|model| {
                scope.spawn(move || {
                    let candidates =
                        matcher.match_fuzzy(&observed_from_catalog(matcher.database(), model));
                    (model, candidates)
                })
            })
            .collect();

        for handle in handles {
            let (model, candidates) = handle.join().unwrap();
            assert!(candidates.contains(&model), "{model}");
        }
    });
}

#[test]
fn test_observed_file_end_to_end() {
    let db = db();
    let matcher = FuzzyMatcher::new(&db);

    let observed = observed_from_catalog(&db, CarModel::HyundaiPalisade);
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(observed.to_json().unwrap().as_bytes())
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    let first = &json["car_fw"][0];
    assert!(first["fw_version"]
        .as_str()
        .is_some_and(|s| hex::decode(s).is_ok()));

    let loaded = ObservedFirmware::from_file(file.path()).unwrap();
    assert_eq!(
        matcher.identify(&loaded),
        MatchOutcome::Confident {
            model: CarModel::HyundaiPalisade
        }
    );
}
