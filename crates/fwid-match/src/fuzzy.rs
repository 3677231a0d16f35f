//! Fuzzy fingerprint matching
//!
//! A model is a candidate when, for every observed ECU it also registers, the
//! codes parsed from the vehicle are a subset of the model's known codes.
//! ECUs missing on either side do not count against a model, but at least one
//! ECU must be comparable.

use std::collections::{BTreeMap, BTreeSet};

use fwid_catalog::FingerprintDatabase;
use fwid_core::{parse_platform_codes, CarModel, EcuIdentifier, PlatformCode};
use serde::Serialize;
use tracing::debug;

use crate::observed::ObservedFirmware;

/// Platform codes parsed from one vehicle, per ECU
pub type Evidence = BTreeMap<EcuIdentifier, BTreeSet<PlatformCode>>;

/// Classification of a candidate set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// No model is consistent with the observed firmware
    Unidentified,
    /// Exactly one model
    Confident { model: CarModel },
    /// Several models share the observed platform codes
    Ambiguous { candidates: BTreeSet<CarModel> },
}

impl MatchOutcome {
    pub fn from_candidates(candidates: BTreeSet<CarModel>) -> Self {
        let mut iter = candidates.iter();
        match (iter.next(), iter.next()) {
            (None, _) => MatchOutcome::Unidentified,
            (Some(model), None) => MatchOutcome::Confident { model: *model },
            (Some(_), Some(_)) => MatchOutcome::Ambiguous { candidates },
        }
    }

    pub fn candidates(&self) -> BTreeSet<CarModel> {
        match self {
            MatchOutcome::Unidentified => BTreeSet::new(),
            MatchOutcome::Confident { model } => BTreeSet::from([*model]),
            MatchOutcome::Ambiguous { candidates } => candidates.clone(),
        }
    }

    pub fn is_confident(&self) -> bool {
        matches!(self, MatchOutcome::Confident { .. })
    }
}

/// Matches observed firmware against a [`FingerprintDatabase`]
///
/// Holds no state between calls; share one matcher across threads freely.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'a> {
    db: &'a FingerprintDatabase,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(db: &'a FingerprintDatabase) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &'a FingerprintDatabase {
        self.db
    }

    /// Parse the observed firmware of every platform-code ECU
    ///
    /// ECUs whose firmware yields no code are left out.
    pub fn evidence(&self, observed: &ObservedFirmware) -> Evidence {
        observed
            .iter()
            .filter(|(ecu, _)| self.db.is_platform_code_ecu(ecu))
            .filter_map(|(ecu, versions)| {
                let codes = parse_platform_codes(versions);
                if codes.is_empty() {
                    debug!(%ecu, "Dropping ECU without platform codes from evidence");
                    None
                } else {
                    Some((*ecu, codes))
                }
            })
            .collect()
    }

    /// Every model consistent with the observed firmware
    pub fn match_fuzzy(&self, observed: &ObservedFirmware) -> BTreeSet<CarModel> {
        let evidence = self.evidence(observed);
        let candidates: BTreeSet<CarModel> = self
            .db
            .models()
            .filter(|model| self.is_consistent(*model, &evidence))
            .collect();

        debug!(
            ecus = evidence.len(),
            candidates = ?candidates,
            "Fuzzy match"
        );
        candidates
    }

    /// Match and classify in one step
    pub fn identify(&self, observed: &ObservedFirmware) -> MatchOutcome {
        MatchOutcome::from_candidates(self.match_fuzzy(observed))
    }

    fn is_consistent(&self, model: CarModel, evidence: &Evidence) -> bool {
        let mut comparable = 0;
        for (ecu, codes) in evidence {
            let Some(known) = self.db.codes_for(model, ecu) else {
                continue;
            };
            if !codes.is_subset(known) {
                return false;
            }
            comparable += 1;
        }
        comparable > 0
    }
}
