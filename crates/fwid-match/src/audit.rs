//! Ambiguity audit
//!
//! Replays every catalog model's own firmware through the matcher and checks
//! that multi-candidate results occur for exactly the declared ambiguity
//! groups, and never spill outside them.

use std::collections::{BTreeMap, BTreeSet};

use fwid_catalog::FingerprintDatabase;
use fwid_core::CarModel;
use serde::Serialize;
use tracing::{info, warn};

use crate::fuzzy::{FuzzyMatcher, MatchOutcome};
use crate::observed::ObservedFirmware;

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Outcome of matching each model against its own firmware
    pub outcomes: BTreeMap<CarModel, MatchOutcome>,
    /// Models whose own firmware produced several candidates
    pub ambiguous: BTreeSet<CarModel>,
    /// Union of the declared ambiguity groups
    pub declared: BTreeSet<CarModel>,
    /// Candidates outside the model's declared group
    pub escapes: BTreeMap<CarModel, BTreeSet<CarModel>>,
    /// Models that do not match their own firmware
    pub self_mismatches: BTreeSet<CarModel>,
}

impl AuditReport {
    /// Ambiguous but not declared
    pub fn undeclared(&self) -> BTreeSet<CarModel> {
        self.ambiguous.difference(&self.declared).copied().collect()
    }

    /// Declared but uniquely identified
    pub fn unexpectedly_unique(&self) -> BTreeSet<CarModel> {
        self.declared.difference(&self.ambiguous).copied().collect()
    }

    /// Models identified uniquely from their own firmware
    pub fn confident(&self) -> impl Iterator<Item = CarModel> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_confident())
            .map(|(model, _)| *model)
    }

    pub fn is_clean(&self) -> bool {
        self.ambiguous == self.declared
            && self.escapes.is_empty()
            && self.self_mismatches.is_empty()
    }
}

/// Observed map equal to a model's full registered firmware
pub fn observed_from_catalog(db: &FingerprintDatabase, model: CarModel) -> ObservedFirmware {
    db.firmware(model)
        .into_iter()
        .flatten()
        .flat_map(|(ecu, versions)| versions.iter().map(|fw| (*ecu, fw.clone())))
        .collect()
}

/// Match every catalog model against its own firmware
pub fn audit(matcher: &FuzzyMatcher<'_>) -> AuditReport {
    let db = matcher.database();
    let declared = db.ambiguous_models().clone();

    let mut outcomes = BTreeMap::new();
    let mut ambiguous = BTreeSet::new();
    let mut escapes = BTreeMap::new();
    let mut self_mismatches = BTreeSet::new();

    for model in db.models() {
        let candidates = matcher.match_fuzzy(&observed_from_catalog(db, model));

        if !candidates.contains(&model) {
            self_mismatches.insert(model);
        }
        if candidates.len() > 1 {
            ambiguous.insert(model);
        }

        let allowed = db
            .group_of(model)
            .map(|group| group.models.clone())
            .unwrap_or_else(|| BTreeSet::from([model]));
        let escaped: BTreeSet<CarModel> = candidates.difference(&allowed).copied().collect();
        if !escaped.is_empty() {
            escapes.insert(model, escaped);
        }

        outcomes.insert(model, MatchOutcome::from_candidates(candidates));
    }

    let report = AuditReport {
        outcomes,
        ambiguous,
        declared,
        escapes,
        self_mismatches,
    };

    if report.is_clean() {
        info!(
            models = report.outcomes.len(),
            confident = report.confident().count(),
            ambiguous = report.ambiguous.len(),
            "Ambiguity audit clean"
        );
    } else {
        warn!(
            undeclared = ?report.undeclared(),
            unexpectedly_unique = ?report.unexpectedly_unique(),
            escapes = ?report.escapes,
            self_mismatches = ?report.self_mismatches,
            "Ambiguity audit found problems"
        );
    }
    report
}
