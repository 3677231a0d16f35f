//! Match command - identify a vehicle from an observed-firmware file

use std::path::Path;

use anyhow::{Context, Result};
use fwid_catalog::FingerprintDatabase;
use fwid_core::CarModel;
use fwid_match::{Evidence, FuzzyMatcher, MatchOutcome, ObservedFirmware};
use serde::Serialize;

use crate::output::{join_or_dash, CandidateRow, EvidenceRow, OutputContext};

#[derive(Serialize)]
struct MatchReport<'a> {
    evidence: &'a [EvidenceRow],
    #[serde(flatten)]
    outcome: &'a MatchOutcome,
}

pub fn evidence_rows(evidence: &Evidence) -> Vec<EvidenceRow> {
    evidence
        .iter()
        .map(|(ecu, codes)| EvidenceRow {
            ecu: ecu.to_string(),
            codes: join_or_dash(codes),
        })
        .collect()
}

pub fn candidate_rows(db: &FingerprintDatabase, candidates: &[CarModel]) -> Vec<CandidateRow> {
    candidates
        .iter()
        .map(|model| {
            let platform = db.platform(*model);
            CandidateRow {
                model: model.to_string(),
                name: model.marketing_name().to_string(),
                generation: platform.map_or_else(|| "-".to_string(), |p| p.generation.to_string()),
                powertrain: platform.map_or_else(|| "-".to_string(), |p| p.powertrain.to_string()),
            }
        })
        .collect()
}

/// Run the fuzzy matcher over an observed-firmware file
pub fn identify(db: &FingerprintDatabase, file: &Path, ctx: &OutputContext) -> Result<()> {
    let observed = ObservedFirmware::from_file(file)
        .with_context(|| format!("Failed to load observed firmware: {}", file.display()))?;

    let matcher = FuzzyMatcher::new(db);
    let evidence = evidence_rows(&matcher.evidence(&observed));
    let outcome = matcher.identify(&observed);

    if ctx.is_json() {
        ctx.print_json(&MatchReport {
            evidence: &evidence,
            outcome: &outcome,
        });
        return Ok(());
    }

    ctx.info(&format!(
        "{} ECU(s) observed, {} with platform codes",
        observed.len(),
        evidence.len()
    ));
    ctx.print(&evidence);

    let candidates: Vec<CarModel> = outcome.candidates().into_iter().collect();
    match &outcome {
        MatchOutcome::Unidentified => ctx.warn("No catalog model matches this firmware"),
        MatchOutcome::Confident { model } => {
            ctx.print(&candidate_rows(db, &candidates));
            ctx.success(&format!("Identified as {}", model));
        }
        MatchOutcome::Ambiguous { .. } => {
            ctx.print(&candidate_rows(db, &candidates));
            ctx.warn(&format!(
                "Ambiguous: {} models share these platform codes",
                candidates.len()
            ));
        }
    }
    Ok(())
}
