//! Validate command - check the builtin catalog and audit ambiguity

use anyhow::{bail, Result};
use fwid_catalog::FingerprintDatabase;
use fwid_match::{audit, FuzzyMatcher};

use crate::output::{join_or_dash, OutputContext};

/// Load the builtin catalog and replay every model through the matcher
pub fn validate(ctx: &OutputContext) -> Result<()> {
    let db = match FingerprintDatabase::builtin() {
        Ok(db) => db,
        Err(err) => {
            for violation in err.violations() {
                ctx.error(&violation.to_string());
            }
            bail!(err);
        }
    };
    ctx.success(&format!("Catalog valid: {} models", db.models().count()));

    let report = audit(&FuzzyMatcher::new(&db));
    if ctx.is_json() {
        ctx.print_json(&report);
    } else {
        let escapes = report
            .escapes
            .iter()
            .map(|(model, escaped)| format!("{} -> {}", model, join_or_dash(escaped)));
        ctx.print_kv(&[
            ("Confident", report.confident().count().to_string()),
            ("Declared ambiguous", join_or_dash(&report.declared)),
            ("Observed ambiguous", join_or_dash(&report.ambiguous)),
            ("Undeclared", join_or_dash(report.undeclared())),
            (
                "Unexpectedly unique",
                join_or_dash(report.unexpectedly_unique()),
            ),
            ("Escapes", join_or_dash(escapes)),
            ("Self mismatches", join_or_dash(&report.self_mismatches)),
        ]);
    }

    if !report.is_clean() {
        bail!("ambiguity audit failed");
    }
    ctx.success("Ambiguity audit clean");
    Ok(())
}
