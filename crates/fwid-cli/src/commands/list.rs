//! List command - show catalog models

use anyhow::Result;
use fwid_catalog::FingerprintDatabase;

use crate::output::{join_or_dash, ModelRow, OutputContext};

pub fn model_rows(db: &FingerprintDatabase) -> Vec<ModelRow> {
    db.models()
        .map(|model| {
            let platform = db.platform(model);
            let ambiguous_with = db
                .group_of(model)
                .map(|group| join_or_dash(group.models.iter().filter(|m| **m != model)))
                .unwrap_or_else(|| "-".to_string());

            ModelRow {
                model: model.to_string(),
                name: model.marketing_name().to_string(),
                generation: platform.map_or_else(|| "-".to_string(), |p| p.generation.to_string()),
                powertrain: platform.map_or_else(|| "-".to_string(), |p| p.powertrain.to_string()),
                ecus: db.firmware(model).map_or(0, |ecus| ecus.len()),
                ambiguous_with,
            }
        })
        .collect()
}

/// List every model in the builtin catalog
pub fn list(db: &FingerprintDatabase, ctx: &OutputContext) -> Result<()> {
    ctx.print(&model_rows(db));
    Ok(())
}
