use anyhow::Context;
use herald_config::HeraldConfig;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OntologyCommands;
use crate::{context, output};

/// Handle `herald ontology`.
pub async fn handle(
    action: &OntologyCommands,
    config: &HeraldConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = context::ontology(config)?;
    let ontology = service
        .snapshot()
        .await
        .with_context(|| format!("failed to load vocabulary from {}", service.source().url()))?;

    let response = match action {
        OntologyCommands::Fetch => json!({
            "url": service.source().url(),
            "classes": ontology.class_count(),
            "properties": ontology.property_count(),
            "fetchedAt": service.cache().fetched_at(),
        }),
        OntologyCommands::Class { name } => json!({
            "class": name,
            "known": ontology.is_class(name),
            "lineage": ontology.lineage(name),
        }),
    };
    output::output(&response, flags.format)
}
