//! Wiring the library crates together for one CLI invocation.

use std::sync::Arc;

use anyhow::Context;
use herald_config::HeraldConfig;
use herald_ontology::{HttpOntologySource, OntologyService};
use herald_publish::{FileStore, Publisher, revalidator_from_config};
use herald_validate::ValidationPipeline;

use crate::cli::GlobalFlags;
use crate::input;

pub type HttpPipeline = ValidationPipeline<HttpOntologySource>;

/// Vocabulary service pointed at the configured schema.org release.
pub fn ontology(config: &HeraldConfig) -> anyhow::Result<Arc<OntologyService<HttpOntologySource>>> {
    let service = OntologyService::from_config(&config.ontology)
        .context("failed to build the schema.org vocabulary client")?;
    Ok(Arc::new(service))
}

pub fn pipeline(config: &HeraldConfig) -> anyhow::Result<HttpPipeline> {
    ValidationPipeline::new(ontology(config)?).context("failed to compile the graph shape schema")
}

/// A publisher over the settings file and the file-backed store.
pub fn publisher(
    config: &HeraldConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<Publisher<HttpOntologySource>> {
    let settings = input::load_settings(&flags.settings)?;
    let revalidator = revalidator_from_config(&config.revalidation)
        .context("failed to build the revalidation client")?;
    if !config.revalidation.is_configured() {
        tracing::debug!("revalidation endpoint not configured");
    }

    Ok(Publisher::new(
        settings,
        config,
        pipeline(config)?,
        Arc::new(FileStore::new(&flags.store)),
        revalidator,
    ))
}
