//! Category dispatch and the preview, persist, and re-validate flows.

use std::sync::Arc;

use chrono::Utc;
use herald_config::HeraldConfig;
use herald_core::{Issue, MetaLimits, ResolvedPage, SiteSettings, ValidationReport};
use herald_graph::{JsonLdGraph, JsonLdGraphBuilder};
use herald_meta::MetaTagBuilder;
use herald_ontology::{Clock, OntologySource, SystemClock};
use herald_schema::{META_TAG_BAG, SchemaRegistry};
use herald_validate::ValidationPipeline;
use serde::Serialize;

use crate::error::PublishError;
use crate::input::GenerationInput;
use crate::record::{Generated, SeoRecord};
use crate::response::GenerationResponse;
use crate::revalidate::Revalidator;
use crate::store::SeoStore;
use crate::target::PublishTarget;

/// Result of re-validating one stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revalidation {
    pub report: ValidationReport,
    /// Where the stored meta tags no longer match the current output schema.
    pub meta_issues: Vec<Issue>,
}

/// Drives generation for one tenant.
pub struct Publisher<S, C = SystemClock> {
    settings: SiteSettings,
    limits: MetaLimits,
    list_window: usize,
    pipeline: ValidationPipeline<S, C>,
    registry: SchemaRegistry,
    store: Arc<dyn SeoStore>,
    revalidator: Arc<dyn Revalidator>,
}

impl<S: OntologySource, C: Clock> Publisher<S, C> {
    #[must_use]
    pub fn new(
        settings: SiteSettings,
        config: &HeraldConfig,
        pipeline: ValidationPipeline<S, C>,
        store: Arc<dyn SeoStore>,
        revalidator: Arc<dyn Revalidator>,
    ) -> Self {
        Self {
            settings,
            limits: config.meta.limits(),
            list_window: config.graph.list_window,
            pipeline,
            registry: SchemaRegistry::new(),
            store,
            revalidator,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub const fn pipeline(&self) -> &ValidationPipeline<S, C> {
        &self.pipeline
    }

    #[must_use]
    pub fn store(&self) -> &dyn SeoStore {
        self.store.as_ref()
    }

    /// Build meta tags and JSON-LD for `input` and validate the graph.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Build`] when settings or page data cannot be
    /// resolved and [`PublishError::Graph`] when the graph cannot be built.
    /// Validation findings are part of the returned report, not errors.
    pub async fn generate(&self, input: &GenerationInput) -> Result<Generated, PublishError> {
        let category = input.category();
        let page = input.page();
        let resolved = ResolvedPage::resolve(page, &self.settings, category)?;

        let meta_tags = MetaTagBuilder::new(&self.settings, &self.limits).build_resolved(page, &resolved);
        let json_ld = self.build_graph(input, &resolved)?.into_value();
        let report = self.pipeline.validate(&json_ld, category).await;

        Ok(Generated {
            target: PublishTarget::new(category, &resolved.slug),
            meta_tags,
            json_ld,
            report,
            generated_at: Utc::now(),
        })
    }

    fn build_graph(
        &self,
        input: &GenerationInput,
        resolved: &ResolvedPage,
    ) -> Result<JsonLdGraph, PublishError> {
        let builder = JsonLdGraphBuilder::new(&self.settings).with_list_window(self.list_window);
        let graph = match input {
            GenerationInput::Page(_) => builder.build_static_page(resolved)?,
            GenerationInput::Home { source, .. } => builder.build_home_feed(resolved, source)?,
            GenerationInput::Entities { source, .. } => builder.build_entity_list(resolved, source)?,
            GenerationInput::Trending { source, .. } => builder.build_article_list(resolved, source)?,
        };
        Ok(graph)
    }

    /// Generate without saving anything.
    pub async fn preview(&self, input: &GenerationInput) -> GenerationResponse<Generated> {
        let result = self.generate(input).await;
        if let Err(e) = &result {
            tracing::debug!(category = %input.category(), error = %e, "preview failed");
        }
        result.into()
    }

    /// Generate, save, then ping the public site.
    ///
    /// Records are saved whatever their validation verdict. A failed
    /// revalidation ping is logged and does not fail the save.
    pub async fn persist(&self, input: &GenerationInput) -> GenerationResponse<SeoRecord> {
        let result = self.try_persist(input).await;
        if let Err(e) = &result {
            tracing::warn!(category = %input.category(), error = %e, "generation not persisted");
        }
        result.into()
    }

    async fn try_persist(&self, input: &GenerationInput) -> Result<SeoRecord, PublishError> {
        let generated = self.generate(input).await?;
        let record = SeoRecord::from_generated(&generated)?;
        self.store.save(&generated.target, &record).await?;
        tracing::info!(
            page = %generated.target,
            valid = record.json_ld_validation_report.overall_valid,
            errors = record.json_ld_validation_report.error_count(),
            "persisted SEO record"
        );

        self.notify(&generated.target).await;
        Ok(record)
    }

    async fn notify(&self, target: &PublishTarget) {
        let path = target.public_path();
        if let Err(e) = self.revalidator.revalidate(&path).await {
            tracing::warn!(%path, error = %e, "revalidation ping failed");
        }
    }

    /// Re-run validation over a stored record and write the fresh report back.
    ///
    /// Stored JSON-LD that no longer parses yields a report where all four
    /// validators fail with the parse error.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::NotFound`] when nothing is stored for
    /// `target`, and [`PublishError::Store`] when loading or saving fails.
    pub async fn revalidate_stored(&self, target: &PublishTarget) -> Result<Revalidation, PublishError> {
        let mut record = self
            .store
            .load(target)
            .await?
            .ok_or_else(|| PublishError::NotFound(target.to_string()))?;

        let meta_issues = self.check_meta_tags(target, &record);
        let report = match record.json_ld() {
            Ok(graph) => self.pipeline.validate(&graph, target.category).await,
            Err(e) => {
                tracing::warn!(page = %target, error = %e, "stored JSON-LD does not parse");
                ValidationReport::parse_failure(&e.to_string(), Utc::now())
            }
        };

        record.json_ld_validation_report = report.clone();
        self.store.save(target, &record).await?;
        tracing::info!(page = %target, valid = report.overall_valid, "re-validated stored record");
        Ok(Revalidation {
            report,
            meta_issues,
        })
    }

    /// [`Self::revalidate_stored`] over every stored target, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Store`] if the stored targets cannot be
    /// listed. Per-target failures are returned alongside their target.
    pub async fn revalidate_all(
        &self,
    ) -> Result<Vec<(PublishTarget, Result<Revalidation, PublishError>)>, PublishError> {
        let mut outcomes = Vec::new();
        for target in self.store.targets().await? {
            let outcome = self.revalidate_stored(&target).await;
            outcomes.push((target, outcome));
        }
        Ok(outcomes)
    }

    fn check_meta_tags(&self, target: &PublishTarget, record: &SeoRecord) -> Vec<Issue> {
        match self.registry.issues(META_TAG_BAG, &record.meta_tags) {
            Ok(issues) => {
                if !issues.is_empty() {
                    tracing::warn!(page = %target, count = issues.len(), "stored meta tags do not match the output schema");
                }
                issues
            }
            Err(e) => {
                tracing::warn!(error = %e, "meta tag schema unavailable");
                Vec::new()
            }
        }
    }
}
