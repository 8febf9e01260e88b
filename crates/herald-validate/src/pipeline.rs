//! Fan-out/fan-in over the four validators.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::Utc;
use herald_core::{PageCategory, SubReport, ValidationReport};
use herald_graph::normalize;
use herald_ontology::{Clock, OntologyService, OntologySource, SystemClock, validate_structure};
use herald_schema::{SchemaError, ShapeValidator};
use serde_json::Value;

use crate::business::validate_business_rules;
use crate::linked_data::validate_linked_data;

/// Runs the structural, shape, linked-data, and business-rule validators
/// concurrently and aggregates their verdicts.
///
/// Validators never fail the pipeline: an internal failure (vocabulary
/// fetch, unexpandable graph) becomes a `valid: false` sub-report.
pub struct ValidationPipeline<S, C = SystemClock> {
    ontology: Arc<OntologyService<S, C>>,
    shape: ShapeValidator,
}

impl<S: OntologySource, C: Clock> ValidationPipeline<S, C> {
    /// # Errors
    ///
    /// Returns [`SchemaError::Compilation`] if the shape schema fails to compile.
    pub fn new(ontology: Arc<OntologyService<S, C>>) -> Result<Self, SchemaError> {
        Ok(Self {
            ontology,
            shape: ShapeValidator::new()?,
        })
    }

    pub fn ontology(&self) -> &OntologyService<S, C> {
        &self.ontology
    }

    /// Validate a graph published for a page of `category`.
    ///
    /// The shape and linked-data checks see the graph as given; the
    /// structural and business-rule checks see its normalized form, falling
    /// back to the raw graph when it cannot be normalized.
    pub async fn validate(&self, graph: &Value, category: PageCategory) -> ValidationReport {
        let normalized = match normalize(graph) {
            Ok(normalized) => Cow::Owned(normalized),
            Err(e) => {
                tracing::debug!(%e, "normalization failed; validating raw graph");
                Cow::Borrowed(graph)
            }
        };

        let (structural, schema, linked_data, business_rules) = tokio::join!(
            self.structural(&normalized),
            async { SubReport::from_issues(self.shape.check(graph), Vec::new()) },
            async { validate_linked_data(graph) },
            async { validate_business_rules(&normalized, category) },
        );

        let report =
            ValidationReport::aggregate(structural, schema, linked_data, business_rules, Utc::now());
        tracing::debug!(
            %category,
            overall_valid = report.overall_valid,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "graph validated"
        );
        report
    }

    async fn structural(&self, document: &Value) -> SubReport {
        match self.ontology.snapshot().await {
            Ok(ontology) => validate_structure(document, &ontology),
            Err(e) => {
                tracing::warn!(%e, "schema.org vocabulary unavailable");
                SubReport::failed(format!("Failed to load schema.org vocabulary: {e}"))
            }
        }
    }
}
