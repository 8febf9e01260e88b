//! Validation report types.
//!
//! Every validator, whatever it checks internally, reports through the same
//! [`SubReport`] shape so that aggregation stays a boolean reduction.

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One finding of a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub message: String,
    /// Location inside the graph (e.g. `@graph[2].address`), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    #[must_use]
    pub fn at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// `{valid, errors[], warnings[]}` for one validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubReport {
    pub valid: bool,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl SubReport {
    /// `valid` is derived from `errors` being empty.
    #[must_use]
    pub fn from_issues(errors: Vec<Issue>, warnings: Vec<Issue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    #[must_use]
    pub fn passed() -> Self {
        Self::from_issues(Vec::new(), Vec::new())
    }

    /// A validator that could not run (fetch failure, parse failure, ...).
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::from_issues(vec![Issue::new(message)], Vec::new())
    }
}

/// Which validator produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Structural,
    Schema,
    LinkedData,
    BusinessRules,
}

impl ReportSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Schema => "schema",
            Self::LinkedData => "linked_data",
            Self::BusinessRules => "business_rules",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// An issue tagged with its source, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LabeledIssue {
    pub source: ReportSource,
    pub severity: IssueSeverity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Aggregated verdict of the four validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub structural: SubReport,
    pub schema: SubReport,
    pub linked_data: SubReport,
    pub business_rules: SubReport,
    pub overall_valid: bool,
    pub validated_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Combine four sub-reports.
    ///
    /// `overall_valid = structural.valid && schema.valid && linked_data.valid
    /// && business_rules.errors.is_empty()`. Business-rule warnings never
    /// affect the verdict.
    #[must_use]
    pub fn aggregate(
        structural: SubReport,
        schema: SubReport,
        linked_data: SubReport,
        business_rules: SubReport,
        validated_at: DateTime<Utc>,
    ) -> Self {
        let overall_valid = structural.valid
            && schema.valid
            && linked_data.valid
            && business_rules.errors.is_empty();
        Self {
            structural,
            schema,
            linked_data,
            business_rules,
            overall_valid,
            validated_at,
        }
    }

    /// Synthetic report used when stored JSON-LD cannot even be parsed:
    /// every sub-validator fails with the same message.
    #[must_use]
    pub fn parse_failure(message: &str, validated_at: DateTime<Utc>) -> Self {
        let failed = || SubReport::failed(format!("Failed to parse JSON-LD: {message}"));
        Self::aggregate(failed(), failed(), failed(), failed(), validated_at)
    }

    /// Sub-reports paired with their source, in display order.
    #[must_use]
    pub fn sections(&self) -> [(ReportSource, &SubReport); 4] {
        [
            (ReportSource::Structural, &self.structural),
            (ReportSource::Schema, &self.schema),
            (ReportSource::LinkedData, &self.linked_data),
            (ReportSource::BusinessRules, &self.business_rules),
        ]
    }

    /// All errors then warnings of every sub-report, labeled by source.
    #[must_use]
    pub fn labeled_issues(&self) -> Vec<LabeledIssue> {
        let label = |source, severity, issue: &Issue| LabeledIssue {
            source,
            severity,
            message: issue.message.clone(),
            path: issue.path.clone(),
        };

        let sections = self.sections();
        let errors = sections.iter().flat_map(|(source, report)| {
            report
                .errors
                .iter()
                .map(move |issue| label(*source, IssueSeverity::Error, issue))
        });
        let warnings = sections.iter().flat_map(|(source, report)| {
            report
                .warnings
                .iter()
                .map(move |issue| label(*source, IssueSeverity::Warning, issue))
        });
        errors.chain(warnings).collect()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.sections().iter().map(|(_, r)| r.errors.len()).sum()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.sections().iter().map(|(_, r)| r.warnings.len()).sum()
    }
}
