use std::fmt::Write as _;

use herald_core::{IssueSeverity, ValidationReport};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
///
/// `text` falls back to pretty JSON; report-bearing commands print their own
/// summary through [`report_summary`].
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a report as JSON, or as a verdict with labeled issues for `text`.
pub fn output_report(label: &str, report: &ValidationReport, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Text {
        println!("{}", report_summary(label, report));
        return Ok(());
    }
    output(report, format)
}

#[must_use]
pub fn report_summary(label: &str, report: &ValidationReport) -> String {
    let verdict = if report.overall_valid { "valid" } else { "INVALID" };
    let mut out = format!(
        "{label}: {verdict} ({} errors, {} warnings)",
        report.error_count(),
        report.warning_count()
    );
    for issue in report.labeled_issues() {
        let severity = match issue.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        let _ = write!(out, "\n  [{}] {severity}: ", issue.source);
        if let Some(path) = &issue.path {
            let _ = write!(out, "{path}: ");
        }
        out.push_str(&issue.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use herald_core::{Issue, SubReport};
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_lists_labeled_issues() {
        let report = ValidationReport::aggregate(
            SubReport::passed(),
            SubReport::from_issues(vec![Issue::at("\"x\" is not a \"string\"", "@graph[0].url")], Vec::new()),
            SubReport::passed(),
            SubReport::from_issues(Vec::new(), vec![Issue::new("No CollectionPage node")]),
            Utc::now(),
        );

        assert_eq!(
            report_summary("clients", &report),
            "clients: INVALID (1 errors, 1 warnings)\n  \
             [schema] error: @graph[0].url: \"x\" is not a \"string\"\n  \
             [business_rules] warning: No CollectionPage node"
        );
    }

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&serde_json::json!({"a": [1, 2]}), OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"a":[1,2]}"#);
    }
}
