//! Category-specific publishing rules.

use herald_core::{Issue, PageCategory, SubReport};
use herald_graph::graph::has_type;
use serde_json::Value;

const PAGE_TYPES: [&str; 2] = ["WebPage", "AboutPage"];

/// Static pages need exactly one named or described `WebPage`/`AboutPage`;
/// listing pages need the site `Organization` and `WebSite`, and should
/// have a `CollectionPage`.
#[must_use]
pub fn validate_business_rules(document: &Value, category: PageCategory) -> SubReport {
    let Some(nodes) = document.get("@graph").and_then(Value::as_array) else {
        return SubReport::failed("Graph has no @graph array");
    };

    if category.is_collection() {
        collection_rules(nodes)
    } else {
        static_page_rules(nodes)
    }
}

fn static_page_rules(nodes: &[Value]) -> SubReport {
    let pages: Vec<(usize, &Value)> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| PAGE_TYPES.iter().any(|t| has_type(node, t)))
        .collect();

    let mut errors = Vec::new();
    match pages.as_slice() {
        [] => errors.push(Issue::new("Static pages need a WebPage or AboutPage node")),
        [(index, page)] => {
            let has_text = ["name", "description"].iter().any(|key| {
                page.get(key)
                    .and_then(Value::as_str)
                    .is_some_and(|text| !text.trim().is_empty())
            });
            if !has_text {
                errors.push(Issue::at(
                    "Page node needs a name or description",
                    format!("@graph[{index}]"),
                ));
            }
        }
        many => errors.push(Issue::new(format!(
            "Expected exactly one WebPage or AboutPage node, found {}",
            many.len()
        ))),
    }
    SubReport::from_issues(errors, Vec::new())
}

fn collection_rules(nodes: &[Value]) -> SubReport {
    let present = |schema_type: &str| nodes.iter().any(|node| has_type(node, schema_type));

    let mut errors = Vec::new();
    for required in ["Organization", "WebSite"] {
        if !present(required) {
            errors.push(Issue::new(format!("Listing pages need a {required} node")));
        }
    }
    let mut warnings = Vec::new();
    if !present("CollectionPage") {
        warnings.push(Issue::new("Listing page has no CollectionPage node"));
    }
    SubReport::from_issues(errors, warnings)
}
