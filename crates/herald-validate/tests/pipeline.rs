//! End-to-end pipeline behaviour with an in-memory vocabulary.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use herald_core::{
    ArticleSummary, ListPageSource, PageCategory, PageEntity, ReportSource, ResolvedPage, SiteSettings,
};
use herald_graph::JsonLdGraphBuilder;
use herald_ontology::{ManualClock, Ontology, OntologyError, OntologyService, OntologySource};
use herald_validate::ValidationPipeline;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const CLASSES: [(&str, &[&str]); 20] = [
    ("Thing", &[]),
    ("Organization", &["Thing"]),
    ("CreativeWork", &["Thing"]),
    ("WebSite", &["CreativeWork"]),
    ("WebPage", &["CreativeWork"]),
    ("AboutPage", &["WebPage"]),
    ("CollectionPage", &["WebPage"]),
    ("Intangible", &["Thing"]),
    ("ItemList", &["Intangible"]),
    ("BreadcrumbList", &["ItemList"]),
    ("ListItem", &["Intangible"]),
    ("Article", &["CreativeWork"]),
    ("Person", &["Thing"]),
    ("MediaObject", &["CreativeWork"]),
    ("ImageObject", &["MediaObject"]),
    ("Action", &["Thing"]),
    ("SearchAction", &["Action"]),
    ("EntryPoint", &["Intangible"]),
    ("Place", &["Thing"]),
    ("PostalAddress", &["Intangible"]),
];

const PROPERTIES: [(&str, &[&str]); 23] = [
    ("name", &["Thing"]),
    ("url", &["Thing"]),
    ("description", &["Thing"]),
    ("image", &["Thing"]),
    ("potentialAction", &["Thing"]),
    ("inLanguage", &["CreativeWork"]),
    ("isPartOf", &["CreativeWork"]),
    ("dateModified", &["CreativeWork"]),
    ("datePublished", &["CreativeWork"]),
    ("headline", &["CreativeWork"]),
    ("about", &["CreativeWork"]),
    ("publisher", &["CreativeWork"]),
    ("author", &["CreativeWork"]),
    ("mainEntity", &["CreativeWork"]),
    ("breadcrumb", &["WebPage"]),
    ("primaryImageOfPage", &["WebPage"]),
    ("numberOfItems", &["ItemList"]),
    ("itemListElement", &["ItemList"]),
    ("position", &["ListItem"]),
    ("item", &["ListItem"]),
    ("caption", &["ImageObject"]),
    ("target", &["Action"]),
    ("urlTemplate", &["EntryPoint"]),
];

#[derive(Default)]
struct FakeVocabulary {
    fetch_calls: AtomicU64,
    unreachable: bool,
}

#[async_trait]
impl OntologySource for FakeVocabulary {
    async fn fetch(&self) -> Result<Ontology, OntologyError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);
        if self.unreachable {
            return Err(OntologyError::Api {
                status: 503,
                message: "unavailable".into(),
            });
        }
        let ontology = CLASSES
            .iter()
            .fold(Ontology::default(), |o, (class, parents)| o.with_class(class, parents));
        Ok(PROPERTIES
            .iter()
            .fold(ontology, |o, (property, domains)| o.with_property(property, domains)))
    }
}

type Service = OntologyService<FakeVocabulary, Arc<ManualClock>>;

fn pipeline(source: FakeVocabulary) -> ValidationPipeline<FakeVocabulary, Arc<ManualClock>> {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let service: Service = OntologyService::new(source, clock, Duration::hours(24));
    ValidationPipeline::new(Arc::new(service)).unwrap()
}

fn settings() -> SiteSettings {
    SiteSettings {
        site_url: "https://modonty.com".into(),
        site_name: "Modonty".into(),
        site_description: Some("Arabic content platform".into()),
        default_locale: Some("ar_SA".into()),
        site_pages: vec!["about".into()],
        search_url_template: Some("/search?q={search_term_string}".into()),
        ..SiteSettings::default()
    }
}

fn about_graph() -> Value {
    let settings = settings();
    let page = PageEntity {
        slug: "about".into(),
        title: "About Modonty".into(),
        updated_at: Utc::now(),
        ..PageEntity::default()
    };
    let resolved = ResolvedPage::resolve(&page, &settings, PageCategory::Static).unwrap();
    JsonLdGraphBuilder::new(&settings)
        .build_static_page(&resolved)
        .unwrap()
        .into_value()
}

fn trending_graph() -> Value {
    let settings = settings();
    let page = PageEntity::listing("trending", Utc::now());
    let resolved = ResolvedPage::resolve(&page, &settings, PageCategory::Trending).unwrap();
    let source = ListPageSource::new(
        vec![ArticleSummary {
            title: "Hello".into(),
            slug: "hello".into(),
            ..ArticleSummary::default()
        }],
        1,
    );
    JsonLdGraphBuilder::new(&settings)
        .build_article_list(&resolved, &source)
        .unwrap()
        .into_value()
}

#[tokio::test]
async fn built_graphs_pass_every_validator() {
    let pipeline = pipeline(FakeVocabulary::default());

    for (graph, category) in [
        (about_graph(), PageCategory::Static),
        (trending_graph(), PageCategory::Trending),
    ] {
        let report = pipeline.validate(&graph, category).await;
        assert!(report.overall_valid, "{category}: {:?}", report.labeled_issues());
        assert_eq!(report.warning_count(), 0, "{category}: {:?}", report.labeled_issues());
    }
    assert!(!pipeline.ontology().cache().is_expired());
}

#[tokio::test]
async fn vocabulary_outage_degrades_only_the_structural_report() {
    let pipeline = pipeline(FakeVocabulary {
        unreachable: true,
        ..FakeVocabulary::default()
    });
    let report = pipeline.validate(&about_graph(), PageCategory::Static).await;

    assert!(!report.overall_valid);
    assert!(!report.structural.valid);
    assert!(report.structural.errors[0].message.contains("503"));
    assert!(report.schema.valid);
    assert!(report.linked_data.valid);
    assert!(report.business_rules.valid);
}

#[tokio::test]
async fn business_warnings_do_not_fail_the_report() {
    let pipeline = pipeline(FakeVocabulary::default());
    let mut graph = trending_graph();
    let nodes = graph["@graph"].as_array_mut().unwrap();
    nodes.retain(|node| node["@type"] != "CollectionPage");

    let report = pipeline.validate(&graph, PageCategory::Trending).await;
    assert!(report.overall_valid, "{:?}", report.labeled_issues());
    assert_eq!(report.business_rules.warnings.len(), 1);
}

#[tokio::test]
async fn unexpandable_graph_fails_linked_data_and_labels_sources() {
    let pipeline = pipeline(FakeVocabulary::default());
    let graph = json!({
        "@context": "https://schema.org",
        "@graph": [{ "@type": "WebPage", "@id": 42, "name": "About" }]
    });
    let report = pipeline.validate(&graph, PageCategory::Static).await;

    assert!(!report.overall_valid);
    assert!(!report.linked_data.valid);
    assert!(!report.schema.valid);
    let sources: Vec<ReportSource> = report.labeled_issues().iter().map(|i| i.source).collect();
    assert!(sources.contains(&ReportSource::LinkedData));
    assert!(sources.contains(&ReportSource::Schema));
}

#[tokio::test]
async fn snapshot_is_fetched_once_across_validations() {
    let pipeline = pipeline(FakeVocabulary::default());
    let graph = about_graph();
    pipeline.validate(&graph, PageCategory::Static).await;
    pipeline.validate(&graph, PageCategory::Static).await;
    assert_eq!(pipeline.ontology().source().fetch_calls.load(Ordering::Relaxed), 1);
}
