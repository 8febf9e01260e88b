//! Page graph builders.
//!
//! Every variant emits the shared Organization and WebSite nodes first, then
//! the page node, then (where applicable) its `BreadcrumbList`. Nodes refer to
//! one another by `@id`; nothing shared is embedded twice.

use chrono::{DateTime, Utc};
use herald_core::{
    ArticleSummary, CollectionEntity, ListPageSource, PageCategory, ResolvedPage, SiteSettings, url,
};
use serde_json::{Value, json};

use crate::error::GraphError;
use crate::graph::JsonLdGraph;
use crate::node::{self, AddressParts, Node};
use crate::site::{self, SiteNodes};

/// Builds schema.org graphs for one site.
#[derive(Debug, Clone, Copy)]
pub struct JsonLdGraphBuilder<'a> {
    settings: &'a SiteSettings,
    list_window: usize,
}

impl<'a> JsonLdGraphBuilder<'a> {
    /// Items shown on a listing page unless configured otherwise.
    pub const DEFAULT_LIST_WINDOW: usize = 20;

    #[must_use]
    pub const fn new(settings: &'a SiteSettings) -> Self {
        Self {
            settings,
            list_window: Self::DEFAULT_LIST_WINDOW,
        }
    }

    #[must_use]
    pub const fn with_list_window(mut self, window: usize) -> Self {
        self.list_window = if window == 0 { 1 } else { window };
        self
    }

    #[must_use]
    pub const fn list_window(&self) -> usize {
        self.list_window
    }

    /// Organization, WebSite, and an `AboutPage` or `WebPage` node.
    ///
    /// Slugs registered as site pages render as `AboutPage` with a headline,
    /// an `about` reference to the organization, and a two-entry breadcrumb.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongCategory`] unless `resolved` is a static page.
    pub fn build_static_page(&self, resolved: &ResolvedPage) -> Result<JsonLdGraph, GraphError> {
        expect_category(resolved, &[PageCategory::Static], "a static page")?;
        let site = self.site_nodes(resolved);

        let is_about = self.settings.is_site_page(&resolved.slug);
        let (schema_type, fragment) = if is_about {
            ("AboutPage", "aboutpage")
        } else {
            ("WebPage", "webpage")
        };
        tracing::debug!(slug = %resolved.slug, schema_type, "building static page graph");

        let mut page = node::identified(schema_type, &fragment_id(&resolved.canonical_url, fragment));
        page_basics(&mut page, resolved, &resolved.updated_at);

        let breadcrumb = is_about.then(|| {
            let id = fragment_id(&resolved.canonical_url, "breadcrumb");
            page.insert("headline".into(), Value::String(resolved.title.clone()));
            page.insert("about".into(), node::reference(&site::organization_id(&resolved.site_url)));
            page.insert("breadcrumb".into(), node::reference(&id));
            self.breadcrumb(&id, resolved)
        });

        assemble(site, page, breadcrumb)
    }

    /// `CollectionPage` of the latest articles on the home page.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongCategory`] unless `resolved` is the home page.
    pub fn build_home_feed(
        &self,
        resolved: &ResolvedPage,
        source: &ListPageSource<ArticleSummary>,
    ) -> Result<JsonLdGraph, GraphError> {
        expect_category(resolved, &[PageCategory::Home], "the home feed")?;
        let items = self.article_items(resolved, source);
        self.collection(resolved, source.last_updated, items, source.total_count, false)
    }

    /// `CollectionPage` of organization-like entities or generic things.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongCategory`] unless `resolved` is the clients
    /// or categories listing.
    pub fn build_entity_list(
        &self,
        resolved: &ResolvedPage,
        source: &ListPageSource<CollectionEntity>,
    ) -> Result<JsonLdGraph, GraphError> {
        expect_category(
            resolved,
            &[PageCategory::Clients, PageCategory::Categories],
            "an entity collection",
        )?;
        let items = source
            .window(self.list_window)
            .iter()
            .map(|entity| entity_node(entity, resolved.category, &resolved.site_url))
            .collect();
        self.collection(resolved, source.last_updated, items, source.total_count, true)
    }

    /// `CollectionPage` of articles on a listing page other than home.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongCategory`] unless `resolved` is the trending listing.
    pub fn build_article_list(
        &self,
        resolved: &ResolvedPage,
        source: &ListPageSource<ArticleSummary>,
    ) -> Result<JsonLdGraph, GraphError> {
        expect_category(resolved, &[PageCategory::Trending], "an article collection")?;
        let items = self.article_items(resolved, source);
        self.collection(resolved, source.last_updated, items, source.total_count, true)
    }

    fn site_nodes(&self, resolved: &ResolvedPage) -> SiteNodes {
        site::build_org_and_website(self.settings, &resolved.site_url)
    }

    fn article_items(&self, resolved: &ResolvedPage, source: &ListPageSource<ArticleSummary>) -> Vec<Value> {
        source
            .window(self.list_window)
            .iter()
            .map(|article| article_node(article, &resolved.site_url))
            .collect()
    }

    fn collection(
        &self,
        resolved: &ResolvedPage,
        last_updated: Option<DateTime<Utc>>,
        items: Vec<Value>,
        total_count: u64,
        with_breadcrumb: bool,
    ) -> Result<JsonLdGraph, GraphError> {
        tracing::debug!(
            category = %resolved.category,
            shown = items.len(),
            total_count,
            "building collection graph"
        );
        let site = self.site_nodes(resolved);
        let canonical = &resolved.canonical_url;

        let mut page = node::identified("CollectionPage", &fragment_id(canonical, "collectionpage"));
        page_basics(&mut page, resolved, &last_updated.unwrap_or(resolved.updated_at));

        let mut list = node::identified("ItemList", &fragment_id(canonical, "itemlist"));
        list.insert("numberOfItems".into(), json!(total_count));
        list.insert(
            "itemListElement".into(),
            Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| node::list_item(index + 1, item))
                    .collect(),
            ),
        );
        page.insert("mainEntity".into(), Value::Object(list));

        let breadcrumb = with_breadcrumb.then(|| {
            let id = fragment_id(canonical, "breadcrumb");
            page.insert("breadcrumb".into(), node::reference(&id));
            self.breadcrumb(&id, resolved)
        });

        assemble(site, page, breadcrumb)
    }

    fn breadcrumb(&self, id: &str, resolved: &ResolvedPage) -> Value {
        let home_name = self
            .settings
            .category_seo(PageCategory::Home)
            .and_then(|seo| node::non_blank(seo.title.as_deref()))
            .unwrap_or(resolved.site_name.as_str());
        node::breadcrumb(
            id,
            (home_name, resolved.site_url.as_str()),
            (resolved.title.as_str(), resolved.canonical_url.as_str()),
        )
    }
}

fn expect_category(
    resolved: &ResolvedPage,
    allowed: &[PageCategory],
    expected: &'static str,
) -> Result<(), GraphError> {
    if allowed.contains(&resolved.category) {
        Ok(())
    } else {
        Err(GraphError::WrongCategory {
            category: resolved.category.to_string(),
            expected,
        })
    }
}

fn fragment_id(page_url: &str, fragment: &str) -> String {
    format!("{page_url}#{fragment}")
}

fn assemble(site: SiteNodes, page: Node, breadcrumb: Option<Value>) -> Result<JsonLdGraph, GraphError> {
    let mut graph = JsonLdGraph::new();
    graph.push(site.organization)?;
    graph.push(site.website)?;
    graph.push(Value::Object(page))?;
    if let Some(breadcrumb) = breadcrumb {
        graph.push(breadcrumb)?;
    }
    Ok(graph)
}

/// Properties every page node carries.
fn page_basics(page: &mut Node, resolved: &ResolvedPage, modified: &DateTime<Utc>) {
    page.insert("url".into(), Value::String(resolved.canonical_url.clone()));
    page.insert("name".into(), Value::String(resolved.title.clone()));
    node::set_text(page, "description", Some(resolved.description.as_str()));
    page.insert("inLanguage".into(), Value::String(resolved.language_tag()));
    page.insert("isPartOf".into(), node::reference(&site::website_id(&resolved.site_url)));
    page.insert("dateModified".into(), Value::String(node::iso(modified)));
    if let Some(image) = &resolved.image {
        page.insert(
            "primaryImageOfPage".into(),
            Value::Object(node::image_object(&image.url, Some(image.alt.as_str()))),
        );
    }
}

fn article_node(article: &ArticleSummary, site_url: &str) -> Value {
    let mut node = node::typed("Article");
    node.insert("headline".into(), Value::String(article.title.trim().into()));
    let article_url = node::non_blank(article.url.as_deref()).map_or_else(
        || url::join(site_url, &format!("articles/{}", article.slug)),
        |value| url::absolute_url(value, site_url),
    );
    node.insert("url".into(), Value::String(article_url));
    node::set_text(&mut node, "description", article.excerpt.as_deref());

    if let Some(published) = &article.published_at {
        node.insert("datePublished".into(), Value::String(node::iso(published)));
    }
    if let Some(modified) = article.updated_at.as_ref().or(article.published_at.as_ref()) {
        node.insert("dateModified".into(), Value::String(node::iso(modified)));
    }

    if let Some(name) = node::non_blank(Some(article.author.name.as_str())) {
        let mut author = node::typed("Person");
        author.insert("name".into(), Value::String(name.into()));
        if let Some(link) = node::non_blank(article.author.url.as_deref()) {
            author.insert("url".into(), Value::String(url::absolute_url(link, site_url)));
        }
        node.insert("author".into(), Value::Object(author));
    }

    if let Some(name) = node::non_blank(Some(article.publisher.name.as_str())) {
        let mut publisher = node::typed("Organization");
        publisher.insert("name".into(), Value::String(name.into()));
        if let Some(link) = node::non_blank(article.publisher.url.as_deref()) {
            publisher.insert("url".into(), Value::String(url::absolute_url(link, site_url)));
        }
        if let Some(logo) = node::non_blank(article.publisher.logo.as_deref()) {
            let logo = node::image_object(&url::absolute_url(logo, site_url), None);
            publisher.insert("logo".into(), Value::Object(logo));
        }
        node.insert("publisher".into(), Value::Object(publisher));
    }

    if let Some(image) = &article.image {
        if let Some(src) = node::non_blank(Some(image.url.as_str())) {
            let mut object = node::image_object(&url::absolute_url(src, site_url), image.alt.as_deref());
            if let Some(width) = image.width {
                object.insert("width".into(), json!(width));
            }
            if let Some(height) = image.height {
                object.insert("height".into(), json!(height));
            }
            node.insert("image".into(), Value::Object(object));
        }
    }

    Value::Object(node)
}

/// A schema.org class name: ASCII alphanumeric, starting upper-case.
fn is_class_name(value: &str) -> bool {
    value.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// The node type for an entity, or `None` for a generic `Thing`.
fn entity_type(entity: &CollectionEntity, category: PageCategory) -> Option<&str> {
    match node::non_blank(entity.schema_type.as_deref()) {
        Some(schema_type) if is_class_name(schema_type) => Some(schema_type),
        Some(schema_type) => {
            tracing::debug!(schema_type, slug = %entity.slug, "ignoring malformed entity type");
            (category == PageCategory::Clients).then_some("Organization")
        }
        None => (category == PageCategory::Clients).then_some("Organization"),
    }
}

fn entity_node(entity: &CollectionEntity, category: PageCategory, site_url: &str) -> Value {
    let schema_type = entity_type(entity, category);
    let mut node = node::typed(schema_type.unwrap_or("Thing"));
    node.insert("name".into(), Value::String(entity.name.trim().into()));

    let listing = category.listing_slug().unwrap_or_default();
    let entity_url = node::non_blank(entity.url.as_deref()).map_or_else(
        || url::join(site_url, &format!("{listing}/{}", entity.slug)),
        |value| url::absolute_url(value, site_url),
    );
    node.insert("url".into(), Value::String(entity_url));
    node::set_text(&mut node, "description", entity.description.as_deref());
    node::set_text(&mut node, "identifier", entity.identifier.as_deref());

    let same_as: Vec<Value> = entity
        .same_as
        .iter()
        .filter_map(|link| node::non_blank(Some(link.as_str())))
        .map(|link| Value::String(url::absolute_url(link, site_url)))
        .collect();
    if !same_as.is_empty() {
        node.insert("sameAs".into(), Value::Array(same_as));
    }

    let logo = node::non_blank(entity.logo.as_deref()).map(|logo| url::absolute_url(logo, site_url));

    if schema_type.is_none() {
        if let Some(logo) = logo {
            node.insert("image".into(), Value::String(logo));
        }
        return Value::Object(node);
    }

    if let Some(logo) = logo {
        node.insert("logo".into(), Value::Object(node::image_object(&logo, None)));
    }
    node::set_text(&mut node, "email", entity.email.as_deref());
    node::set_text(&mut node, "telephone", entity.telephone.as_deref());
    let address = AddressParts {
        street_address: entity.street_address.as_deref(),
        address_locality: entity.address_locality.as_deref(),
        address_region: entity.address_region.as_deref(),
        postal_code: entity.postal_code.as_deref(),
        address_country: entity.address_country.as_deref(),
    }
    .to_node();
    if let Some(address) = address {
        node.insert("address".into(), address);
    }
    if let Some(geo) = entity.geo() {
        node.insert(
            "location".into(),
            json!({ "@type": "Place", "geo": node::geo_coordinates(geo) }),
        );
    }

    Value::Object(node)
}
