//! Organization and WebSite nodes shared by every page graph.

use herald_core::resolve::{self, FALLBACK_LOCALE};
use herald_core::{SiteSettings, url};
use serde_json::Value;

use crate::node::{self, AddressParts};

const DEFAULT_CONTACT_TYPE: &str = "customer service";
const SEARCH_QUERY_INPUT: &str = "required name=search_term_string";

#[must_use]
pub fn organization_id(site_url: &str) -> String {
    format!("{site_url}#organization")
}

#[must_use]
pub fn website_id(site_url: &str) -> String {
    format!("{site_url}#website")
}

/// Output of [`build_org_and_website`].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteNodes {
    pub organization: Value,
    pub website: Value,
    /// Single string when one language is configured, array otherwise.
    /// Already folded into the WebSite node and the contact point; page
    /// nodes carry their own resolved language instead. Kept for callers.
    pub in_language: Value,
}

/// Build the site-wide Organization and WebSite nodes.
///
/// `site_url` must already be normalized (`https://`, no trailing slash).
#[must_use]
pub fn build_org_and_website(settings: &SiteSettings, site_url: &str) -> SiteNodes {
    let primary = resolve::resolve("defaultLocale", None, settings.default_locale.as_deref(), FALLBACK_LOCALE);
    let languages = resolve::site_languages(settings, primary);
    let in_language = node::in_language(&languages);

    SiteNodes {
        organization: organization(settings, site_url, &in_language),
        website: website(settings, site_url, &in_language),
        in_language,
    }
}

fn organization(settings: &SiteSettings, site_url: &str, in_language: &Value) -> Value {
    let org = &settings.organization;
    let mut node = node::identified("Organization", &organization_id(site_url));
    node.insert("name".into(), Value::String(settings.site_name.trim().into()));
    node.insert("url".into(), Value::String(site_url.into()));
    node::set_text(&mut node, "legalName", org.legal_name.as_deref());
    node::set_text(
        &mut node,
        "description",
        node::non_blank(org.description.as_deref()).or(settings.site_description.as_deref()),
    );

    if let Some(logo) = node::non_blank(org.logo_url.as_deref()) {
        let logo = node::image_object(&url::absolute_url(logo, site_url), Some(settings.site_name.as_str()));
        node.insert("logo".into(), Value::Object(logo));
    }
    node::set_text(&mut node, "email", org.email.as_deref());
    node::set_text(&mut node, "telephone", org.telephone.as_deref());

    let same_as: Vec<Value> = org
        .same_as
        .iter()
        .filter_map(|link| node::non_blank(Some(link.as_str())))
        .map(|link| Value::String(url::absolute_url(link, site_url)))
        .collect();
    if !same_as.is_empty() {
        node.insert("sameAs".into(), Value::Array(same_as));
    }

    if org.has_contact() {
        let mut contact = node::typed("ContactPoint");
        contact.insert(
            "contactType".into(),
            Value::String(
                node::non_blank(org.contact_type.as_deref())
                    .unwrap_or(DEFAULT_CONTACT_TYPE)
                    .into(),
            ),
        );
        node::set_text(&mut contact, "email", org.email.as_deref());
        node::set_text(&mut contact, "telephone", org.telephone.as_deref());
        node::set_text(&mut contact, "areaServed", org.area_served.as_deref());
        contact.insert("availableLanguage".into(), in_language.clone());
        node.insert("contactPoint".into(), Value::Object(contact));
    }

    let address = AddressParts {
        street_address: org.street_address.as_deref(),
        address_locality: org.address_locality.as_deref(),
        address_region: org.address_region.as_deref(),
        postal_code: org.postal_code.as_deref(),
        address_country: org.address_country.as_deref(),
    }
    .to_node();
    if let Some(address) = &address {
        node.insert("address".into(), address.clone());
    }

    let geo = org.geo().map(node::geo_coordinates);
    if address.is_some() || geo.is_some() {
        let mut place = node::typed("Place");
        if let Some(address) = address {
            place.insert("address".into(), address);
        }
        if let Some(geo) = geo {
            place.insert("geo".into(), geo);
        }
        node.insert("location".into(), Value::Object(place));
    }

    Value::Object(node)
}

fn website(settings: &SiteSettings, site_url: &str, in_language: &Value) -> Value {
    let mut node = node::identified("WebSite", &website_id(site_url));
    node.insert("url".into(), Value::String(site_url.into()));
    node.insert("name".into(), Value::String(settings.site_name.trim().into()));
    node::set_text(&mut node, "description", settings.site_description.as_deref());
    node.insert("inLanguage".into(), in_language.clone());
    node.insert("publisher".into(), node::reference(&organization_id(site_url)));

    if let Some(template) = node::non_blank(settings.search_url_template.as_deref()) {
        let mut target = node::typed("EntryPoint");
        target.insert(
            "urlTemplate".into(),
            Value::String(url::absolute_url(template, site_url)),
        );
        let mut action = node::typed("SearchAction");
        action.insert("target".into(), Value::Object(target));
        action.insert("query-input".into(), Value::String(SEARCH_QUERY_INPUT.into()));
        node.insert("potentialAction".into(), Value::Object(action));
    }

    Value::Object(node)
}
