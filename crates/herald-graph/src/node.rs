//! Small helpers for assembling schema.org node objects.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

pub(crate) type Node = Map<String, Value>;

/// A typed node without an `@id`.
pub(crate) fn typed(schema_type: &str) -> Node {
    let mut node = Map::new();
    node.insert("@type".into(), Value::String(schema_type.into()));
    node
}

/// A typed node addressable by `@id`.
pub(crate) fn identified(schema_type: &str, id: &str) -> Node {
    let mut node = typed(schema_type);
    node.insert("@id".into(), Value::String(id.into()));
    node
}

/// `{"@id": id}`
pub(crate) fn reference(id: &str) -> Value {
    json!({ "@id": id })
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Insert a trimmed string property if it carries any text.
pub(crate) fn set_text(node: &mut Node, key: &str, value: Option<&str>) {
    if let Some(text) = non_blank(value) {
        node.insert(key.into(), Value::String(text.into()));
    }
}

pub(crate) fn iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Single string for one language, array for several.
pub(crate) fn in_language(languages: &[String]) -> Value {
    match languages {
        [single] => Value::String(single.clone()),
        many => Value::Array(many.iter().cloned().map(Value::String).collect()),
    }
}

pub(crate) fn image_object(url: &str, caption: Option<&str>) -> Node {
    let mut image = typed("ImageObject");
    image.insert("url".into(), Value::String(url.into()));
    set_text(&mut image, "caption", caption);
    image
}

/// Borrowed postal address fields, shared by the site organization and list entities.
pub(crate) struct AddressParts<'a> {
    pub street_address: Option<&'a str>,
    pub address_locality: Option<&'a str>,
    pub address_region: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub address_country: Option<&'a str>,
}

impl AddressParts<'_> {
    /// A `PostalAddress` node, or `None` when every field is blank.
    pub(crate) fn to_node(&self) -> Option<Value> {
        let mut address = typed("PostalAddress");
        set_text(&mut address, "streetAddress", self.street_address);
        set_text(&mut address, "addressLocality", self.address_locality);
        set_text(&mut address, "addressRegion", self.address_region);
        set_text(&mut address, "postalCode", self.postal_code);
        set_text(&mut address, "addressCountry", self.address_country);
        (address.len() > 1).then_some(Value::Object(address))
    }
}

pub(crate) fn geo_coordinates((latitude, longitude): (f64, f64)) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": latitude,
        "longitude": longitude,
    })
}

pub(crate) fn list_item(position: usize, item: Value) -> Value {
    json!({
        "@type": "ListItem",
        "position": position,
        "item": item,
    })
}

/// Two-entry `BreadcrumbList`: home, then the current page.
pub(crate) fn breadcrumb(id: &str, home: (&str, &str), page: (&str, &str)) -> Value {
    let mut list = identified("BreadcrumbList", id);
    let entries = [home, page]
        .into_iter()
        .enumerate()
        .map(|(index, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();
    list.insert("itemListElement".into(), Value::Array(entries));
    Value::Object(list)
}
