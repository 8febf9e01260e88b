//! Absolute-URL normalization shared by every builder.

use crate::error::BuildError;

const HTTPS: &str = "https://";
const HTTP: &str = "http://";

fn strip_scheme_ci<'a>(value: &'a str, scheme: &str) -> Option<&'a str> {
    value
        .get(..scheme.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
        .map(|_| &value[scheme.len()..])
}

/// Whether `value` starts with `http://` or `https://` (any case).
#[must_use]
pub fn is_absolute(value: &str) -> bool {
    strip_scheme_ci(value, HTTPS).is_some() || strip_scheme_ci(value, HTTP).is_some()
}

/// Normalize the configured site URL: trimmed, `https://`, no trailing slash.
///
/// # Errors
///
/// Returns [`BuildError::MissingSetting`] when the site URL is blank and
/// [`BuildError::InvalidInput`] when it is a path rather than a host.
pub fn normalize_site_url(raw: &str) -> Result<String, BuildError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BuildError::MissingSetting("siteUrl"));
    }
    if raw.starts_with('/') {
        return Err(BuildError::invalid("siteUrl", "must include a host"));
    }
    let url = upgrade(raw);
    let url = url.trim_end_matches('/');
    if url.len() <= HTTPS.len() {
        return Err(BuildError::invalid("siteUrl", "must include a host"));
    }
    Ok(url.to_string())
}

fn upgrade(value: &str) -> String {
    strip_scheme_ci(value, HTTPS)
        .or_else(|| strip_scheme_ci(value, HTTP))
        .map_or_else(|| format!("{HTTPS}{value}"), |rest| format!("{HTTPS}{rest}"))
}

/// Make `value` absolute against `site_url`.
///
/// - `http(s)://...` is upgraded to `https://...`
/// - `/path` is prefixed with the site URL
/// - anything else is prefixed with `https://`
#[must_use]
pub fn absolute_url(value: &str, site_url: &str) -> String {
    let value = value.trim();
    if value.starts_with('/') {
        format!("{}{value}", site_url.trim_end_matches('/'))
    } else {
        upgrade(value)
    }
}

/// Canonical URL for a page.
///
/// An absolute value is upgraded to `https://`; a relative value (with or
/// without leading slash) is resolved against the site URL; no value derives
/// `{site_url}/{slug}` (or the site URL itself for an empty slug).
#[must_use]
pub fn canonical_url(resolved: Option<&str>, site_url: &str, slug: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    match resolved.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) if is_absolute(value) => upgrade(value),
        Some(value) => format!("{site_url}/{}", value.trim_start_matches('/')),
        None => join(site_url, slug),
    }
}

/// `{base}/{segment}` with exactly one slash; the base itself for an empty segment.
#[must_use]
pub fn join(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_matches('/');
    if segment.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{segment}")
    }
}

/// The path component (with query) of an absolute URL; `""` for a bare host.
#[must_use]
pub fn path_of(url: &str) -> &str {
    let rest = url.find("://").map_or(url, |idx| &url[idx + 3..]);
    rest.find('/').map_or("", |idx| &rest[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://cdn.example.com/a.png", "https://cdn.example.com/a.png")]
    #[case("http://cdn.example.com/a.png", "https://cdn.example.com/a.png")]
    #[case("HTTP://cdn.example.com/a.png", "https://cdn.example.com/a.png")]
    #[case("/uploads/a.png", "https://modonty.com/uploads/a.png")]
    #[case("cdn.example.com/a.png", "https://cdn.example.com/a.png")]
    fn absolutizes(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(absolute_url(value, "https://modonty.com"), expected);
    }

    #[rstest]
    #[case(None, "about", "https://modonty.com/about")]
    #[case(None, "", "https://modonty.com")]
    #[case(Some("  "), "about", "https://modonty.com/about")]
    #[case(Some("/about-us"), "about", "https://modonty.com/about-us")]
    #[case(Some("about-us"), "about", "https://modonty.com/about-us")]
    #[case(Some("http://modonty.com/x"), "about", "https://modonty.com/x")]
    fn canonical(#[case] resolved: Option<&str>, #[case] slug: &str, #[case] expected: &str) {
        assert_eq!(canonical_url(resolved, "https://modonty.com/", slug), expected);
    }

    #[test]
    fn site_url_normalization() {
        assert_eq!(normalize_site_url(" http://modonty.com/ ").unwrap(), "https://modonty.com");
        assert_eq!(normalize_site_url("modonty.com").unwrap(), "https://modonty.com");
        assert_eq!(normalize_site_url(""), Err(BuildError::MissingSetting("siteUrl")));
        assert!(normalize_site_url("/relative").is_err());
        assert!(normalize_site_url("https://").is_err());
    }

    #[test]
    fn extracts_path() {
        assert_eq!(path_of("https://modonty.com/about?x=1"), "/about?x=1");
        assert_eq!(path_of("https://modonty.com"), "");
    }
}
