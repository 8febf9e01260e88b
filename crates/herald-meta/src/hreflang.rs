//! Hreflang alternates.
//!
//! Two input modes:
//! - an explicit list of `{locale, url}` alternates on the page, or
//! - a comma-separated locale string (page, then settings) combined with the
//!   canonical URL's path as `{site_url}/{locale}{path}`.
//!
//! Either way the primary locale comes first, codes are unique (first
//! occurrence wins), and exactly one `x-default` entry is present.

use herald_core::locale::{self, X_DEFAULT};
use herald_core::resolve::{self, ResolvedPage};
use herald_core::{HreflangLink, PageEntity, SiteSettings, url};

#[derive(Default)]
struct HreflangSet {
    links: Vec<HreflangLink>,
}

impl HreflangSet {
    fn push(&mut self, code: String, href: String) {
        if self
            .links
            .iter()
            .any(|link| link.hreflang.eq_ignore_ascii_case(&code))
        {
            tracing::debug!(code, "duplicate hreflang dropped");
            return;
        }
        self.links.push(HreflangLink {
            hreflang: code,
            href,
        });
    }

    fn finish(mut self, default_href: &str) -> Vec<HreflangLink> {
        self.push(X_DEFAULT.to_string(), default_href.to_string());
        self.links
    }
}

/// Build the hreflang list for a resolved page.
#[must_use]
pub fn build(resolved: &ResolvedPage, page: &PageEntity, settings: &SiteSettings) -> Vec<HreflangLink> {
    let mut set = HreflangSet::default();
    set.push(resolved.language_tag(), resolved.canonical_url.clone());

    if page.alternates.is_empty() {
        let locales = resolve::resolve(
            "alternateLocales",
            page.alternate_locales.as_deref(),
            settings.alternate_locales.as_deref(),
            "",
        );
        let path = url::path_of(&resolved.canonical_url);
        for code in locale::split_list(locales)
            .into_iter()
            .filter_map(locale::to_bcp47)
            .filter(|code| code != X_DEFAULT)
        {
            let href = format!("{}/{code}{path}", resolved.site_url);
            set.push(code, href);
        }
    } else {
        for alternate in &page.alternates {
            let Some(code) = locale::to_bcp47(&alternate.locale) else {
                tracing::debug!(locale = %alternate.locale, "unrecognized alternate locale skipped");
                continue;
            };
            let href = url::absolute_url(&alternate.url, &resolved.site_url);
            set.push(code, href);
        }
    }

    set.finish(&resolved.canonical_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use herald_core::{AlternateLink, PageCategory};
    use pretty_assertions::assert_eq;

    fn settings() -> SiteSettings {
        SiteSettings {
            site_url: "https://modonty.com".into(),
            site_name: "Modonty".into(),
            default_locale: Some("ar_SA".into()),
            ..SiteSettings::default()
        }
    }

    fn about() -> PageEntity {
        PageEntity {
            slug: "about".into(),
            title: "About".into(),
            updated_at: Utc::now(),
            ..PageEntity::default()
        }
    }

    fn links(page: &PageEntity, settings: &SiteSettings) -> Vec<(String, String)> {
        let resolved = ResolvedPage::resolve(page, settings, PageCategory::Static).unwrap();
        build(&resolved, page, settings)
            .into_iter()
            .map(|l| (l.hreflang, l.href))
            .collect()
    }

    fn pair(code: &str, href: &str) -> (String, String) {
        (code.to_string(), href.to_string())
    }

    #[test]
    fn locale_string_mode_combines_canonical_path() {
        let page = PageEntity {
            alternate_locales: Some("en_US".into()),
            ..about()
        };
        assert_eq!(
            links(&page, &settings()),
            vec![
                pair("ar-SA", "https://modonty.com/about"),
                pair("en-US", "https://modonty.com/en-US/about"),
                pair("x-default", "https://modonty.com/about"),
            ]
        );
    }

    #[test]
    fn settings_locale_string_is_the_fallback() {
        let mut settings = settings();
        settings.alternate_locales = Some("en_US, ar_SA, fr".into());
        let codes: Vec<String> = links(&about(), &settings).into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["ar-SA", "en-US", "fr", "x-default"]);
    }

    #[test]
    fn explicit_alternates_win_and_may_supply_x_default() {
        let page = PageEntity {
            alternate_locales: Some("de_DE".into()),
            alternates: vec![
                AlternateLink {
                    locale: "en-us".into(),
                    url: "/en/about".into(),
                },
                AlternateLink {
                    locale: "x-default".into(),
                    url: "https://modonty.com/en/about".into(),
                },
                AlternateLink {
                    locale: "en_US".into(),
                    url: "/duplicate".into(),
                },
            ],
            ..about()
        };
        assert_eq!(
            links(&page, &settings()),
            vec![
                pair("ar-SA", "https://modonty.com/about"),
                pair("en-US", "https://modonty.com/en/about"),
                pair("x-default", "https://modonty.com/en/about"),
            ]
        );
    }

    #[test]
    fn no_alternates_still_yields_primary_and_x_default() {
        assert_eq!(
            links(&about(), &settings()),
            vec![
                pair("ar-SA", "https://modonty.com/about"),
                pair("x-default", "https://modonty.com/about"),
            ]
        );
    }

    #[test]
    fn x_default_in_locale_string_is_not_duplicated() {
        let page = PageEntity {
            alternate_locales: Some("x-default,en".into()),
            ..about()
        };
        let result = links(&page, &settings());
        assert_eq!(result.iter().filter(|(c, _)| c == "x-default").count(), 1);
        assert_eq!(result.len(), 3);
    }
}
