//! The meta-tag bag for one page.

use herald_core::locale::{self, X_DEFAULT};
use herald_core::resolve::{self, FALLBACK_ROBOTS, FALLBACK_SITEMAP_PRIORITY, ResolvedPage};
use herald_core::text::truncate;
use herald_core::{
    BuildError, ChangeFrequency, MetaLimits, MetaTagBag, OgImage, OpenGraph, PageCategory,
    PageEntity, SiteSettings, SitemapHints, TwitterCard, url,
};

use crate::hreflang;

pub const CHARSET: &str = "UTF-8";
pub const VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Dimensions and type advertised for every social image.
pub const FALLBACK_IMAGE_WIDTH: u32 = 1200;
pub const FALLBACK_IMAGE_HEIGHT: u32 = 630;
pub const FALLBACK_IMAGE_TYPE: &str = "image/jpeg";

const FALLBACK_OG_TYPE: &str = "website";
const FALLBACK_TWITTER_CARD: &str = "summary_large_image";
const FALLBACK_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Monthly;

/// Builds [`MetaTagBag`]s against one tenant's settings.
#[derive(Debug, Clone, Copy)]
pub struct MetaTagBuilder<'a> {
    settings: &'a SiteSettings,
    limits: &'a MetaLimits,
}

impl<'a> MetaTagBuilder<'a> {
    #[must_use]
    pub const fn new(settings: &'a SiteSettings, limits: &'a MetaLimits) -> Self {
        Self { settings, limits }
    }

    /// Resolve `page` and build its meta-tag bag.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when required site settings are missing or the
    /// page cannot be resolved.
    pub fn build(&self, page: &PageEntity, category: PageCategory) -> Result<MetaTagBag, BuildError> {
        let resolved = ResolvedPage::resolve(page, self.settings, category)?;
        Ok(self.build_resolved(page, &resolved))
    }

    /// Build from an already resolved page. The JSON-LD builder consumes the
    /// same [`ResolvedPage`], so shared fields cannot diverge.
    #[must_use]
    pub fn build_resolved(&self, page: &PageEntity, resolved: &ResolvedPage) -> MetaTagBag {
        let settings = self.settings;
        let title = truncate(
            &resolved.title,
            self.limits.title_max_length,
            &self.limits.truncation_suffix,
        );
        let description = truncate(
            &resolved.description,
            self.limits.description_max_length,
            &self.limits.truncation_suffix,
        );

        let robots = resolve::resolve(
            "robots",
            page.robots.as_deref(),
            settings.default_robots.as_deref(),
            FALLBACK_ROBOTS,
        );
        let googlebot = resolve::resolve(
            "googlebot",
            page.googlebot.as_deref(),
            settings.default_googlebot.as_deref(),
            FALLBACK_ROBOTS,
        );

        let hreflang = hreflang::build(resolved, page, settings);
        let open_graph = self.open_graph(page, resolved, &title, &description, &hreflang);
        let twitter = self.twitter(page, resolved, &open_graph);

        tracing::debug!(
            slug = %resolved.slug,
            category = %resolved.category,
            hreflang = hreflang.len(),
            "built meta tags"
        );

        MetaTagBag {
            charset: CHARSET.to_string(),
            viewport: VIEWPORT.to_string(),
            title,
            description,
            robots: robots.to_string(),
            googlebot: googlebot.to_string(),
            canonical: resolved.canonical_url.clone(),
            author: resolve::resolve_opt(
                "author",
                page.author.as_deref(),
                settings.default_author.as_deref(),
            )
            .map(str::to_string),
            keywords: page
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
            open_graph,
            twitter,
            hreflang,
            sitemap: self.sitemap(page),
        }
    }

    fn open_graph(
        &self,
        page: &PageEntity,
        resolved: &ResolvedPage,
        title: &str,
        description: &str,
        hreflang: &[herald_core::HreflangLink],
    ) -> OpenGraph {
        let primary = resolved.language_tag();
        let locale_alternate = hreflang
            .iter()
            .map(|link| link.hreflang.as_str())
            .filter(|code| *code != X_DEFAULT && *code != primary)
            .map(locale::to_og_locale)
            .collect();

        let images = resolved
            .image
            .iter()
            .map(|image| OgImage {
                url: image.url.clone(),
                secure_url: image.url.clone(),
                width: FALLBACK_IMAGE_WIDTH,
                height: FALLBACK_IMAGE_HEIGHT,
                mime_type: FALLBACK_IMAGE_TYPE.to_string(),
                alt: image.alt.clone(),
            })
            .collect();

        OpenGraph {
            title: resolve::resolve("ogTitle", page.og_title.as_deref(), None, title).to_string(),
            description: resolve::resolve(
                "ogDescription",
                page.og_description.as_deref(),
                None,
                description,
            )
            .to_string(),
            og_type: resolve::resolve("ogType", page.og_type.as_deref(), None, FALLBACK_OG_TYPE)
                .to_string(),
            url: resolved.canonical_url.clone(),
            site_name: resolved.site_name.clone(),
            locale: locale::to_og_locale(&resolved.locale),
            locale_alternate,
            images,
            updated_time: Some(resolved.updated_at),
        }
    }

    fn twitter(&self, page: &PageEntity, resolved: &ResolvedPage, og: &OpenGraph) -> TwitterCard {
        let settings = self.settings;
        let image = resolve::resolve_opt("twitterImage", page.twitter_image.as_deref(), None)
            .map(|image| url::absolute_url(image, &resolved.site_url))
            .or_else(|| og.images.first().map(|image| image.url.clone()));
        let image_alt = image.as_ref().map(|_| {
            resolve::resolve(
                "twitterImageAlt",
                page.twitter_image_alt.as_deref(),
                resolved.image.as_ref().map(|image| image.alt.as_str()),
                "",
            )
            .to_string()
        });

        TwitterCard {
            card: resolve::resolve(
                "twitterCard",
                page.twitter_card.as_deref(),
                settings.twitter_card.as_deref(),
                FALLBACK_TWITTER_CARD,
            )
            .to_string(),
            site: resolve::resolve_opt("twitterSite", None, settings.twitter_site.as_deref())
                .map(str::to_string),
            creator: resolve::resolve_opt(
                "twitterCreator",
                None,
                settings.twitter_creator.as_deref(),
            )
            .map(str::to_string),
            title: resolve::resolve("twitterTitle", page.twitter_title.as_deref(), None, &og.title)
                .to_string(),
            description: resolve::resolve(
                "twitterDescription",
                page.twitter_description.as_deref(),
                None,
                &og.description,
            )
            .to_string(),
            image,
            image_alt,
        }
    }

    fn sitemap(&self, page: &PageEntity) -> SitemapHints {
        let settings = self.settings;
        let priority = resolve::resolve_value(
            "sitemapPriority",
            page.sitemap_priority,
            settings.default_sitemap_priority,
            FALLBACK_SITEMAP_PRIORITY,
            |p| p.is_finite() && (0.0..=1.0).contains(p),
        );
        let change_frequency = resolve::resolve_value(
            "sitemapFrequency",
            page.sitemap_frequency.as_deref().and_then(ChangeFrequency::parse),
            settings
                .default_sitemap_frequency
                .as_deref()
                .and_then(ChangeFrequency::parse),
            FALLBACK_CHANGE_FREQUENCY,
            |_| true,
        );
        SitemapHints {
            priority,
            change_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn settings() -> SiteSettings {
        SiteSettings {
            site_url: "https://modonty.com".into(),
            site_name: "Modonty".into(),
            site_description: Some("Arabic content platform".into()),
            default_locale: Some("ar_SA".into()),
            default_og_image: Some("/og.png".into()),
            twitter_site: Some("@modonty".into()),
            ..SiteSettings::default()
        }
    }

    fn about() -> PageEntity {
        PageEntity {
            slug: "about".into(),
            title: "About Modonty".into(),
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            ..PageEntity::default()
        }
    }

    fn build(page: &PageEntity, settings: &SiteSettings) -> MetaTagBag {
        let limits = MetaLimits::default();
        MetaTagBuilder::new(settings, &limits)
            .build(page, PageCategory::Static)
            .unwrap()
    }

    #[test]
    fn fills_head_defaults() {
        let bag = build(&about(), &settings());
        assert_eq!(bag.charset, "UTF-8");
        assert_eq!(bag.title, "About Modonty");
        assert_eq!(bag.description, "Arabic content platform");
        assert_eq!(bag.canonical, "https://modonty.com/about");
        assert_eq!(bag.robots, "index, follow");
        assert_eq!(bag.googlebot, "index, follow");
        assert!(bag.author.is_none());
    }

    #[test]
    fn long_title_is_truncated_to_exact_limit() {
        let page = PageEntity {
            seo_title: Some("x".repeat(90)),
            ..about()
        };
        let bag = build(&page, &settings());
        assert_eq!(bag.title.chars().count(), 60);
        assert!(bag.title.ends_with("..."));
        assert_eq!(bag.open_graph.title, bag.title);
    }

    #[test]
    fn open_graph_and_twitter_cascade() {
        let page = PageEntity {
            og_title: Some("Who we are".into()),
            hero_image: Some("http://cdn.modonty.com/hero.jpg".into()),
            hero_image_alt: Some("Team photo".into()),
            twitter_description: Some("Meet the team".into()),
            ..about()
        };
        let bag = build(&page, &settings());

        assert_eq!(bag.open_graph.title, "Who we are");
        assert_eq!(bag.open_graph.locale, "ar_SA");
        assert_eq!(bag.open_graph.og_type, "website");
        let image = &bag.open_graph.images[0];
        assert_eq!(image.url, "https://cdn.modonty.com/hero.jpg");
        assert_eq!((image.width, image.height), (1200, 630));
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.alt, "Team photo");

        assert_eq!(bag.twitter.card, "summary_large_image");
        assert_eq!(bag.twitter.site.as_deref(), Some("@modonty"));
        assert_eq!(bag.twitter.title, "Who we are");
        assert_eq!(bag.twitter.description, "Meet the team");
        assert_eq!(bag.twitter.image.as_deref(), Some("https://cdn.modonty.com/hero.jpg"));
        assert_eq!(bag.twitter.image_alt.as_deref(), Some("Team photo"));
    }

    #[test]
    fn image_alt_is_empty_when_nothing_configured() {
        let bag = build(&about(), &settings());
        assert_eq!(bag.open_graph.images[0].url, "https://modonty.com/og.png");
        assert_eq!(bag.open_graph.images[0].alt, "");
    }

    #[test]
    fn no_image_anywhere_means_no_og_image() {
        let mut settings = settings();
        settings.default_og_image = None;
        let bag = build(&about(), &settings);
        assert!(bag.open_graph.images.is_empty());
        assert!(bag.twitter.image.is_none());
        assert!(bag.twitter.image_alt.is_none());
    }

    #[test]
    fn robots_cascade_uses_settings_default() {
        let mut settings = settings();
        settings.default_robots = Some(" noindex, follow ".into());
        let bag = build(&about(), &settings);
        assert_eq!(bag.robots, "noindex, follow");
        assert_eq!(bag.googlebot, "index, follow");

        let page = PageEntity {
            robots: Some("noindex, nofollow".into()),
            ..about()
        };
        assert_eq!(build(&page, &settings).robots, "noindex, nofollow");
    }

    #[test]
    fn sitemap_hints_fall_through_invalid_values() {
        let mut settings = settings();
        let bag = build(&about(), &settings);
        assert!((bag.sitemap.priority - 0.5).abs() < f64::EPSILON);
        assert_eq!(bag.sitemap.change_frequency, ChangeFrequency::Monthly);

        settings.default_sitemap_priority = Some(0.8);
        settings.default_sitemap_frequency = Some("weekly".into());
        let page = PageEntity {
            sitemap_priority: Some(1.7),
            sitemap_frequency: Some("sometimes".into()),
            ..about()
        };
        let bag = build(&page, &settings);
        assert!((bag.sitemap.priority - 0.8).abs() < f64::EPSILON);
        assert_eq!(bag.sitemap.change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn locale_alternates_exclude_primary_and_x_default() {
        let page = PageEntity {
            alternate_locales: Some("en_US".into()),
            ..about()
        };
        let bag = build(&page, &settings());
        assert_eq!(bag.hreflang.len(), 3);
        assert_eq!(bag.x_default_count(), 1);
        assert_eq!(bag.open_graph.locale_alternate, vec!["en_US".to_string()]);
    }

    #[test]
    fn serializes_camel_case_output() {
        let bag = build(&about(), &settings());
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(json["openGraph"]["siteName"], "Modonty");
        assert_eq!(json["openGraph"]["images"][0]["type"], "image/jpeg");
        assert_eq!(json["sitemap"]["changeFrequency"], "monthly");
    }

    #[test]
    fn missing_site_url_is_a_build_error() {
        let mut settings = settings();
        settings.site_url = String::new();
        let limits = MetaLimits::default();
        let result = MetaTagBuilder::new(&settings, &limits).build(&about(), PageCategory::Static);
        assert_eq!(result, Err(BuildError::MissingSetting("siteUrl")));
    }
}
