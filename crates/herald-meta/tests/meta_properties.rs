//! Cross-cutting properties of the meta-tag bag.

use std::collections::HashSet;

use chrono::Utc;
use herald_core::{AlternateLink, MetaLimits, PageCategory, PageEntity, SiteSettings};
use herald_meta::MetaTagBuilder;
use rstest::rstest;

fn settings(alternates: Option<&str>) -> SiteSettings {
    SiteSettings {
        site_url: "https://modonty.com".into(),
        site_name: "Modonty".into(),
        default_locale: Some("ar_SA".into()),
        alternate_locales: alternates.map(str::to_string),
        ..SiteSettings::default()
    }
}

fn page(alternate_locales: Option<&str>, alternates: Vec<AlternateLink>) -> PageEntity {
    PageEntity {
        slug: "about".into(),
        title: "About".into(),
        alternate_locales: alternate_locales.map(str::to_string),
        alternates,
        updated_at: Utc::now(),
        ..PageEntity::default()
    }
}

fn alt(locale: &str, url: &str) -> AlternateLink {
    AlternateLink {
        locale: locale.into(),
        url: url.into(),
    }
}

#[rstest]
#[case(None, None, vec![])]
#[case(Some("en_US"), None, vec![])]
#[case(Some("ar_SA,ar-sa,AR_SA"), Some("en"), vec![])]
#[case(Some("x-default,en_US,en-US"), None, vec![])]
#[case(None, Some("fr"), vec![alt("en", "/en"), alt("en_US", "/en-us"), alt("EN", "/dup")])]
#[case(None, None, vec![alt("x-default", "/"), alt("x-default", "/again"), alt("ar_SA", "/ar")])]
fn hreflang_codes_are_unique_with_one_x_default(
    #[case] page_locales: Option<&str>,
    #[case] settings_locales: Option<&str>,
    #[case] alternates: Vec<AlternateLink>,
) {
    let settings = settings(settings_locales);
    let limits = MetaLimits::default();
    let bag = MetaTagBuilder::new(&settings, &limits)
        .build(&page(page_locales, alternates), PageCategory::Static)
        .unwrap();

    let codes: Vec<String> = bag.hreflang.iter().map(|l| l.hreflang.to_ascii_lowercase()).collect();
    let unique: HashSet<&String> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len(), "duplicate hreflang in {codes:?}");
    assert_eq!(bag.x_default_count(), 1, "x-default count in {codes:?}");
    assert_eq!(codes[0], "ar-sa", "primary locale must lead");
}

#[test]
fn arabic_primary_with_english_alternate_scenario() {
    let settings = settings(None);
    let limits = MetaLimits::default();
    let bag = MetaTagBuilder::new(&settings, &limits)
        .build(&page(Some("en_US"), Vec::new()), PageCategory::Static)
        .unwrap();

    let codes: Vec<&str> = bag.hreflang.iter().map(|l| l.hreflang.as_str()).collect();
    assert_eq!(codes, vec!["ar-SA", "en-US", "x-default"]);
}

#[rstest]
#[case(61)]
#[case(75)]
#[case(400)]
fn truncated_titles_have_exact_length(#[case] len: usize) {
    let settings = settings(None);
    let limits = MetaLimits::default();
    let mut page = page(None, Vec::new());
    page.title = "t".repeat(len);
    page.description = Some("d".repeat(len * 3));

    let bag = MetaTagBuilder::new(&settings, &limits)
        .build(&page, PageCategory::Static)
        .unwrap();

    assert_eq!(bag.title.chars().count(), limits.title_max_length);
    assert!(bag.title.ends_with(&limits.truncation_suffix));
    assert_eq!(bag.description.chars().count(), limits.description_max_length);
    assert!(bag.description.ends_with(&limits.truncation_suffix));
}
