//! Reading settings, page records, and list sources from disk.

use std::path::Path;

use anyhow::{Context, bail};
use chrono::Utc;
use herald_core::{ListPageSource, PageCategory, PageEntity, SiteSettings};
use herald_publish::GenerationInput;
use serde::de::DeserializeOwned;

use crate::cli::root_commands::GenerateArgs;

/// Parse a JSON file into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Site settings from a `.toml` file, or JSON otherwise.
pub fn load_settings(path: &Path) -> anyhow::Result<SiteSettings> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("toml") {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        return toml::from_str(&raw)
            .with_context(|| format!("invalid settings TOML in {}", path.display()));
    }
    read_json(path).context("failed to load site settings")
}

/// Assemble the generation input for `args.category`.
///
/// Listing pages without a `--page` file get a bare listing record dated
/// by the source's last update.
pub fn generation_input(args: &GenerateArgs) -> anyhow::Result<GenerationInput> {
    let category = args.category;
    if category == PageCategory::Static {
        let Some(path) = &args.page else {
            bail!("static pages need --page <file>");
        };
        if args.items.is_some() {
            tracing::warn!("--items is ignored for static pages");
        }
        return Ok(GenerationInput::Page(read_json(path)?));
    }

    let input = match category {
        PageCategory::Home => {
            let source = read_source(args.items.as_deref())?;
            GenerationInput::Home {
                page: listing_page(args.page.as_deref(), &source)?,
                source,
            }
        }
        PageCategory::Trending => {
            let source = read_source(args.items.as_deref())?;
            GenerationInput::Trending {
                page: listing_page(args.page.as_deref(), &source)?,
                source,
            }
        }
        PageCategory::Clients | PageCategory::Categories | PageCategory::Static => {
            let source = read_source(args.items.as_deref())?;
            GenerationInput::Entities {
                category,
                page: listing_page(args.page.as_deref(), &source)?,
                source,
            }
        }
    };
    Ok(input)
}

fn read_source<T: DeserializeOwned>(path: Option<&Path>) -> anyhow::Result<ListPageSource<T>> {
    path.map_or_else(|| Ok(ListPageSource::default()), read_json)
}

fn listing_page<T>(path: Option<&Path>, source: &ListPageSource<T>) -> anyhow::Result<PageEntity> {
    match path {
        Some(path) => read_json(path),
        None => Ok(PageEntity::listing(
            "",
            source.last_updated.unwrap_or_else(Utc::now),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args(category: PageCategory) -> GenerateArgs {
        GenerateArgs {
            category,
            page: None,
            items: None,
        }
    }

    #[test]
    fn settings_load_from_json_or_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json = write(
            dir.path(),
            "settings.json",
            r#"{"siteUrl": "https://modonty.com", "siteName": "Modonty"}"#,
        );
        let toml = write(
            dir.path(),
            "settings.toml",
            "siteUrl = \"https://modonty.com\"\nsiteName = \"Modonty\"\nsitePages = [\"about\"]\n",
        );

        assert_eq!(load_settings(&json).unwrap().site_name, "Modonty");
        let settings = load_settings(&toml).unwrap();
        assert_eq!(settings.site_url, "https://modonty.com");
        assert_eq!(settings.site_pages, vec!["about".to_string()]);
    }

    #[test]
    fn static_page_requires_a_page_file() {
        let err = generation_input(&args(PageCategory::Static)).unwrap_err();
        assert!(err.to_string().contains("--page"));
    }

    #[test]
    fn listing_without_files_is_an_empty_listing() {
        let input = generation_input(&args(PageCategory::Clients)).unwrap();
        let GenerationInput::Entities { category, page, source } = input else {
            panic!("expected an entity listing");
        };
        assert_eq!(category, PageCategory::Clients);
        assert!(page.slug.is_empty());
        assert_eq!(source.total_count, 0);
    }

    #[test]
    fn listing_page_is_dated_by_its_source() {
        let dir = tempfile::tempdir().unwrap();
        let items = write(
            dir.path(),
            "trending.json",
            r#"{"items": [{"title": "Hello", "slug": "hello"}], "totalCount": 40, "lastUpdated": "2026-03-01T09:30:00Z"}"#,
        );
        let input = generation_input(&GenerateArgs {
            items: Some(items),
            ..args(PageCategory::Trending)
        })
        .unwrap();

        let GenerationInput::Trending { page, source } = input else {
            panic!("expected the trending listing");
        };
        assert_eq!(source.items.len(), 1);
        assert_eq!(source.total_count, 40);
        assert_eq!(page.updated_at.to_rfc3339(), "2026-03-01T09:30:00+00:00");
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = write(dir.path(), "about.json", "{");
        let err = generation_input(&GenerateArgs {
            page: Some(page),
            ..args(PageCategory::Static)
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("about.json"));
    }
}
