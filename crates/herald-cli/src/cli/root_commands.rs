use std::path::PathBuf;

use clap::{Args, Subcommand};
use herald_core::PageCategory;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build meta tags and JSON-LD for a page without saving.
    Preview(GenerateArgs),
    /// Build, validate, save, and notify the public site.
    Generate(GenerateArgs),
    /// Run the validation pipeline over a JSON-LD file.
    Validate(ValidateArgs),
    /// Re-validate stored records and write fresh reports back.
    Revalidate(RevalidateArgs),
    /// schema.org vocabulary snapshots.
    Ontology {
        #[command(subcommand)]
        action: OntologyCommands,
    },
}

/// Arguments for `herald preview` and `herald generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Page category: static, home, clients, categories, trending
    #[arg(value_parser = parse_category)]
    pub category: PageCategory,

    /// Page record (JSON). Required for static pages.
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// List source with items and total count (JSON), for listing pages
    #[arg(long)]
    pub items: Option<PathBuf>,
}

/// Arguments for `herald validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// JSON-LD document to validate
    pub graph: PathBuf,

    /// Category whose business rules apply
    #[arg(short, long, value_parser = parse_category, default_value = "static")]
    pub category: PageCategory,
}

/// Arguments for `herald revalidate`.
#[derive(Clone, Debug, Args)]
pub struct RevalidateArgs {
    /// Category of the stored record
    #[arg(value_parser = parse_category, required_unless_present = "all")]
    pub category: Option<PageCategory>,

    /// Slug of a static page
    #[arg(long)]
    pub slug: Option<String>,

    /// Re-validate every stored record
    #[arg(long, conflicts_with_all = ["category", "slug"])]
    pub all: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum OntologyCommands {
    /// Download the vocabulary and print its size.
    Fetch,
    /// Show whether a class exists and its ancestors.
    Class {
        /// Class name, e.g. `LocalBusiness`
        name: String,
    },
}

fn parse_category(value: &str) -> Result<PageCategory, String> {
    value.parse().map_err(|e: herald_core::BuildError| e.to_string())
}
