use anyhow::{Context, bail};
use herald_config::HeraldConfig;
use herald_core::PageCategory;
use herald_publish::PublishTarget;
use serde::Serialize;

use crate::cli::root_commands::RevalidateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::{context, output};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Outcome {
    target: String,
    #[serde(flatten)]
    result: herald_publish::GenerationResponse<herald_publish::Revalidation>,
}

/// Handle `herald revalidate`.
pub async fn handle(args: &RevalidateArgs, config: &HeraldConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let publisher = context::publisher(config, flags)?;

    let outcomes = if args.all {
        publisher
            .revalidate_all()
            .await
            .context("failed to list stored records")?
    } else {
        let target = target(args)?;
        let outcome = publisher.revalidate_stored(&target).await;
        vec![(target, outcome)]
    };

    let mut failed = 0;
    let mut rows = Vec::with_capacity(outcomes.len());
    for (target, outcome) in outcomes {
        if !outcome.as_ref().is_ok_and(|r| r.report.overall_valid) {
            failed += 1;
        }
        if flags.format == OutputFormat::Text {
            match &outcome {
                Ok(revalidation) => {
                    println!("{}", output::report_summary(&target.to_string(), &revalidation.report));
                    for issue in &revalidation.meta_issues {
                        println!("  [meta_tags] error: {issue}");
                    }
                }
                Err(e) => println!("{target}: {e}"),
            }
        }
        rows.push(Outcome {
            target: target.to_string(),
            result: outcome.into(),
        });
    }

    if flags.format != OutputFormat::Text {
        output::output(&rows, flags.format)?;
    }
    if failed > 0 {
        bail!("{failed} of {} stored records are invalid", rows.len());
    }
    Ok(())
}

fn target(args: &RevalidateArgs) -> anyhow::Result<PublishTarget> {
    let Some(category) = args.category else {
        bail!("pass a category or --all");
    };
    match (category, args.slug.as_deref()) {
        (PageCategory::Static, Some(slug)) => Ok(PublishTarget::page(slug)),
        (PageCategory::Static, None) => bail!("static pages need --slug"),
        (listing, _) => Ok(PublishTarget::listing(listing)),
    }
}
