use anyhow::bail;
use herald_config::HeraldConfig;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::{context, input, output};

/// Handle `herald validate`.
pub async fn handle(args: &ValidateArgs, config: &HeraldConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let graph: Value = input::read_json(&args.graph)?;
    let pipeline = context::pipeline(config)?;
    let report = pipeline.validate(&graph, args.category).await;

    output::output_report(&args.graph.display().to_string(), &report, flags.format)?;
    if !report.overall_valid {
        bail!("graph failed validation with {} errors", report.error_count());
    }
    Ok(())
}
