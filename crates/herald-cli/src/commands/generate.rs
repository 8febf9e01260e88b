use anyhow::anyhow;
use herald_config::HeraldConfig;

use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::{context, input, output};

/// Handle `herald preview`.
pub async fn handle_preview(
    args: &GenerateArgs,
    config: &HeraldConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let publisher = context::publisher(config, flags)?;
    let input = input::generation_input(args)?;
    let response = publisher.preview(&input).await;

    if flags.format == OutputFormat::Text {
        let generated = response.into_result().map_err(|e| anyhow!(e))?;
        return output::output_report(&generated.target.to_string(), &generated.report, flags.format);
    }
    output::output(&response, flags.format)
}

/// Handle `herald generate`.
pub async fn handle_generate(
    args: &GenerateArgs,
    config: &HeraldConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let publisher = context::publisher(config, flags)?;
    let input = input::generation_input(args)?;
    let response = publisher.persist(&input).await;

    if flags.format == OutputFormat::Text {
        let record = response.into_result().map_err(|e| anyhow!(e))?;
        return output::output_report(
            &args.category.to_string(),
            &record.json_ld_validation_report,
            flags.format,
        );
    }
    output::output(&response, flags.format)?;
    if response.success {
        Ok(())
    } else {
        Err(anyhow!("generation failed"))
    }
}
