use herald_config::HeraldConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &HeraldConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Preview(args) => commands::generate::handle_preview(&args, config, flags).await,
        Commands::Generate(args) => commands::generate::handle_generate(&args, config, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, config, flags).await,
        Commands::Revalidate(args) => commands::revalidate::handle(&args, config, flags).await,
        Commands::Ontology { action } => commands::ontology::handle(&action, config, flags).await,
    }
}
