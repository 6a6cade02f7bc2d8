//! bomcfg CLI - version-pinned service configuration generator
//!
//! Usage: bomcfg <COMMAND>
//!
//! Commands:
//!   generate    Generate config files for components
//!   components  List built-in components
//!   bom         Show the service versions pinned by a BOM

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = bomcfg::config::load_or_default(cli.config.as_deref(), Some(&cwd))?;

    let level = bomcfg::logging::level_for(config.output.verbosity, cli.verbose);
    bomcfg::logging::init(level, cli.json);

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Generate {
            components,
            all,
            deployment,
            out_dir,
            stdout,
        } => commands::generate::cmd_generate(
            &config,
            commands::generate::GenerateOptions {
                components,
                all,
                deployment,
                out_dir,
                stdout,
                json: cli.json,
            },
        ),
        Commands::Components => commands::components::cmd_components(cli.json),
        Commands::Bom { version } => commands::bom::cmd_bom(&config, &version, cli.json),
    }
}
