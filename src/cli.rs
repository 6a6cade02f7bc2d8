use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// bomcfg - generate service configs pinned by a bill of materials
#[derive(Parser, Debug)]
#[command(name = "bomcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to bomcfg.toml (defaults to ./bomcfg.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate config files for components
    Generate {
        /// Components to generate (see `bomcfg components`)
        #[arg(required_unless_present = "all")]
        components: Vec<String>,

        /// Generate every built-in component
        #[arg(long, conflicts_with = "components")]
        all: bool,

        /// Deployment to generate for (defaults to the current deployment)
        #[arg(short, long)]
        deployment: Option<String>,

        /// Directory to write files to (defaults to [output].dir)
        #[arg(short, long, conflicts_with = "stdout")]
        out_dir: Option<PathBuf>,

        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// List built-in components
    Components,

    /// Show the service versions pinned by a BOM
    Bom {
        /// Deployment version, e.g. 1.10.0
        version: String,
    },
}
