use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finmodel_cli::cli::{
    handle_config_command, handle_generate_command, handle_init_command, handle_preview_command,
    GenerateArgs, PreviewArgs,
};
use finmodel_cli::config::paths::ModelPaths;

#[derive(Parser)]
#[command(
    name = "finmodel",
    version,
    about = "Three-statement financial model generator",
    long_about = "finmodel writes an income statement, balance sheet and cash-flow \
                  statement to an xlsx workbook. Historical years are literal values; \
                  projection years are formulas driven by a single growth-rate input \
                  on the Control Panel sheet."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the model workbook
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Print the statements with evaluated projections
    Preview(PreviewArgs),

    /// Write the default configuration file
    Init {
        /// Destination (defaults to finmodel.json in the base directory)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show paths and the effective configuration
    Config {
        /// Configuration file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "finmodel_cli=debug" } else { "finmodel_cli=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ModelPaths::new()?;

    match cli.command {
        Some(Commands::Generate(args)) => handle_generate_command(&paths, args)?,
        Some(Commands::Preview(args)) => handle_preview_command(&paths, args)?,
        Some(Commands::Init { path, force }) => handle_init_command(&paths, path, force)?,
        Some(Commands::Config { config }) => handle_config_command(&paths, config.as_deref())?,
        None => {
            let args = GenerateArgs {
                output: std::env::var_os("FINMODEL_OUTPUT").map(PathBuf::from),
                ..GenerateArgs::default()
            };
            handle_generate_command(&paths, args)?
        }
    }

    Ok(())
}
