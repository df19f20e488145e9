//! CLI command for previewing the model in the terminal

use clap::Args;
use std::path::PathBuf;

use super::resolve_config;
use crate::config::paths::ModelPaths;
use crate::display::format_statements;
use crate::error::FinModelResult;
use crate::export::export_statements_csv;
use crate::services::{evaluate_model, ModelService};
use crate::storage::write_bytes_atomic;

/// Arguments for `finmodel preview`
#[derive(Args, Debug, Default)]
pub struct PreviewArgs {
    /// Configuration file (JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also export the evaluated statements to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Handle the preview command
pub fn handle_preview_command(paths: &ModelPaths, args: PreviewArgs) -> FinModelResult<()> {
    let config = resolve_config(paths, args.config.as_deref())?;
    let model = ModelService::new(&config).build()?;
    let growth = config.growth_rate()?;
    let tables = evaluate_model(&model, growth);

    print!("{}", format_statements(&tables, &model.years, growth));

    if let Some(output) = args.csv {
        let mut buffer = Vec::new();
        export_statements_csv(&tables, &model.years, &mut buffer)?;
        write_bytes_atomic(&output, &buffer)?;
        println!();
        println!("Statements exported to: {}", output.display());
    }

    Ok(())
}
