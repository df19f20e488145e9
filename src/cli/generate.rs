//! CLI command for workbook generation

use clap::Args;
use std::path::PathBuf;

use super::resolve_config;
use crate::config::paths::ModelPaths;
use crate::error::FinModelResult;
use crate::export::WorkbookWriter;
use crate::services::ModelService;

/// Arguments for `finmodel generate`
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Configuration file (JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output workbook path
    #[arg(short, long, env = "FINMODEL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of projection years (overrides the configuration)
    #[arg(short = 'n', long)]
    pub years: Option<usize>,

    /// Initial growth rate between 0 and 1 (overrides the configuration)
    #[arg(short, long)]
    pub growth_rate: Option<f64>,
}

/// Handle the generate command
pub fn handle_generate_command(paths: &ModelPaths, args: GenerateArgs) -> FinModelResult<()> {
    let mut config = resolve_config(paths, args.config.as_deref())?;
    if let Some(years) = args.years {
        config.num_projection_years = years;
    }
    if let Some(rate) = args.growth_rate {
        config.growth_rate = rate;
    }

    let model = ModelService::new(&config).build()?;
    let growth = config.growth_rate()?;
    let output = args.output.unwrap_or_else(|| paths.output_file());

    let summary = WorkbookWriter::new(&model, growth).write(&output)?;

    println!("Financial model written to: {}", output.display());
    println!(
        "  Years: {} historical, {} projected",
        model.years.historical_len(),
        model.years.projection().len()
    );
    println!(
        "  Cells: {} historical values, {} projection formulas",
        summary.literal_cells, summary.formula_cells
    );
    println!("  Growth rate: {} (edit on the Control Panel sheet)", growth);

    Ok(())
}
