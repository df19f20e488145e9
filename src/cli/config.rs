//! CLI commands for configuration files

use std::path::{Path, PathBuf};

use super::resolve_config;
use crate::config::paths::ModelPaths;
use crate::config::ModelConfig;
use crate::error::{FinModelError, FinModelResult};

/// Handle `finmodel init`: write the default configuration
pub fn handle_init_command(
    paths: &ModelPaths,
    path: Option<PathBuf>,
    force: bool,
) -> FinModelResult<()> {
    let path = path.unwrap_or_else(|| paths.config_file());

    if path.exists() && !force {
        return Err(FinModelError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    ModelConfig::default().save(&path)?;
    println!("Default configuration written to: {}", path.display());
    println!("Edit it, then run 'finmodel generate -c {}'.", path.display());

    Ok(())
}

/// Handle `finmodel config`: show paths and the effective configuration
pub fn handle_config_command(paths: &ModelPaths, config: Option<&Path>) -> FinModelResult<()> {
    let effective = resolve_config(paths, config)?;

    println!("finmodel Configuration");
    println!("======================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Config file:     {}", paths.config_file().display());
    println!("Output workbook: {}", paths.output_file().display());
    println!();
    println!("Effective configuration:");
    println!("{}", serde_json::to_string_pretty(&effective)?);

    Ok(())
}
