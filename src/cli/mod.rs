//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod generate;
pub mod preview;

pub use config::{handle_config_command, handle_init_command};
pub use generate::{handle_generate_command, GenerateArgs};
pub use preview::{handle_preview_command, PreviewArgs};

use std::path::Path;

use tracing::debug;

use crate::config::paths::ModelPaths;
use crate::config::ModelConfig;
use crate::error::FinModelResult;

/// Load an explicit configuration file, or fall back to the default
/// location and then to the built-in inputs
pub fn resolve_config(paths: &ModelPaths, explicit: Option<&Path>) -> FinModelResult<ModelConfig> {
    match explicit {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            ModelConfig::load(path)
        }
        None => {
            let path = paths.config_file();
            debug!(path = %path.display(), exists = path.exists(), "Loading default configuration");
            ModelConfig::load_or_default(&path)
        }
    }
}
