//! Configuration module for finmodel
//!
//! This module provides:
//! - Path resolution for the configuration file and the generated workbook
//! - Model inputs (historical series, projection horizon, growth rate)

pub mod model;
pub mod paths;

pub use model::{ConfigFormat, ModelConfig};
pub use paths::ModelPaths;
