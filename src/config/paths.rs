//! Path management for finmodel
//!
//! ## Path Resolution Order
//!
//! 1. `FINMODEL_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::FinModelError;

/// Default workbook file name
pub const OUTPUT_FILE_NAME: &str = "financial_model.xlsx";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "finmodel.json";

/// Manages the paths used by finmodel
#[derive(Debug, Clone)]
pub struct ModelPaths {
    /// Directory holding the configuration and the generated workbook
    base_dir: PathBuf,
}

impl ModelPaths {
    /// Create a new ModelPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if `FINMODEL_DIR` is unset and the current directory
    /// cannot be determined.
    pub fn new() -> Result<Self, FinModelError> {
        let base_dir = if let Ok(custom) = std::env::var("FINMODEL_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                FinModelError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create ModelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the default workbook path
    pub fn output_file(&self) -> PathBuf {
        self.base_dir.join(OUTPUT_FILE_NAME)
    }

    /// Get the default configuration path
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ModelPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.output_file(),
            temp_dir.path().join("financial_model.xlsx")
        );
        assert_eq!(paths.config_file(), temp_dir.path().join("finmodel.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("FINMODEL_DIR", custom_path);

        let paths = ModelPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("FINMODEL_DIR");
    }
}
