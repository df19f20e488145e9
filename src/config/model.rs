//! Model inputs for finmodel
//!
//! Historical series, projection horizon and the initial growth rate. Every
//! field defaults to the reference data set, so an empty or partial file is
//! a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FinModelError, FinModelResult};
use crate::models::{GrowthRate, MAX_COLUMNS};
use crate::storage::file_io;

/// Inputs for one model run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Consecutive historical years, oldest first
    #[serde(default = "default_years")]
    pub years_historical: Vec<i32>,

    #[serde(default = "default_revenue")]
    pub revenue_historical: Vec<f64>,

    #[serde(default = "default_costs")]
    pub costs_historical: Vec<f64>,

    #[serde(default = "default_assets")]
    pub assets_historical: Vec<f64>,

    #[serde(default = "default_liabilities")]
    pub liabilities_historical: Vec<f64>,

    #[serde(default = "default_equity")]
    pub equity_historical: Vec<f64>,

    #[serde(default = "default_operating_cf")]
    pub operating_cf_historical: Vec<f64>,

    #[serde(default = "default_investing_cf")]
    pub investing_cf_historical: Vec<f64>,

    #[serde(default = "default_financing_cf")]
    pub financing_cf_historical: Vec<f64>,

    /// Number of years to project past the last historical year
    #[serde(default = "default_num_projection_years")]
    pub num_projection_years: usize,

    /// Initial value of the growth-rate input cell
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,
}

fn default_years() -> Vec<i32> {
    vec![2021, 2022, 2023]
}

fn default_revenue() -> Vec<f64> {
    vec![85000.0, 90000.0, 95000.0]
}

fn default_costs() -> Vec<f64> {
    vec![40000.0, 42000.0, 44000.0]
}

fn default_assets() -> Vec<f64> {
    vec![150000.0, 160000.0, 170000.0]
}

fn default_liabilities() -> Vec<f64> {
    vec![70000.0, 75000.0, 80000.0]
}

fn default_equity() -> Vec<f64> {
    vec![80000.0, 85000.0, 90000.0]
}

fn default_operating_cf() -> Vec<f64> {
    vec![20000.0, 21000.0, 22000.0]
}

fn default_investing_cf() -> Vec<f64> {
    vec![-10000.0, -10500.0, -11000.0]
}

fn default_financing_cf() -> Vec<f64> {
    vec![15000.0, 16000.0, 17000.0]
}

fn default_num_projection_years() -> usize {
    10
}

fn default_growth_rate() -> f64 {
    0.05
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            years_historical: default_years(),
            revenue_historical: default_revenue(),
            costs_historical: default_costs(),
            assets_historical: default_assets(),
            liabilities_historical: default_liabilities(),
            equity_historical: default_equity(),
            operating_cf_historical: default_operating_cf(),
            investing_cf_historical: default_investing_cf(),
            financing_cf_historical: default_financing_cf(),
            num_projection_years: default_num_projection_years(),
            growth_rate: default_growth_rate(),
        }
    }
}

/// Serialization format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` select YAML, anything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

impl ModelConfig {
    /// Load a configuration file; the file must exist
    pub fn load(path: &Path) -> FinModelResult<Self> {
        if !path.exists() {
            return Err(FinModelError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinModelError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::from_str(&contents).map_err(|e| {
                FinModelError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents).map_err(|e| {
                FinModelError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?,
        };

        Ok(config)
    }

    /// Load a configuration file, or the defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> FinModelResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the configuration atomically in the format implied by the extension
    pub fn save(&self, path: &Path) -> FinModelResult<()> {
        match ConfigFormat::from_path(path) {
            ConfigFormat::Json => file_io::write_json_atomic(path, self),
            ConfigFormat::Yaml => file_io::write_yaml_atomic(path, self),
        }
    }

    /// The growth rate as a checked value
    pub fn growth_rate(&self) -> FinModelResult<GrowthRate> {
        GrowthRate::new(self.growth_rate)
    }

    /// Historical series in field order, paired with their field names
    pub fn series(&self) -> [(&'static str, &[f64]); 8] {
        [
            ("revenue_historical", self.revenue_historical.as_slice()),
            ("costs_historical", self.costs_historical.as_slice()),
            ("assets_historical", self.assets_historical.as_slice()),
            ("liabilities_historical", self.liabilities_historical.as_slice()),
            ("equity_historical", self.equity_historical.as_slice()),
            ("operating_cf_historical", self.operating_cf_historical.as_slice()),
            ("investing_cf_historical", self.investing_cf_historical.as_slice()),
            ("financing_cf_historical", self.financing_cf_historical.as_slice()),
        ]
    }

    /// Check the inputs before assembling the model
    pub fn validate(&self) -> FinModelResult<()> {
        if self.years_historical.is_empty() {
            return Err(FinModelError::Validation(
                "at least one historical year is required".into(),
            ));
        }

        // Column A is blank and column B holds labels; years start at C
        let last_column = self
            .years_historical
            .len()
            .saturating_add(self.num_projection_years)
            .saturating_add(1);
        if last_column >= usize::from(MAX_COLUMNS) {
            return Err(FinModelError::column_out_of_range(
                u64::try_from(last_column).unwrap_or(u64::MAX),
                u64::from(MAX_COLUMNS),
            ));
        }

        if let Some(pair) = self
            .years_historical
            .windows(2)
            .find(|w| w[0].checked_add(1) != Some(w[1]))
        {
            return Err(FinModelError::Validation(format!(
                "historical years must be consecutive: {} is followed by {}",
                pair[0], pair[1]
            )));
        }

        let expected = self.years_historical.len();
        for (name, values) in self.series() {
            if values.len() != expected {
                return Err(FinModelError::Validation(format!(
                    "{} has {} values but there are {} historical years",
                    name,
                    values.len(),
                    expected
                )));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(FinModelError::Validation(format!(
                    "{} contains a non-finite value",
                    name
                )));
            }
        }

        self.growth_rate()?;

        Ok(())
    }
}
