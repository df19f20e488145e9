//! finmodel - three-statement financial model generator
//!
//! Builds an income statement, balance sheet and cash-flow statement from
//! historical series and writes them to an xlsx workbook. Historical years
//! are literal values; projection years are spreadsheet formulas that grow
//! the prior year by a single growth-rate input held on a control sheet.
//!
//! # Architecture
//!
//! - `config`: Path resolution and model inputs
//! - `error`: Custom error types
//! - `models`: Cell addressing, year columns, growth rate, statement tables
//! - `services`: Table assembly and projection evaluation
//! - `export`: Sheet layout, formulas, xlsx and CSV output
//! - `storage`: Atomic file writes
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finmodel_cli::config::ModelConfig;
//! use finmodel_cli::export::WorkbookWriter;
//! use finmodel_cli::services::ModelService;
//!
//! let config = ModelConfig::default();
//! let model = ModelService::new(&config).build()?;
//! WorkbookWriter::new(&model, config.growth_rate()?).write("financial_model.xlsx".as_ref())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinModelError, FinModelResult};
