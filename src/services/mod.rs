//! Service layer for finmodel
//!
//! The service layer turns the configuration into statement tables and
//! evaluates their projections.

pub mod assembler;
pub mod projection;

pub use assembler::{assemble_table, MetricInput, ModelService};
pub use projection::{evaluate_model, evaluate_table, EvaluatedTable};
