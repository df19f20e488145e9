//! Core data models for finmodel
//!
//! This module contains the data structures of the financial model: cell
//! addressing, year columns, the growth-rate input and the statement tables.

pub mod column;
pub mod growth;
pub mod period;
pub mod statement;

pub use column::{column_letter, CellRef, MAX_COLUMNS, MAX_ROWS};
pub use growth::GrowthRate;
pub use period::{projection_years, PeriodKind, YearColumns};
pub use statement::{FinancialModel, MetricRow, ProjectionRule, StatementKind, StatementTable};
