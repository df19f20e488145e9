//! Statement tables
//!
//! A statement table is a fixed list of metric rows by a fixed list of year
//! columns. Historical cells hold literal values; projection cells are left
//! empty and are filled by formula when the workbook is written.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::YearColumns;

/// The three financial statements, in the order they appear on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    IncomeStatement,
    BalanceSheet,
    CashFlowStatement,
}

impl StatementKind {
    /// All statements in sheet order
    pub const ALL: [StatementKind; 3] = [
        StatementKind::IncomeStatement,
        StatementKind::BalanceSheet,
        StatementKind::CashFlowStatement,
    ];

    /// Section title written above the table
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlowStatement => "Cash Flow Statement",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a metric's projection cells are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionRule {
    /// Prior year's value times (1 + growth rate)
    Grow,
    /// Row `minuend` minus row `subtrahend` in the same year (indices within the table)
    Difference { minuend: usize, subtrahend: usize },
}

/// One metric row: a name, its projection rule and one cell per year column
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub name: String,
    pub rule: ProjectionRule,
    /// `Some` for historical years, `None` for projection placeholders
    pub cells: Vec<Option<f64>>,
}

impl MetricRow {
    /// Literal values of the historical columns
    pub fn historical_values(&self) -> Vec<f64> {
        self.cells.iter().map_while(|cell| *cell).collect()
    }
}

/// A statement table sharing the model's year columns
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTable {
    pub kind: StatementKind,
    pub rows: Vec<MetricRow>,
}

impl StatementTable {
    /// Create an empty table for a statement
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    /// Number of metric rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a metric row by name
    pub fn row(&self, name: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Metric names in row order
    pub fn metric_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}

/// The assembled model: shared year columns plus the three statements
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialModel {
    pub years: YearColumns,
    pub statements: Vec<StatementTable>,
}

impl FinancialModel {
    /// Get a statement by kind
    pub fn statement(&self, kind: StatementKind) -> Option<&StatementTable> {
        self.statements.iter().find(|s| s.kind == kind)
    }
}
