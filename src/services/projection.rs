//! Projection evaluator
//!
//! Computes the values the workbook formulas produce for a given growth
//! rate. Used for the terminal preview, CSV export and as the cached result
//! stored alongside each formula.

use crate::models::{
    FinancialModel, GrowthRate, ProjectionRule, StatementKind, StatementTable, YearColumns,
};

/// A statement with every cell resolved to a number
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedTable {
    pub kind: StatementKind,
    /// Metric names in row order
    pub names: Vec<String>,
    /// `values[row][column]`, one column per year
    pub values: Vec<Vec<f64>>,
}

impl EvaluatedTable {
    /// Value of `metric` in `year`, if both exist
    pub fn value(&self, metric: &str, year: i32, years: &YearColumns) -> Option<f64> {
        let row = self.names.iter().position(|n| n == metric)?;
        let col = years.iter().position(|y| y == year)?;
        self.values.get(row)?.get(col).copied()
    }
}

/// Resolve every projection placeholder of a table
///
/// Columns are evaluated left to right, rows top to bottom, so a `Grow` row
/// sees its prior column and a `Difference` row sees the rows above it.
pub fn evaluate_table(table: &StatementTable, growth: GrowthRate) -> EvaluatedTable {
    let width = table.rows.first().map_or(0, |r| r.cells.len());
    let mut values = vec![vec![0.0; width]; table.rows.len()];

    for col in 0..width {
        for (index, row) in table.rows.iter().enumerate() {
            values[index][col] = match (row.cells[col], row.rule) {
                (Some(literal), _) => literal,
                (None, ProjectionRule::Grow) => {
                    let prior = if col == 0 { 0.0 } else { values[index][col - 1] };
                    prior * growth.factor()
                }
                (
                    None,
                    ProjectionRule::Difference {
                        minuend,
                        subtrahend,
                    },
                ) => values[minuend][col] - values[subtrahend][col],
            };
        }
    }

    EvaluatedTable {
        kind: table.kind,
        names: table.rows.iter().map(|r| r.name.clone()).collect(),
        values,
    }
}

/// Resolve all statements of a model
pub fn evaluate_model(model: &FinancialModel, growth: GrowthRate) -> Vec<EvaluatedTable> {
    model
        .statements
        .iter()
        .map(|table| evaluate_table(table, growth))
        .collect()
}
