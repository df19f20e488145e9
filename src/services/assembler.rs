//! Table assembler
//!
//! Turns the historical series of a [`ModelConfig`] into the three statement
//! tables. Historical cells carry literal values, projection cells are empty
//! placeholders for the workbook writer to fill with formulas.

use tracing::debug;

use crate::config::ModelConfig;
use crate::error::{FinModelError, FinModelResult};
use crate::models::{
    FinancialModel, MetricRow, ProjectionRule, StatementKind, StatementTable, YearColumns,
};

/// Input for one metric row of a table
#[derive(Debug, Clone, Copy)]
pub struct MetricInput<'a> {
    pub name: &'a str,
    pub rule: ProjectionRule,
    /// Literal historical values; `None` derives them from the row's
    /// `Difference` rule
    pub historical: Option<&'a [f64]>,
}

impl<'a> MetricInput<'a> {
    /// A metric with literal history that grows by the growth rate
    pub fn growing(name: &'a str, historical: &'a [f64]) -> Self {
        Self {
            name,
            rule: ProjectionRule::Grow,
            historical: Some(historical),
        }
    }

    /// A metric computed as `minuend - subtrahend` in every year
    pub fn difference(name: &'a str, minuend: usize, subtrahend: usize) -> Self {
        Self {
            name,
            rule: ProjectionRule::Difference {
                minuend,
                subtrahend,
            },
            historical: None,
        }
    }

    /// Use literal history while keeping a `Difference` rule for projections
    pub fn with_historical(mut self, historical: &'a [f64]) -> Self {
        self.historical = Some(historical);
        self
    }
}

/// Build one statement table in the given metric order
///
/// Every row receives exactly one cell per year column. `Difference` rules
/// may only reference rows that come before them.
pub fn assemble_table(
    kind: StatementKind,
    metrics: &[MetricInput<'_>],
    years: &YearColumns,
) -> FinModelResult<StatementTable> {
    let mut table = StatementTable::new(kind);
    let expected = years.historical_len();
    let placeholders = years.projection().len();

    for (index, metric) in metrics.iter().enumerate() {
        if let ProjectionRule::Difference {
            minuend,
            subtrahend,
        } = metric.rule
        {
            if minuend >= index || subtrahend >= index {
                return Err(FinModelError::Validation(format!(
                    "{}: '{}' must reference rows above it",
                    kind, metric.name
                )));
            }
        }

        let historical: Vec<f64> = match (metric.historical, metric.rule) {
            (Some(values), _) => {
                if values.len() != expected {
                    return Err(FinModelError::Validation(format!(
                        "{}: '{}' has {} historical values, expected {}",
                        kind,
                        metric.name,
                        values.len(),
                        expected
                    )));
                }
                values.to_vec()
            }
            (
                None,
                ProjectionRule::Difference {
                    minuend,
                    subtrahend,
                },
            ) => {
                let left = table.rows[minuend].historical_values();
                let right = table.rows[subtrahend].historical_values();
                left.iter().zip(&right).map(|(a, b)| a - b).collect()
            }
            (None, ProjectionRule::Grow) => {
                return Err(FinModelError::Validation(format!(
                    "{}: '{}' needs historical values to grow from",
                    kind, metric.name
                )));
            }
        };

        let cells = historical
            .into_iter()
            .map(Some)
            .chain(std::iter::repeat(None).take(placeholders))
            .collect();

        table.rows.push(MetricRow {
            name: metric.name.to_string(),
            rule: metric.rule,
            cells,
        });
    }

    debug!(
        statement = %kind,
        rows = table.row_count(),
        columns = years.len(),
        "Assembled statement table"
    );

    Ok(table)
}

/// Service that builds the full model from its configuration
pub struct ModelService<'a> {
    config: &'a ModelConfig,
}

impl<'a> ModelService<'a> {
    /// Create a new model service
    pub fn new(config: &'a ModelConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and assemble all three statements
    pub fn build(&self) -> FinModelResult<FinancialModel> {
        self.config.validate()?;

        let config = self.config;
        let years = YearColumns::new(
            config.years_historical.clone(),
            config.num_projection_years,
        )?;

        let income = assemble_table(
            StatementKind::IncomeStatement,
            &[
                MetricInput::growing("Revenue", &config.revenue_historical),
                MetricInput::growing("Costs", &config.costs_historical),
                MetricInput::difference("Profit", 0, 1),
            ],
            &years,
        )?;

        let balance = assemble_table(
            StatementKind::BalanceSheet,
            &[
                MetricInput::growing("Assets", &config.assets_historical),
                MetricInput::growing("Liabilities", &config.liabilities_historical),
                MetricInput::difference("Equity", 0, 1).with_historical(&config.equity_historical),
            ],
            &years,
        )?;

        // Financing cash flow is an activity of its own, not a residual, so it grows
        let cash_flow = assemble_table(
            StatementKind::CashFlowStatement,
            &[
                MetricInput::growing("Operating Cash Flow", &config.operating_cf_historical),
                MetricInput::growing("Investing Cash Flow", &config.investing_cf_historical),
                MetricInput::growing("Financing Cash Flow", &config.financing_cf_historical),
            ],
            &years,
        )?;

        Ok(FinancialModel {
            years,
            statements: vec![income, balance, cash_flow],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_model() -> FinancialModel {
        let config = ModelConfig::default();
        ModelService::new(&config).build().unwrap()
    }

    #[test]
    fn test_statements_in_order() {
        let model = default_model();
        let kinds: Vec<_> = model.statements.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, StatementKind::ALL.to_vec());
    }

    #[test]
    fn test_fixed_metric_order() {
        let model = default_model();
        let income = model.statement(StatementKind::IncomeStatement).unwrap();
        assert_eq!(income.metric_names(), vec!["Revenue", "Costs", "Profit"]);

        let balance = model.statement(StatementKind::BalanceSheet).unwrap();
        assert_eq!(balance.metric_names(), vec!["Assets", "Liabilities", "Equity"]);
    }

    #[test]
    fn test_historical_values_read_back_unchanged() {
        let config = ModelConfig::default();
        let model = ModelService::new(&config).build().unwrap();
        let income = model.statement(StatementKind::IncomeStatement).unwrap();

        assert_eq!(
            income.row("Revenue").unwrap().historical_values(),
            config.revenue_historical
        );
        assert_eq!(
            income.row("Costs").unwrap().historical_values(),
            config.costs_historical
        );

        let cash_flow = model.statement(StatementKind::CashFlowStatement).unwrap();
        assert_eq!(
            cash_flow.row("Investing Cash Flow").unwrap().historical_values(),
            config.investing_cf_historical
        );
    }

    #[test]
    fn test_profit_is_revenue_minus_costs() {
        let model = default_model();
        let income = model.statement(StatementKind::IncomeStatement).unwrap();
        let revenue = income.row("Revenue").unwrap().historical_values();
        let costs = income.row("Costs").unwrap().historical_values();
        let profit = income.row("Profit").unwrap().historical_values();

        for i in 0..revenue.len() {
            assert_eq!(profit[i], revenue[i] - costs[i]);
        }
        assert_eq!(profit[2], 51000.0);
    }

    #[test]
    fn test_every_row_shares_year_columns() {
        let model = default_model();
        for statement in &model.statements {
            for row in &statement.rows {
                assert_eq!(row.cells.len(), model.years.len());
                assert!(row.cells[..3].iter().all(Option::is_some));
                assert!(row.cells[3..].iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn test_cash_flow_rows_all_grow() {
        let model = default_model();
        let cash_flow = model.statement(StatementKind::CashFlowStatement).unwrap();

        assert_eq!(
            cash_flow.metric_names(),
            vec!["Operating Cash Flow", "Investing Cash Flow", "Financing Cash Flow"]
        );
        assert!(cash_flow
            .rows
            .iter()
            .all(|row| row.rule == ProjectionRule::Grow));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_projection_count_fails_before_assembly() {
        let mut config = ModelConfig::default();
        config.num_projection_years = 4_294_967_298;
        let err = ModelService::new(&config).build().unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_equity_keeps_literal_history() {
        let mut config = ModelConfig::default();
        config.equity_historical = vec![1.0, 2.0, 3.0];
        let model = ModelService::new(&config).build().unwrap();
        let balance = model.statement(StatementKind::BalanceSheet).unwrap();
        let equity = balance.row("Equity").unwrap();

        assert_eq!(equity.historical_values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            equity.rule,
            ProjectionRule::Difference {
                minuend: 0,
                subtrahend: 1
            }
        );
    }

    #[test]
    fn test_forward_reference_rejected() {
        let years = YearColumns::new(vec![2023], 1).unwrap();
        let err = assemble_table(
            StatementKind::IncomeStatement,
            &[
                MetricInput::difference("Profit", 1, 2),
                MetricInput::growing("Revenue", &[1.0]),
                MetricInput::growing("Costs", &[1.0]),
            ],
            &years,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let years = YearColumns::new(vec![2022, 2023], 1).unwrap();
        let err = assemble_table(
            StatementKind::CashFlowStatement,
            &[MetricInput::growing("Operating Cash Flow", &[1.0])],
            &years,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ModelConfig::default();
        config.growth_rate = -0.0001;
        assert!(ModelService::new(&config).build().unwrap_err().is_validation());
    }
}
