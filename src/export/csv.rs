//! CSV Export functionality
//!
//! Exports the evaluated statements, one line per metric with a column per
//! year. Projection columns carry the values the workbook formulas produce.

use std::io::Write;

use crate::error::FinModelResult;
use crate::models::YearColumns;
use crate::services::EvaluatedTable;

/// Export evaluated statements to CSV
pub fn export_statements_csv<W: Write>(
    tables: &[EvaluatedTable],
    years: &YearColumns,
    writer: W,
) -> FinModelResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Statement".to_string(), "Metric".to_string()];
    header.extend(years.iter().map(|y| y.to_string()));
    csv_writer.write_record(&header)?;

    for table in tables {
        for (name, values) in table.names.iter().zip(&table.values) {
            let mut record = vec![table.kind.title().to_string(), name.clone()];
            record.extend(values.iter().map(|v| format!("{:.2}", v)));
            csv_writer.write_record(&record)?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::services::{evaluate_model, ModelService};

    #[test]
    fn test_export_statements_csv() {
        let mut config = ModelConfig::default();
        config.num_projection_years = 2;
        let model = ModelService::new(&config).build().unwrap();
        let tables = evaluate_model(&model, config.growth_rate().unwrap());

        let mut output = Vec::new();
        export_statements_csv(&tables, &model.years, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Statement,Metric,2021,2022,2023,2024,2025");
        assert_eq!(
            lines[1],
            "Income Statement,Revenue,85000.00,90000.00,95000.00,99750.00,104737.50"
        );
        assert!(lines[3].starts_with("Income Statement,Profit,45000.00"));
        assert_eq!(lines.len(), 10);
    }
}
