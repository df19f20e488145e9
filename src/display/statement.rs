//! Statement formatting for terminal output
//!
//! Renders evaluated statements as fixed-width tables. Projection years are
//! suffixed with `E` (estimate).

use crate::models::{GrowthRate, PeriodKind, YearColumns};
use crate::services::EvaluatedTable;

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 12;

/// Format an amount with thousands separators and no decimals (`#,##0`)
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Year column heading, `2024E` for projections
fn year_heading(years: &YearColumns, index: usize, year: i32) -> String {
    match years.kind(index) {
        PeriodKind::Historical => year.to_string(),
        PeriodKind::Projection => format!("{}E", year),
    }
}

/// Format all statements for terminal display
pub fn format_statements(tables: &[EvaluatedTable], years: &YearColumns, growth: GrowthRate) -> String {
    let width = LABEL_WIDTH + (VALUE_WIDTH + 1) * years.len();
    let mut output = String::new();

    output.push_str("Financial Model\n");
    output.push_str(&"=".repeat(width));
    output.push('\n');
    output.push_str(&format!("Growth rate: {}\n", growth));

    for table in tables {
        output.push('\n');
        output.push_str(&format!("{:<LABEL_WIDTH$}", table.kind.title()));
        for (index, year) in years.iter().enumerate() {
            output.push_str(&format!(
                " {:>VALUE_WIDTH$}",
                year_heading(years, index, year)
            ));
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for (name, values) in table.names.iter().zip(&table.values) {
            output.push_str(&format!("{:<LABEL_WIDTH$}", name));
            for value in values {
                output.push_str(&format!(" {:>VALUE_WIDTH$}", format_amount(*value)));
            }
            output.push('\n');
        }
    }

    output
}
