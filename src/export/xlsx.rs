//! Workbook writer
//!
//! Produces the two-sheet workbook: a control sheet with the growth-rate
//! input and a statements sheet with the three tables stacked vertically.
//! Historical cells are shaded literals, projection cells are formulas that
//! reference the prior column and the growth-rate cell.

use std::path::Path;

use rust_xlsxwriter::{
    Color, DataValidation, DataValidationRule, Format, Formula, Workbook, Worksheet,
};
use tracing::{debug, info};

use super::formula::{difference_formula, growth_formula, CONTROL_SHEET};
use super::layout::{BlockLayout, SheetLayout, LABEL_COLUMN};
use crate::error::FinModelResult;
use crate::models::{CellRef, FinancialModel, GrowthRate, ProjectionRule, StatementTable};
use crate::services::{evaluate_table, EvaluatedTable};
use crate::storage::write_bytes_atomic;

/// Name of the sheet holding the statements
pub const STATEMENTS_SHEET: &str = "Financial Statements";

/// Label written next to the growth-rate input
pub const GROWTH_RATE_LABEL: &str = "Growth Rate";

/// Number format used for every amount
pub const AMOUNT_FORMAT: &str = "#,##0";

/// Shading of historical cells (light gray)
pub const HISTORICAL_FILL: u32 = 0xD3D3D3;

/// Width of the label and year columns
pub const COLUMN_WIDTH: f64 = 18.0;

/// Formats are applied at least through column Z
const MIN_FORMATTED_COLUMN: usize = 25;

/// Cell holding the growth rate on the control sheet (B1)
pub const GROWTH_RATE_CELL: CellRef = CellRef::from_raw(0, 1);

/// Statistics about a written workbook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub sheets: usize,
    pub literal_cells: usize,
    pub formula_cells: usize,
}

struct Formats {
    header: Format,
    year: Format,
    historical: Format,
    projection: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold().set_font_color(Color::Blue),
            year: Format::new().set_bold(),
            historical: Format::new()
                .set_background_color(Color::RGB(HISTORICAL_FILL))
                .set_num_format(AMOUNT_FORMAT),
            projection: Format::new().set_num_format(AMOUNT_FORMAT),
        }
    }
}

/// Builds and writes the model workbook
pub struct WorkbookWriter<'a> {
    model: &'a FinancialModel,
    growth: GrowthRate,
}

impl<'a> WorkbookWriter<'a> {
    /// Create a writer for a model with the initial growth rate
    pub fn new(model: &'a FinancialModel, growth: GrowthRate) -> Self {
        Self { model, growth }
    }

    /// Build the in-memory workbook
    pub fn build(&self) -> FinModelResult<(Workbook, ExportSummary)> {
        let layout = SheetLayout::for_model(self.model)?;
        let formats = Formats::new();
        let mut workbook = Workbook::new();
        let mut summary = ExportSummary::default();

        {
            let control = workbook.add_worksheet().set_name(CONTROL_SHEET)?;
            self.write_control_sheet(control)?;
            summary.sheets += 1;
        }

        {
            let sheet = workbook.add_worksheet().set_name(STATEMENTS_SHEET)?;
            sheet.set_screen_gridlines(false);
            sheet.set_print_gridlines(false);

            let amount = Format::new().set_num_format(AMOUNT_FORMAT);
            let last_formatted = layout.last_column().max(MIN_FORMATTED_COLUMN);
            for col in LABEL_COLUMN..=last_formatted {
                let col = layout.cell(0, col)?.col();
                sheet.set_column_width(col, COLUMN_WIDTH)?;
                sheet.set_column_format(col, &amount)?;
            }

            for (table, block) in self.model.statements.iter().zip(layout.blocks()) {
                let evaluated = evaluate_table(table, self.growth);
                self.write_block(sheet, &layout, block, table, &evaluated, &formats, &mut summary)?;
            }
            summary.sheets += 1;
        }

        Ok((workbook, summary))
    }

    /// Serialize the workbook to xlsx bytes
    pub fn to_buffer(&self) -> FinModelResult<(Vec<u8>, ExportSummary)> {
        let (mut workbook, summary) = self.build()?;
        let bytes = workbook.save_to_buffer()?;
        Ok((bytes, summary))
    }

    /// Write the workbook to `path`; on failure nothing is left at `path`
    pub fn write(&self, path: &Path) -> FinModelResult<ExportSummary> {
        let (bytes, summary) = self.to_buffer()?;
        write_bytes_atomic(path, &bytes)?;

        info!(
            path = %path.display(),
            sheets = summary.sheets,
            formulas = summary.formula_cells,
            "Wrote financial model workbook"
        );

        Ok(summary)
    }

    fn write_control_sheet(&self, sheet: &mut Worksheet) -> FinModelResult<()> {
        let rate = GROWTH_RATE_CELL;
        sheet.write_string(rate.row(), rate.col() - 1, GROWTH_RATE_LABEL)?;
        sheet.write_number(rate.row(), rate.col(), self.growth.value())?;

        let validation = DataValidation::new().allow_decimal_number(DataValidationRule::Between(
            GrowthRate::MIN,
            GrowthRate::MAX,
        ));
        sheet.add_data_validation(rate.row(), rate.col(), rate.row(), rate.col(), &validation)?;

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn write_block(
        &self,
        sheet: &mut Worksheet,
        layout: &SheetLayout,
        block: &BlockLayout,
        table: &StatementTable,
        evaluated: &EvaluatedTable,
        formats: &Formats,
        summary: &mut ExportSummary,
    ) -> FinModelResult<()> {
        let title = layout.cell(block.header_row, LABEL_COLUMN)?;
        sheet.write_string_with_format(title.row(), title.col(), table.kind.title(), &formats.header)?;

        for (index, year) in self.model.years.iter().enumerate() {
            let cell = layout.cell(block.header_row, layout.year_column(index))?;
            sheet.write_number_with_format(cell.row(), cell.col(), year as f64, &formats.year)?;
        }

        let rate = GROWTH_RATE_CELL;

        for (row_index, row) in table.rows.iter().enumerate() {
            let sheet_row = block.metric_row(row_index);
            let label = layout.cell(sheet_row, LABEL_COLUMN)?;
            sheet.write_string(label.row(), label.col(), &row.name)?;

            for (col_index, value) in row.cells.iter().enumerate() {
                let cell = layout.cell(sheet_row, layout.year_column(col_index))?;

                if let Some(value) = value {
                    sheet.write_number_with_format(cell.row(), cell.col(), *value, &formats.historical)?;
                    summary.literal_cells += 1;
                    continue;
                }

                let text = match row.rule {
                    ProjectionRule::Grow => {
                        let prior = layout.cell(sheet_row, layout.year_column(col_index) - 1)?;
                        growth_formula(prior, rate)
                    }
                    ProjectionRule::Difference {
                        minuend,
                        subtrahend,
                    } => difference_formula(
                        layout.cell(block.metric_row(minuend), cell.col() as usize)?,
                        layout.cell(block.metric_row(subtrahend), cell.col() as usize)?,
                    ),
                };

                let cached = evaluated.values[row_index][col_index];
                let formula = Formula::new(&text).set_result(cached.to_string());
                sheet.write_formula_with_format(cell.row(), cell.col(), formula, &formats.projection)?;
                summary.formula_cells += 1;
            }
        }

        debug!(
            statement = %table.kind,
            header_row = block.header_row,
            "Wrote statement block"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::models::YearColumns;
    use crate::services::ModelService;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;

    fn scenario(num_projection_years: usize) -> (FinancialModel, GrowthRate) {
        let mut config = ModelConfig::default();
        config.num_projection_years = num_projection_years;
        let growth = config.growth_rate().unwrap();
        (ModelService::new(&config).build().unwrap(), growth)
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn test_sheet_names_and_order() {
        let (model, growth) = scenario(2);
        let (bytes, summary) = WorkbookWriter::new(&model, growth).to_buffer().unwrap();

        assert_eq!(summary.sheets, 2);
        let workbook = read_part(&bytes, "xl/workbook.xml");
        let control = workbook.find(r#"name="Control Panel""#).unwrap();
        let statements = workbook.find(r#"name="Financial Statements""#).unwrap();
        assert!(control < statements);
    }

    #[test]
    fn test_growth_rate_input_and_validation() {
        let (model, growth) = scenario(2);
        let (bytes, _) = WorkbookWriter::new(&model, growth).to_buffer().unwrap();
        let control = read_part(&bytes, "xl/worksheets/sheet1.xml");

        assert!(control.contains("<v>0.05</v>"));
        assert!(control.contains(r#"type="decimal""#));
        assert!(control.contains(r#"sqref="B1""#));
        assert!(control.contains("<formula1>0</formula1>"));
        assert!(control.contains("<formula2>1</formula2>"));

        let strings = read_part(&bytes, "xl/sharedStrings.xml");
        assert!(strings.contains("Growth Rate"));
    }

    #[test]
    fn test_statement_formulas() {
        let (model, growth) = scenario(2);
        let (bytes, summary) = WorkbookWriter::new(&model, growth).to_buffer().unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet2.xml");

        // 9 metrics x 3 historical years, 9 metrics x 2 projection years
        assert_eq!(summary.literal_cells, 27);
        assert_eq!(summary.formula_cells, 18);

        // Income statement: 2024 is column F, 2023 is E
        assert!(sheet.contains("<f>E2*(1+"));
        assert!(sheet.contains("<f>E3*(1+"));
        assert!(sheet.contains("<f>F2-F3</f>"));
        assert!(sheet.contains("<f>G2-G3</f>"));
        assert!(sheet.contains("$B$1"));
        assert!(sheet.contains("<v>99750"));

        // Balance sheet block starts at row 6; equity in row 9
        assert!(sheet.contains("<f>E7*(1+"));
        assert!(sheet.contains("<f>F7-F8</f>"));

        // Cash flow block starts at row 11; every row grows
        assert!(sheet.contains("<f>E12*(1+"));
        assert!(sheet.contains("<f>E13*(1+"));
        assert!(sheet.contains("<f>E14*(1+"));
    }

    #[test]
    fn test_historical_literals_and_gridlines() {
        let (model, growth) = scenario(2);
        let (bytes, _) = WorkbookWriter::new(&model, growth).to_buffer().unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet2.xml");

        assert!(sheet.contains(r#"showGridLines="0""#));
        assert!(sheet.contains("<v>51000</v>"));
        assert!(sheet.contains("<v>-11000</v>"));

        let styles = read_part(&bytes, "xl/styles.xml");
        // #,##0 may be stored as built-in number format 3
        assert!(styles.contains(r#"numFmtId="3""#) || styles.contains("#,##0"));
        assert!(styles.contains("FFD3D3D3"));

        let strings = read_part(&bytes, "xl/sharedStrings.xml");
        for title in ["Income Statement", "Balance Sheet", "Cash Flow Statement"] {
            assert!(strings.contains(title));
        }
    }

    #[test]
    fn test_no_projection_years_writes_only_literals() {
        let (model, growth) = scenario(0);
        let (_, summary) = WorkbookWriter::new(&model, growth).to_buffer().unwrap();
        assert_eq!(summary.formula_cells, 0);
        assert_eq!(summary.literal_cells, 27);
    }

    #[test]
    fn test_write_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("financial_model.xlsx");
        let (model, growth) = scenario(10);

        let summary = WorkbookWriter::new(&model, growth).write(&path).unwrap();
        assert_eq!(summary.formula_cells, 90);

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert!(!temp_dir.path().join("out").join("financial_model.xlsx.tmp").exists());
    }

    #[test]
    fn test_column_overflow_is_a_range_error() {
        let mut config = ModelConfig::default();
        config.num_projection_years = 16_384;
        assert!(ModelService::new(&config).build().unwrap_err().is_range());

        let (mut model, growth) = scenario(2);
        model.years = YearColumns::new(model.years.historical().to_vec(), 16_384).unwrap();
        let err = WorkbookWriter::new(&model, growth).to_buffer().unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_widest_model_fits_sheet() {
        let (model, growth) = scenario(16_379);
        let layout = SheetLayout::for_model(&model).unwrap();
        assert_eq!(layout.last_column(), 16_383);
        assert!(WorkbookWriter::new(&model, growth).build().is_ok());
    }
}
