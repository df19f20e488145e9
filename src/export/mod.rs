//! Export module for finmodel
//!
//! - xlsx: the formula-driven model workbook
//! - csv: evaluated statements for other tools
//!
//! Row and column placement for the workbook is computed once in `layout`
//! and formula text is produced in `formula`.

pub mod csv;
pub mod formula;
pub mod layout;
pub mod xlsx;

pub use self::csv::export_statements_csv;
pub use layout::{BlockLayout, SheetLayout};
pub use xlsx::{ExportSummary, WorkbookWriter};
