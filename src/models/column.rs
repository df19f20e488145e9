//! Spreadsheet cell addressing
//!
//! Column labels use bijective base-26 numbering (A..Z, AA, AB, ...).
//! Rows and columns are zero-based internally and rendered one-based.

use std::fmt;

use crate::error::{FinModelError, FinModelResult};

/// Number of rows supported by an xlsx worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Number of columns supported by an xlsx worksheet
pub const MAX_COLUMNS: u16 = 16_384;

/// Convert a 1-based column index to its spreadsheet label
///
/// # Examples
/// ```
/// use finmodel_cli::models::column_letter;
/// assert_eq!(column_letter(1).unwrap(), "A");
/// assert_eq!(column_letter(28).unwrap(), "AB");
/// ```
///
/// # Errors
///
/// Returns a validation error for `0`, which has no label.
pub fn column_letter(index: u32) -> FinModelResult<String> {
    if index == 0 {
        return Err(FinModelError::Validation(
            "column index must be a positive integer".into(),
        ));
    }

    let mut letters = Vec::new();
    let mut n = index;
    while n > 0 {
        let remainder = (n - 1) % 26;
        letters.push(b'A' + remainder as u8);
        n = (n - 1) / 26;
    }

    Ok(letters.iter().rev().map(|&b| b as char).collect())
}

/// A zero-based cell position that has been checked against sheet limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    row: u32,
    col: u16,
}

impl CellRef {
    /// Create a cell reference, rejecting positions beyond the sheet limits
    pub fn new(row: usize, col: usize) -> FinModelResult<Self> {
        if row >= MAX_ROWS as usize {
            return Err(FinModelError::row_out_of_range(row as u64, MAX_ROWS as u64));
        }
        if col >= MAX_COLUMNS as usize {
            return Err(FinModelError::column_out_of_range(
                col as u64,
                MAX_COLUMNS as u64,
            ));
        }
        Ok(Self {
            row: row as u32,
            col: col as u16,
        })
    }

    /// Cell reference for a position known to be within the sheet limits
    pub(crate) const fn from_raw(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Zero-based row index
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index
    pub fn col(&self) -> u16 {
        self.col
    }

    /// The column label of this cell (e.g. "C")
    pub fn column_label(&self) -> String {
        // col < MAX_COLUMNS so col + 1 is always a valid positive index
        column_letter(self.col as u32 + 1).unwrap_or_default()
    }

    /// Relative A1-style address (e.g. "C2")
    pub fn a1(&self) -> String {
        format!("{}{}", self.column_label(), self.row + 1)
    }

    /// Absolute A1-style address (e.g. "$B$1")
    pub fn absolute(&self) -> String {
        format!("${}${}", self.column_label(), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a1())
    }
}
