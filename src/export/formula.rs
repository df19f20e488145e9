//! Projection formula text
//!
//! Every formula addresses cells through [`CellRef`], so the column labels
//! come from the same encoder for every statement block. The growth rate is
//! always referenced by absolute address on the control sheet.

use crate::models::CellRef;

/// Name of the sheet holding the growth-rate input
pub const CONTROL_SHEET: &str = "Control Panel";

/// Quote a sheet name for use in a cross-sheet reference
pub fn quoted_sheet(name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// Absolute reference to a cell on the control sheet, e.g. `'Control Panel'!$B$1`
pub fn control_reference(cell: CellRef) -> String {
    format!("{}!{}", quoted_sheet(CONTROL_SHEET), cell.absolute())
}

/// `=<prior>*(1+<rate>)`
pub fn growth_formula(prior: CellRef, rate: CellRef) -> String {
    format!("={}*(1+{})", prior.a1(), control_reference(rate))
}

/// `=<minuend>-<subtrahend>`
pub fn difference_formula(minuend: CellRef, subtrahend: CellRef) -> String {
    format!("={}-{}", minuend.a1(), subtrahend.a1())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> CellRef {
        CellRef::new(row, col).unwrap()
    }

    #[test]
    fn test_growth_formula() {
        // Revenue 2024 sits in F2 and grows from E2
        let formula = growth_formula(cell(1, 4), cell(0, 1));
        assert_eq!(formula, "=E2*(1+'Control Panel'!$B$1)");
    }

    #[test]
    fn test_difference_formula() {
        let formula = difference_formula(cell(6, 5), cell(7, 5));
        assert_eq!(formula, "=F7-F8");
    }

    #[test]
    fn test_growth_formula_past_column_z() {
        let formula = growth_formula(cell(11, 26), cell(0, 1));
        assert_eq!(formula, "=AA12*(1+'Control Panel'!$B$1)");
    }

    #[test]
    fn test_quoted_sheet() {
        assert_eq!(quoted_sheet("Inputs"), "Inputs");
        assert_eq!(quoted_sheet("Control Panel"), "'Control Panel'");
        assert_eq!(quoted_sheet("Bob's"), "'Bob''s'");
    }
}
