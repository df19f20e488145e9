//! Sheet layout
//!
//! The statements are stacked vertically on one sheet. Each block is a
//! header row (section title and year labels) followed by its metric rows,
//! and blocks are separated by a fixed number of blank rows. All row and
//! column positions used by the writer come from here.

use tracing::debug;

use crate::error::{FinModelError, FinModelResult};
use crate::models::{CellRef, FinancialModel, StatementKind, MAX_COLUMNS, MAX_ROWS};

/// Column holding section titles and metric names (B)
pub const LABEL_COLUMN: usize = 1;

/// Blank rows between consecutive blocks
pub const BLOCK_GAP: usize = 1;

/// Rows above a block's metrics (the header row)
pub const HEADER_ROWS: usize = 1;

/// Position of one statement block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub kind: StatementKind,
    /// Row of the section title and year labels
    pub header_row: usize,
    /// Number of metric rows
    pub metric_rows: usize,
}

impl BlockLayout {
    /// Sheet row of the metric at `index` within the block
    pub fn metric_row(&self, index: usize) -> usize {
        self.header_row + HEADER_ROWS + index
    }

    /// Rows occupied by the block, header included
    pub fn height(&self) -> usize {
        HEADER_ROWS + self.metric_rows
    }

    /// First row after the block and its trailing gap
    pub fn next_start(&self) -> usize {
        self.header_row + self.height() + BLOCK_GAP
    }
}

/// Named offsets for every block on the statements sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    blocks: Vec<BlockLayout>,
    year_columns: usize,
}

impl SheetLayout {
    /// Compute block offsets from each block's metric row count
    ///
    /// Block N starts at the sum of `height + BLOCK_GAP` over blocks 0..N.
    ///
    /// # Errors
    ///
    /// Returns a range error if the last row or column would fall outside
    /// the sheet.
    pub fn compute(blocks: &[(StatementKind, usize)], year_columns: usize) -> FinModelResult<Self> {
        let mut layout = Vec::with_capacity(blocks.len());
        let mut start = 0;

        for &(kind, metric_rows) in blocks {
            let block = BlockLayout {
                kind,
                header_row: start,
                metric_rows,
            };
            start = block.next_start();
            layout.push(block);
        }

        let layout = Self {
            blocks: layout,
            year_columns,
        };

        if let Some(last) = layout.blocks.last() {
            let last_row = last.header_row + last.height() - 1;
            if last_row >= MAX_ROWS as usize {
                return Err(FinModelError::row_out_of_range(
                    last_row as u64,
                    MAX_ROWS as u64,
                ));
            }
        }
        if layout.last_column() >= MAX_COLUMNS as usize {
            return Err(FinModelError::column_out_of_range(
                layout.last_column() as u64,
                MAX_COLUMNS as u64,
            ));
        }

        debug!(
            blocks = ?layout.blocks.iter().map(|b| b.header_row).collect::<Vec<_>>(),
            last_column = layout.last_column(),
            "Computed sheet layout"
        );

        Ok(layout)
    }

    /// Layout for the statements of a model, in model order
    pub fn for_model(model: &FinancialModel) -> FinModelResult<Self> {
        let blocks: Vec<_> = model
            .statements
            .iter()
            .map(|s| (s.kind, s.row_count()))
            .collect();
        Self::compute(&blocks, model.years.len())
    }

    /// All blocks in sheet order
    pub fn blocks(&self) -> &[BlockLayout] {
        &self.blocks
    }

    /// Block of a given statement
    pub fn block(&self, kind: StatementKind) -> Option<&BlockLayout> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    /// Sheet column of the year at `index` (C for the first year)
    pub fn year_column(&self, index: usize) -> usize {
        LABEL_COLUMN + 1 + index
    }

    /// Rightmost column in use
    pub fn last_column(&self) -> usize {
        LABEL_COLUMN + self.year_columns
    }

    /// Checked reference to a cell of the layout
    pub fn cell(&self, row: usize, col: usize) -> FinModelResult<CellRef> {
        CellRef::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_BY_THREE: [(StatementKind, usize); 3] = [
        (StatementKind::IncomeStatement, 3),
        (StatementKind::BalanceSheet, 3),
        (StatementKind::CashFlowStatement, 3),
    ];

    #[test]
    fn test_default_block_offsets() {
        let layout = SheetLayout::compute(&THREE_BY_THREE, 13).unwrap();
        let starts: Vec<_> = layout.blocks().iter().map(|b| b.header_row).collect();
        assert_eq!(starts, vec![0, 5, 10]);

        let income = layout.block(StatementKind::IncomeStatement).unwrap();
        assert_eq!(income.metric_row(0), 1);
        assert_eq!(income.metric_row(2), 3);
    }

    #[test]
    fn test_start_is_sum_of_preceding_blocks() {
        let blocks = [
            (StatementKind::IncomeStatement, 4),
            (StatementKind::BalanceSheet, 2),
            (StatementKind::CashFlowStatement, 7),
        ];
        let layout = SheetLayout::compute(&blocks, 5).unwrap();

        let mut expected = 0;
        for (block, &(_, rows)) in layout.blocks().iter().zip(&blocks) {
            assert_eq!(block.header_row, expected);
            expected += HEADER_ROWS + rows + BLOCK_GAP;
        }
    }

    #[test]
    fn test_growing_a_block_shifts_later_blocks() {
        let before = SheetLayout::compute(&THREE_BY_THREE, 5).unwrap();

        let mut grown = THREE_BY_THREE;
        grown[0].1 += 2;
        let after = SheetLayout::compute(&grown, 5).unwrap();

        assert_eq!(after.blocks()[0].header_row, before.blocks()[0].header_row);
        assert_eq!(after.blocks()[1].header_row, before.blocks()[1].header_row + 2);
        assert_eq!(after.blocks()[2].header_row, before.blocks()[2].header_row + 2);
    }

    #[test]
    fn test_year_columns() {
        let layout = SheetLayout::compute(&THREE_BY_THREE, 5).unwrap();
        assert_eq!(layout.year_column(0), 2);
        assert_eq!(layout.last_column(), 6);
    }

    #[test]
    fn test_too_many_columns() {
        let err = SheetLayout::compute(&THREE_BY_THREE, MAX_COLUMNS as usize).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_too_many_rows() {
        let blocks = [(StatementKind::IncomeStatement, MAX_ROWS as usize)];
        let err = SheetLayout::compute(&blocks, 3).unwrap_err();
        assert!(err.is_range());
    }
}
