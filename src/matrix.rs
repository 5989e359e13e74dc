//! Flat storage for the banded cost matrix.
//!
//! Each row owns one contiguous span of columns (see
//! [`Bounds::span`](crate::bounds::Bounds::span)); spans are laid out row-major
//! in a single `Vec`, addressed through a per-row offset. A parallel bitmap
//! records which slots were actually written, so "does this cell exist" is a
//! span check plus a bit test.

use std::fmt;
use std::ops::Range;

use bit_set::BitSet;

use crate::bounds::Coord;

/// Width of one cell in the diagnostic dump.
const DUMP_CELL_WIDTH: usize = 7;

/// Which neighbour a cell's cost was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// From `(row, col - 1)`: `seq_a` consumed against a gap.
    Left,
    /// From `(row - 1, col)`: `seq_b` consumed against a gap.
    Up,
    /// From `(row - 1, col - 1)`: one character of each.
    Diagonal,
}

impl Step {
    /// Coordinate this step came from, or `None` if it would leave the matrix.
    #[inline]
    pub fn predecessor(self, (row, col): Coord) -> Option<Coord> {
        match self {
            Step::Left => Some((row, col.checked_sub(1)?)),
            Step::Up => Some((row.checked_sub(1)?, col)),
            Step::Diagonal => Some((row.checked_sub(1)?, col.checked_sub(1)?)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub cost: i64,
    /// `None` only at the origin.
    pub step: Option<Step>,
}

impl Cell {
    pub const ORIGIN: Cell = Cell {
        cost: 0,
        step: None,
    };
}

#[derive(Clone, Debug)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    spans: Vec<Range<usize>>,
    offsets: Vec<usize>,
    cells: Vec<Cell>,
    filled: BitSet,
}

impl CostMatrix {
    /// Allocate storage for `spans.len()` rows of a table `cols` wide.
    pub fn new(cols: usize, spans: Vec<Range<usize>>) -> Self {
        let mut offsets = Vec::with_capacity(spans.len());
        let mut total = 0usize;
        for span in &spans {
            debug_assert!(span.end <= cols, "span {span:?} exceeds width {cols}");
            offsets.push(total);
            total += span.len();
        }
        Self {
            rows: spans.len(),
            cols,
            spans,
            offsets,
            // placeholder; `filled` decides whether a slot exists
            cells: vec![Cell::ORIGIN; total],
            filled: BitSet::with_capacity(total),
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let span = self.spans.get(row)?;
        if span.contains(&col) {
            Some(self.offsets[row] + (col - span.start))
        } else {
            None
        }
    }

    /// The cell at `(row, col)`, if it was filled.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        let idx = self.index(row, col)?;
        self.filled.contains(idx).then(|| &self.cells[idx])
    }

    /// Write a cell. Coordinates outside the row's span are ignored.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(self.index(row, col).is_some(), "({row}, {col}) outside band");
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = cell;
            self.filled.insert(idx);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of slots reserved for the band envelope.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells actually written.
    pub fn filled_len(&self) -> usize {
        self.filled.len()
    }
}

/// Grid of costs, `_` where no cell exists. Diagnostic only; the layout may
/// change.
impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.get(row, col) {
                    Some(cell) => write!(f, "{:<w$}", cell.cost, w = DUMP_CELL_WIDTH)?,
                    None => write!(f, "{:<w$}", "_", w = DUMP_CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
