//! The banded alignment engine.
//!
//! Construction runs both the bounds calculation and the matrix fill; the
//! finished matrix is immutable and owned by the [`BandedAligner`]. Queries
//! (distance, traceback, dump) only read it.

use crate::bounds::{Bounds, Coord};
use crate::config::AlignConfig;
use crate::error::{AlignError, Result};
use crate::matrix::{Cell, CostMatrix, Step};
use crate::scoring::LinearCosts;
use crate::traceback::{self, Alignment};
use crate::traits::CostModel;

/// Edit distance and optimal global alignment of two sequences.
///
/// `seq_a` indexes matrix columns, `seq_b` matrix rows.
///
/// ```
/// use banded_align::{AlignConfig, BandedAligner};
///
/// let aligner = BandedAligner::new("kitten", "sitting", AlignConfig::default().banded(2))?;
/// assert_eq!(aligner.edit_distance()?, 3);
/// let (a, b) = aligner.aligned_sequences()?;
/// assert_eq!(a.len(), b.len());
/// # Ok::<(), banded_align::AlignError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BandedAligner<C: CostModel = LinearCosts> {
    seq_a: Vec<char>,
    seq_b: Vec<char>,
    config: AlignConfig<C>,
    bounds: Bounds,
    matrix: CostMatrix,
}

impl<C: CostModel> BandedAligner<C> {
    /// Validate the configuration, locate the finish cell and fill the matrix.
    ///
    /// # Errors
    /// [`AlignError::InvalidParameters`] for a negative `max_indels`, when
    /// banded mode cannot reach the corner under
    /// [`FinishPolicy::Strict`](crate::FinishPolicy::Strict), or when the
    /// costs overflow `i64`.
    pub fn new(seq_a: &str, seq_b: &str, config: AlignConfig<C>) -> Result<Self> {
        let seq_a: Vec<char> = seq_a.chars().collect();
        let seq_b: Vec<char> = seq_b.chars().collect();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "banded_align",
            len_a = seq_a.len(),
            len_b = seq_b.len(),
            banded = config.banded
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let bounds = Bounds::new(
            seq_a.len(),
            seq_b.len(),
            config.banded,
            config.max_indels,
            config.finish,
        )?;
        let matrix = fill_matrix(&seq_a, &seq_b, &bounds, &config.costs)?;

        Ok(Self {
            seq_a,
            seq_b,
            config,
            bounds,
            matrix,
        })
    }

    /// Cost at the finish coordinate.
    pub fn edit_distance(&self) -> Result<i64> {
        let (row, col) = self.bounds.finish();
        self.cost_at(row, col)
    }

    /// Cost of an arbitrary cell.
    ///
    /// # Errors
    /// [`AlignError::MissingCell`] if the cell lies outside the band or in a
    /// row the fill never reached.
    pub fn cost_at(&self, row: usize, col: usize) -> Result<i64> {
        self.matrix
            .get(row, col)
            .map(|cell| cell.cost)
            .ok_or(AlignError::MissingCell { row, col })
    }

    /// The two gapped strings `(seq_a', seq_b')`.
    pub fn aligned_sequences(&self) -> Result<(String, String)> {
        self.alignment().map(Alignment::into_pair)
    }

    /// Full traceback result: distance, gapped strings and column operations.
    pub fn alignment(&self) -> Result<Alignment> {
        let finish = self.bounds.finish();

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("traceback", row = finish.0, col = finish.1);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let distance = self.edit_distance()?;
        let steps = traceback::trace_steps(&self.matrix, finish)?;
        traceback::render(&self.seq_a, &self.seq_b, &steps, distance)
    }

    /// Cells visited by the optimal alignment, from `(0, 0)` to the finish.
    pub fn path(&self) -> Result<Vec<Coord>> {
        let steps = traceback::trace_steps(&self.matrix, self.bounds.finish())?;
        Ok(traceback::walk(&steps))
    }

    /// Human-readable grid of costs, `_` for cells that do not exist.
    ///
    /// For diagnostics only; the format is not stable.
    pub fn debug_dump(&self) -> String {
        self.matrix.to_string()
    }

    pub fn finish(&self) -> Coord {
        self.bounds.finish()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &AlignConfig<C> {
        &self.config
    }
}

/// One-shot convenience: build an aligner and run the traceback.
pub fn align<C: CostModel>(seq_a: &str, seq_b: &str, config: AlignConfig<C>) -> Result<Alignment> {
    BandedAligner::new(seq_a, seq_b, config)?.alignment()
}

/// Populate every in-band cell, row by row, left to right.
///
/// Fails with [`AlignError::InvalidParameters`] if a cost leaves the `i64`
/// range.
fn fill_matrix<C: CostModel>(
    seq_a: &[char],
    seq_b: &[char],
    bounds: &Bounds,
    costs: &C,
) -> Result<CostMatrix> {
    let rows = seq_b.len() + 1;

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("fill_matrix", rows, cols = seq_a.len() + 1);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let spans = (0..rows).map(|row| bounds.span(row)).collect();
    let mut matrix = CostMatrix::new(seq_a.len() + 1, spans);
    let indel = costs.indel_cost();

    matrix.set(0, 0, Cell::ORIGIN);
    for col in 1..=bounds.row0_limit() {
        let cost = indel
            .checked_mul(col as i64)
            .ok_or_else(|| overflow(0, col))?;
        matrix.set(0, col, Cell { cost, step: Some(Step::Left) });
    }
    for row in 1..=bounds.col0_limit() {
        let cost = indel
            .checked_mul(row as i64)
            .ok_or_else(|| overflow(row, 0))?;
        matrix.set(row, 0, Cell { cost, step: Some(Step::Up) });
    }

    for row in 1..rows {
        let columns = bounds.columns(row);
        if columns.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(row, "band collapsed, remaining rows left unfilled");
            break;
        }
        for col in columns {
            if let Some(cell) = relax(&matrix, row, col, seq_a, seq_b, costs)? {
                matrix.set(row, col, cell);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        filled = matrix.filled_len(),
        capacity = matrix.capacity(),
        "matrix filled"
    );

    Ok(matrix)
}

fn overflow(row: usize, col: usize) -> AlignError {
    AlignError::InvalidParameters(format!("cost overflows i64 at cell ({row}, {col})"))
}

/// Cheapest way into `(row, col)` from its existing neighbours.
///
/// Neighbours are tried left, up, diagonal; a later one only wins on a
/// strictly lower cost.
#[inline]
fn relax<C: CostModel>(
    matrix: &CostMatrix,
    row: usize,
    col: usize,
    seq_a: &[char],
    seq_b: &[char],
    costs: &C,
) -> Result<Option<Cell>> {
    let extend = |from: Option<&Cell>, add: i64| {
        from.map(|c| c.cost.checked_add(add).ok_or_else(|| overflow(row, col)))
            .transpose()
    };
    let indel = costs.indel_cost();
    let pair = costs.pair_cost(seq_a[col - 1], seq_b[row - 1]);
    let candidates = [
        (Step::Left, extend(matrix.get(row, col - 1), indel)?),
        (Step::Up, extend(matrix.get(row - 1, col), indel)?),
        (Step::Diagonal, extend(matrix.get(row - 1, col - 1), pair)?),
    ];

    let mut best: Option<Cell> = None;
    for (step, cost) in candidates {
        let Some(cost) = cost else { continue };
        if best.map_or(true, |b| cost < b.cost) {
            best = Some(Cell {
                cost,
                step: Some(step),
            });
        }
    }
    Ok(best)
}
