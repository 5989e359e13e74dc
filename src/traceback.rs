//! Traceback: from the finish cell back to the origin.
//!
//! The filled matrix stores, for every cell, which neighbour produced its
//! cost. Following those steps from the finish coordinate yields one optimal
//! alignment; the tie-break applied during the fill makes it deterministic.

use crate::bounds::Coord;
use crate::error::{AlignError, Result};
use crate::matrix::{CostMatrix, Step};

/// Marker emitted opposite a consumed character.
pub const GAP: char = '-';

/// Kind of one alignment column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignOp {
    Match,
    Substitution,
    /// `seq_b` character against a gap in `seq_a`.
    Insertion,
    /// `seq_a` character against a gap in `seq_b`.
    Deletion,
}

impl AlignOp {
    pub fn is_indel(self) -> bool {
        matches!(self, AlignOp::Insertion | AlignOp::Deletion)
    }
}

/// Result of a traceback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub edit_distance: i64,
    /// `seq_a` with gap markers.
    pub aligned_a: String,
    /// `seq_b` with gap markers.
    pub aligned_b: String,
    pub ops: Vec<AlignOp>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn indel_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_indel()).count()
    }

    pub fn into_pair(self) -> (String, String) {
        (self.aligned_a, self.aligned_b)
    }
}

/// Collect the steps from the origin to `finish`, in forward order.
pub fn trace_steps(matrix: &CostMatrix, finish: Coord) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(finish.0 + finish.1);
    let mut current = finish;
    while current != (0, 0) {
        let (row, col) = current;
        let cell = matrix
            .get(row, col)
            .ok_or(AlignError::MissingCell { row, col })?;
        let step = cell.step.ok_or(AlignError::InvalidTraceback { row, col })?;
        current = step
            .predecessor(current)
            .ok_or(AlignError::InvalidTraceback { row, col })?;
        steps.push(step);
    }
    steps.reverse();
    Ok(steps)
}

/// Coordinates visited by `steps`, starting at the origin.
pub fn walk(steps: &[Step]) -> Vec<Coord> {
    let mut path = Vec::with_capacity(steps.len() + 1);
    let (mut row, mut col) = (0usize, 0usize);
    path.push((row, col));
    for step in steps {
        match step {
            Step::Left => col += 1,
            Step::Up => row += 1,
            Step::Diagonal => {
                row += 1;
                col += 1;
            }
        }
        path.push((row, col));
    }
    path
}

/// Render forward-ordered steps into the two gapped strings.
///
/// Fails with [`AlignError::InvalidTraceback`] at the step that would consume
/// past the end of either sequence.
pub fn render(
    seq_a: &[char],
    seq_b: &[char],
    steps: &[Step],
    edit_distance: i64,
) -> Result<Alignment> {
    let mut aligned_a = String::with_capacity(steps.len());
    let mut aligned_b = String::with_capacity(steps.len());
    let mut ops = Vec::with_capacity(steps.len());
    let (mut row, mut col) = (0usize, 0usize);

    for step in steps {
        let (dr, dc) = match step {
            Step::Left => (0, 1),
            Step::Up => (1, 0),
            Step::Diagonal => (1, 1),
        };
        let (next_row, next_col) = (row + dr, col + dc);
        if next_row > seq_b.len() || next_col > seq_a.len() {
            return Err(AlignError::InvalidTraceback {
                row: next_row,
                col: next_col,
            });
        }
        let ca = if dc == 1 { seq_a[col] } else { GAP };
        let cb = if dr == 1 { seq_b[row] } else { GAP };
        let op = match step {
            Step::Left => AlignOp::Deletion,
            Step::Up => AlignOp::Insertion,
            Step::Diagonal if ca == cb => AlignOp::Match,
            Step::Diagonal => AlignOp::Substitution,
        };
        aligned_a.push(ca);
        aligned_b.push(cb);
        ops.push(op);
        (row, col) = (next_row, next_col);
    }

    Ok(Alignment {
        edit_distance,
        aligned_a,
        aligned_b,
        ops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Cell;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn walk_starts_at_origin() {
        let path = walk(&[Step::Up, Step::Diagonal, Step::Left]);
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn render_places_gaps() {
        let aln = render(
            &chars("ab"),
            &chars("xb"),
            &[Step::Up, Step::Left, Step::Diagonal],
            3,
        )
        .unwrap();
        assert_eq!(aln.aligned_a, "-ab");
        assert_eq!(aln.aligned_b, "x-b");
        assert_eq!(
            aln.ops,
            vec![AlignOp::Insertion, AlignOp::Deletion, AlignOp::Match]
        );
        assert_eq!(aln.indel_count(), 2);
    }

    #[test]
    fn steps_past_the_sequences_are_invalid() {
        assert_eq!(
            render(&chars("a"), &chars(""), &[Step::Diagonal], 0),
            Err(AlignError::InvalidTraceback { row: 1, col: 1 })
        );
        assert_eq!(
            render(&chars("ab"), &chars("x"), &[Step::Left, Step::Up, Step::Up], 3),
            Err(AlignError::InvalidTraceback { row: 2, col: 1 })
        );
    }

    #[test]
    fn missing_predecessor_is_invalid() {
        let mut m = CostMatrix::new(2, vec![0..1, 0..2]);
        m.set(0, 0, Cell::ORIGIN);
        m.set(1, 1, Cell { cost: 1, step: None });
        assert_eq!(
            trace_steps(&m, (1, 1)),
            Err(AlignError::InvalidTraceback { row: 1, col: 1 })
        );
    }

    #[test]
    fn step_off_the_edge_is_invalid() {
        let mut m = CostMatrix::new(2, vec![0..2]);
        m.set(0, 0, Cell::ORIGIN);
        m.set(0, 1, Cell { cost: 1, step: Some(Step::Up) });
        assert_eq!(
            trace_steps(&m, (0, 1)),
            Err(AlignError::InvalidTraceback { row: 0, col: 1 })
        );
    }

    #[test]
    fn broken_chain_reports_missing_cell() {
        let mut m = CostMatrix::new(3, vec![0..1, 0..3]);
        m.set(0, 0, Cell::ORIGIN);
        m.set(1, 2, Cell { cost: 2, step: Some(Step::Left) });
        assert_eq!(
            trace_steps(&m, (1, 2)),
            Err(AlignError::MissingCell { row: 1, col: 1 })
        );
    }
}
