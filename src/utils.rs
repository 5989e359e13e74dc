//! Assorted helpers for inspecting alignments.

use crate::bounds::Coord;
use crate::traceback::GAP;

/// Drop gap markers, recovering the original sequence.
pub fn strip_gaps(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != GAP).collect()
}

/// Largest `|row - col|` along a path; a path fits a band of half-width `k`
/// iff this is at most `k`.
pub fn max_diagonal_offset(path: &[Coord]) -> usize {
    path.iter()
        .map(|&(row, col)| row.abs_diff(col))
        .max()
        .unwrap_or(0)
}
