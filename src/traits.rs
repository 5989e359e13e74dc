//! Scoring seam for the alignment engine.
//!
//! The engine only ever asks two questions of a scoring scheme: what it costs
//! to align one character against another, and what a single gap costs.
//! Implement [`CostModel`] to plug in anything beyond the stock
//! [`LinearCosts`](crate::scoring::LinearCosts), e.g. case-folding or
//! alphabet-specific substitution tables.
//!
//! Costs are minimised, so lower is better. Negative values are allowed (a
//! rewarding match is a negative cost).

/// Linear gap / substitution cost model.
pub trait CostModel {
    /// Cost of aligning `a` (from the column sequence) against `b` (from the
    /// row sequence) in the same alignment column.
    fn pair_cost(&self, a: char, b: char) -> i64;

    /// Cost of a single insertion or deletion.
    fn indel_cost(&self) -> i64;
}
