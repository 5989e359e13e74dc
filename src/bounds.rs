//! Band geometry: which cells exist and where the answer is read.
//!
//! Rows follow `seq_b`, columns follow `seq_a`. In unbanded mode every cell of
//! the `(len_b + 1) x (len_a + 1)` table exists. In banded mode with half-width
//! `k`, a cell `(row, col)` exists only when `|row - col| <= k`; row 0 and
//! column 0 are clipped to `k` the same way.

use std::ops::Range;

use crate::config::FinishPolicy;
use crate::error::{AlignError, Result};

/// Matrix coordinate `(row, col)`.
pub type Coord = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    len_a: usize,
    len_b: usize,
    /// Band half-width; `None` in unbanded mode.
    band: Option<usize>,
    finish: Coord,
}

impl Bounds {
    /// Validate the band parameters and compute the finish coordinate.
    ///
    /// `max_indels` is checked even in unbanded mode so that a bad value never
    /// goes unnoticed until someone flips the banded flag.
    pub fn new(
        len_a: usize,
        len_b: usize,
        banded: bool,
        max_indels: i64,
        policy: FinishPolicy,
    ) -> Result<Self> {
        if max_indels < 0 {
            return Err(AlignError::InvalidParameters(format!(
                "max_indels must be non-negative, got {max_indels}"
            )));
        }
        let k = usize::try_from(max_indels).map_err(|_| {
            AlignError::InvalidParameters(format!(
                "max_indels {max_indels} exceeds the addressable range of this platform"
            ))
        })?;

        if !banded {
            return Ok(Self {
                len_a,
                len_b,
                band: None,
                finish: (len_b, len_a),
            });
        }

        let finish = if len_a.abs_diff(len_b) <= k {
            (len_b, len_a)
        } else {
            if policy == FinishPolicy::Strict {
                return Err(AlignError::InvalidParameters(format!(
                    "length difference {} exceeds max_indels {k}; the band cannot reach ({len_b}, {len_a})",
                    len_a.abs_diff(len_b)
                )));
            }
            let clipped = if len_b < len_a {
                (len_b, len_b + k)
            } else {
                (len_a + k, len_a)
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(?clipped, len_a, len_b, k, "finish clipped to band");
            clipped
        };

        Ok(Self {
            len_a,
            len_b,
            band: Some(k),
            finish,
        })
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Interior columns of `row` (those computed by the recurrence).
    ///
    /// The range may be empty; once it is, it stays empty for every later row.
    pub fn columns(&self, row: usize) -> Range<usize> {
        match self.band {
            None => 1..self.len_a + 1,
            Some(k) => {
                let left = row.saturating_sub(k).max(1);
                let right = row.saturating_add(k).saturating_add(1).min(self.len_a + 1);
                left..right
            }
        }
    }

    /// Last column initialised on row 0.
    pub fn row0_limit(&self) -> usize {
        match self.band {
            None => self.len_a,
            Some(k) => k.min(self.len_a),
        }
    }

    /// Last row initialised on column 0.
    pub fn col0_limit(&self) -> usize {
        match self.band {
            None => self.len_b,
            Some(k) => k.min(self.len_b),
        }
    }

    /// Every column stored for `row`: the column-0 cell, if any, followed by
    /// the interior range. Always contiguous.
    pub fn span(&self, row: usize) -> Range<usize> {
        if row == 0 {
            return 0..self.row0_limit() + 1;
        }
        let interior = self.columns(row);
        let has_col0 = row <= self.col0_limit();
        match (has_col0, interior.is_empty()) {
            (true, true) => 0..1,
            (true, false) => 0..interior.end,
            (false, true) => 0..0,
            (false, false) => interior,
        }
    }
}
