//! Engine configuration.

use crate::scoring::LinearCosts;
use crate::traits::CostModel;

/// Band half-width used when none is given.
pub const DEFAULT_MAX_INDELS: i64 = 3;

/// What to do when banded mode cannot reach the bottom-right corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinishPolicy {
    /// Reject the inputs with [`AlignError::InvalidParameters`](crate::AlignError).
    #[default]
    Strict,
    /// Finish at the far edge of the band instead: the shorter sequence is
    /// aligned in full against a prefix of the longer one.
    ClipToBand,
}

/// Everything the engine needs besides the two sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignConfig<C: CostModel = LinearCosts> {
    pub banded: bool,
    /// Band half-width, and the indel budget the band is sized for.
    /// Ignored by the fill in unbanded mode, but still validated.
    pub max_indels: i64,
    pub costs: C,
    pub finish: FinishPolicy,
}

impl Default for AlignConfig<LinearCosts> {
    fn default() -> Self {
        Self::with_costs(LinearCosts::default())
    }
}

impl<C: CostModel> AlignConfig<C> {
    /// Unbanded configuration with the given cost model.
    pub fn with_costs(costs: C) -> Self {
        Self {
            banded: false,
            max_indels: DEFAULT_MAX_INDELS,
            costs,
            finish: FinishPolicy::Strict,
        }
    }

    pub fn banded(mut self, max_indels: i64) -> Self {
        self.banded = true;
        self.max_indels = max_indels;
        self
    }

    pub fn unbanded(mut self) -> Self {
        self.banded = false;
        self
    }

    pub fn finish_policy(mut self, finish: FinishPolicy) -> Self {
        self.finish = finish;
        self
    }
}
