//! Stock cost model: fixed match, substitution and indel costs.

use crate::traits::CostModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearCosts {
    pub match_cost: i64,
    pub sub_cost: i64,
    pub indel_cost: i64,
}

impl LinearCosts {
    pub fn new(match_cost: i64, sub_cost: i64, indel_cost: i64) -> Self {
        Self {
            match_cost,
            sub_cost,
            indel_cost,
        }
    }

    /// Unit costs: the classical Levenshtein distance.
    pub fn levenshtein() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for LinearCosts {
    fn default() -> Self {
        Self::levenshtein()
    }
}

impl CostModel for LinearCosts {
    #[inline]
    fn pair_cost(&self, a: char, b: char) -> i64 {
        if a == b {
            self.match_cost
        } else {
            self.sub_cost
        }
    }

    #[inline]
    fn indel_cost(&self) -> i64 {
        self.indel_cost
    }
}
