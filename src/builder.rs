use crate::config::{AlignConfig, FinishPolicy};
use crate::engine::BandedAligner;
use crate::error::Result;
use crate::scoring::LinearCosts;
use crate::traits::CostModel;

pub struct AlignerBuilder<C: CostModel = LinearCosts> {
    config: AlignConfig<C>,
}

impl AlignerBuilder<LinearCosts> {
    pub fn new() -> Self {
        Self {
            config: AlignConfig::default(),
        }
    }
}

impl Default for AlignerBuilder<LinearCosts> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CostModel> AlignerBuilder<C> {
    pub fn from_config(config: AlignConfig<C>) -> Self {
        Self { config }
    }
    pub fn banded(mut self, max_indels: i64) -> Self {
        self.config = self.config.banded(max_indels);
        self
    }
    pub fn unbanded(mut self) -> Self {
        self.config = self.config.unbanded();
        self
    }
    pub fn finish_policy(mut self, finish: FinishPolicy) -> Self {
        self.config = self.config.finish_policy(finish);
        self
    }
    pub fn costs<D: CostModel>(self, costs: D) -> AlignerBuilder<D> {
        let AlignConfig {
            banded,
            max_indels,
            finish,
            ..
        } = self.config;
        AlignerBuilder {
            config: AlignConfig {
                banded,
                max_indels,
                costs,
                finish,
            },
        }
    }
    pub fn config(&self) -> &AlignConfig<C> {
        &self.config
    }
    pub fn build(self, seq_a: &str, seq_b: &str) -> Result<BandedAligner<C>> {
        BandedAligner::new(seq_a, seq_b, self.config)
    }
}
