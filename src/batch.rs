//! Aligning many independent pairs.
//!
//! Every pair gets its own [`BandedAligner`](crate::BandedAligner) and matrix,
//! so the work splits cleanly. With the `parallel` feature the pairs are
//! spread over the rayon thread pool; otherwise they run in order. Output
//! order always matches input order.

use crate::config::AlignConfig;
use crate::engine::align;
use crate::error::Result;
use crate::traceback::Alignment;
use crate::traits::CostModel;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub fn align_all<C>(pairs: &[(&str, &str)], config: &AlignConfig<C>) -> Vec<Result<Alignment>>
where
    C: CostModel + Clone + Send + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("align_all", pairs = pairs.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .par_iter()
        .map(|&(a, b)| align(a, b, config.clone()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn align_all<C>(pairs: &[(&str, &str)], config: &AlignConfig<C>) -> Vec<Result<Alignment>>
where
    C: CostModel + Clone,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("align_all", pairs = pairs.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .iter()
        .map(|&(a, b)| align(a, b, config.clone()))
        .collect()
}
