//! Banded global alignment
//!
//! This crate computes the edit distance between two strings together with an
//! optimal character-level global alignment, using the classic two-phase
//! dynamic program: fill a cost matrix, then trace back from the finish cell.
//!
//! ## Core idea
//! 1. The [`bounds`] module decides which matrix cells exist and where the
//!    answer is read. In banded mode only cells within `max_indels` of the
//!    main diagonal are computed, so time and space drop from
//!    O(|a|·|b|) to O((|a| + |b|)·max_indels).
//! 2. [`BandedAligner::new`] fills every existing cell, recording the
//!    neighbour that produced its minimum (ties go left, then up, then
//!    diagonal, so alignments are reproducible).
//! 3. [`BandedAligner::alignment`] follows those records back to the origin.
//!
//! ## Quick start
//! ```
//! use banded_align::{AlignerBuilder, LinearCosts};
//!
//! let aligner = AlignerBuilder::new()
//!     .costs(LinearCosts::levenshtein())
//!     .build("aaa", "bbb")?;
//! assert_eq!(aligner.edit_distance()?, 3);
//! assert_eq!(aligner.aligned_sequences()?, ("aaa".to_string(), "bbb".to_string()));
//! # Ok::<(), banded_align::AlignError>(())
//! ```
//!
//! ## Cargo features
//! - `tracing`: spans and events for construction, fill and traceback.
//! - `parallel`: [`batch::align_all`] runs pairs on the rayon thread pool.
//! - `heavy`: long-running stress tests.

pub mod batch;
pub mod bounds;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod scoring;
pub mod traceback;
pub mod traits;
pub mod utils;

pub use crate::builder::AlignerBuilder;
pub use crate::config::{AlignConfig, FinishPolicy};
pub use crate::engine::{align, BandedAligner};
pub use crate::error::{AlignError, Result};
pub use crate::scoring::LinearCosts;
pub use crate::traceback::{AlignOp, Alignment};
pub use crate::traits::CostModel;
