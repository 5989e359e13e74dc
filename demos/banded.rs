//! Example: banded alignment of two short sequences.
//!
//! Run with:
//! `cargo run --example banded`

use banded_align::{AlignConfig, BandedAligner, FinishPolicy, LinearCosts};

fn main() -> Result<(), banded_align::AlignError> {
    let a = "acgtacgtacgtacatcgatcgatcgatcagatatatagcgcatagcgatcgtacgtacgcgatatcgtaagatacttctcgagat";
    let b = "satatatacgcgcgtgtgtcacgagctaggagatcgcgatgagcgctcgcgagacacagtatatatatcgagagcgcgatagagta";

    // Rewarding matches, cheap substitutions, expensive gaps.
    let config = AlignConfig::with_costs(LinearCosts::new(-3, 1, 5))
        .banded(3)
        .finish_policy(FinishPolicy::ClipToBand);
    let aligner = BandedAligner::new(a, b, config)?;

    let alignment = aligner.alignment()?;
    println!("edit distance: {}", alignment.edit_distance);
    println!("indels:        {}", alignment.indel_count());
    println!("A': {}", alignment.aligned_a);
    println!("B': {}", alignment.aligned_b);

    let small = BandedAligner::new("GATTACA", "GCATGCU", AlignConfig::default().banded(2))?;
    println!();
    print!("{}", small.debug_dump());
    Ok(())
}
