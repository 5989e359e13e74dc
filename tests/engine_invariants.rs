use banded_align::{
    AlignConfig, AlignError, AlignOp, AlignerBuilder, BandedAligner, FinishPolicy, LinearCosts,
};
use proptest::prelude::*;

fn unit() -> AlignConfig {
    AlignConfig::with_costs(LinearCosts::new(0, 1, 1))
}

#[test]
fn disjoint_alphabets_are_three_substitutions() {
    for banded in [false, true] {
        let cfg = if banded { unit().banded(3) } else { unit() };
        let aligner = BandedAligner::new("aaa", "bbb", cfg).unwrap();
        assert_eq!(aligner.edit_distance().unwrap(), 3);
        let aln = aligner.alignment().unwrap();
        assert_eq!(aln.aligned_a, "aaa");
        assert_eq!(aln.aligned_b, "bbb");
        assert_eq!(aln.ops, vec![AlignOp::Substitution; 3]);
    }
}

#[test]
fn pure_insertion_into_empty() {
    let aligner = BandedAligner::new("", "abc", unit()).unwrap();
    assert_eq!(aligner.edit_distance().unwrap(), 3);
    assert_eq!(
        aligner.aligned_sequences().unwrap(),
        ("---".to_string(), "abc".to_string())
    );

    let aligner = BandedAligner::new("abc", "", unit().banded(3)).unwrap();
    assert_eq!(aligner.edit_distance().unwrap(), 3);
    assert_eq!(
        aligner.aligned_sequences().unwrap(),
        ("abc".to_string(), "---".to_string())
    );
}

#[test]
fn banded_boundary_fails_at_construction() {
    let err = BandedAligner::new("ACGT", "ACGTACGT", unit().banded(3)).unwrap_err();
    assert!(matches!(err, AlignError::InvalidParameters(_)));
}

#[test]
fn negative_max_indels_is_invalid() {
    let err = AlignerBuilder::new()
        .banded(-1)
        .build("abc", "abc")
        .unwrap_err();
    assert!(matches!(err, AlignError::InvalidParameters(_)));
}

#[test]
fn reads_outside_the_band_are_missing_cells() {
    let aligner = BandedAligner::new("ACGTACGT", "ACGTACGT", unit().banded(1)).unwrap();
    assert!(aligner.cost_at(4, 4).is_ok());
    assert_eq!(
        aligner.cost_at(0, 5),
        Err(AlignError::MissingCell { row: 0, col: 5 })
    );
    assert_eq!(
        aligner.cost_at(7, 2),
        Err(AlignError::MissingCell { row: 7, col: 2 })
    );
    assert_eq!(
        aligner.cost_at(9, 9),
        Err(AlignError::MissingCell { row: 9, col: 9 })
    );
}

#[test]
fn banded_storage_tracks_the_envelope() {
    let n = 200;
    let s: String = "ACGT".chars().cycle().take(n).collect();
    let full = BandedAligner::new(&s, &s, unit()).unwrap();
    let banded = BandedAligner::new(&s, &s, unit().banded(4)).unwrap();
    assert_eq!(full.matrix().capacity(), (n + 1) * (n + 1));
    assert!(banded.matrix().capacity() <= (n + 1) * 9);
    assert_eq!(banded.matrix().filled_len(), banded.matrix().capacity());
}

#[test]
fn debug_dump_covers_full_grid() {
    let aligner = BandedAligner::new("ACGTA", "ACG", unit().banded(2)).unwrap();
    let dump = aligner.debug_dump();
    let grid: Vec<Vec<&str>> = dump.lines().map(|l| l.split_whitespace().collect()).collect();
    assert_eq!(grid.len(), aligner.matrix().rows());
    assert!(grid.iter().all(|row| row.len() == aligner.matrix().cols()));
    assert_eq!((aligner.matrix().rows(), aligner.matrix().cols()), (4, 6));
    assert_eq!(grid[0], vec!["0", "1", "2", "_", "_", "_"]);
    assert_eq!(grid[3][5], "2");
}

#[test]
fn clip_policy_is_opt_in() {
    let strict = BandedAligner::new("ACGTACGT", "ACG", unit().banded(2));
    assert!(strict.is_err());
    let clipped = BandedAligner::new(
        "ACGTACGT",
        "ACG",
        unit().banded(2).finish_policy(FinishPolicy::ClipToBand),
    )
    .unwrap();
    assert_eq!(clipped.finish(), (3, 5));
    assert_eq!(clipped.edit_distance().unwrap(), 2);
}

proptest! {
    #[test]
    fn identity_has_zero_cost(a in "[ACGT]{0,16}", k in 0i64..4) {
        for cfg in [unit(), unit().banded(k)] {
            let aligner = BandedAligner::new(&a, &a, cfg).unwrap();
            prop_assert_eq!(aligner.edit_distance().unwrap(), 0);
            let (x, y) = aligner.aligned_sequences().unwrap();
            prop_assert_eq!(&x, &a);
            prop_assert_eq!(&y, &a);
        }
    }

    #[test]
    fn construction_is_deterministic(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}") {
        let first = BandedAligner::new(&a, &b, unit()).unwrap().alignment().unwrap();
        let second = BandedAligner::new(&a, &b, unit()).unwrap().alignment().unwrap();
        prop_assert_eq!(first, second);
    }
}
