//! Golden values for the wiki kernel.
//!
//! The three-way search has no clean postcondition for a miss: the returned
//! index is whatever slot the last branch left `b` on. These tests pin that
//! behavior — index and comparison count — with hand-traced values, so any
//! drift in the loop shows up as a golden failure rather than a silent
//! semantic change. Present-key comparison counts are pinned here too, since
//! the early break makes them path-dependent.

use bisect_kernel::kernels::wiki_search;
use bisect_kernel::oracle::Oracle;

/// Run the kernel silently and return (computed index, comparisons).
///
/// The oracle is fed the golden index, so a disagreement shows up as a
/// recorded mismatch; the comparison count is asserted by the caller.
fn probe(values: &[i64], key: i64, golden_index: usize) -> u64 {
    let mut oracle = Oracle::silent();
    let comparisons = wiki_search(values, key, golden_index, &mut oracle);
    assert!(
        oracle.is_clean(),
        "wiki drifted from golden index {golden_index} on {values:?} key {key}: {:?}",
        oracle.mismatches()
    );
    comparisons
}

// ---------------------------------------------------------------------------
// Miss-case goldens (hand-traced)
// ---------------------------------------------------------------------------

#[test]
fn miss_inside_a_gap() {
    // [0,1,3,4] key 2: b moves past 1, then 3 rejects on both branches.
    assert_eq!(probe(&[0, 1, 3, 4], 2, 2), 3);
}

#[test]
fn miss_above_the_range_walks_b_one_past_end() {
    // Every probe takes the single-comparison `<` branch.
    assert_eq!(probe(&[0, 1, 3, 4], 9, 4), 3);
}

#[test]
fn miss_below_the_range_pays_both_comparisons_per_level() {
    // Every probe takes the two-comparison `>` branch down to e = -1.
    assert_eq!(probe(&[0, 1, 3, 4], -5, 0), 4);
}

#[test]
fn misses_between_sparse_elements() {
    let values = [0, 2, 4, 6, 8];
    assert_eq!(probe(&values, 3, 2), 4);
    assert_eq!(probe(&values, 5, 3), 3);
    assert_eq!(probe(&values, 7, 4), 4);
}

#[test]
fn singleton_misses() {
    assert_eq!(probe(&[5], 1, 0), 2);
    assert_eq!(probe(&[5], 9, 1), 1);
}

// ---------------------------------------------------------------------------
// Present-key comparison-count goldens
// ---------------------------------------------------------------------------

#[test]
fn match_at_the_first_midpoint_costs_one_level() {
    // k = 2 on the first iteration; equality pays both comparisons, once.
    assert_eq!(probe(&[0, 1, 2, 3, 4], 2, 2), 2);
}

#[test]
fn match_reached_through_both_branch_kinds() {
    // Key 1: shrink right (2 cmp), advance then match (3 more).
    assert_eq!(probe(&[0, 1, 2, 3, 4], 1, 1), 5);
    // Key 3: advance left (1 cmp), then match at the new midpoint (2 more).
    assert_eq!(probe(&[0, 1, 2, 3, 4], 3, 3), 3);
}

#[test]
fn empty_array_never_enters_the_loop() {
    assert_eq!(probe(&[], 7, 0), 0);
}
