//! Sweep acceptance locks.
//!
//! - Zero-mismatch lock: every kernel agrees with fixture ground truth over
//!   the whole size range.
//! - Determinism: two sweeps of the same range produce equal reports and
//!   byte-identical tables.
//! - Golden table: sizes 1 and 2 hand-traced per kernel, per mode, per key.
//! - Logarithmic growth: per-size averages stay inside the level budget.

use bisect_harness::report::SweepReportV1;
use bisect_harness::sweep::{run_sweep_with, SweepConfig};
use bisect_kernel::oracle::Oracle;
use bisect_kernel::registry::KernelId;

fn silent_sweep(min_size: usize, max_size: usize) -> SweepReportV1 {
    let config = SweepConfig { min_size, max_size };
    run_sweep_with(&config, Oracle::silent()).expect("sweep range is valid")
}

// ---------------------------------------------------------------------------
// Zero-mismatch lock
// ---------------------------------------------------------------------------

#[test]
fn full_sweep_records_zero_mismatches() {
    let report = silent_sweep(1, 128);
    assert_eq!(
        report.mismatch_count(),
        0,
        "kernels disagreed with ground truth: {:?}",
        report.mismatches
    );
    assert_eq!(report.rows.len(), 127);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_sweeps_are_identical() {
    let first = silent_sweep(1, 64);
    let second = silent_sweep(1, 64);
    assert_eq!(first, second, "sweep reports differ across runs");
    assert_eq!(
        first.render_table(),
        second.render_table(),
        "rendered tables differ across runs"
    );
}

// ---------------------------------------------------------------------------
// Golden table for sizes 1 and 2
// ---------------------------------------------------------------------------

#[test]
fn sizes_one_and_two_match_the_hand_traced_golden() {
    // Size 1 probes [0] and [1] (gap at 0) with key 0; size 2 probes [0,1]
    // and [0,2] (gap at 1) with keys 0 and 1. Comparison counts per kernel
    // were traced by hand from the loop definitions.
    let expected = "\
 size      classic classic-find         wiki          new new-unsigned     leftmost
    1          1.0          0.0          2.0          1.0          1.0          1.0
    2          2.0          1.0          2.5          1.5          1.5          2.0
total           10            4           14            8            8           10
classic less 1 equal 4 more 1
";
    let report = silent_sweep(1, 3);
    assert_eq!(report.render_table(), expected);
    assert_eq!(report.totals, [10, 4, 14, 8, 8, 10]);
    assert_eq!(report.tally.less, 1);
    assert_eq!(report.tally.equal, 4);
    assert_eq!(report.tally.more, 1);
}

#[test]
fn golden_totals_survive_the_json_artifact() {
    let value = silent_sweep(1, 3).to_json_value();
    assert_eq!(value["totals"]["classic"], 10);
    assert_eq!(value["totals"]["classic-find"], 4);
    assert_eq!(value["totals"]["wiki"], 14);
    assert_eq!(value["totals"]["new"], 8);
    assert_eq!(value["totals"]["new-unsigned"], 8);
    assert_eq!(value["totals"]["leftmost"], 10);
    assert_eq!(value["mismatch_count"], 0);
}

// ---------------------------------------------------------------------------
// Logarithmic growth
// ---------------------------------------------------------------------------

/// Per-probe comparison ceiling: two comparisons per halving level plus one
/// closing level.
fn level_budget(size: usize) -> f64 {
    let levels = f64::from(usize::BITS - size.leading_zeros()) + 1.0;
    2.0 * levels
}

#[test]
fn averages_grow_logarithmically() {
    let report = silent_sweep(2, 257);
    for row in &report.rows {
        let budget = level_budget(row.size);
        for kernel in KernelId::ALL {
            let average = row.averages[kernel.index()];
            assert!(
                average <= budget,
                "{kernel} averages {average} at size {} (budget {budget})",
                row.size
            );
        }
    }

    // Averages must actually rise with size, for every kernel.
    let small = &report.rows[0];
    let large = report.rows.last().expect("range is non-empty");
    for kernel in KernelId::ALL {
        assert!(
            large.averages[kernel.index()] > small.averages[kernel.index()],
            "{kernel} average did not grow from size {} to {}",
            small.size,
            large.size
        );
    }
}
