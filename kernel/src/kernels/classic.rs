//! Classic half-open binary search: invariant loop plus a correction step.

use crate::oracle::Oracle;
use crate::tally::ClassifyTallyV1;

/// Registry name of the correcting variant.
pub const CLASSIC: &str = "classic";

/// Registry name of the find-only variant.
pub const CLASSIC_FIND: &str = "classic-find";

/// Half-open search maintaining `array[b] <= key < array[e]`, with `array[len]`
/// read as +∞, followed by one counted correction comparison.
///
/// The loop runs while `e - b > 1`. Using `b < e` here is the classic
/// mistake: with `e == b + 1` and `key >= array[b]` the window never
/// shrinks. With a gap above 1 the midpoint falls strictly between the
/// bounds, so one of them always moves.
///
/// The converged slot may still sit below the key; the correction step
/// compares once more and advances `b` so the result is the leftmost index
/// with `array[b] >= key`. Before correcting, the slot's relation to the key
/// is recorded in `tally` (audit only — not a counted comparison).
///
/// The empty array returns insertion index 0 with 0 comparisons; there is no
/// slot to classify or correct.
///
/// Returns the element-comparison count; the computed index goes to `oracle`.
pub fn classic_search(
    array: &[i64],
    key: i64,
    expected: usize,
    oracle: &mut Oracle,
    tally: &mut ClassifyTallyV1,
) -> u64 {
    if array.is_empty() {
        oracle.check(CLASSIC, key, 0, expected, array);
        return 0;
    }

    let mut b: usize = 0;
    let mut e: usize = array.len();
    let mut comparisons: u64 = 0;

    while e - b > 1 {
        let k = (b + e) >> 1;
        comparisons += 1;
        if key < array[k] {
            e = k; // key < array[e]
        } else {
            b = k; // array[b] <= key
        }
    }

    tally.classify(array[b], key);

    comparisons += 1;
    if array[b] < key {
        b += 1;
    }

    oracle.check(CLASSIC, key, b, expected, array);
    comparisons
}

/// The classic loop without the correction step.
///
/// The converged index is meaningful only when the key is present; on a miss
/// it may land one slot below the insertion point. The oracle is therefore
/// consulted only when the key genuinely sits at the expected index — a
/// find-only kernel must not be flagged for an unconstrained miss result.
///
/// Returns the element-comparison count.
pub fn classic_find_search(array: &[i64], key: i64, expected: usize, oracle: &mut Oracle) -> u64 {
    let mut b: usize = 0;
    let mut e: usize = array.len();
    let mut comparisons: u64 = 0;

    while e - b > 1 {
        let k = (b + e) >> 1;
        comparisons += 1;
        if key < array[k] {
            e = k; // key < array[e]
        } else {
            b = k; // array[b] <= key
        }
    }

    // Presence gate: the oracle bookkeeping below is not a search comparison.
    if expected < array.len() && array[expected] == key {
        oracle.check(CLASSIC_FIND, key, b, expected, array);
    }
    comparisons
}
