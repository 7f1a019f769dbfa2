//! Textbook lower-bound search (Wikipedia's "leftmost" procedure).

use crate::oracle::Oracle;

/// Registry name of this kernel.
pub const LEFTMOST: &str = "leftmost";

/// Half-open lower bound: smallest index whose element is not less than `key`.
///
/// Maintains `array[b] <= key < array[e]` over `[b, e)` (bounds read as −∞
/// and +∞ where they fall outside the array). With `b < e` the midpoint
/// `(b + e) >> 1` satisfies `b <= k < e`, so each iteration either raises `b`
/// past `k` or lowers `e` onto it — the window strictly shrinks and the loop
/// halts with `b == e` at the insertion point.
///
/// Returns the element-comparison count; the computed index goes to `oracle`.
pub fn leftmost_search(array: &[i64], key: i64, expected: usize, oracle: &mut Oracle) -> u64 {
    let mut b: usize = 0;
    let mut e: usize = array.len();
    let mut comparisons: u64 = 0;

    while b < e {
        let k = (b + e) >> 1;
        comparisons += 1;
        if array[k] < key {
            b = k + 1;
        } else {
            e = k;
        }
    }

    oracle.check(LEFTMOST, key, b, expected, array);
    comparisons
}
