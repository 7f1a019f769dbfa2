//! Probe-excluding searches: the probed index leaves the window every iteration.
//!
//! Two renditions of the same idea. The signed form keeps the natural closed
//! interval `[b, e]` with `e = len - 1`; the unsigned form biases the midpoint
//! so the interval can stay half-open and no bound ever needs to be −1. The
//! contrast is deliberate and must not be unified.

use crate::oracle::Oracle;

/// Registry name of the signed variant.
pub const NEW: &str = "new";

/// Registry name of the unsigned variant.
pub const NEW_UNSIGNED: &str = "new-unsigned";

/// Closed-interval search that excludes the probed index on every step.
///
/// After the probe comparison, `k` is known to be on one side of the answer,
/// so the window shrinks to `[k + 1, e]` or `[b, k - 1]` — never keeping `k`.
/// The loop runs while `b <= e` and always halts because the window loses at
/// least the probed index each iteration. On exit every index below `b` holds
/// a value `< key` and every index from `b` up holds a value `>= key`, so `b`
/// is the leftmost ≥-key index with no correction step.
///
/// Bounds are signed: `e = len - 1` is −1 on the empty array (loop never
/// entered, result 0 with 0 comparisons), and `e = k - 1` may pass −1 on the
/// way to termination.
///
/// Returns the element-comparison count; the computed index goes to `oracle`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn new_search(array: &[i64], key: i64, expected: usize, oracle: &mut Oracle) -> u64 {
    let mut b: isize = 0;
    let mut e: isize = array.len() as isize - 1;
    let mut comparisons: u64 = 0;

    while b <= e {
        let k = (b + e) >> 1;
        comparisons += 1;
        if array[k as usize] < key {
            b = k + 1;
        } else {
            e = k - 1;
        }
    }

    oracle.check(NEW, key, b as usize, expected, array);
    comparisons
}

/// The probe-excluding search on unsigned bounds.
///
/// The half-open window `[b, e)` with the biased midpoint `(b + e - 1) >> 1`
/// keeps every bound non-negative: shrinking the top sets `e = k` instead of
/// `k - 1`, and the bias makes that still exclude the probed slot from the
/// next midpoint. Same leftmost ≥-key contract as [`new_search`].
///
/// Returns the element-comparison count; the computed index goes to `oracle`.
pub fn new_unsigned_search(array: &[i64], key: i64, expected: usize, oracle: &mut Oracle) -> u64 {
    let mut b: usize = 0;
    let mut e: usize = array.len();
    let mut comparisons: u64 = 0;

    while b < e {
        let k = (b + e - 1) >> 1;
        comparisons += 1;
        if array[k] < key {
            b = k + 1;
        } else {
            e = k;
        }
    }

    oracle.check(NEW_UNSIGNED, key, b, expected, array);
    comparisons
}
