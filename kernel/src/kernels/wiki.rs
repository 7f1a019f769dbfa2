//! Three-way binary search over a closed interval, as presented on Wikipedia.

use crate::oracle::Oracle;

/// Registry name of this kernel.
pub const WIKI: &str = "wiki";

/// Search a closed interval `[b, e]` with a three-way comparison per probe.
///
/// Each level costs two element comparisons unless the first (`<`) branch is
/// taken; an exact match breaks out of the loop early with `b` on the match.
/// Bounds are signed because `e` starts at `len - 1`, which is −1 on the
/// empty array (the loop is then never entered and the result is 0).
///
/// When the key is present the returned index is the match. On a miss the
/// result is whatever slot the last three-way branch left `b` on — there is
/// no clean invariant for it, so the miss behavior is pinned by golden-value
/// tests rather than derived.
///
/// Returns the element-comparison count; the computed index goes to `oracle`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wiki_search(array: &[i64], key: i64, expected: usize, oracle: &mut Oracle) -> u64 {
    let mut b: isize = 0;
    let mut e: isize = array.len() as isize - 1;
    let mut comparisons: u64 = 0;

    while b <= e {
        let k = (b + e) >> 1;
        comparisons += 1;
        if array[k as usize] < key {
            b = k + 1;
        } else {
            comparisons += 1;
            if array[k as usize] > key {
                e = k - 1;
            } else {
                b = k;
                break;
            }
        }
    }

    oracle.check(WIKI, key, b as usize, expected, array);
    comparisons
}
