//! Kernel registry: enumerated dispatch over the six loop designs.
//!
//! The driver iterates the kernels uniformly; a fieldless enum with a
//! dispatch `match` keeps that iteration static and exhaustive (adding a
//! kernel without wiring it up fails to compile).

use crate::kernels::classic::{classic_find_search, classic_search, CLASSIC, CLASSIC_FIND};
use crate::kernels::exclusion::{new_search, new_unsigned_search, NEW, NEW_UNSIGNED};
use crate::kernels::leftmost::{leftmost_search, LEFTMOST};
use crate::kernels::wiki::{wiki_search, WIKI};
use crate::oracle::Oracle;
use crate::tally::ClassifyTallyV1;

/// Number of registered kernels.
pub const KERNEL_COUNT: usize = 6;

/// Identifier for one search kernel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KernelId {
    /// Half-open invariant loop with a correction step and slot audit.
    Classic,
    /// Classic loop, find-only contract, no correction.
    ClassicFind,
    /// Three-way closed-interval search with early break.
    Wiki,
    /// Probe-excluding closed interval, signed bounds.
    New,
    /// Probe-excluding half-open interval, unsigned bounds, biased midpoint.
    NewUnsigned,
    /// Textbook lower bound.
    Leftmost,
}

impl KernelId {
    /// Every kernel, in the driver's iteration and column order.
    pub const ALL: [KernelId; KERNEL_COUNT] = [
        KernelId::Classic,
        KernelId::ClassicFind,
        KernelId::Wiki,
        KernelId::New,
        KernelId::NewUnsigned,
        KernelId::Leftmost,
    ];

    /// Display name used in diagnostics and report columns.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            KernelId::Classic => CLASSIC,
            KernelId::ClassicFind => CLASSIC_FIND,
            KernelId::Wiki => WIKI,
            KernelId::New => NEW,
            KernelId::NewUnsigned => NEW_UNSIGNED,
            KernelId::Leftmost => LEFTMOST,
        }
    }

    /// Position of this kernel in [`KernelId::ALL`] (stable column index).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            KernelId::Classic => 0,
            KernelId::ClassicFind => 1,
            KernelId::Wiki => 2,
            KernelId::New => 3,
            KernelId::NewUnsigned => 4,
            KernelId::Leftmost => 5,
        }
    }

    /// Run this kernel on `(array, key, expected)`.
    ///
    /// Every kernel reports through `oracle`; only `Classic` touches `tally`.
    /// Returns the kernel's element-comparison count.
    pub fn run(
        self,
        array: &[i64],
        key: i64,
        expected: usize,
        oracle: &mut Oracle,
        tally: &mut ClassifyTallyV1,
    ) -> u64 {
        match self {
            KernelId::Classic => classic_search(array, key, expected, oracle, tally),
            KernelId::ClassicFind => classic_find_search(array, key, expected, oracle),
            KernelId::Wiki => wiki_search(array, key, expected, oracle),
            KernelId::New => new_search(array, key, expected, oracle),
            KernelId::NewUnsigned => new_unsigned_search(array, key, expected, oracle),
            KernelId::Leftmost => leftmost_search(array, key, expected, oracle),
        }
    }
}

impl std::fmt::Display for KernelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
