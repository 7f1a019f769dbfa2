//! Three-way slot classification tally.
//!
//! `classic_search` audits the slot its loop converges on before the
//! correction step: was the slot's value below, equal to, or above the key?
//! The original study kept these counts in process-wide globals; here they
//! live in an explicit accumulator passed `&mut` into the one kernel that
//! needs it.

use std::cmp::Ordering;

/// Running counts of the relation between a converged slot's value and the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyTallyV1 {
    /// Slot value was below the key (the correction step will advance).
    pub less: u64,
    /// Slot value matched the key exactly.
    pub equal: u64,
    /// Slot value was above the key.
    pub more: u64,
}

impl ClassifyTallyV1 {
    /// A tally with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one slot-value/key pair and bump the matching counter.
    ///
    /// This is audit bookkeeping, not a search step: callers must not count
    /// it toward a kernel's comparison total.
    pub fn classify(&mut self, slot_value: i64, key: i64) {
        match slot_value.cmp(&key) {
            Ordering::Less => self.less += 1,
            Ordering::Equal => self.equal += 1,
            Ordering::Greater => self.more += 1,
        }
    }

    /// Total classifications recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.less + self.equal + self.more
    }
}

impl std::fmt::Display for ClassifyTallyV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "classic less {} equal {} more {}",
            self.less, self.equal, self.more
        )
    }
}
