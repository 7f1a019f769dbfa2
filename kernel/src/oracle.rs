//! Correctness oracle: records kernel-index disagreements without failing.
//!
//! A kernel hands the oracle its computed index together with the expected
//! index supplied by the caller (who knows ground truth from the fixture
//! generator). Disagreement is an anomaly to surface, not an error to raise:
//! the oracle never panics and never returns a `Result`.

/// A recorded disagreement between a kernel's computed index and ground truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchV1 {
    /// Registry name of the kernel that disagreed.
    pub kernel: &'static str,
    /// The probed key.
    pub key: i64,
    /// The index the kernel computed.
    pub returned: usize,
    /// The index the caller expected.
    pub expected: usize,
    /// The array value at the expected index, if the expected index is
    /// in range (`None` for a one-past-end insertion point).
    pub expected_value: Option<i64>,
}

impl std::fmt::Display for MismatchV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mismatch kernel={} key={} returned={} expected={}",
            self.kernel, self.key, self.returned, self.expected
        )?;
        match self.expected_value {
            Some(value) => write!(f, " expected_value={value}"),
            None => write!(f, " expected_value=end"),
        }
    }
}

/// Observes kernel results against expected indices.
///
/// In echoing mode (the sweep driver) each mismatch is printed to stdout as a
/// single `key=value` diagnostic line as it is recorded. Silent mode records
/// only, for tests and benchmarks.
#[derive(Debug)]
pub struct Oracle {
    mismatches: Vec<MismatchV1>,
    echo: bool,
}

impl Oracle {
    /// An oracle that prints each mismatch to stdout as it is recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mismatches: Vec::new(),
            echo: true,
        }
    }

    /// An oracle that records mismatches without printing.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            mismatches: Vec::new(),
            echo: false,
        }
    }

    /// Compare a kernel's computed index against the expected index.
    ///
    /// On disagreement, records (and in echoing mode prints) a [`MismatchV1`]
    /// carrying the kernel name, the key, both indices, and the array value at
    /// the expected index. Agreement records nothing.
    pub fn check(
        &mut self,
        kernel: &'static str,
        key: i64,
        returned: usize,
        expected: usize,
        array: &[i64],
    ) {
        if returned == expected {
            return;
        }
        let mismatch = MismatchV1 {
            kernel,
            key,
            returned,
            expected,
            expected_value: array.get(expected).copied(),
        };
        if self.echo {
            println!("{mismatch}");
        }
        self.mismatches.push(mismatch);
    }

    /// All mismatches recorded so far, in recording order.
    #[must_use]
    pub fn mismatches(&self) -> &[MismatchV1] {
        &self.mismatches
    }

    /// Number of mismatches recorded so far.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// `true` if no mismatch has been recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Consume the oracle, yielding its recorded mismatches.
    #[must_use]
    pub fn into_mismatches(self) -> Vec<MismatchV1> {
        self.mismatches
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}
