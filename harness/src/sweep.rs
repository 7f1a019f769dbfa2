//! Sweep driver: sizes × modes × keys × kernels.

use bisect_kernel::oracle::Oracle;
use bisect_kernel::registry::{KernelId, KERNEL_COUNT};
use bisect_kernel::tally::ClassifyTallyV1;

use crate::fixture::DenseFixture;
use crate::report::{SizeRowV1, SweepReportV1};

/// Size range for a sweep, half-open `[min_size, max_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// First array size to measure (inclusive).
    pub min_size: usize,
    /// End of the size range (exclusive).
    pub max_size: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_size: 1024,
        }
    }
}

impl SweepConfig {
    /// Validate the range.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidRange`] when the half-open range is
    /// empty (`min_size >= max_size`).
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.min_size >= self.max_size {
            return Err(SweepError::InvalidRange {
                min_size: self.min_size,
                max_size: self.max_size,
            });
        }
        Ok(())
    }
}

/// Typed failure for sweep configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// The half-open size range contains no sizes.
    InvalidRange { min_size: usize, max_size: usize },
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { min_size, max_size } => {
                write!(f, "empty size range: min_size {min_size} >= max_size {max_size}")
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Run a sweep with an echoing oracle (mismatches print to stdout).
///
/// # Errors
///
/// Returns [`SweepError`] only for configuration problems; kernel-index
/// disagreements are recorded in the report, not raised.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReportV1, SweepError> {
    run_sweep_with(config, Oracle::new())
}

/// Run a sweep reporting through the given oracle (tests pass a silent one).
///
/// For each size `s` in the range, two fixtures are probed with every key in
/// `[0, s)`: the dense array `[0, s)` (every probe hits) and the gapped array
/// `[0, s]` minus `s - 1` (probing `s - 1` is the one guaranteed miss). With
/// that gap position every probed key's expected index equals the key itself.
///
/// Per-kernel, per-size comparison sums divide by the per-kernel trial count
/// `2s` to give the row averages; grand totals accumulate across all sizes.
///
/// # Errors
///
/// Returns [`SweepError`] when `config` fails validation.
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn run_sweep_with(config: &SweepConfig, mut oracle: Oracle) -> Result<SweepReportV1, SweepError> {
    config.validate()?;

    let mut totals = [0u64; KERNEL_COUNT];
    let mut tally = ClassifyTallyV1::new();
    let mut rows = Vec::with_capacity(config.max_size - config.min_size);

    for size in config.min_size..config.max_size {
        let fixtures = [
            DenseFixture::dense(size),
            DenseFixture::with_gap(size, size.saturating_sub(1)),
        ];

        let mut sums = [0u64; KERNEL_COUNT];
        for fixture in &fixtures {
            for kernel in KernelId::ALL {
                for key in 0..size as i64 {
                    let expected = fixture.expected_index(key);
                    sums[kernel.index()] +=
                        kernel.run(fixture.values(), key, expected, &mut oracle, &mut tally);
                }
            }
        }

        let trials = 2 * size as u64;
        let averages = if trials == 0 {
            [0.0; KERNEL_COUNT]
        } else {
            sums.map(|sum| sum as f64 / trials as f64)
        };
        for (total, sum) in totals.iter_mut().zip(sums) {
            *total += sum;
        }
        rows.push(SizeRowV1 {
            size,
            trials,
            averages,
        });
    }

    Ok(SweepReportV1 {
        rows,
        totals,
        tally,
        mismatches: oracle.into_mismatches(),
    })
}
