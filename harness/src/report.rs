//! Sweep report: fixed-width console table and JSON artifact.

use std::path::Path;

use bisect_kernel::oracle::MismatchV1;
use bisect_kernel::registry::{KernelId, KERNEL_COUNT};
use bisect_kernel::tally::ClassifyTallyV1;

/// One measured size: per-kernel average comparisons over `trials` probes.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRowV1 {
    /// Array size for this row.
    pub size: usize,
    /// Per-kernel trial count at this size (keys × miss-modes).
    pub trials: u64,
    /// Average comparisons per trial, in [`KernelId::ALL`] column order.
    pub averages: [f64; KERNEL_COUNT],
}

/// The complete result of a sweep.
///
/// `Display` renders the console table: a header of kernel names, one row of
/// one-decimal averages per size, a totals row of integer comparison sums,
/// and the classification tally trailer.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReportV1 {
    /// One row per measured size, ascending.
    pub rows: Vec<SizeRowV1>,
    /// Grand total comparisons per kernel across all sizes.
    pub totals: [u64; KERNEL_COUNT],
    /// Three-way slot classification from the classic kernel.
    pub tally: ClassifyTallyV1,
    /// Every oracle mismatch recorded during the sweep, in order.
    pub mismatches: Vec<MismatchV1>,
}

impl std::fmt::Display for SweepReportV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>5}", "size")?;
        for kernel in KernelId::ALL {
            write!(f, "{:>13}", kernel.name())?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:>5}", row.size)?;
            for average in row.averages {
                write!(f, "{average:>13.1}")?;
            }
            writeln!(f)?;
        }

        write!(f, "{:>5}", "total")?;
        for total in self.totals {
            write!(f, "{total:>13}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.tally)
    }
}

impl SweepReportV1 {
    /// The console table as a string.
    #[must_use]
    pub fn render_table(&self) -> String {
        self.to_string()
    }

    /// Total mismatches recorded.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }

    /// Convert to a `serde_json::Value` for the report artifact.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let kernels: Vec<&str> = KernelId::ALL.iter().map(|k| k.name()).collect();
        let rows: Vec<serde_json::Value> = self
            .rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "size": row.size,
                    "trials": row.trials,
                    "averages": row.averages.to_vec(),
                })
            })
            .collect();
        let totals: serde_json::Value = KernelId::ALL
            .iter()
            .map(|k| (k.name().to_string(), self.totals[k.index()].into()))
            .collect::<serde_json::Map<String, serde_json::Value>>()
            .into();
        let mismatches: Vec<serde_json::Value> =
            self.mismatches.iter().map(mismatch_to_json).collect();

        serde_json::json!({
            "kernels": kernels,
            "rows": rows,
            "totals": totals,
            "tally": {
                "less": self.tally.less,
                "equal": self.tally.equal,
                "more": self.tally.more,
            },
            "mismatch_count": self.mismatches.len(),
            "mismatches": mismatches,
        })
    }
}

fn mismatch_to_json(mismatch: &MismatchV1) -> serde_json::Value {
    serde_json::json!({
        "kernel": mismatch.kernel,
        "key": mismatch.key,
        "returned": mismatch.returned,
        "expected": mismatch.expected,
        "expected_value": mismatch.expected_value,
    })
}

/// Error writing the JSON report artifact.
#[derive(Debug)]
pub enum ReportWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// JSON serialization failed.
    Json { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Json { detail } => write!(f, "JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

/// Write the report's JSON artifact to `path` (pretty-printed).
///
/// # Errors
///
/// Returns [`ReportWriteError`] on serialization or filesystem failure.
pub fn write_report_file(report: &SweepReportV1, path: &Path) -> Result<(), ReportWriteError> {
    let bytes = serde_json::to_vec_pretty(&report.to_json_value()).map_err(|e| {
        ReportWriteError::Json {
            detail: e.to_string(),
        }
    })?;
    std::fs::write(path, bytes).map_err(|e| ReportWriteError::Io {
        detail: e.to_string(),
    })?;
    Ok(())
}
