//! Sweep driver CLI.
//!
//! Usage: `sweep [min_size max_size] [--json <path>]`
//!
//! Runs every kernel over every key at every size in `[min_size, max_size)`
//! (default `1..1024`), prints the comparison table to stdout, and optionally
//! writes the JSON report artifact. Oracle mismatch diagnostics print as they
//! occur; the process still exits 0 — a mismatch is a finding, not a failure.

use std::path::PathBuf;
use std::process::ExitCode;

use bisect_harness::report::write_report_file;
use bisect_harness::sweep::{run_sweep, SweepConfig};

fn usage() -> ExitCode {
    eprintln!("usage: sweep [min_size max_size] [--json <path>]");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut json_path: Option<PathBuf> = None;
    let mut positional: Vec<usize> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--json" {
            let Some(path) = iter.next() else {
                return usage();
            };
            json_path = Some(PathBuf::from(path));
        } else {
            let Ok(size) = arg.parse::<usize>() else {
                return usage();
            };
            positional.push(size);
        }
    }

    let config = match positional.as_slice() {
        [] => SweepConfig::default(),
        [min_size, max_size] => SweepConfig {
            min_size: *min_size,
            max_size: *max_size,
        },
        _ => return usage(),
    };

    let report = match run_sweep(&config) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("sweep: {error}");
            return ExitCode::FAILURE;
        }
    };

    print!("{report}");

    if let Some(path) = json_path {
        if let Err(error) = write_report_file(&report, &path) {
            eprintln!("sweep: {error}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
