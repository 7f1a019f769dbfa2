//! Bisect Harness: sweep orchestration for the kernels.
//!
//! The harness builds sorted fixtures with known ground truth, drives every
//! kernel over every key at every size in a range, and packages the result
//! as a [`report::SweepReportV1`] (fixed-width text table + JSON artifact).
//!
//! The harness does NOT implement search logic — it delegates to the kernel
//! crate. Fixtures provide domain data only; the harness owns enumeration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixture;
pub mod report;
pub mod sweep;
