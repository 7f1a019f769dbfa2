//! Bisect Kernel: six binary-search loop designs under one measurement contract.
//!
//! Every kernel searches a strictly increasing `&[i64]` for a key, reports its
//! computed index to a caller-supplied [`oracle::Oracle`], and returns the
//! number of element comparisons it performed. The kernels differ in bound
//! style (closed vs half-open, signed vs unsigned), loop invariant, and
//! termination argument — those differences are the subject of study, so they
//! are preserved rather than unified.
//!
//! # Module Dependency Direction
//!
//! `oracle`, `tally` ← `kernels` ← `registry`
//!
//! One-way only. No cycles. `registry` dispatches over `kernels`; the kernels
//! depend on `oracle` (all) and `tally` (classic only); `oracle` and `tally`
//! depend on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod kernels;
pub mod oracle;
pub mod registry;
pub mod tally;
