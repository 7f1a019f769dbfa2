//! Shared helpers for bisect benchmark suites.
//!
//! Fixture construction and key schedules are built here, outside the timed
//! closures, so benches measure the kernels and not the setup.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use bisect_harness::fixture::DenseFixture;

/// Sizes the micro benches sweep over.
pub const BENCH_SIZES: [usize; 3] = [16, 256, 4096];

/// A prepared fixture plus the keys each timed iteration probes.
pub struct ProbeSetup {
    /// The array under search.
    pub fixture: DenseFixture,
    /// Keys covering the front, middle, back, and one guaranteed miss.
    pub keys: Vec<i64>,
}

/// Build the probe setup for one size: a gapped fixture (so the miss path is
/// exercised) and a small spread of keys with their expected indices derivable
/// from the fixture.
///
/// # Panics
///
/// Panics if `size` is 0; the key spread needs at least one element.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn probe_setup(size: usize) -> ProbeSetup {
    assert!(size > 0, "probe setup needs a non-empty fixture");
    let fixture = DenseFixture::with_gap(size, size - 1);
    let size = size as i64;
    let keys = vec![0, size / 4, size / 2, size - 1, size];
    ProbeSetup { fixture, keys }
}
