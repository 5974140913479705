//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rand::{SeedableRng, rngs::StdRng};

/// Fixed seed used across integration tests.
pub const SEED: u64 = 42;

/// Seeded RNG so runs are reproducible.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// A fixed render time: 2024-06-01 at the given hour and minute.
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}
