//! Entropy approximation and brute-force crack-time estimation.
//!
//! Both figures are order-of-magnitude heuristics: entropy assumes every
//! character is drawn uniformly from the union of the classes present, and the
//! crack time assumes an attacker testing a fixed number of guesses per second
//! with no smarter strategy than exhaustive search. Neither is a calibrated
//! security bound.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharacterClasses;

/// Assumed attacker throughput, in guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1e10;

const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;
const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.0;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimated entropy in bits: `length * log2(pool_size)`, rounded to 2 decimals.
///
/// Returns `0.0` when no recognized character class is present.
pub fn entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let pool_size = CharacterClasses::for_entropy(pwd).pool_size();
    if pool_size == 0 {
        return 0.0;
    }
    let length = pwd.chars().count() as f64;
    round2(length * (pool_size as f64).log2())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTimeUnit {
    Days,
    Years,
    Centuries,
    MillionYears,
}

impl CrackTimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            CrackTimeUnit::Days => "days",
            CrackTimeUnit::Years => "years",
            CrackTimeUnit::Centuries => "centuries",
            CrackTimeUnit::MillionYears => "million years",
        }
    }
}

/// A bucketed crack-time estimate such as `3.2 centuries`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTime {
    pub magnitude: f64,
    pub unit: CrackTimeUnit,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.magnitude.is_finite() {
            return write!(f, "longer than the universe will exist");
        }
        write!(f, "{} {}", self.magnitude, self.unit.label())
    }
}

/// Estimates brute-force time at [`GUESSES_PER_SECOND`].
pub fn crack_time(entropy: f64) -> CrackTime {
    crack_time_at(entropy, GUESSES_PER_SECOND)
}

/// Estimates brute-force time for `entropy` bits at `guesses_per_second`.
pub fn crack_time_at(entropy: f64, guesses_per_second: f64) -> CrackTime {
    let seconds = 2f64.powf(entropy) / guesses_per_second;
    let years = seconds / SECONDS_PER_YEAR;

    let (magnitude, unit) = if years < 1.0 {
        (seconds / SECONDS_PER_DAY, CrackTimeUnit::Days)
    } else if years < 100.0 {
        (years, CrackTimeUnit::Years)
    } else if years < 1e6 {
        (years / 100.0, CrackTimeUnit::Centuries)
    } else {
        (years / 1e6, CrackTimeUnit::MillionYears)
    };

    CrackTime {
        magnitude: round2(magnitude),
        unit,
    }
}
