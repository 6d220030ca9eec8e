//! Entropy and crack-time arithmetic over possibility counts.

use crate::error::{EngineError, Result};

/// Illustrative cracking-rig throughput, in hashes per second.
pub const HASH_RATE: u64 = 623_000_000_000;

/// Approximate bits of entropy for a possibility count.
pub fn bits_of_entropy(possibilities: u128) -> Result<f64> {
    if possibilities == 0 {
        return Err(EngineError::InvalidDomain);
    }
    Ok((possibilities as f64).log2())
}

/// Estimated time to exhaust a possibility space at `rate` hashes/second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTime {
    pub hours: f64,
    pub days: f64,
}

pub fn crack_time(possibilities: u128, rate: u64) -> CrackTime {
    let hours = possibilities as f64 / rate as f64 / 3600.0;
    CrackTime {
        hours,
        days: hours / 24.0,
    }
}

/// Display convention for hash rates: "M h/s" is the raw rate divided by
/// one million.
pub fn rate_megahashes(rate: u64) -> u64 {
    rate / 1_000_000
}
