//! The corruption schedule.
//!
//! Whether a request is corrupted does not depend on the random stream. It is
//! a fixed function of the noise tier and the session's request counter, so
//! every session in a tier sees the same pattern: out of every ten
//! consecutive requests, exactly `tier` are corrupted. The two channels use
//! different offset orders so their corrupted requests do not coincide.

use std::fmt;

/// Length of the schedule cycle.
pub const SCHEDULE_PERIOD: u64 = 10;

/// Highest noise tier.
pub const MAX_NOISE_TIER: u8 = 10;

const DIAGNOSIS_OFFSETS: [u64; 10] = [0, 5, 2, 7, 4, 9, 1, 6, 3, 8];
const ACTION_OFFSETS: [u64; 10] = [3, 8, 5, 0, 7, 2, 9, 4, 1, 6];

/// Which suggestion list a decision applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Diagnosis,
    Action,
}

impl Channel {
    /// Offsets within a cycle, in the order they are switched on as the
    /// tier rises.
    #[must_use]
    pub const fn offsets(self) -> &'static [u64; 10] {
        match self {
            Self::Diagnosis => &DIAGNOSIS_OFFSETS,
            Self::Action => &ACTION_OFFSETS,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diagnosis => "diagnosis",
            Self::Action => "action",
        })
    }
}

/// Quantize a noise level in `[0, 1]` to a tier in `0..=10`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn noise_tier(noise_level: f64) -> u8 {
    let scaled = (noise_level * f64::from(MAX_NOISE_TIER)).round();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= f64::from(MAX_NOISE_TIER) {
        MAX_NOISE_TIER
    } else {
        // In (0, 10): exact after rounding.
        scaled as u8
    }
}

/// Whether request number `request_index` of a session is corrupted.
#[must_use]
pub fn should_corrupt(channel: Channel, tier: u8, request_index: u64) -> bool {
    let active = usize::from(tier.min(MAX_NOISE_TIER));
    channel.offsets()[..active].contains(&(request_index % SCHEDULE_PERIOD))
}
