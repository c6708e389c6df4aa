//! Per-session suggestion configuration.

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;
use crate::schedule::noise_tier;

/// Default list lengths for a new session.
const DEFAULT_MAX_DIAGNOSIS_SUGGESTIONS: usize = 1;
const DEFAULT_MAX_ACTION_SUGGESTIONS: usize = 1;

/// Largest diagnosis list that padding can always fill.
///
/// At most four heuristic diagnoses fire at once. When they are corrupted,
/// neither they nor their replacements can be reused for padding, which
/// leaves `11 - 4 = 7` distinct diagnoses for the list.
pub const MAX_DIAGNOSIS_SUGGESTIONS: usize = 7;

/// Largest action list: the whole action catalog.
pub const MAX_ACTION_SUGGESTIONS: usize = 17;

/// How a session's hints are shown, sized and corrupted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Diagnosis list length `K` (`1..=7`).
    pub max_diagnosis_suggestions: usize,
    /// Action list length `K` (`1..=17`).
    pub max_action_suggestions: usize,
    /// Fill lists up to `K` with distinct alternatives.
    pub pad_suggestions: bool,
    /// Fraction of requests whose hints are corrupted, in `[0, 1]`,
    /// quantized to tenths.
    pub noise_level: f64,
    pub show_diagnosis_suggestions: bool,
    pub show_action_suggestions: bool,
}

impl SessionConfig {
    /// Check every field's range.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::InvalidConfig`] naming the first field out of
    /// range.
    pub fn validate(&self) -> Result<(), SuggestError> {
        if !(1..=MAX_DIAGNOSIS_SUGGESTIONS).contains(&self.max_diagnosis_suggestions) {
            return Err(SuggestError::InvalidConfig {
                field: "max_diagnosis_suggestions",
                detail: format!(
                    "must be in 1..={MAX_DIAGNOSIS_SUGGESTIONS}, got {}",
                    self.max_diagnosis_suggestions
                ),
            });
        }
        if !(1..=MAX_ACTION_SUGGESTIONS).contains(&self.max_action_suggestions) {
            return Err(SuggestError::InvalidConfig {
                field: "max_action_suggestions",
                detail: format!(
                    "must be in 1..={MAX_ACTION_SUGGESTIONS}, got {}",
                    self.max_action_suggestions
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(SuggestError::InvalidConfig {
                field: "noise_level",
                detail: format!("must be in [0, 1], got {}", self.noise_level),
            });
        }
        Ok(())
    }

    /// The noise tier (`0..=10`) driving the corruption schedule.
    #[must_use]
    pub fn noise_tier(&self) -> u8 {
        noise_tier(self.noise_level)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_diagnosis_suggestions: DEFAULT_MAX_DIAGNOSIS_SUGGESTIONS,
            max_action_suggestions: DEFAULT_MAX_ACTION_SUGGESTIONS,
            pad_suggestions: false,
            noise_level: 0.0,
            show_diagnosis_suggestions: true,
            show_action_suggestions: false,
        }
    }
}
