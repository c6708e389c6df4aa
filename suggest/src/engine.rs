//! Suggestion lists: heuristic truth, scheduled corruption, padding.
//!
//! Per enabled call:
//! 1. Truncate the heuristic output to `K`.
//! 2. Alternatives are the catalog minus the truth (every diagnosis, or
//!    every legal action), in catalog order.
//! 3. Resume the stream from the cursor.
//! 4. If the schedule corrupts this request, replace each true value with a
//!    draw (without replacement) from the alternatives.
//! 5. If padding, keep drawing from what remains until `K` values or the
//!    alternatives run out.
//! 6. Finish the stream; the new cursor is returned for the caller to persist.
//!
//! A disabled channel, or the action channel at a terminal state, returns an
//! empty list and leaves the cursor untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dining_kernel::operators::action::Action;
use dining_kernel::operators::apply::legal_actions;
use dining_kernel::state::scenario::ScenarioState;
use dining_kernel::state::symbol::Symbolic;

use crate::advisor::optimal_action;
use crate::cursor::{CursorStream, RngCursor};
use crate::diagnosis::{ordered_diagnoses, Diagnosis};
use crate::policy::SessionConfig;
use crate::schedule::{should_corrupt, Channel};

/// One suggestion list as shown to a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions<T> {
    pub values: Vec<T>,
    /// The heuristic values were replaced.
    pub corrupted: bool,
    /// Values appended by padding.
    pub padded: usize,
}

impl<T> Suggestions<T> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: Vec::new(),
            corrupted: false,
            padded: 0,
        }
    }
}

/// Diagnosis hints for `state` on request number `request_index`.
#[must_use]
pub fn suggest_diagnoses(
    state: &ScenarioState,
    action: Option<Action>,
    config: &SessionConfig,
    request_index: u64,
    cursor: RngCursor,
) -> (Suggestions<Diagnosis>, RngCursor) {
    if !config.show_diagnosis_suggestions {
        return (Suggestions::empty(), cursor);
    }
    let truth = ordered_diagnoses(state, action, true);
    let corrupt = should_corrupt(Channel::Diagnosis, config.noise_tier(), request_index);
    perturb(
        Channel::Diagnosis,
        truth,
        Diagnosis::ALL,
        config.max_diagnosis_suggestions,
        config.pad_suggestions,
        corrupt,
        cursor,
    )
}

/// Next-action hints for `state` on request number `request_index`.
#[must_use]
pub fn suggest_actions(
    state: &ScenarioState,
    action: Option<Action>,
    config: &SessionConfig,
    request_index: u64,
    cursor: RngCursor,
) -> (Suggestions<Action>, RngCursor) {
    if !config.show_action_suggestions || state.is_terminal() {
        return (Suggestions::empty(), cursor);
    }
    let truth = optimal_action(state, action);
    let legal = legal_actions(state);
    let corrupt = should_corrupt(Channel::Action, config.noise_tier(), request_index);
    perturb(
        Channel::Action,
        truth,
        &legal,
        config.max_action_suggestions,
        config.pad_suggestions,
        corrupt,
        cursor,
    )
}

fn perturb<T: Copy + PartialEq>(
    channel: Channel,
    truth: Vec<T>,
    catalog: &[T],
    limit: usize,
    pad: bool,
    corrupt: bool,
    cursor: RngCursor,
) -> (Suggestions<T>, RngCursor) {
    let mut values: Vec<T> = truth.into_iter().take(limit).collect();
    let mut alternatives: Vec<T> = catalog
        .iter()
        .copied()
        .filter(|c| !values.contains(c))
        .collect();

    let mut stream = CursorStream::resume(cursor);

    if corrupt {
        let slots = values.len();
        values = (0..slots)
            .filter_map(|_| stream.take_from(&mut alternatives))
            .collect();
    }

    let mut padded = 0;
    if pad {
        while values.len() < limit {
            let Some(next) = stream.take_from(&mut alternatives) else {
                break;
            };
            values.push(next);
            padded += 1;
        }
    }

    let next_cursor = stream.finish();
    debug!(
        %channel,
        corrupt,
        padded,
        cursor = cursor.value(),
        next_cursor = next_cursor.value(),
        "suggestions drawn"
    );

    (
        Suggestions {
            values,
            corrupted: corrupt,
            padded,
        },
        next_cursor,
    )
}
