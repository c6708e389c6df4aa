//! Transitions: a start state, an action, and the resulting state.

use crate::operators::action::Action;
use crate::operators::apply::{apply, ApplyFailure};
use crate::state::scenario::ScenarioState;

/// A derived `(start, action, end)` triple.
///
/// `start = None` is the initial transition: scenario entry, or the replay
/// shown after an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub(crate) start: Option<ScenarioState>,
    pub(crate) action: Option<Action>,
    pub(crate) end: ScenarioState,
}

impl Transition {
    /// The initial (no-op) transition into `state`.
    #[must_use]
    pub const fn initial(state: ScenarioState) -> Self {
        Self {
            start: None,
            action: None,
            end: state,
        }
    }

    /// Apply `action` to `start`.
    ///
    /// # Errors
    ///
    /// Propagates [`ApplyFailure`] from [`apply`].
    pub fn step(start: ScenarioState, action: Action) -> Result<Self, ApplyFailure> {
        let end = apply(&start, action)?;
        Ok(Self {
            start: Some(start),
            action: Some(action),
            end,
        })
    }

    #[must_use]
    pub const fn start(&self) -> Option<ScenarioState> {
        self.start
    }

    #[must_use]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    #[must_use]
    pub const fn end(&self) -> ScenarioState {
        self.end
    }

    /// Whether the arm moves while this transition plays.
    #[must_use]
    pub fn arm_in_motion(&self) -> bool {
        self.start.is_some() && self.action.is_some_and(Action::arm_in_motion)
    }
}
