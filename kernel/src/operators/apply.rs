//! `apply()`: the transition rules.
//!
//! Two-phase:
//! 1. Legality: every predicate reads the current state, before any effect.
//! 2. Effect: build the successor value. The input is never touched.
//!
//! Localizing to the location the robot already believes it is at is legal
//! and leaves the state unchanged. Navigating to or looking at that location
//! is refused.

use crate::operators::action::{Action, ActionKind};
use crate::state::location::{Location, Relabeling};
use crate::state::pose::{BowlPose, HeldObject, Item, JugPose, MugPose};
use crate::state::scenario::ScenarioState;
use crate::state::symbol::Symbolic;

/// Why an action is not performable from a state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// `place` needs a jug or bowl in the gripper. The mug is never placed.
    #[error("place requires a held jug or bowl, gripper holds {held}")]
    NothingToPlace { held: HeldObject },
    /// The pick target is not graspable.
    #[error("{item} is not graspable from {state}")]
    NotGraspable { item: Item, state: ScenarioState },
    /// Navigation and looking need a free gripper or the mug.
    #[error("{action} is not possible while holding {held}")]
    HandsFull { action: Action, held: HeldObject },
    /// Navigate/look target is where the robot already believes it is.
    #[error("{action} targets the believed location {believed}")]
    AlreadyThere { action: Action, believed: Location },
    /// Lost at the couch with the mug: only relocalization helps.
    #[error("{action} is not possible while lost at the couch holding the mug")]
    LostWithMug { action: Action },
}

/// Apply `action` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure`] when the action is not legal from `state`:
/// - `AlreadyThere`: navigate/look toward the believed location
/// - `NothingToPlace`: `place` with an empty gripper or the mug in hand
/// - `NotGraspable`: pick target not graspable
/// - `HandsFull`: navigate/look while holding the jug or bowl
/// - `LostWithMug`: any non-localize action while mislocalized at the couch with the mug
pub fn apply(state: &ScenarioState, action: Action) -> Result<ScenarioState, ApplyFailure> {
    check_legal(state, action)?;
    Ok(successor(state, action))
}

/// Every action legal from `state`, in catalog order.
#[must_use]
pub fn legal_actions(state: &ScenarioState) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|&action| check_legal(state, action).is_ok())
        .collect()
}

fn holds_jug_or_bowl(state: &ScenarioState) -> bool {
    matches!(state.held, HeldObject::Jug | HeldObject::Bowl)
}

fn check_legal(state: &ScenarioState, action: Action) -> Result<(), ApplyFailure> {
    let kind = action.kind();

    if let ActionKind::Navigate(target) | ActionKind::Look(target) = kind {
        let believed = state.relocalized_location();
        if target == believed {
            return Err(ApplyFailure::AlreadyThere { action, believed });
        }
    }

    if kind == ActionKind::Place && !holds_jug_or_bowl(state) {
        return Err(ApplyFailure::NothingToPlace { held: state.held });
    }

    if let ActionKind::Pick(item) = kind {
        if !state.is_graspable(item) {
            return Err(ApplyFailure::NotGraspable {
                item,
                state: *state,
            });
        }
    }

    if matches!(kind, ActionKind::Navigate(_) | ActionKind::Look(_)) && holds_jug_or_bowl(state) {
        return Err(ApplyFailure::HandsFull {
            action,
            held: state.held,
        });
    }

    if state.robot == Location::Couch
        && state.is_mislocalized()
        && state.mug_held()
        && !action.is_localize()
    {
        return Err(ApplyFailure::LostWithMug { action });
    }

    Ok(())
}

fn successor(state: &ScenarioState, action: Action) -> ScenarioState {
    let mut next = *state;
    match action.kind() {
        ActionKind::Localize(believed) => {
            next.label = Relabeling::solve(state.robot, believed);
        }
        ActionKind::Navigate(believed) => {
            next.robot = state.relabeling().actual(believed);
        }
        ActionKind::Pick(item) => {
            next.held = HeldObject::holding(item);
            match item {
                Item::Jug => next.jug = JugPose::Held,
                Item::Bowl => next.bowl = BowlPose::Held,
                Item::Mug => next.mug = MugPose::Held,
            }
        }
        ActionKind::Place => {
            next.held = HeldObject::Empty;
        }
        ActionKind::Look(_) | ActionKind::Inert => {}
    }
    next
}
