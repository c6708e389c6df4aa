//! The diagnosis vocabulary and the diagnosis heuristic.

use dining_kernel::operators::action::Action;
use dining_kernel::state::location::Location;
use dining_kernel::state::pose::{BowlPose, Item};
use dining_kernel::state::scenario::ScenarioState;
use dining_kernel::state::symbol::Symbolic;

/// A fault category a participant can pick, plus the "no problem" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diagnosis {
    Lost,
    CannotMove,
    BaseCollision,
    PathBlocked,
    CannotPick,
    CannotSee,
    WrongLocation,
    ObjectFell,
    BatteryLow,
    VideoProblem,
    NoProblem,
}

impl Symbolic for Diagnosis {
    const KIND: &'static str = "diagnosis";
    const ALL: &'static [Self] = &[
        Self::Lost,
        Self::CannotMove,
        Self::BaseCollision,
        Self::PathBlocked,
        Self::CannotPick,
        Self::CannotSee,
        Self::WrongLocation,
        Self::ObjectFell,
        Self::BatteryLow,
        Self::VideoProblem,
        Self::NoProblem,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::CannotMove => "cannotMove",
            Self::BaseCollision => "baseCollision",
            Self::PathBlocked => "pathBlocked",
            Self::CannotPick => "cannotPick",
            Self::CannotSee => "cannotSee",
            Self::WrongLocation => "wrongLocation",
            Self::ObjectFell => "objectFell",
            Self::BatteryLow => "batteryLow",
            Self::VideoProblem => "videoProblem",
            Self::NoProblem => "none",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Lost => "The robot is lost",
            Self::CannotMove => "The robot is stuck and cannot move to a location",
            Self::BaseCollision => "The robot has collided with an object",
            Self::PathBlocked => "The robot's path is blocked",
            Self::CannotPick => "The cup cannot be picked up",
            Self::CannotSee => "The cup is not visible",
            Self::WrongLocation => "The cup is not where it should be",
            Self::ObjectFell => "The object fell out of the robot's hand",
            Self::BatteryLow => "The battery is low",
            Self::VideoProblem => "There is a problem with the camera",
            Self::NoProblem => "There is no problem",
        }
    }
}

dining_kernel::symbol_codec!(Diagnosis);

/// Likely diagnoses for `state`, most likely first.
///
/// Rules in priority order:
/// 1. mislocalized: `lost`
/// 2. objects at the table while the robot believes it is at the counter: `wrongLocation`
/// 3. mug neither visible nor held: `cannotSee`
/// 4. mug not held, and hidden or under the bowl: `cannotPick`
///
/// With `accumulate` every matching rule contributes in order; otherwise
/// only the first match is returned. No match yields `[none]`.
///
/// `_action` is the action that produced `state`. No rule reads it.
#[must_use]
pub fn ordered_diagnoses(
    state: &ScenarioState,
    _action: Option<Action>,
    accumulate: bool,
) -> Vec<Diagnosis> {
    let mug_visible = state.is_visible(Item::Mug);
    let mug_held = state.mug_held();
    let rules = [
        (state.is_mislocalized(), Diagnosis::Lost),
        (
            state.object_location() == Location::Table
                && state.relocalized_location() == Location::Counter,
            Diagnosis::WrongLocation,
        ),
        (!mug_visible && !mug_held, Diagnosis::CannotSee),
        (
            !mug_held && (!mug_visible || state.bowl_pose() == BowlPose::AboveMug),
            Diagnosis::CannotPick,
        ),
    ];

    let mut out: Vec<Diagnosis> = rules
        .iter()
        .filter(|(fires, _)| *fires)
        .map(|&(_, dx)| dx)
        .take(if accumulate { rules.len() } else { 1 })
        .collect();
    if out.is_empty() {
        out.push(Diagnosis::NoProblem);
    }
    out
}
