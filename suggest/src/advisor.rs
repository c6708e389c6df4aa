//! The next-action heuristic.

use dining_kernel::operators::action::Action;
use dining_kernel::state::location::Location;
use dining_kernel::state::pose::{HeldObject, Item};
use dining_kernel::state::scenario::ScenarioState;

/// The action an expert would take next, or nothing at the goal.
///
/// First match wins:
/// 1. terminal: no suggestion
/// 2. mislocalized: localize to the true location
/// 3. mug in hand away from the couch: navigate to the couch
/// 4. jug or bowl in hand: place it
/// 5. mug graspable: pick the mug
/// 6. bowl graspable and mug visible: pick the bowl
/// 7. jug graspable: pick the jug
/// 8. otherwise: navigate toward the objects
///
/// Destinations are expressed in the robot's believed frame, so the returned
/// action is the one a participant would click.
#[must_use]
pub fn optimal_action(state: &ScenarioState, _action: Option<Action>) -> Vec<Action> {
    if state.is_terminal() {
        return Vec::new();
    }
    let believed = |loc: Location| state.relabeling().believed(loc);

    let next = if state.is_mislocalized() {
        Action::localize_to(state.robot_location())
    } else if state.mug_held() && state.robot_location() != Location::Couch {
        Action::navigate_to(believed(Location::Couch))
    } else if matches!(state.held_object(), HeldObject::Jug | HeldObject::Bowl) {
        Action::Place
    } else if state.is_graspable(Item::Mug) {
        Action::PickMug
    } else if state.is_graspable(Item::Bowl) && state.is_visible(Item::Mug) {
        Action::PickBowl
    } else if state.is_graspable(Item::Jug) {
        Action::PickJug
    } else {
        Action::navigate_to(believed(state.object_location()))
    };
    vec![next]
}
