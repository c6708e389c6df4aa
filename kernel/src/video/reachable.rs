//! The reachable transition space.
//!
//! Breadth-first closure of [`legal_actions`] from every start condition.
//! Used to audit recording coverage: every id in [`required_video_ids`]
//! must be in the deployed catalog.

use std::collections::{BTreeSet, VecDeque};

use crate::operators::apply::legal_actions;
use crate::operators::transition::Transition;
use crate::state::scenario::ScenarioState;
use crate::state::start::StartCondition;
use crate::state::symbol::Symbolic;
use crate::video::resolver::video_id;

/// Every state reachable from some start condition, in tuple order.
#[must_use]
pub fn reachable_states() -> BTreeSet<ScenarioState> {
    let mut seen: BTreeSet<ScenarioState> = BTreeSet::new();
    let mut queue: VecDeque<ScenarioState> = VecDeque::new();
    for &cond in StartCondition::ALL {
        let state = cond.state();
        if seen.insert(state) {
            queue.push_back(state);
        }
    }
    while let Some(state) = queue.pop_front() {
        for t in transitions_from(state) {
            if seen.insert(t.end()) {
                queue.push_back(t.end());
            }
        }
    }
    seen
}

/// The initial transition into `state` plus one transition per legal action.
#[must_use]
pub fn transitions_from(state: ScenarioState) -> Vec<Transition> {
    let mut out = vec![Transition::initial(state)];
    out.extend(
        legal_actions(&state)
            .into_iter()
            .filter_map(|action| Transition::step(state, action).ok()),
    );
    out
}

/// Every video id a complete catalog must contain.
#[must_use]
pub fn required_video_ids() -> BTreeSet<String> {
    reachable_states()
        .into_iter()
        .flat_map(transitions_from)
        .map(|t| video_id(&t))
        .collect()
}
