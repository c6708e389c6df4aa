//! Golden trajectories: the expert path from every start condition.
//!
//! Each step records the action taken, the state it leads to, the video a
//! participant sees, and the accumulated diagnoses for the new state.

use dining_harness::config::HarnessConfig;
use dining_harness::runner::SessionRunner;
use dining_harness::session::InMemorySessionStore;
use dining_kernel::state::start::StartCondition;
use dining_kernel::video::catalog::InMemoryVideoCatalog;
use dining_suggest::policy::{SessionConfig, MAX_DIAGNOSIS_SUGGESTIONS};

pub struct GoldenStep {
    /// `None` for scenario entry.
    pub action: Option<&'static str>,
    pub end: &'static str,
    pub video: &'static str,
    pub diagnoses: &'static [&'static str],
}

pub struct Golden {
    pub start: StartCondition,
    pub steps: &'static [GoldenStep],
}

impl Golden {
    /// The action symbols after scenario entry.
    #[must_use]
    pub fn actions(&self) -> Vec<String> {
        self.steps
            .iter()
            .filter_map(|s| s.action.map(str::to_string))
            .collect()
    }
}

const fn step(
    action: Option<&'static str>,
    end: &'static str,
    video: &'static str,
    diagnoses: &'static [&'static str],
) -> GoldenStep {
    GoldenStep {
        action,
        end,
        video,
        diagnoses,
    }
}

const NONE: &[&str] = &["none"];
const CANNOT_PICK: &[&str] = &["cannotPick"];
const HIDDEN: &[&str] = &["cannotSee", "cannotPick"];
const ELSEWHERE: &[&str] = &["wrongLocation", "cannotSee", "cannotPick"];

pub const GOLDEN: &[Golden] = &[
    Golden {
        start: StartCondition::AtCounterAboveMug,
        steps: &[
            step(
                None,
                "counter.counter.default.aboveMug.default.none.table",
                "counter.counter.default.aboveMug.default.noop.empty",
                CANNOT_PICK,
            ),
            step(
                Some("pick_bowl"),
                "counter.counter.default.held.default.bowl.table",
                "counter.counter.default.aboveMug.default.pick_bowl.empty",
                NONE,
            ),
            step(
                Some("place"),
                "counter.counter.default.held.default.none.table",
                "counter.counter.default.held.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "counter.counter.default.held.held.mug.table",
                "counter.counter.default.held.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.counter.default.held.held.mug.table",
                "counter.counter.default.held.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtCounterOccluding,
        steps: &[
            step(
                None,
                "counter.counter.occluding.default.default.none.table",
                "counter.counter.occluding.default.default.noop.empty",
                HIDDEN,
            ),
            step(
                Some("pick_jug"),
                "counter.counter.held.default.default.jug.table",
                "counter.counter.occluding.default.default.pick_jug.empty",
                NONE,
            ),
            step(
                Some("place"),
                "counter.counter.held.default.default.none.table",
                "counter.counter.held.default.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "counter.counter.held.default.held.mug.table",
                "counter.counter.held.default.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.counter.held.default.held.mug.table",
                "counter.counter.held.default.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtCounterOccludingAboveMug,
        steps: &[
            step(
                None,
                "counter.counter.occluding.aboveMug.default.none.table",
                "counter.counter.occluding.aboveMug.default.noop.empty",
                HIDDEN,
            ),
            step(
                Some("pick_jug"),
                "counter.counter.held.aboveMug.default.jug.table",
                "counter.counter.occluding.aboveMug.default.pick_jug.empty",
                CANNOT_PICK,
            ),
            step(
                Some("place"),
                "counter.counter.held.aboveMug.default.none.table",
                "counter.counter.held.aboveMug.default.place.empty",
                CANNOT_PICK,
            ),
            step(
                Some("pick_bowl"),
                "counter.counter.held.held.default.bowl.table",
                "counter.counter.held.aboveMug.default.pick_bowl.empty",
                NONE,
            ),
            step(
                Some("place"),
                "counter.counter.held.held.default.none.table",
                "counter.counter.held.held.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "counter.counter.held.held.held.mug.table",
                "counter.counter.held.held.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.counter.held.held.held.mug.table",
                "counter.counter.held.held.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtCounterMislocalized,
        steps: &[
            step(
                None,
                "table.counter.default.default.default.none.counter",
                "table.counter.default.aboveMug.default.noop.empty",
                &["lost", "cannotSee", "cannotPick"],
            ),
            step(
                Some("localize_to_table"),
                "table.counter.default.default.default.none.table",
                "table.counter.default.aboveMug.default.noop.empty",
                HIDDEN,
            ),
            step(
                Some("navigate_to_counter"),
                "counter.counter.default.default.default.none.table",
                "table.counter.default.default.default.navigate_to_counter.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "counter.counter.default.default.held.mug.table",
                "counter.counter.default.default.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.counter.default.default.held.mug.table",
                "counter.counter.default.default.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtTable,
        steps: &[
            step(
                None,
                "counter.table.default.default.default.none.table",
                "counter.table.default.aboveMug.default.noop.empty",
                ELSEWHERE,
            ),
            step(
                Some("navigate_to_table"),
                "table.table.default.default.default.none.table",
                "counter.table.default.default.default.navigate_to_table.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "table.table.default.default.held.mug.table",
                "table.table.default.default.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.table.default.default.held.mug.table",
                "table.table.default.default.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtTableAboveMug,
        steps: &[
            step(
                None,
                "counter.table.default.aboveMug.default.none.table",
                "counter.table.default.aboveMug.default.noop.empty",
                ELSEWHERE,
            ),
            step(
                Some("navigate_to_table"),
                "table.table.default.aboveMug.default.none.table",
                "counter.table.default.aboveMug.default.navigate_to_table.empty",
                CANNOT_PICK,
            ),
            step(
                Some("pick_bowl"),
                "table.table.default.held.default.bowl.table",
                "table.table.default.aboveMug.default.pick_bowl.empty",
                NONE,
            ),
            step(
                Some("place"),
                "table.table.default.held.default.none.table",
                "table.table.default.held.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "table.table.default.held.held.mug.table",
                "table.table.default.held.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.table.default.held.held.mug.table",
                "table.table.default.held.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtTableOccluding,
        steps: &[
            step(
                None,
                "counter.table.occluding.default.default.none.table",
                "counter.table.default.aboveMug.default.noop.empty",
                ELSEWHERE,
            ),
            step(
                Some("navigate_to_table"),
                "table.table.occluding.default.default.none.table",
                "counter.table.occluding.default.default.navigate_to_table.empty",
                HIDDEN,
            ),
            step(
                Some("pick_jug"),
                "table.table.held.default.default.jug.table",
                "table.table.occluding.default.default.pick_jug.empty",
                NONE,
            ),
            step(
                Some("place"),
                "table.table.held.default.default.none.table",
                "table.table.held.default.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "table.table.held.default.held.mug.table",
                "table.table.held.default.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.table.held.default.held.mug.table",
                "table.table.held.default.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
    Golden {
        start: StartCondition::AtTableOccludingAboveMug,
        steps: &[
            step(
                None,
                "counter.table.occluding.aboveMug.default.none.table",
                "counter.table.default.aboveMug.default.noop.empty",
                ELSEWHERE,
            ),
            step(
                Some("navigate_to_table"),
                "table.table.occluding.aboveMug.default.none.table",
                "counter.table.occluding.aboveMug.default.navigate_to_table.empty",
                HIDDEN,
            ),
            step(
                Some("pick_jug"),
                "table.table.held.aboveMug.default.jug.table",
                "table.table.occluding.aboveMug.default.pick_jug.empty",
                CANNOT_PICK,
            ),
            step(
                Some("place"),
                "table.table.held.aboveMug.default.none.table",
                "table.table.held.aboveMug.default.place.empty",
                CANNOT_PICK,
            ),
            step(
                Some("pick_bowl"),
                "table.table.held.held.default.bowl.table",
                "table.table.held.aboveMug.default.pick_bowl.empty",
                NONE,
            ),
            step(
                Some("place"),
                "table.table.held.held.default.none.table",
                "table.table.held.held.default.place.empty",
                NONE,
            ),
            step(
                Some("pick_mug"),
                "table.table.held.held.held.mug.table",
                "table.table.held.held.default.pick_mug.empty",
                NONE,
            ),
            step(
                Some("navigate_to_couch"),
                "couch.table.held.held.held.mug.table",
                "table.counter.held.held.held.navigate_to_couch.empty",
                NONE,
            ),
        ],
    },
];

/// Noise-free, unpadded config that shows every heuristic diagnosis and the
/// single expert action.
#[must_use]
pub fn truthful_config() -> SessionConfig {
    SessionConfig {
        max_diagnosis_suggestions: MAX_DIAGNOSIS_SUGGESTIONS,
        max_action_suggestions: 1,
        pad_suggestions: false,
        noise_level: 0.0,
        show_diagnosis_suggestions: true,
        show_action_suggestions: true,
    }
}

/// A runner whose catalog covers every reachable transition.
#[must_use]
pub fn full_runner() -> SessionRunner<InMemoryVideoCatalog, InMemorySessionStore> {
    let catalog = HarnessConfig::default()
        .build_catalog()
        .unwrap_or_default();
    SessionRunner::new(catalog, InMemorySessionStore::new())
}
