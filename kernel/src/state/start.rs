//! The eight scenario entry states.

use crate::state::location::Location;
use crate::state::pose::{BowlPose, HeldObject, JugPose, MugPose};
use crate::state::scenario::ScenarioState;
use crate::state::symbol::Symbolic;

/// A named starting configuration for one study trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StartCondition {
    AtCounterAboveMug,
    AtCounterOccluding,
    AtCounterOccludingAboveMug,
    AtCounterMislocalized,
    AtTable,
    AtTableAboveMug,
    AtTableOccluding,
    AtTableOccludingAboveMug,
}

impl Symbolic for StartCondition {
    const KIND: &'static str = "start condition";
    const ALL: &'static [Self] = &[
        Self::AtCounterAboveMug,
        Self::AtCounterOccluding,
        Self::AtCounterOccludingAboveMug,
        Self::AtCounterMislocalized,
        Self::AtTable,
        Self::AtTableAboveMug,
        Self::AtTableOccluding,
        Self::AtTableOccludingAboveMug,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::AtCounterAboveMug => "at_counter_above_mug",
            Self::AtCounterOccluding => "at_counter_occluding",
            Self::AtCounterOccludingAboveMug => "at_counter_occluding_above_mug",
            Self::AtCounterMislocalized => "at_counter_mislocalized",
            Self::AtTable => "at_table",
            Self::AtTableAboveMug => "at_table_above_mug",
            Self::AtTableOccluding => "at_table_occluding",
            Self::AtTableOccludingAboveMug => "at_table_occluding_above_mug",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AtCounterAboveMug => "Objects at the counter, bowl above the cup",
            Self::AtCounterOccluding => "Objects at the counter, jug hiding the cup",
            Self::AtCounterOccludingAboveMug => {
                "Objects at the counter, jug hiding the cup, bowl above the cup"
            }
            Self::AtCounterMislocalized => "Objects at the counter, robot lost at the table",
            Self::AtTable => "Objects at the table",
            Self::AtTableAboveMug => "Objects at the table, bowl above the cup",
            Self::AtTableOccluding => "Objects at the table, jug hiding the cup",
            Self::AtTableOccludingAboveMug => {
                "Objects at the table, jug hiding the cup, bowl above the cup"
            }
        }
    }
}

crate::symbol_codec!(StartCondition);

impl StartCondition {
    /// The entry state of this condition.
    #[must_use]
    pub fn state(self) -> ScenarioState {
        use Location::{Counter, Table};
        let (robot, objects, jug, bowl, label) = match self {
            Self::AtCounterAboveMug => (Counter, Counter, JugPose::Default, BowlPose::AboveMug, Table),
            Self::AtCounterOccluding => (Counter, Counter, JugPose::Occluding, BowlPose::Default, Table),
            Self::AtCounterOccludingAboveMug => {
                (Counter, Counter, JugPose::Occluding, BowlPose::AboveMug, Table)
            }
            Self::AtCounterMislocalized => (Table, Counter, JugPose::Default, BowlPose::Default, Counter),
            Self::AtTable => (Counter, Table, JugPose::Default, BowlPose::Default, Table),
            Self::AtTableAboveMug => (Counter, Table, JugPose::Default, BowlPose::AboveMug, Table),
            Self::AtTableOccluding => (Counter, Table, JugPose::Occluding, BowlPose::Default, Table),
            Self::AtTableOccludingAboveMug => {
                (Counter, Table, JugPose::Occluding, BowlPose::AboveMug, Table)
            }
        };
        ScenarioState {
            robot,
            objects,
            jug,
            bowl,
            mug: MugPose::Default,
            held: HeldObject::Empty,
            label,
        }
    }

    /// The condition whose entry state is `state`, if any.
    #[must_use]
    pub fn for_state(state: &ScenarioState) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.state() == *state)
    }
}
