//! `ScenarioState`: the 7-field belief/physical snapshot.
//!
//! Field order is fixed and is the order of the wire tuple and of the dotted
//! string form:
//! `(robotLocation, objectLocation, jugPose, bowlPose, mugPose, heldObject, tableLabel)`.
//!
//! # Invariants (enforced by every public constructor)
//!
//! - `objectLocation` is never `couch`.
//! - A non-empty gripper holds an object whose pose is `held`.
//! - The mug pose is `held` iff the gripper holds the mug. The mug is never
//!   stowed; a `held` jug or bowl with a different gripper content has been
//!   put away and is out of the scene.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::location::{Location, Relabeling};
use crate::state::pose::{BowlPose, HeldObject, Item, JugPose, MugPose};
use crate::state::symbol::{SymbolError, Symbolic};

/// Number of fields in the wire tuple.
pub const STATE_ARITY: usize = 7;

/// Failure to build a [`ScenarioState`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The tuple does not have exactly [`STATE_ARITY`] fields.
    #[error("state tuple must have 7 fields, got {got}")]
    Arity { got: usize },
    /// A field is not a symbol of its vocabulary.
    #[error("state field {field}: {source}")]
    Symbol {
        field: &'static str,
        #[source]
        source: SymbolError,
    },
    /// Objects were placed at the couch.
    #[error("objects cannot be located at the couch")]
    ObjectsAtCouch,
    /// The gripper content disagrees with the object poses.
    #[error("inconsistent gripper: {detail}")]
    InconsistentGripper { detail: String },
}

/// The scenario snapshot. A pure value: ordering, hashing and text form all
/// derive from the 7-tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "[&'static str; STATE_ARITY]")]
pub struct ScenarioState {
    pub(crate) robot: Location,
    pub(crate) objects: Location,
    pub(crate) jug: JugPose,
    pub(crate) bowl: BowlPose,
    pub(crate) mug: MugPose,
    pub(crate) held: HeldObject,
    pub(crate) label: Location,
}

impl ScenarioState {
    /// Build a state, checking the gripper and location invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ObjectsAtCouch`] or
    /// [`StateError::InconsistentGripper`] when an invariant is violated.
    pub fn new(
        robot: Location,
        objects: Location,
        jug: JugPose,
        bowl: BowlPose,
        mug: MugPose,
        held: HeldObject,
        label: Location,
    ) -> Result<Self, StateError> {
        let state = Self {
            robot,
            objects,
            jug,
            bowl,
            mug,
            held,
            label,
        };
        state.check()?;
        Ok(state)
    }

    /// Strictly parse the 7-element wire tuple.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Arity`] for a wrong field count,
    /// [`StateError::Symbol`] naming the first bad field, or an invariant
    /// error from [`ScenarioState::new`].
    pub fn parse_tuple<S: AsRef<str>>(fields: &[S]) -> Result<Self, StateError> {
        if fields.len() != STATE_ARITY {
            return Err(StateError::Arity { got: fields.len() });
        }
        Self::new(
            field("robotLocation", fields[0].as_ref())?,
            field("objectLocation", fields[1].as_ref())?,
            field("jugPose", fields[2].as_ref())?,
            field("bowlPose", fields[3].as_ref())?,
            field("mugPose", fields[4].as_ref())?,
            field("heldObject", fields[5].as_ref())?,
            field("tableLabel", fields[6].as_ref())?,
        )
    }

    /// The wire tuple.
    #[must_use]
    pub fn to_tuple(&self) -> [&'static str; STATE_ARITY] {
        [
            self.robot.symbol(),
            self.objects.symbol(),
            self.jug.symbol(),
            self.bowl.symbol(),
            self.mug.symbol(),
            self.held.symbol(),
            self.label.symbol(),
        ]
    }

    fn check(&self) -> Result<(), StateError> {
        if self.objects == Location::Couch {
            return Err(StateError::ObjectsAtCouch);
        }
        if let Some(item) = self.held.item() {
            if !self.pose_is_held(item) {
                return Err(StateError::InconsistentGripper {
                    detail: format!("gripper holds {item} but its pose is not held"),
                });
            }
        }
        if self.mug == MugPose::Held && self.held != HeldObject::Mug {
            return Err(StateError::InconsistentGripper {
                detail: format!("mug pose is held but gripper holds {}", self.held),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Field access
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn robot_location(&self) -> Location {
        self.robot
    }

    #[must_use]
    pub fn object_location(&self) -> Location {
        self.objects
    }

    #[must_use]
    pub fn jug_pose(&self) -> JugPose {
        self.jug
    }

    #[must_use]
    pub fn bowl_pose(&self) -> BowlPose {
        self.bowl
    }

    #[must_use]
    pub fn mug_pose(&self) -> MugPose {
        self.mug
    }

    #[must_use]
    pub fn held_object(&self) -> HeldObject {
        self.held
    }

    #[must_use]
    pub fn table_label(&self) -> Location {
        self.label
    }

    // -----------------------------------------------------------------------
    // Derived predicates
    // -----------------------------------------------------------------------

    /// The relabeling currently in force.
    #[must_use]
    pub fn relabeling(&self) -> Relabeling {
        Relabeling::for_label(self.label)
    }

    /// Where the robot believes it is.
    #[must_use]
    pub fn relocalized_location(&self) -> Location {
        self.relabeling().believed(self.robot)
    }

    #[must_use]
    pub fn is_mislocalized(&self) -> bool {
        self.label != Location::Table
    }

    /// Whether `item`'s pose is `held` (in the gripper or stowed).
    #[must_use]
    pub fn pose_is_held(&self, item: Item) -> bool {
        match item {
            Item::Jug => self.jug == JugPose::Held,
            Item::Bowl => self.bowl == BowlPose::Held,
            Item::Mug => self.mug == MugPose::Held,
        }
    }

    #[must_use]
    pub fn mug_held(&self) -> bool {
        self.held == HeldObject::Mug
    }

    /// Whether the camera can see `item` from the robot's true location.
    #[must_use]
    pub fn is_visible(&self, item: Item) -> bool {
        if self.robot != self.objects {
            return false;
        }
        match item {
            Item::Jug => self.jug != JugPose::Held,
            Item::Bowl => {
                self.bowl != BowlPose::Held
                    && !(self.jug == JugPose::Occluding && self.bowl == BowlPose::AboveMug)
            }
            Item::Mug => self.mug == MugPose::Default && self.jug != JugPose::Occluding,
        }
    }

    /// Whether `item` can be picked right now.
    #[must_use]
    pub fn is_graspable(&self, item: Item) -> bool {
        if self.held != HeldObject::Empty || !self.is_visible(item) {
            return false;
        }
        match item {
            Item::Jug | Item::Bowl => true,
            Item::Mug => self.bowl != BowlPose::AboveMug,
        }
    }

    /// Visible items in `jug, bowl, mug` order.
    #[must_use]
    pub fn visible_objects(&self) -> Vec<Item> {
        Item::ALL.iter().copied().filter(|&i| self.is_visible(i)).collect()
    }

    /// Graspable items in `jug, bowl, mug` order.
    #[must_use]
    pub fn graspable_objects(&self) -> Vec<Item> {
        Item::ALL.iter().copied().filter(|&i| self.is_graspable(i)).collect()
    }

    /// The goal: correctly localized at the couch with the mug in hand.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.robot == Location::Couch
            && self.mug == MugPose::Held
            && self.held == HeldObject::Mug
            && self.label == Location::Table
    }
}

fn field<T: Symbolic>(name: &'static str, raw: &str) -> Result<T, StateError> {
    T::from_symbol(raw).map_err(|source| StateError::Symbol {
        field: name,
        source,
    })
}

impl fmt::Display for ScenarioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tuple().join("."))
    }
}

impl FromStr for ScenarioState {
    type Err = StateError;

    /// Parse the dotted form, e.g. `counter.counter.default.aboveMug.default.none.table`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('.').collect();
        Self::parse_tuple(&fields)
    }
}

impl TryFrom<Vec<String>> for ScenarioState {
    type Error = StateError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse_tuple(&fields)
    }
}

impl From<ScenarioState> for [&'static str; STATE_ARITY] {
    fn from(state: ScenarioState) -> Self {
        state.to_tuple()
    }
}
