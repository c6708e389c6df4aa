//! `video_id()`: canonicalize a transition into a recorded asset id.
//!
//! Many transitions look identical on camera, so many map onto one asset.
//! Resolution runs in strict order:
//!
//! 1. Unchanged state under a non-look action, and every localize action,
//!    plays as `noop`.
//! 2. Navigate/look destinations are re-targeted through the inverse of the
//!    start state's relabeling. A destination equal to the robot's true
//!    location plays as `noop`. `apply` refuses such actions; the rule
//!    keeps `video_id` total over every triple.
//! 3. Camera-angle aliases: from the counter `look_at_couch` shows the same
//!    footage as `look_at_table`; from the couch `look_at_table` shows the
//!    same footage as `look_at_counter`.
//! 4. Footage-reuse substitutions ([`SUBSTITUTIONS`], first match wins).
//! 5. Encode `robot.objects.jug.bowl.mug.action.gripped`.
//!
//! Any change to these rules breaks playback against the recorded catalog,
//! so the rule set is versioned by [`CATALOG_FORMAT_VERSION`].

use std::fmt;

use crate::operators::action::{Action, ActionKind};
use crate::operators::transition::Transition;
use crate::state::location::Location;
use crate::state::pose::{BowlPose, Item, JugPose, MugPose};
use crate::state::scenario::ScenarioState;
use crate::state::symbol::Symbolic;

/// Version of the id format and substitution table.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// The canonical action slot of a video id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VideoAction {
    Noop,
    Act(Action),
}

impl VideoAction {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Act(action) => action.symbol(),
        }
    }
}

/// The scene shown in a video: where the objects are and how they sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scene {
    pub objects: Location,
    pub jug: JugPose,
    pub bowl: BowlPose,
    pub mug: MugPose,
}

impl Scene {
    fn of(state: &ScenarioState) -> Self {
        Self {
            objects: state.object_location(),
            jug: state.jug_pose(),
            bowl: state.bowl_pose(),
            mug: state.mug_pose(),
        }
    }

    /// The generic object arrangement reused when the poses are not visible.
    #[must_use]
    pub const fn generic(objects: Location) -> Self {
        Self {
            objects,
            jug: JugPose::Default,
            bowl: BowlPose::AboveMug,
            mug: MugPose::Default,
        }
    }

    fn shows_held(&self, item: Item) -> bool {
        match item {
            Item::Jug => self.jug == JugPose::Held,
            Item::Bowl => self.bowl == BowlPose::Held,
            Item::Mug => self.mug == MugPose::Held,
        }
    }
}

/// A resolved video identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoKey {
    pub robot: Location,
    pub scene: Scene,
    pub action: VideoAction,
    /// Object visibly in the gripper that the scene poses do not already show.
    pub gripped: Option<Item>,
}

impl fmt::Display for VideoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}.{}.{}",
            self.robot.symbol(),
            self.scene.objects.symbol(),
            self.scene.jug.symbol(),
            self.scene.bowl.symbol(),
            self.scene.mug.symbol(),
            self.action.symbol(),
            self.gripped.map_or("empty", Item::symbol),
        )
    }
}

// ---------------------------------------------------------------------------
// Substitution table
// ---------------------------------------------------------------------------

/// What a matching substitution does to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Objects move to the given location and take the generic arrangement.
    Generic(Location),
    /// Generic arrangement, objects where they are.
    GenericInPlace,
    /// Only the object location changes.
    MoveObjects(Location),
}

/// One footage-reuse rule. `None` fields match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub robot: Location,
    pub objects: Option<Location>,
    pub action: VideoAction,
    /// Rule applies only while the mug is not held.
    pub mug_not_held: bool,
    /// Rule applies only when the jug, bowl and mug all show as held.
    pub all_held: bool,
    pub rewrite: Rewrite,
}

const fn rule(
    robot: Location,
    objects: Option<Location>,
    action: VideoAction,
    mug_not_held: bool,
    rewrite: Rewrite,
) -> Substitution {
    Substitution {
        robot,
        objects,
        action,
        mug_not_held,
        all_held: false,
        rewrite,
    }
}

/// Footage-reuse substitutions, in priority order.
pub const SUBSTITUTIONS: [Substitution; 8] = [
    rule(Location::Couch, None, VideoAction::Noop, false, Rewrite::Generic(Location::Counter)),
    rule(Location::Table, Some(Location::Counter), VideoAction::Noop, true, Rewrite::GenericInPlace),
    rule(Location::Counter, Some(Location::Table), VideoAction::Noop, true, Rewrite::GenericInPlace),
    rule(
        Location::Table,
        Some(Location::Counter),
        VideoAction::Act(Action::LookAtCouch),
        true,
        Rewrite::GenericInPlace,
    ),
    rule(
        Location::Table,
        Some(Location::Counter),
        VideoAction::Act(Action::NavigateToCouch),
        true,
        Rewrite::GenericInPlace,
    ),
    rule(
        Location::Couch,
        Some(Location::Counter),
        VideoAction::Act(Action::NavigateToTable),
        false,
        Rewrite::GenericInPlace,
    ),
    rule(
        Location::Counter,
        Some(Location::Table),
        VideoAction::Act(Action::NavigateToCouch),
        true,
        Rewrite::GenericInPlace,
    ),
    Substitution {
        robot: Location::Table,
        objects: Some(Location::Table),
        action: VideoAction::Act(Action::NavigateToCouch),
        mug_not_held: false,
        all_held: true,
        rewrite: Rewrite::MoveObjects(Location::Counter),
    },
];

impl Substitution {
    fn matches(&self, robot: Location, scene: &Scene, action: VideoAction) -> bool {
        self.robot == robot
            && self.objects.is_none_or(|loc| loc == scene.objects)
            && self.action == action
            && (!self.mug_not_held || scene.mug != MugPose::Held)
            && (!self.all_held || Item::ALL.iter().all(|&i| scene.shows_held(i)))
    }

    fn rewrite(&self, scene: Scene) -> Scene {
        match self.rewrite {
            Rewrite::Generic(objects) => Scene::generic(objects),
            Rewrite::GenericInPlace => Scene::generic(scene.objects),
            Rewrite::MoveObjects(objects) => Scene { objects, ..scene },
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve `transition` to its structured video key.
#[must_use]
pub fn resolve(transition: &Transition) -> VideoKey {
    let end = transition.end();
    let (start, action) = match transition.start() {
        Some(start) => (start, transition.action()),
        None => (end, None),
    };

    let action = alias(start.robot_location(), canonical_action(&start, action, &end));

    let robot = start.robot_location();
    let scene = Scene::of(&start);
    let scene = SUBSTITUTIONS
        .iter()
        .find(|sub| sub.matches(robot, &scene, action))
        .map_or(scene, |sub| sub.rewrite(scene));

    let gripped = start
        .held_object()
        .item()
        .filter(|&item| !scene.shows_held(item));

    VideoKey {
        robot,
        scene,
        action,
        gripped,
    }
}

/// Resolve `transition` to its video id string.
#[must_use]
pub fn video_id(transition: &Transition) -> String {
    resolve(transition).to_string()
}

fn canonical_action(
    start: &ScenarioState,
    action: Option<Action>,
    end: &ScenarioState,
) -> VideoAction {
    let Some(action) = action else {
        return VideoAction::Noop;
    };
    if action.is_localize() || (start == end && !action.is_look()) {
        return VideoAction::Noop;
    }
    let retarget = |believed: Location| start.relabeling().actual(believed);
    match action.kind() {
        ActionKind::Navigate(believed) => {
            let dest = retarget(believed);
            if dest == start.robot_location() {
                VideoAction::Noop
            } else {
                VideoAction::Act(Action::navigate_to(dest))
            }
        }
        ActionKind::Look(believed) => {
            let dest = retarget(believed);
            if dest == start.robot_location() {
                VideoAction::Noop
            } else {
                VideoAction::Act(Action::look_at(dest))
            }
        }
        _ => VideoAction::Act(action),
    }
}

fn alias(robot: Location, action: VideoAction) -> VideoAction {
    match (robot, action) {
        (Location::Counter, VideoAction::Act(Action::LookAtCouch)) => {
            VideoAction::Act(Action::LookAtTable)
        }
        (Location::Couch, VideoAction::Act(Action::LookAtTable)) => {
            VideoAction::Act(Action::LookAtCounter)
        }
        _ => action,
    }
}
