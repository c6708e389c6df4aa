//! The action vocabulary.
//!
//! Seventeen verbs in a fixed catalog order. The four error-simulation verbs
//! (`remove_obstacle`, `out_of_collision`, `restart_video`, `find_charger`)
//! exist so participants can try them; they never change the state.

use tracing::error;

use crate::state::location::Location;
use crate::state::pose::Item;
use crate::state::symbol::{SymbolError, Symbolic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    LocalizeToCouch,
    LocalizeToTable,
    LocalizeToCounter,
    NavigateToCouch,
    NavigateToTable,
    NavigateToCounter,
    RemoveObstacle,
    OutOfCollision,
    LookAtCouch,
    LookAtTable,
    LookAtCounter,
    PickBowl,
    PickJug,
    PickMug,
    Place,
    RestartVideo,
    FindCharger,
}

/// The structural shape of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Localize(Location),
    Navigate(Location),
    Look(Location),
    Pick(Item),
    Place,
    /// Error-simulation verb; never changes state.
    Inert,
}

impl Action {
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::LocalizeToCouch => ActionKind::Localize(Location::Couch),
            Self::LocalizeToTable => ActionKind::Localize(Location::Table),
            Self::LocalizeToCounter => ActionKind::Localize(Location::Counter),
            Self::NavigateToCouch => ActionKind::Navigate(Location::Couch),
            Self::NavigateToTable => ActionKind::Navigate(Location::Table),
            Self::NavigateToCounter => ActionKind::Navigate(Location::Counter),
            Self::LookAtCouch => ActionKind::Look(Location::Couch),
            Self::LookAtTable => ActionKind::Look(Location::Table),
            Self::LookAtCounter => ActionKind::Look(Location::Counter),
            Self::PickBowl => ActionKind::Pick(Item::Bowl),
            Self::PickJug => ActionKind::Pick(Item::Jug),
            Self::PickMug => ActionKind::Pick(Item::Mug),
            Self::Place => ActionKind::Place,
            Self::RemoveObstacle | Self::OutOfCollision | Self::RestartVideo | Self::FindCharger => {
                ActionKind::Inert
            }
        }
    }

    #[must_use]
    pub const fn localize_to(loc: Location) -> Self {
        match loc {
            Location::Couch => Self::LocalizeToCouch,
            Location::Table => Self::LocalizeToTable,
            Location::Counter => Self::LocalizeToCounter,
        }
    }

    #[must_use]
    pub const fn navigate_to(loc: Location) -> Self {
        match loc {
            Location::Couch => Self::NavigateToCouch,
            Location::Table => Self::NavigateToTable,
            Location::Counter => Self::NavigateToCounter,
        }
    }

    #[must_use]
    pub const fn look_at(loc: Location) -> Self {
        match loc {
            Location::Couch => Self::LookAtCouch,
            Location::Table => Self::LookAtTable,
            Location::Counter => Self::LookAtCounter,
        }
    }

    #[must_use]
    pub const fn pick(item: Item) -> Self {
        match item {
            Item::Jug => Self::PickJug,
            Item::Bowl => Self::PickBowl,
            Item::Mug => Self::PickMug,
        }
    }

    #[must_use]
    pub const fn is_localize(self) -> bool {
        matches!(self.kind(), ActionKind::Localize(_))
    }

    #[must_use]
    pub const fn is_look(self) -> bool {
        matches!(self.kind(), ActionKind::Look(_))
    }

    /// The arm moves during picks and places.
    #[must_use]
    pub const fn arm_in_motion(self) -> bool {
        matches!(self.kind(), ActionKind::Pick(_) | ActionKind::Place)
    }
}

impl Symbolic for Action {
    const KIND: &'static str = "action";
    const ALL: &'static [Self] = &[
        Self::LocalizeToCouch,
        Self::LocalizeToTable,
        Self::LocalizeToCounter,
        Self::NavigateToCouch,
        Self::NavigateToTable,
        Self::NavigateToCounter,
        Self::RemoveObstacle,
        Self::OutOfCollision,
        Self::LookAtCouch,
        Self::LookAtTable,
        Self::LookAtCounter,
        Self::PickBowl,
        Self::PickJug,
        Self::PickMug,
        Self::Place,
        Self::RestartVideo,
        Self::FindCharger,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Self::LocalizeToCouch => "localize_to_couch",
            Self::LocalizeToTable => "localize_to_table",
            Self::LocalizeToCounter => "localize_to_counter",
            Self::NavigateToCouch => "navigate_to_couch",
            Self::NavigateToTable => "navigate_to_table",
            Self::NavigateToCounter => "navigate_to_counter",
            Self::RemoveObstacle => "remove_obstacle",
            Self::OutOfCollision => "out_of_collision",
            Self::LookAtCouch => "look_at_couch",
            Self::LookAtTable => "look_at_table",
            Self::LookAtCounter => "look_at_counter",
            Self::PickBowl => "pick_bowl",
            Self::PickJug => "pick_jug",
            Self::PickMug => "pick_mug",
            Self::Place => "place",
            Self::RestartVideo => "restart_video",
            Self::FindCharger => "find_charger",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::LocalizeToCouch => "Update robot's location belief to: Couch",
            Self::LocalizeToTable => "Update robot's location belief to: Dining Table",
            Self::LocalizeToCounter => "Update robot's location belief to: Kitchen Counter",
            Self::NavigateToCouch => "Navigate to Couch",
            Self::NavigateToTable => "Navigate to Dining Table",
            Self::NavigateToCounter => "Navigate to Kitchen Counter",
            Self::RemoveObstacle => "Remove the obstacle blocking navigation",
            Self::OutOfCollision => "Move away from a collision",
            Self::LookAtCouch => "Look at Couch",
            Self::LookAtTable => "Look at Dining Table",
            Self::LookAtCounter => "Look at Kitchen Counter",
            Self::PickBowl => "Pick up the Bowl",
            Self::PickJug => "Pick up the Jug",
            Self::PickMug => "Pick up the Cup",
            Self::Place => "Put away held object",
            Self::RestartVideo => "Restart the camera",
            Self::FindCharger => "Find the charger and navigate to it",
        }
    }
}

crate::symbol_codec!(Action);

/// Parse an action symbol arriving from a caller.
///
/// An unknown symbol means the caller's action catalog and this kernel
/// disagree, so it is logged at error level before being returned.
///
/// # Errors
///
/// Returns [`SymbolError`] if `raw` is not an action symbol.
pub fn parse_action(raw: &str) -> Result<Action, SymbolError> {
    Action::from_symbol(raw).inspect_err(|err| {
        error!(action = raw, %err, "unknown action symbol");
    })
}
