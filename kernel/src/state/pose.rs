//! Object poses and the gripper slot.

use crate::state::symbol::Symbolic;

/// One of the three manipulable objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item {
    Jug,
    Bowl,
    Mug,
}

impl Symbolic for Item {
    const KIND: &'static str = "item";
    const ALL: &'static [Self] = &[Self::Jug, Self::Bowl, Self::Mug];

    fn symbol(self) -> &'static str {
        match self {
            Self::Jug => "jug",
            Self::Bowl => "bowl",
            Self::Mug => "mug",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Jug => "Jug",
            Self::Bowl => "Bowl",
            Self::Mug => "Cup",
        }
    }
}

/// Pose of the jug. `Occluding` hides the mug from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JugPose {
    Default,
    Occluding,
    Held,
}

impl Symbolic for JugPose {
    const KIND: &'static str = "jug pose";
    const ALL: &'static [Self] = &[Self::Default, Self::Occluding, Self::Held];

    fn symbol(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Occluding => "occluding",
            Self::Held => "held",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Occluding => "Occluding the cup",
            Self::Held => "Held",
        }
    }
}

/// Pose of the bowl. `AboveMug` blocks the mug from being grasped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BowlPose {
    Default,
    AboveMug,
    Held,
}

impl Symbolic for BowlPose {
    const KIND: &'static str = "bowl pose";
    const ALL: &'static [Self] = &[Self::Default, Self::AboveMug, Self::Held];

    fn symbol(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AboveMug => "aboveMug",
            Self::Held => "held",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::AboveMug => "Above the cup",
            Self::Held => "Held",
        }
    }
}

/// Pose of the mug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MugPose {
    Default,
    Held,
}

impl Symbolic for MugPose {
    const KIND: &'static str = "mug pose";
    const ALL: &'static [Self] = &[Self::Default, Self::Held];

    fn symbol(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Held => "held",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Held => "Held",
        }
    }
}

/// Contents of the gripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeldObject {
    Empty,
    Jug,
    Bowl,
    Mug,
}

impl HeldObject {
    /// The item in the gripper, if any.
    #[must_use]
    pub const fn item(self) -> Option<Item> {
        match self {
            Self::Empty => None,
            Self::Jug => Some(Item::Jug),
            Self::Bowl => Some(Item::Bowl),
            Self::Mug => Some(Item::Mug),
        }
    }

    /// Gripper holding `item`.
    #[must_use]
    pub const fn holding(item: Item) -> Self {
        match item {
            Item::Jug => Self::Jug,
            Item::Bowl => Self::Bowl,
            Item::Mug => Self::Mug,
        }
    }
}

impl Symbolic for HeldObject {
    const KIND: &'static str = "held object";
    const ALL: &'static [Self] = &[Self::Empty, Self::Jug, Self::Bowl, Self::Mug];

    fn symbol(self) -> &'static str {
        match self {
            Self::Empty => "none",
            Self::Jug => "jug",
            Self::Bowl => "bowl",
            Self::Mug => "mug",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Empty => "nothing",
            Self::Jug => "Jug",
            Self::Bowl => "Bowl",
            Self::Mug => "Cup",
        }
    }
}

crate::symbol_codec!(Item, JugPose, BowlPose, MugPose, HeldObject);
