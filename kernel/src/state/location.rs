//! Physical locations and the relabeling permutations that simulate a
//! localization offset.
//!
//! A relabeling is keyed by the location the robot currently believes is
//! the dining table (`tableLabel`). It maps each true location to the
//! location the robot believes it is at. The three relabelings are the
//! cyclic permutations of {counter, table, couch}; `table` is the identity.

use crate::state::symbol::Symbolic;

/// One of the three places in the dining room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Counter,
    Table,
    Couch,
}

impl Symbolic for Location {
    const KIND: &'static str = "location";
    const ALL: &'static [Self] = &[Self::Counter, Self::Table, Self::Couch];

    fn symbol(self) -> &'static str {
        match self {
            Self::Counter => "counter",
            Self::Table => "table",
            Self::Couch => "couch",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Counter => "Kitchen Counter",
            Self::Table => "Dining Table",
            Self::Couch => "Couch",
        }
    }
}

crate::symbol_codec!(Location);

/// The relabeling selected by one `tableLabel` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relabeling {
    label: Location,
}

impl Relabeling {
    /// The relabeling in force when the robot believes `label` is the table.
    #[must_use]
    pub const fn for_label(label: Location) -> Self {
        Self { label }
    }

    /// Where the robot believes it is when it is truly at `actual`.
    #[must_use]
    pub const fn believed(self, actual: Location) -> Location {
        use Location::{Counter, Couch, Table};
        match (self.label, actual) {
            (Table, loc) => loc,
            (Counter, Table) | (Couch, Couch) => Counter,
            (Counter, Counter) | (Couch, Table) => Couch,
            (Counter, Couch) | (Couch, Counter) => Table,
        }
    }

    /// The true location the robot reaches when it targets `believed`.
    #[must_use]
    pub const fn actual(self, believed: Location) -> Location {
        use Location::{Counter, Couch, Table};
        match (self.label, believed) {
            (Table, loc) => loc,
            (Counter, Counter) | (Couch, Couch) => Table,
            (Counter, Couch) | (Couch, Table) => Counter,
            (Counter, Table) | (Couch, Counter) => Couch,
        }
    }

    /// The unique `tableLabel` under which `actual` is believed to be `believed`.
    #[must_use]
    pub const fn solve(actual: Location, believed: Location) -> Location {
        use Location::{Counter, Couch, Table};
        match (actual, believed) {
            (Counter, Counter) | (Table, Table) | (Couch, Couch) => Table,
            (Table, Counter) | (Counter, Couch) | (Couch, Table) => Counter,
            (Table, Couch) | (Counter, Table) | (Couch, Counter) => Couch,
        }
    }
}
