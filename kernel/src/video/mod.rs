//! Recorded-video identifiers, the catalog of recorded assets, and the
//! reachable transition space the catalog must cover.

pub mod catalog;
pub mod reachable;
pub mod resolver;
