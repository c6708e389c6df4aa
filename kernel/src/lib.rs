//! Dining Kernel: the deterministic scenario core.
//!
//! # API Surface
//!
//! - [`state::scenario::ScenarioState`] -- the 7-field scenario value and its predicates
//! - [`operators::apply::apply`] -- apply an action to a state, producing the next state
//! - [`video::resolver::video_id`] -- canonicalize a transition into a recorded asset id
//!
//! # Module Dependency Direction
//!
//! `state` ← `operators` ← `video`
//!
//! One-way only. `digest` is a leaf used by `video`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod operators;
pub mod state;
pub mod video;

#[doc(hidden)]
pub use serde as __serde;
