//! Dining Harness: per-session orchestration of the kernel and the
//! suggestion engine.
//!
//! The harness resolves a step (transition, video, fallback to no-op) and
//! runs the suggestion engine under the session's lock, persisting the
//! advanced cursor and request counter before the lock is released.
//!
//! The harness does NOT implement scenario rules or heuristics; it
//! delegates to `dining-kernel` and `dining-suggest`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod runner;
pub mod session;
pub mod telemetry;
