//! Dining Suggest: diagnosis and next-action hints with scheduled noise.
//!
//! # API Surface
//!
//! - [`diagnosis::ordered_diagnoses`] / [`advisor::optimal_action`] -- pure heuristics
//! - [`engine::suggest_diagnoses`] / [`engine::suggest_actions`] -- heuristics
//!   passed through the corruption schedule and padding, drawing from a
//!   resumable stream
//!
//! # Cursor protocol
//!
//! The pseudorandom stream never outlives a call. Each call re-seeds a
//! generator from the session's persisted [`cursor::RngCursor`], draws, and
//! derives the next cursor from the same generator. The caller persists the
//! returned cursor before serving another request for the same session.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod advisor;
pub mod cursor;
pub mod diagnosis;
pub mod engine;
pub mod error;
pub mod policy;
pub mod schedule;
