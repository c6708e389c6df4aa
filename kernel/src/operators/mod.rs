//! Actions, the transition rules, and transitions.

pub mod action;
pub mod apply;
pub mod transition;
