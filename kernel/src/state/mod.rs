//! Scenario vocabulary and the state value type.

pub mod location;
pub mod pose;
pub mod scenario;
pub mod start;
pub mod symbol;
