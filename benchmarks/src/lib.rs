//! Shared helpers for dining benchmark suites.

use dining_harness::config::HarnessConfig;
use dining_harness::runner::SessionRunner;
use dining_harness::session::InMemorySessionStore;
use dining_kernel::state::start::StartCondition;
use dining_kernel::state::symbol::Symbolic;
use dining_kernel::video::catalog::InMemoryVideoCatalog;
use dining_suggest::cursor::RngCursor;
use dining_suggest::policy::SessionConfig;

/// The longest expert path: every object must be moved.
pub const LONG_PATH: &[&str] = &[
    "navigate_to_table",
    "pick_jug",
    "place",
    "pick_bowl",
    "place",
    "pick_mug",
    "navigate_to_couch",
];

pub const LONG_PATH_START: StartCondition = StartCondition::AtTableOccludingAboveMug;

/// A noisy, padded session config: the most stream draws per request.
#[must_use]
pub fn heavy_config() -> SessionConfig {
    SessionConfig {
        max_diagnosis_suggestions: 7,
        max_action_suggestions: 17,
        pad_suggestions: true,
        noise_level: 0.5,
        show_diagnosis_suggestions: true,
        show_action_suggestions: true,
    }
}

/// A runner with one provisioned session per start condition, keyed by the
/// condition's symbol.
///
/// # Panics
///
/// Panics if the default catalog or the session config is invalid.
/// Benchmark setup failures are fatal.
#[must_use]
pub fn provisioned_runner(
    config: &SessionConfig,
) -> SessionRunner<InMemoryVideoCatalog, InMemorySessionStore> {
    let catalog = HarnessConfig::default()
        .build_catalog()
        .expect("default catalog");
    let runner = SessionRunner::new(catalog, InMemorySessionStore::new());
    for &cond in StartCondition::ALL {
        runner
            .open_session(cond.symbol(), config.clone(), RngCursor::INITIAL)
            .expect("valid config");
    }
    runner
}

#[must_use]
pub fn long_path_actions() -> Vec<String> {
    LONG_PATH.iter().map(|s| (*s).to_string()).collect()
}
