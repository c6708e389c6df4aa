//! Session runner: serves one scenario step for one session.
//!
//! # Pipeline
//!
//! ```text
//! parse state + action
//!   → Transition::step() (or initial) → video_id() → catalog lookup
//!   → [refused or unrecorded: fall back to the no-op transition]
//!   → lock session → suggest_diagnoses() → suggest_actions()
//!   → persist cursor + request counter → unlock
//! ```
//!
//! A refused action and a missing recording are both reported as
//! `accepted = false` with the no-op video. An unknown action symbol, a
//! malformed state, or a missing no-op recording is an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use dining_kernel::digest::{canonical_hash, ContentHash, HashDomain};
use dining_kernel::operators::action::{parse_action, Action};
use dining_kernel::operators::apply::legal_actions;
use dining_kernel::operators::transition::Transition;
use dining_kernel::state::scenario::{ScenarioState, StateError};
use dining_kernel::video::resolver::video_id;
use dining_suggest::cursor::RngCursor;
use dining_suggest::diagnosis::Diagnosis;
use dining_suggest::engine::{suggest_actions, suggest_diagnoses, Suggestions};
use dining_suggest::error::SuggestError;
use dining_suggest::policy::SessionConfig;

use crate::contract::{SessionRecord, SessionStore, StoreError, VideoCatalog};

/// Error serving a step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The state tuple did not parse.
    #[error("malformed state: {0}")]
    MalformedState(#[from] StateError),
    /// The action symbol is not in the action catalog.
    #[error("unknown action {action:?}")]
    UnknownAction { action: String },
    /// Not even the no-op transition has a recording.
    #[error("no recording for {video_id}")]
    MissingAsset { video_id: String },
    /// The session configuration is out of range.
    #[error(transparent)]
    InvalidConfig(#[from] SuggestError),
    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One step request as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRequest {
    pub session_id: String,
    /// The 7-symbol state tuple the client is in.
    pub state: Vec<String>,
    /// `None` for scenario entry.
    pub action: Option<String>,
}

/// Everything the client needs to render the next step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResponse {
    pub state: ScenarioState,
    pub accepted: bool,
    pub completed: bool,
    pub video_id: String,
    pub video_url: String,
    pub arm_in_motion: bool,
    pub legal_actions: Vec<Action>,
    pub diagnosis_suggestions: Suggestions<Diagnosis>,
    pub action_suggestions: Suggestions<Action>,
    /// Cursor persisted for the session after this step.
    pub cursor: RngCursor,
    /// Requests the session has been served, including this one.
    pub request_counter: u64,
}

/// A transition with its recording, after any fallback.
#[derive(Debug, Clone)]
struct Resolved {
    transition: Transition,
    video_id: String,
    video_url: String,
    accepted: bool,
}

/// Serves steps against a catalog and a session store.
#[derive(Debug)]
pub struct SessionRunner<C, S> {
    catalog: C,
    store: S,
}

impl<C: VideoCatalog, S: SessionStore> SessionRunner<C, S> {
    #[must_use]
    pub fn new(catalog: C, store: S) -> Self {
        Self { catalog, store }
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `config` and provision the session (idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::InvalidConfig`] or [`RunError::Store`].
    pub fn open_session(
        &self,
        session_id: &str,
        config: SessionConfig,
        cursor: RngCursor,
    ) -> Result<SessionRecord, RunError> {
        config.validate()?;
        Ok(self
            .store
            .provision(session_id, SessionRecord::new(config, cursor))?)
    }

    /// Serve one step.
    ///
    /// # Errors
    ///
    /// Returns [`RunError`] on:
    /// - `MalformedState`: the state tuple does not parse
    /// - `UnknownAction`: the action symbol is not in the catalog (logged)
    /// - `MissingAsset`: the no-op transition has no recording
    /// - `Store`: unknown or poisoned session
    pub fn step(&self, request: &StepRequest) -> Result<StepResponse, RunError> {
        let start = ScenarioState::parse_tuple(&request.state)?;
        let action = request
            .action
            .as_deref()
            .map(parse_action)
            .transpose()
            .map_err(|err| RunError::UnknownAction { action: err.raw })?;

        let resolved = self.resolve(start, action)?;
        let response = self
            .store
            .with_session(&request.session_id, |record| serve(record, resolved))?;

        debug!(
            session = %request.session_id,
            video_id = %response.video_id,
            accepted = response.accepted,
            request_counter = response.request_counter,
            "step served"
        );
        Ok(response)
    }

    fn resolve(&self, start: ScenarioState, action: Option<Action>) -> Result<Resolved, RunError> {
        let attempted = match action {
            None => Some(Transition::initial(start)),
            Some(action) => match Transition::step(start, action) {
                Ok(t) => Some(t),
                Err(failure) => {
                    warn!(%start, %action, %failure, "action refused; replaying no-op");
                    None
                }
            },
        };

        if let Some(transition) = attempted {
            let id = video_id(&transition);
            if let Some(url) = self.catalog.url_for(&id) {
                return Ok(Resolved {
                    transition,
                    video_url: url.to_string(),
                    video_id: id,
                    accepted: true,
                });
            }
            warn!(video_id = %id, "no recording for transition; replaying no-op");
        }

        let transition = Transition::initial(start);
        let id = video_id(&transition);
        let url = self
            .catalog
            .url_for(&id)
            .ok_or_else(|| RunError::MissingAsset {
                video_id: id.clone(),
            })?;
        Ok(Resolved {
            transition,
            video_url: url.to_string(),
            video_id: id,
            accepted: false,
        })
    }

    /// Serve scenario entry from `start`, then each of `actions` from the
    /// state the previous step left the client in.
    ///
    /// # Errors
    ///
    /// Stops at the first [`RunError`].
    pub fn replay(
        &self,
        session_id: &str,
        start: ScenarioState,
        actions: &[String],
    ) -> Result<Vec<StepResponse>, RunError> {
        let mut responses = Vec::with_capacity(actions.len() + 1);
        let mut state = start;
        let requested = std::iter::once(None).chain(actions.iter().cloned().map(Some));
        for action in requested {
            let request = StepRequest {
                session_id: session_id.to_string(),
                state: state.to_tuple().iter().map(|s| (*s).to_string()).collect(),
                action,
            };
            let response = self.step(&request)?;
            state = response.state;
            responses.push(response);
        }
        Ok(responses)
    }
}

/// Run the suggestion engine for a resolved step and persist the session's
/// stream position. Called with the session locked.
fn serve(record: &mut SessionRecord, resolved: Resolved) -> StepResponse {
    let end = resolved.transition.end();
    let action = resolved.transition.action();
    let request_index = record.request_counter;

    let (diagnosis_suggestions, cursor) =
        suggest_diagnoses(&end, action, &record.config, request_index, record.cursor);
    let (action_suggestions, cursor) =
        suggest_actions(&end, action, &record.config, request_index, cursor);

    record.cursor = cursor;
    record.request_counter += 1;

    StepResponse {
        state: end,
        accepted: resolved.accepted,
        completed: end.is_terminal(),
        video_id: resolved.video_id,
        video_url: resolved.video_url,
        arm_in_motion: resolved.transition.arm_in_motion(),
        legal_actions: legal_actions(&end),
        diagnosis_suggestions,
        action_suggestions,
        cursor,
        request_counter: record.request_counter,
    }
}

/// Digest of a replayed trajectory's JSON lines.
///
/// # Errors
///
/// Returns the `serde_json` error if a response fails to serialize.
pub fn trajectory_digest(responses: &[StepResponse]) -> Result<ContentHash, serde_json::Error> {
    let mut bytes = Vec::new();
    for response in responses {
        serde_json::to_writer(&mut bytes, response)?;
        bytes.push(b'\n');
    }
    Ok(canonical_hash(HashDomain::Trajectory, &bytes))
}
