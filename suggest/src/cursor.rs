//! The session's resumable pseudorandom stream.
//!
//! Backed by `ChaCha8Rng`, whose output for a seed is the same on every
//! platform. A persisted cursor replays identically on any server.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Persisted position of a session's stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RngCursor(u64);

impl RngCursor {
    /// Cursor assigned to a freshly provisioned session.
    pub const INITIAL: Self = Self(0x5EED);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A stream resumed from a cursor for the span of one suggestion call.
///
/// Consuming [`CursorStream::finish`] is the only way to obtain the next
/// cursor, so a call cannot draw without also producing the value to persist.
#[derive(Debug)]
pub struct CursorStream {
    rng: ChaCha8Rng,
}

impl CursorStream {
    #[must_use]
    pub fn resume(cursor: RngCursor) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(cursor.0),
        }
    }

    /// A uniform index in `0..len`, or `None` when `len` is zero.
    ///
    /// Sampling goes through `u64` so the draw is independent of pointer width.
    pub fn draw_index(&mut self, len: usize) -> Option<usize> {
        let bound = u64::try_from(len).ok().filter(|&b| b > 0)?;
        usize::try_from(self.rng.gen_range(0..bound)).ok()
    }

    /// Remove and return a uniformly chosen element of `pool`.
    pub fn take_from<T>(&mut self, pool: &mut Vec<T>) -> Option<T> {
        let index = self.draw_index(pool.len())?;
        Some(pool.remove(index))
    }

    /// End the call and derive the cursor to persist.
    #[must_use = "the advanced cursor must be persisted"]
    pub fn finish(mut self) -> RngCursor {
        RngCursor(u64::from(self.rng.next_u32()))
    }
}
