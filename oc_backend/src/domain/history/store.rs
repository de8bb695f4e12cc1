use oc_core::types::turn::Turn;
use oc_core::utils::rw_lock::RwLockExt;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Process-wide conversation history, keyed by the client's session id.
///
/// Entries appear on the first append and live until deleted or until the
/// process exits. Each mutation runs under the write lock, so concurrent
/// appends to one session are never lost.
#[derive(Debug, Default)]
pub struct HistoryStore {
    sessions: RwLock<HashMap<String, Vec<Turn>>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns of `session_id` in insertion order; empty for unknown sessions.
    pub fn get(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .read_lock("reading session history")
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn append(&self, session_id: &str, turn: Turn) {
        let mut sessions = self.sessions.write_lock("appending to session history");
        debug!(session_id, role = %turn.role, "appending turn");
        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(turn);
    }

    /// Returns whether the session existed. Deleting an unknown session is fine.
    pub fn delete(&self, session_id: &str) -> bool {
        self.sessions
            .write_lock("deleting session history")
            .remove(session_id)
            .is_some()
    }
}
