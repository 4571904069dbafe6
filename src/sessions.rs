use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::PendingSession;

/// In-memory store of at most one pending session per user.
///
/// Handlers can run concurrently, so every operation takes the single
/// interior lock: `put` always overwrites (last-write-wins), `take`
/// removes and returns atomically so a session can never be delivered
/// twice. Nothing survives a restart.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<String, PendingSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, user_id: &str, session: PendingSession) {
        self.inner
            .lock()
            .unwrap()
            .insert(user_id.to_string(), session);
    }

    pub fn take(&self, user_id: &str) -> Option<PendingSession> {
        self.inner.lock().unwrap().remove(user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.inner.lock().unwrap().contains_key(user_id)
    }
}
