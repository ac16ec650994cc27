//! Process-lifetime session identifier.
//!
//! Written only by the device-registration continuation, read by any call
//! that correlates activity to a device session. Absence is an expected
//! state: callers get an explicit [`SessionAttach::Skipped`] instead of an
//! error. Concurrent registrations resolve last-writer-wins under the lock.

use std::sync::{Arc, RwLock};

use strato_core::request::ApiRequest;

/// Outcome of trying to stamp `session_id` onto a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAttach {
    Attached,
    Skipped,
}

/// Shared, process-lifetime session slot.
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<String>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the session id. A fresh successful registration is the only
    /// writer.
    pub fn set(&self, id: String) {
        // a poisoned lock degrades to "unset" rather than panicking
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(id);
        }
    }

    pub fn get(&self) -> Option<String> {
        self.inner.read().ok().and_then(|slot| slot.clone())
    }

    /// Stamp `session_id` onto the request when a session exists.
    pub fn attach(&self, request: ApiRequest) -> (ApiRequest, SessionAttach) {
        match self.get() {
            Some(id) => (request.field("session_id", id), SessionAttach::Attached),
            None => (request, SessionAttach::Skipped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_skipped_until_set() {
        let session = SessionState::new();
        let req = ApiRequest::new("log-navigation", "https://h/app/lognavigation").unwrap();
        let (_, outcome) = session.attach(req);
        assert_eq!(outcome, SessionAttach::Skipped);

        session.set("abc123".into());
        assert_eq!(session.get().as_deref(), Some("abc123"));
    }

    #[test]
    fn last_writer_wins() {
        let session = SessionState::new();
        session.set("first".into());
        session.set("second".into());
        assert_eq!(session.get().as_deref(), Some("second"));
    }
}
