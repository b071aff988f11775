// src/session/store.rs
use crate::domain::{LandingState, NavigationState, SearchForm, SearchTicket};
use crate::errors::ServerError;
use crate::search::runner::CancelHandle;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Everything one visitor has toggled or typed. Lives only in memory.
#[derive(Debug)]
pub struct Session {
    pub nav: NavigationState,
    pub landing: LandingState,
    pub search: SearchForm,
    pending: Option<(SearchTicket, CancelHandle)>,
    last_seen: Instant,
}

impl Session {
    fn new(now: Instant) -> Self {
        Self {
            nav: NavigationState::default(),
            landing: LandingState::default(),
            search: SearchForm::default(),
            pending: None,
            last_seen: now,
        }
    }

    /// Records the lookup now in flight, cancelling whichever one it replaces.
    pub fn track_pending(&mut self, ticket: SearchTicket, cancel: CancelHandle) {
        if let Some((old, handle)) = self.pending.replace((ticket, cancel)) {
            debug!(ticket = old.id(), "superseded pending search");
            handle.cancel();
        }
    }

    /// Forgets the pending lookup if it is still `ticket`.
    pub fn finish_pending(&mut self, ticket: SearchTicket) {
        if matches!(self.pending, Some((t, _)) if t == ticket) {
            self.pending = None;
        }
    }

    #[cfg(test)]
    pub fn pending_ticket(&self) -> Option<SearchTicket> {
        self.pending.as_ref().map(|(t, _)| *t)
    }
}

/// Sessions keyed by their cookie token.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Starts a fresh session and returns its token. Idle sessions are pruned first.
    pub fn create(&self) -> Result<String, ServerError> {
        let token = new_token();
        let now = Instant::now();

        let mut map = self.lock()?;
        let before = map.len();
        map.retain(|_, s| now.duration_since(s.last_seen) < self.ttl);
        if map.len() < before {
            debug!(pruned = before - map.len(), "dropped idle sessions");
        }
        map.insert(token.clone(), Session::new(now));

        Ok(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lock().map(|map| map.contains_key(token)).unwrap_or(false)
    }

    /// Drops a session; any pending lookup is cancelled with it.
    pub fn remove(&self, token: &str) {
        if let Ok(mut map) = self.lock() {
            map.remove(token);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|map| map.len()).unwrap_or(0)
    }

    /// Provides the visitor's session to the closure.
    pub fn with_session<F, T>(&self, token: &str, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Session) -> Result<T, ServerError>,
    {
        let mut map = self.lock()?;
        let session = map
            .get_mut(token)
            .ok_or_else(|| ServerError::BadRequest("unknown session".into()))?;
        session.last_seen = Instant::now();
        f(session)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Session>>, ServerError> {
        self.inner.lock().map_err(|_| {
            error!("session store lock poisoned");
            ServerError::InternalError
        })
    }
}

fn new_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
