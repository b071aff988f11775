// src/search/runner.rs
use crate::domain::{ProductResult, ProductSource, SearchIntent, SearchTicket, SourceError};
use crate::session::{Session, SessionStore};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cancels a pending lookup. Dropping the handle cancels it too.
#[derive(Debug)]
pub struct CancelHandle(Sender<()>);

impl CancelHandle {
    pub fn cancel(self) {
        // The worker may already be past its wait; nothing to do then.
        let _ = self.0.send(());
    }
}

/// A lookup running on its own thread.
pub struct SearchTask {
    pub ticket: SearchTicket,
    pub handle: JoinHandle<()>,
}

/// Runs lookups against a `ProductSource` after a fixed delay.
#[derive(Clone)]
pub struct SearchRunner {
    source: Arc<dyn ProductSource>,
    delay: Duration,
}

impl SearchRunner {
    pub fn new(source: Arc<dyn ProductSource>, delay: Duration) -> Self {
        Self { source, delay }
    }

    /// Synchronous lookup with no delay and no session involved.
    pub fn lookup(&self, intent: &SearchIntent) -> Result<Vec<ProductResult>, SourceError> {
        self.source.search(intent)
    }

    /// Starts the lookup for `ticket`, which the session's form has just issued.
    ///
    /// The worker waits out the delay, then writes the outcome back into the session.
    /// A cancelled or superseded lookup writes nothing.
    pub fn spawn(
        &self,
        session: &mut Session,
        ticket: SearchTicket,
        store: SessionStore,
        token: String,
    ) -> Option<SearchTask> {
        let intent = session.search.intent().clone();
        let (tx, rx) = mpsc::channel::<()>();
        let source = Arc::clone(&self.source);
        let delay = self.delay;

        let spawned = thread::Builder::new()
            .name(format!("search-{}", ticket.id()))
            .spawn(move || {
                match rx.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                        debug!(ticket = ticket.id(), "search cancelled");
                        return;
                    }
                }

                let outcome = source.search(&intent);
                match &outcome {
                    Ok(results) => {
                        info!(ticket = ticket.id(), count = results.len(), "search finished")
                    }
                    Err(e) => warn!(ticket = ticket.id(), error = %e, "search failed"),
                }

                let applied = store.with_session(&token, |s| {
                    s.finish_pending(ticket);
                    Ok(s.search.complete(ticket, outcome))
                });
                match applied {
                    Ok(true) => {}
                    Ok(false) => debug!(ticket = ticket.id(), "dropped stale search outcome"),
                    Err(e) => debug!(
                        ticket = ticket.id(),
                        error = %e,
                        "session gone before search finished"
                    ),
                }
            });

        match spawned {
            Ok(handle) => {
                session.track_pending(ticket, CancelHandle(tx));
                Some(SearchTask { ticket, handle })
            }
            Err(e) => {
                warn!(ticket = ticket.id(), error = %e, "could not start search worker");
                session
                    .search
                    .complete(ticket, Err(SourceError(format!("worker spawn failed: {e}"))));
                None
            }
        }
    }
}
