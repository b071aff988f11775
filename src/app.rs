// src/app.rs
use crate::config::AppConfig;
use crate::domain::ProductSource;
use crate::search::{MockCatalog, SearchRunner};
use crate::session::SessionStore;
use std::sync::Arc;

/// Shared handles every request needs. Cheap to clone.
#[derive(Clone)]
pub struct App {
    pub config: AppConfig,
    pub sessions: SessionStore,
    pub runner: SearchRunner,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_source(config, Arc::new(MockCatalog::new()))
    }

    pub fn with_source(config: AppConfig, source: Arc<dyn ProductSource>) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        let runner = SearchRunner::new(source, config.search_delay);
        Self {
            config,
            sessions,
            runner,
        }
    }
}
