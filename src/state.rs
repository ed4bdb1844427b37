// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    services::{
        chat::ResponseProvider, content::ContentProvider, ledger::ProgressLedger,
        session::SessionStore,
    },
    store::KeyValueStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ledger: Arc<ProgressLedger>,
    pub sessions: Arc<SessionStore>,
    pub content: Arc<dyn ContentProvider>,
    pub chat: Arc<dyn ResponseProvider>,
}

impl AppState {
    /// Ledger and session share one store.
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        content: Arc<dyn ContentProvider>,
        chat: Arc<dyn ResponseProvider>,
    ) -> Self {
        Self {
            config,
            ledger: Arc::new(ProgressLedger::new(store.clone())),
            sessions: Arc::new(SessionStore::new(store)),
            content,
            chat,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ProgressLedger> {
    fn from_ref(state: &AppState) -> Self {
        state.ledger.clone()
    }
}

impl FromRef<AppState> for Arc<SessionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ContentProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.content.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ResponseProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.chat.clone()
    }
}
