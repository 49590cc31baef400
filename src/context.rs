//! Application Context
//!
//! Handles created once in `App` and provided via Leptos Context API.

use leptos::prelude::*;
use leptos_query_lite::QueryClient;

use crate::auth::Session;
use crate::backend::SupabaseClient;
use crate::config::SupabaseConfig;
use crate::notify::Toaster;

#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<SupabaseConfig>,
    /// Restored session (None = signed out or still restoring)
    pub session: ReadSignal<Option<Session>>,
    /// Set once the session restore attempt has finished
    pub auth_ready: ReadSignal<bool>,
    pub query_client: QueryClient,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(
        config: SupabaseConfig,
        session: ReadSignal<Option<Session>>,
        auth_ready: ReadSignal<bool>,
        query_client: QueryClient,
        toaster: Toaster,
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            session,
            auth_ready,
            query_client,
            toaster,
        }
    }

    /// Client acting as the current session's user
    pub fn client(&self) -> SupabaseClient {
        let client = SupabaseClient::new(self.config.get_value());
        match self.session.get_untracked() {
            Some(session) => client.with_access_token(session.access_token),
            None => client,
        }
    }

    pub fn client_for(&self, session: &Session) -> SupabaseClient {
        SupabaseClient::new(self.config.get_value()).with_access_token(session.access_token.clone())
    }
}
