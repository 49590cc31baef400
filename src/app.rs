//! Todos Frontend App
//!
//! Loads configuration, restores the session and mounts the list view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_query_lite::provide_query_client;

use crate::auth::{self, Session};
use crate::backend::SupabaseClient;
use crate::components::{TodoList, ToastHost};
use crate::config::SupabaseConfig;
use crate::context::AppContext;
use crate::notify::Toaster;

#[component]
pub fn App() -> impl IntoView {
    match SupabaseConfig::load() {
        Ok(config) => view! { <TodosApp config=config /> }.into_any(),
        Err(e) => {
            log::error!("[APP] {}", e);
            view! {
                <main class="app">
                    <h1>"Todos"</h1>
                    <p class="config-error">{e.to_string()}</p>
                </main>
            }
            .into_any()
        }
    }
}

#[component]
fn TodosApp(config: SupabaseConfig) -> impl IntoView {
    let (session, set_session) = signal(None::<Session>);
    let (auth_ready, set_auth_ready) = signal(false);
    let query_client = provide_query_client();

    provide_context(AppContext::new(
        config.clone(),
        session,
        auth_ready,
        query_client,
        Toaster::new(),
    ));

    // Restore session once on mount
    spawn_local(async move {
        let client = SupabaseClient::new(config);
        let stored = auth::read_stored_session(client.config());
        let restored = auth::restore_session(stored.as_deref(), &client).await;
        if restored.is_none() {
            log::info!("[APP] no active session");
        }
        set_session.set(restored);
        set_auth_ready.set(true);
    });

    view! {
        <main class="app">
            <h1>"Todos"</h1>
            <TodoList />
            <ToastHost />
        </main>
    }
}
