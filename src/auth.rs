//! Session Restore
//!
//! Picks up the session the hosted auth client persisted in localStorage
//! and confirms it with the auth service before the app uses it.

use serde::Deserialize;

use crate::backend::AuthProvider;
use crate::config::SupabaseConfig;
use crate::models::User;

/// Storage key used by older versions of the JS client
const LEGACY_STORAGE_KEY: &str = "supabase.auth.token";

/// Access token plus the user it was issued to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSession {
    Current(Session),
    Legacy {
        #[serde(rename = "currentSession")]
        current_session: Session,
    },
}

/// Parse a persisted session blob; `None` if it is not a session
pub fn parse_stored_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<StoredSession>(raw) {
        Ok(StoredSession::Current(session)) => Some(session),
        Ok(StoredSession::Legacy { current_session }) => Some(current_session),
        Err(e) => {
            log::warn!("[Auth] unreadable stored session: {}", e);
            None
        }
    }
}

/// Raw session blob from localStorage, if any
pub fn read_stored_session(config: &SupabaseConfig) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let key = config.session_storage_key();
    storage
        .get_item(&key)
        .ok()
        .flatten()
        .or_else(|| storage.get_item(LEGACY_STORAGE_KEY).ok().flatten())
}

/// Validate a stored session against the auth service.
///
/// Returns `None` when there is no session or the service rejects it.
pub async fn restore_session<P: AuthProvider + ?Sized>(
    stored: Option<&str>,
    provider: &P,
) -> Option<Session> {
    let session = parse_stored_session(stored?)?;
    match provider.user_for_token(&session.access_token).await {
        Ok(user) => {
            log::info!("[Auth] signed in as {}", user.id);
            Some(Session {
                access_token: session.access_token,
                user,
            })
        }
        Err(e) => {
            log::warn!("[Auth] stored session rejected: {}", e);
            None
        }
    }
}
