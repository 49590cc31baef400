//! Service Configuration
//!
//! Project URL and anon key of the hosted backend. Read at startup from
//! `window.__TODOS_CONFIG__` and falling back to build-time environment.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{TodoError, TodoResult};

/// Name of the global object the host page may define
const RUNTIME_CONFIG_GLOBAL: &str = "__TODOS_CONFIG__";

/// Partially specified configuration from one source
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

impl RawConfig {
    fn from_build_env() -> Self {
        Self {
            supabase_url: option_env!("SUPABASE_URL").map(String::from),
            supabase_anon_key: option_env!("SUPABASE_ANON_KEY").map(String::from),
        }
    }

    /// Fill missing fields from `fallback`
    fn or(self, fallback: RawConfig) -> RawConfig {
        RawConfig {
            supabase_url: non_empty(self.supabase_url).or(non_empty(fallback.supabase_url)),
            supabase_anon_key: non_empty(self.supabase_anon_key)
                .or(non_empty(fallback.supabase_anon_key)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://abcd.supabase.co`
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: &str, anon_key: &str) -> TodoResult<Self> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(TodoError::Config("missing supabase url".into()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(TodoError::Config(format!("supabase url must be http(s): {}", url)));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(TodoError::Config("missing supabase anon key".into()));
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Load from the page global, then build-time env
    pub fn load() -> TodoResult<Self> {
        Self::resolve(runtime_config(), RawConfig::from_build_env())
    }

    fn resolve(runtime: Option<RawConfig>, build: RawConfig) -> TodoResult<Self> {
        let merged = runtime.unwrap_or_default().or(build);
        let url = merged
            .supabase_url
            .ok_or_else(|| TodoError::Config("SUPABASE_URL is not set".into()))?;
        let anon_key = merged
            .supabase_anon_key
            .ok_or_else(|| TodoError::Config("SUPABASE_ANON_KEY is not set".into()))?;
        Self::new(&url, &anon_key)
    }

    /// First label of the project host (`abcd` for `https://abcd.supabase.co`)
    pub fn project_ref(&self) -> &str {
        let host = self.url.split("://").nth(1).unwrap_or(&self.url);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// localStorage key the Supabase JS client persists its session under
    pub fn session_storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }
}

fn runtime_config() -> Option<RawConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(raw) => Some(raw),
        Err(e) => {
            log::warn!("[Config] ignoring malformed {}: {}", RUNTIME_CONFIG_GLOBAL, e);
            None
        }
    }
}
