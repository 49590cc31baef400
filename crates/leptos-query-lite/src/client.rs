//! Query Client
//!
//! Registry of invalidation counters, one per query key.

use std::collections::HashMap;

use leptos::prelude::*;

/// Handle to the query cache. Cheap to copy; pass it to the adapters explicitly.
#[derive(Clone, Copy)]
pub struct QueryClient {
    versions: StoredValue<HashMap<&'static str, RwSignal<u64>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            versions: StoredValue::new(HashMap::new()),
        }
    }

    /// Invalidation counter for `key`, created on first use
    pub fn version(&self, key: &'static str) -> RwSignal<u64> {
        if let Some(existing) = self.versions.with_value(|map| map.get(key).copied()) {
            return existing;
        }
        let created = RwSignal::new(0);
        self.versions.update_value(|map| {
            map.insert(key, created);
        });
        created
    }

    /// Mark `key` stale; every query subscribed to it refetches.
    pub fn invalidate(&self, key: &'static str) {
        log::debug!("[Query] invalidate {}", key);
        self.version(key).update(|v| *v += 1);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a client and provide it via context
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_bumps_only_its_key() {
        let owner = Owner::new();
        owner.with(|| {
            let client = QueryClient::new();
            let todos = client.version("todos");
            let other = client.version("other");

            client.invalidate("todos");

            assert_eq!(todos.get_untracked(), 1);
            assert_eq!(other.get_untracked(), 0);
        });
    }

    #[test]
    fn test_version_is_shared_per_key() {
        let owner = Owner::new();
        owner.with(|| {
            let client = QueryClient::new();
            let first = client.version("todos");
            client.invalidate("todos");
            client.invalidate("todos");
            assert_eq!(first.get_untracked(), 2);
            assert_eq!(client.version("todos").get_untracked(), 2);
        });
    }
}
