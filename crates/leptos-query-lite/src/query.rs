//! Read Query Adapter
//!
//! Issues a fetch whenever its argument becomes available or its key is
//! invalidated, and exposes the resulting [`QueryState`] reactively.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::QueryClient;
use crate::state::{QueryState, QueryStatus};

/// Reactive handle to a read query
pub struct Query<T: 'static, E: 'static> {
    state: RwSignal<QueryState<T, E>>,
    status: Memo<QueryStatus>,
}

impl<T: 'static, E: 'static> Clone for Query<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, E: 'static> Copy for Query<T, E> {}

impl<T, E> Query<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Changes only when the status does, not on every `fetching` flip
    pub fn status(&self) -> QueryStatus {
        self.status.get()
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data().cloned())
    }

    pub fn error(&self) -> Option<E> {
        self.state.with(|s| s.error().cloned())
    }

    pub fn is_fetching(&self) -> bool {
        self.state.with(|s| s.is_fetching())
    }
}

/// Subscribe a fetcher to `key`.
///
/// `arg` gates the query: while it yields `None` nothing is fetched.
/// Only the latest in-flight fetch may settle the state.
pub fn use_query<A, T, E, Fut>(
    client: QueryClient,
    key: &'static str,
    arg: impl Fn() -> Option<A> + 'static,
    fetcher: impl Fn(A) -> Fut + 'static,
) -> Query<T, E>
where
    A: 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let state = RwSignal::new(QueryState::<T, E>::default());
    let version = client.version(key);

    Effect::new(move |_| {
        let v = version.get();
        let Some(arg) = arg() else {
            log::debug!("[Query] {} disabled, waiting for input", key);
            return;
        };
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        log::debug!("[Query] fetching {} (version {})", key, v);
        let fut = fetcher(arg);
        spawn_local(async move {
            let result = fut.await;
            let applied = state.try_update(|s| s.settle(ticket, result)).unwrap_or(false);
            if !applied {
                log::debug!("[Query] dropped stale response for {}", key);
            }
        });
    });

    let status = Memo::new(move |_| state.with(|s| s.status()));
    Query { state, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    /// Let effects and spawned fetches run to completion
    async fn flush() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn counting_fetcher(
        calls: Rc<Cell<u32>>,
    ) -> impl Fn(u32) -> std::future::Ready<Result<Vec<u32>, String>> {
        move |id| {
            calls.set(calls.get() + 1);
            std::future::ready(Ok(vec![id]))
        }
    }

    #[tokio::test]
    async fn test_fetches_once_input_present_and_after_invalidate() {
        let _ = Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let client = QueryClient::new();
                let user = RwSignal::new(None::<u32>);
                let calls = Rc::new(Cell::new(0));
                let query = use_query(client, "todos", move || user.get(), counting_fetcher(calls.clone()));

                flush().await;
                assert_eq!(calls.get(), 0);
                assert_eq!(query.status(), QueryStatus::Idle);

                user.set(Some(7));
                flush().await;
                assert_eq!(calls.get(), 1);
                assert_eq!(query.status(), QueryStatus::Success);
                assert_eq!(query.data(), Some(vec![7]));
                assert!(!query.is_fetching());

                client.invalidate("todos");
                flush().await;
                assert_eq!(calls.get(), 2);

                // Other keys do not trigger this query
                client.invalidate("other");
                flush().await;
                assert_eq!(calls.get(), 2);
            })
            .await;
    }

    #[tokio::test]
    async fn test_refetch_keeps_status_stable() {
        let _ = Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let client = QueryClient::new();
                let calls = Rc::new(Cell::new(0));
                let query = use_query(client, "todos", || Some(3u32), counting_fetcher(calls.clone()));
                flush().await;
                assert_eq!(query.status(), QueryStatus::Success);

                let renders = Rc::new(Cell::new(0));
                let seen = renders.clone();
                Effect::new(move |_| {
                    let _ = query.status();
                    seen.set(seen.get() + 1);
                });
                flush().await;
                let before = renders.get();

                client.invalidate("todos");
                flush().await;
                assert_eq!(calls.get(), 2);
                assert_eq!(query.status(), QueryStatus::Success);
                assert_eq!(renders.get(), before);
            })
            .await;
    }

    #[tokio::test]
    async fn test_fetch_error_is_exposed() {
        let _ = Executor::init_tokio();
        LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let query = use_query(
                    QueryClient::new(),
                    "todos",
                    || Some(1u32),
                    |_: u32| std::future::ready(Err::<Vec<u32>, String>("offline".to_string())),
                );
                flush().await;
                assert_eq!(query.status(), QueryStatus::Error);
                assert_eq!(query.error().as_deref(), Some("offline"));
                assert!(query.data().is_none());
            })
            .await;
    }
}
