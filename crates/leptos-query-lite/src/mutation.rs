//! Mutation Adapter
//!
//! Wraps an async write so components can fire it from event handlers
//! and observe its status.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::{MutationState, MutationStatus};

type LocalFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>>>>;
type Mutator<A, T, E> = Rc<dyn Fn(A) -> LocalFuture<T, E>>;

/// Reactive handle to a mutation. Copy, so it can be moved into view closures.
pub struct Mutation<A: 'static, T: 'static, E: 'static> {
    state: RwSignal<MutationState<T, E>>,
    mutator: StoredValue<Mutator<A, T, E>, LocalStorage>,
}

impl<A: 'static, T: 'static, E: 'static> Clone for Mutation<A, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static, T: 'static, E: 'static> Copy for Mutation<A, T, E> {}

impl<A, T, E> Mutation<A, T, E>
where
    A: 'static,
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Fire the mutation. Status follows the most recent call.
    pub fn mutate(&self, arg: A) {
        let Some(ticket) = self.state.try_update(|s| s.begin()) else {
            return;
        };
        let Some(fut) = self.mutator.try_with_value(|run| run(arg)) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = fut.await;
            state.try_update(|s| s.settle(ticket, result));
        });
    }

    pub fn status(&self) -> MutationStatus {
        self.state.with(|s| s.status())
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|s| s.is_pending())
    }

    pub fn error(&self) -> Option<E> {
        self.state.with(|s| s.error().cloned())
    }
}

pub fn use_mutation<A, T, E, F, Fut>(f: F) -> Mutation<A, T, E>
where
    A: 'static,
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let mutator: Mutator<A, T, E> = Rc::new(move |arg| Box::pin(f(arg)) as LocalFuture<T, E>);
    Mutation {
        state: RwSignal::new(MutationState::default()),
        mutator: StoredValue::new_local(mutator),
    }
}
