//! Leptos Query Lite
//!
//! Minimal fetch/mutation adapters for Leptos CSR apps.
//! Queries are keyed by a static name and refetch whenever their key is
//! invalidated through the [`QueryClient`].

mod client;
mod mutation;
mod query;
mod state;

pub use client::{provide_query_client, QueryClient};
pub use mutation::{use_mutation, Mutation};
pub use query::{use_query, Query};
pub use state::{MutationState, MutationStatus, QueryState, QueryStatus, Ticket};
