//! Backend Service Bindings
//!
//! Interfaces to the hosted collection and auth service, organized by concern.

mod http;
mod supabase;

use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{Todo, TodoId, User};

pub use supabase::SupabaseClient;

/// The remote `todos` collection
#[async_trait(?Send)]
pub trait TodoCollection {
    /// Rows owned by `user_id`, ascending by id
    async fn list_by_owner(&self, user_id: &str) -> TodoResult<Vec<Todo>>;

    async fn delete(&self, id: TodoId) -> TodoResult<()>;

    /// Set the name of one row and return the updated row
    async fn rename(&self, id: TodoId, name: &str) -> TodoResult<Todo>;
}

/// Resolves an access token to the user it belongs to
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn user_for_token(&self, access_token: &str) -> TodoResult<User>;
}
