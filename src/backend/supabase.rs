//! Supabase Client
//!
//! `todos` table access over the REST API and token checks over the auth API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::http::{self, HttpRequest, Method};
use super::{AuthProvider, TodoCollection};
use crate::config::SupabaseConfig;
use crate::error::{TodoError, TodoResult};
use crate::models::{Todo, TodoId, User};

const TODOS_TABLE: &str = "todos";

/// Characters kept verbatim in filter values
const FILTER_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    access_token: Option<String>,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// `select * from todos where user_id = ? order by id asc`
    pub fn list_by_owner_url(&self, user_id: &str) -> String {
        format!(
            "{}?select=*&user_id=eq.{}&order=id.asc",
            self.config.rest_url(TODOS_TABLE),
            utf8_percent_encode(user_id, FILTER_VALUE)
        )
    }

    /// Row filter `id = ?`
    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}?id=eq.{}", self.config.rest_url(TODOS_TABLE), id)
    }

    /// Data requests run as the signed-in user
    fn data_request(&self, method: Method, url: String) -> TodoResult<HttpRequest> {
        let token = self.access_token.as_deref().ok_or(TodoError::Unauthenticated)?;
        Ok(self.authorized(HttpRequest::new(method, url), token))
    }

    fn authorized(&self, request: HttpRequest, token: &str) -> HttpRequest {
        request
            .header("apikey", self.config.anon_key.clone())
            .header("Authorization", format!("Bearer {}", token))
    }
}

#[async_trait(?Send)]
impl TodoCollection for SupabaseClient {
    async fn list_by_owner(&self, user_id: &str) -> TodoResult<Vec<Todo>> {
        let request = self
            .data_request(Method::Get, self.list_by_owner_url(user_id))?
            .header("Accept", "application/json");
        let response = http::send(request).await?;
        let todos: Vec<Todo> = http::read_json(&response).await?;
        log::debug!("[Supabase] {} todos for {}", todos.len(), user_id);
        Ok(todos)
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        let request = self.data_request(Method::Delete, self.todo_url(id))?;
        http::send(request).await?;
        log::debug!("[Supabase] deleted todo {}", id);
        Ok(())
    }

    async fn rename(&self, id: TodoId, name: &str) -> TodoResult<Todo> {
        let body = serde_json::to_string(&RenameBody { name })?;
        let request = self
            .data_request(Method::Patch, self.todo_url(id))?
            .header("Prefer", "return=representation")
            .json_body(body);
        let response = http::send(request).await?;
        let rows: Vec<Todo> = http::read_json(&response).await?;
        rows.into_iter().next().ok_or_else(|| TodoError::Service {
            status: 404,
            message: format!("todo {} not found", id),
        })
    }
}

#[async_trait(?Send)]
impl AuthProvider for SupabaseClient {
    async fn user_for_token(&self, access_token: &str) -> TodoResult<User> {
        let request = self.authorized(
            HttpRequest::new(Method::Get, self.config.auth_url("user")),
            access_token,
        );
        let response = http::send(request).await?;
        http::read_json(&response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(SupabaseConfig::new("https://abcd.supabase.co", "anon-key").unwrap())
    }

    #[test]
    fn test_list_by_owner_url() {
        assert_eq!(
            client().list_by_owner_url("0b3c-11ee"),
            "https://abcd.supabase.co/rest/v1/todos?select=*&user_id=eq.0b3c-11ee&order=id.asc"
        );
    }

    #[test]
    fn test_list_by_owner_url_escapes_owner() {
        assert_eq!(
            client().list_by_owner_url("a&order=name"),
            "https://abcd.supabase.co/rest/v1/todos?select=*&user_id=eq.a%26order%3Dname&order=id.asc"
        );
    }

    #[test]
    fn test_todo_url() {
        assert_eq!(client().todo_url(42), "https://abcd.supabase.co/rest/v1/todos?id=eq.42");
    }

    #[test]
    fn test_data_request_requires_token() {
        let err = client().data_request(Method::Delete, client().todo_url(1)).unwrap_err();
        assert_eq!(err, TodoError::Unauthenticated);
    }

    #[test]
    fn test_data_request_headers() {
        let request = client()
            .with_access_token("jwt")
            .data_request(Method::Get, client().todo_url(1))
            .unwrap();
        assert_eq!(
            request.headers,
            vec![
                ("apikey", "anon-key".to_string()),
                ("Authorization", "Bearer jwt".to_string()),
            ]
        );
    }
}
