//! Frontend Models
//!
//! Data structures matching rows of the hosted database.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier (`int8` column)
pub type TodoId = i64;

/// A row of the `todos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub user_id: String,
}

/// Signed-in user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_from_row() {
        let row = r#"{"id":1,"name":"Buy milk","user_id":"u1","inserted_at":"2022-03-01T10:00:00"}"#;
        let todo: Todo = serde_json::from_str(row).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.name, "Buy milk");
        assert_eq!(todo.user_id, "u1");
    }

    #[test]
    fn test_user_without_email() {
        let user: User = serde_json::from_str(r#"{"id":"u1","aud":"authenticated"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.email.is_none());
    }
}
