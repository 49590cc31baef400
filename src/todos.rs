//! Todo List Operations
//!
//! Load, delete and rename flows plus the edit-modal state, independent of
//! the view layer so they can run against any [`TodoCollection`].

use crate::backend::TodoCollection;
use crate::error::TodoResult;
use crate::models::{Todo, TodoId, User};
use crate::notify::Notifier;

/// Query key of the per-user todo list
pub const TODOS_QUERY: &str = "todos";

pub const DELETE_SUCCESS: &str = "Item Deleted successfully";
pub const UPDATE_SUCCESS: &str = "Item updated successfully";
pub const MUTATION_FAILURE: &str = "Something went wrong";

/// Fetch the user's todos in the order the collection returns them
pub async fn load_todos<C: TodoCollection + ?Sized>(
    collection: &C,
    user: &User,
) -> TodoResult<Vec<Todo>> {
    let result = collection.list_by_owner(&user.id).await;
    match &result {
        Ok(todos) => log::debug!("[Todos] loaded {} items", todos.len()),
        Err(e) => log::error!("[Todos] load failed: {}", e),
    }
    result
}

/// Delete one todo. On success notifies once and triggers one refetch;
/// on failure notifies once and hands the error back.
pub async fn delete_todo<C, N>(
    collection: &C,
    notifier: &N,
    id: TodoId,
    refetch: impl FnOnce(),
) -> TodoResult<()>
where
    C: TodoCollection + ?Sized,
    N: Notifier + ?Sized,
{
    match collection.delete(id).await {
        Ok(()) => {
            notifier.success(DELETE_SUCCESS);
            refetch();
            Ok(())
        }
        Err(e) => {
            log::error!("[Todos] delete {} failed: {}", id, e);
            notifier.error(MUTATION_FAILURE);
            Err(e)
        }
    }
}

/// Rename one todo, with the same notification and refetch rules as delete
pub async fn rename_todo<C, N>(
    collection: &C,
    notifier: &N,
    id: TodoId,
    name: &str,
    refetch: impl FnOnce(),
) -> TodoResult<Todo>
where
    C: TodoCollection + ?Sized,
    N: Notifier + ?Sized,
{
    match collection.rename(id, name).await {
        Ok(todo) => {
            notifier.success(UPDATE_SUCCESS);
            refetch();
            Ok(todo)
        }
        Err(e) => {
            log::error!("[Todos] rename {} failed: {}", id, e);
            notifier.error(MUTATION_FAILURE);
            Err(e)
        }
    }
}

/// Subject and visibility of the edit modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditModal {
    selected: Option<Todo>,
    open: bool,
}

impl EditModal {
    pub fn open(&mut self, todo: Todo) {
        self.selected = Some(todo);
        self.open = true;
    }

    /// Hide the modal. The subject stays as it was.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Todo> {
        self.selected.as_ref()
    }
}
