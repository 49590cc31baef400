//! UI Components
//!
//! Leptos components of the todos view.

mod todo_list;
mod todo_row;
mod toast_host;
mod update_todo_modal;

pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use toast_host::ToastHost;
pub use update_todo_modal::UpdateTodoModal;
