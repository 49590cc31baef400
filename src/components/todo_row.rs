//! Todo Row Component

use leptos::prelude::*;

use crate::models::{Todo, TodoId};

/// One list entry with delete and edit buttons
#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_delete: Callback<TodoId>,
    #[prop(into)] on_edit: Callback<Todo>,
) -> impl IntoView {
    let id = todo.id;
    let name = todo.name.clone();

    view! {
        <li class="todo-row">
            <span class="todo-name">{name}</span>
            <span class="todo-actions">
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    "🗑"
                </button>
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(todo.clone());
                    }
                >
                    "✎"
                </button>
            </span>
        </li>
    }
}
