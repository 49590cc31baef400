//! Todo List Component
//!
//! Fetches the signed-in user's todos and wires per-row delete and edit.

use leptos::prelude::*;
use leptos_query_lite::{use_mutation, use_query, QueryStatus};

use crate::auth::Session;
use crate::components::{TodoRow, UpdateTodoModal};
use crate::context::AppContext;
use crate::models::{Todo, TodoId};
use crate::todos::{self, EditModal, TODOS_QUERY};

/// Which body the list renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListBranch {
    SignInHint,
    Spinner,
    Error,
    Rows,
}

/// An idle query with a session is about to fetch, so it shows the spinner
fn list_branch(status: QueryStatus, auth_ready: bool, signed_in: bool) -> ListBranch {
    match status {
        QueryStatus::Idle if auth_ready && !signed_in => ListBranch::SignInHint,
        QueryStatus::Idle | QueryStatus::Loading => ListBranch::Spinner,
        QueryStatus::Error => ListBranch::Error,
        QueryStatus::Success => ListBranch::Rows,
    }
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Runs only once a session exists, and again on every invalidation
    let todos = use_query(
        ctx.query_client,
        TODOS_QUERY,
        move || ctx.session.get(),
        move |session: Session| {
            let client = ctx.client_for(&session);
            async move { todos::load_todos(&client, &session.user).await }
        },
    );

    let delete = use_mutation(move |id: TodoId| {
        let client = ctx.client();
        async move {
            todos::delete_todo(&client, &ctx.toaster, id, || {
                ctx.query_client.invalidate(TODOS_QUERY)
            })
            .await
        }
    });

    let signed_in = move || ctx.session.with(|s| s.is_some());

    let edit = RwSignal::new(EditModal::default());

    let on_delete = Callback::new(move |id: TodoId| delete.mutate(id));
    let on_edit = Callback::new(move |todo: Todo| edit.update(|m| m.open(todo)));
    let on_close = Callback::new(move |_: ()| edit.update(|m| m.close()));

    view! {
        <section class="todos">
            {move || match list_branch(todos.status(), ctx.auth_ready.get(), signed_in()) {
                ListBranch::SignInHint => {
                    view! { <p class="todos-hint">"Sign in to see your todos"</p> }.into_any()
                }
                ListBranch::Spinner => {
                    view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                }
                ListBranch::Error => {
                    let message = move || todos.error().map(|e| e.to_string()).unwrap_or_default();
                    view! { <p class="todos-error">"Could not load todos: " {message}</p> }.into_any()
                }
                ListBranch::Rows => {
                    view! {
                        <ol class="todo-list" class:refreshing=move || todos.is_fetching()>
                            <For
                                each=move || todos.data().unwrap_or_default()
                                key=|todo| (todo.id, todo.name.clone())
                                children=move |todo| {
                                    view! { <TodoRow todo=todo on_delete=on_delete on_edit=on_edit /> }
                                }
                            />
                        </ol>
                    }
                    .into_any()
                }
            }}
            <UpdateTodoModal state=edit on_close=on_close />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_only_when_signed_out() {
        assert_eq!(list_branch(QueryStatus::Idle, true, false), ListBranch::SignInHint);
        // Session restored but the fetch has not started yet
        assert_eq!(list_branch(QueryStatus::Idle, true, true), ListBranch::Spinner);
        // Still restoring the session
        assert_eq!(list_branch(QueryStatus::Idle, false, false), ListBranch::Spinner);
    }

    #[test]
    fn test_branch_follows_query_status() {
        assert_eq!(list_branch(QueryStatus::Loading, true, true), ListBranch::Spinner);
        assert_eq!(list_branch(QueryStatus::Error, true, true), ListBranch::Error);
        assert_eq!(list_branch(QueryStatus::Success, true, true), ListBranch::Rows);
    }
}
