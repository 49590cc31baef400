//! Update Todo Modal
//!
//! Rename dialog for the selected todo. Owns persistence of the edit.

use leptos::prelude::*;
use leptos_query_lite::use_mutation;

use crate::context::AppContext;
use crate::models::TodoId;
use crate::todos::{self, EditModal, TODOS_QUERY};

#[component]
pub fn UpdateTodoModal(
    state: RwSignal<EditModal>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (name, set_name) = signal(String::new());

    // Prefill whenever the modal opens on a subject
    Effect::new(move |_| {
        let subject = state.with(|m| if m.is_open() { m.selected().cloned() } else { None });
        if let Some(todo) = subject {
            set_name.set(todo.name);
        }
    });

    let rename = use_mutation(move |(id, new_name): (TodoId, String)| {
        let client = ctx.client();
        async move {
            let result = todos::rename_todo(&client, &ctx.toaster, id, &new_name, || {
                ctx.query_client.invalidate(TODOS_QUERY)
            })
            .await;
            if result.is_ok() {
                on_close.run(());
            }
            result
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_name = name.get_untracked().trim().to_string();
        if new_name.is_empty() {
            return;
        }
        if let Some(id) = state.with_untracked(|m| m.selected().map(|t| t.id)) {
            rename.mutate((id, new_name));
        }
    };

    view! {
        <Show when=move || state.with(|m| m.is_open())>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Update todo"</h2>
                    {move || rename.error().map(|e| view! { <p class="modal-error">{e.to_string()}</p> })}
                    <form on:submit=save>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" disabled=move || rename.is_pending()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
