//! Todo Row Component
//!
//! Individual todo in the list.

use leptos::prelude::*;

use crate::components::StatusSelector;
use crate::models::{Todo, TodoStatus};
use crate::store::{
    store_begin_edit, store_delete_todo, store_set_status, use_app_store, AppStateStoreFields,
};

/// A single todo row. Controls are locked while any edit is open.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let status = todo.status;
    let locked = Signal::derive(move || store.editing().get().is_some());
    let is_edit_target = move || store.with(|state| state.is_edit_target(id));

    view! {
        <li class=move || if is_edit_target() { "todo-row editing" } else { "todo-row" }>
            <StatusSelector
                value=Signal::stored(status)
                disabled=locked
                on_change=move |status: TodoStatus| store_set_status(&store, id, status)
            />

            <div class="todo-text">
                <p class="todo-title">{todo.title}</p>
                <p class="todo-description">{todo.description}</p>
            </div>

            <p class="todo-due-date">{todo.due_date}</p>

            <div class="control-icons">
                <button
                    class="edit-btn"
                    title="編集"
                    disabled=move || locked.get()
                    on:click=move |_| store_begin_edit(&store, id)
                >
                    "✎"
                </button>
                <button
                    class="delete-btn"
                    title="削除"
                    disabled=move || locked.get()
                    on:click=move |_| store_delete_todo(&store, id)
                >
                    "×"
                </button>
            </div>
        </li>
    }
}
