//! Todo List Component
//!
//! Keyed list of all todos in the store.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                key=|todo| {
                    // Key on every displayed field so edits re-render the row
                    (
                        todo.id,
                        todo.title.clone(),
                        todo.description.clone(),
                        todo.due_date.clone(),
                        todo.status,
                    )
                }
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
