//! Todo App
//!
//! Main application component: form on top, list below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    // Log a snapshot of the list whenever it changes
    Effect::new(move |_| {
        let todos = store.todos().get();
        match serde_json::to_string(&todos) {
            Ok(json) => log::debug!("[APP] {} todos: {}", todos.len(), json),
            Err(err) => log::warn!("[APP] Could not serialize todos: {}", err),
        }
    });

    let summary = move || {
        let summary = store.with(AppState::summary);
        format!(
            "{} todos, {} not started, {} in progress, {} done",
            summary.total, summary.not_started, summary.in_progress, summary.done
        )
    };

    view! {
        <div class="app-layout">
            <header>
                <h1>"Todo App"</h1>
            </header>

            <TodoForm />

            <section class="todo-list-section">
                <h2>"Todo List"</h2>
                <TodoList />
                <p class="item-count">{summary}</p>
            </section>
        </div>
    }
}
