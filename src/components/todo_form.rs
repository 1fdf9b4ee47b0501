//! Todo Form Component
//!
//! Form for creating new todos and for editing an existing one.

use leptos::prelude::*;

use crate::components::StatusSelector;
use crate::models::{DraftField, DraftStoreFields, TodoStatus};
use crate::store::{
    store_cancel_edit, store_submit, store_update_draft, use_app_store, AppStateStoreFields,
    SubmitOutcome,
};

/// Form bound to the store draft. Submits as create or as edit commit.
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let is_editing = move || store.with(|state| state.is_editing());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit(&store) {
            Ok(SubmitOutcome::Created(id)) => log::info!("[FORM] Created todo {}", id),
            Ok(SubmitOutcome::Updated(true)) => log::info!("[FORM] Saved edit"),
            Ok(SubmitOutcome::Updated(false)) => log::warn!("[FORM] Edited todo was gone, nothing saved"),
            Err(err) => log::warn!("[FORM] Submission rejected: {}", err),
        }
    };

    let bind = move |field: DraftField| {
        move |ev: web_sys::Event| store_update_draft(&store, field, event_target_value(&ev))
    };

    view! {
        <form class=move || if is_editing() { "todo-form editing" } else { "todo-form" } on:submit=submit>
            <Show when=is_editing>
                <span class="edit-badge">"編集モード"</span>
            </Show>

            <div class="form-row">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    name="title"
                    type="text"
                    placeholder="todo"
                    prop:value=move || store.draft().title().get()
                    on:input=bind(DraftField::Title)
                />
            </div>

            <div class="form-row">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    name="description"
                    placeholder="description"
                    prop:value=move || store.draft().description().get()
                    on:input=bind(DraftField::Description)
                />
            </div>

            <div class="form-row form-footer">
                <div class="due-date-field">
                    <label for="due-date">"Time limit"</label>
                    <input
                        id="due-date"
                        name="due-date"
                        type="date"
                        prop:value=move || store.draft().due_date().get()
                        on:input=bind(DraftField::DueDate)
                    />
                </div>

                <Show when=is_editing>
                    <StatusSelector
                        value=Signal::derive(move || store.draft().status().get())
                        disabled=Signal::stored(false)
                        on_change=move |status: TodoStatus| {
                            store_update_draft(&store, DraftField::Status, status.as_str().to_string())
                        }
                    />
                    <button type="button" class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>
                        "キャンセル"
                    </button>
                </Show>

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || !store.with(|state| state.can_submit())
                >
                    {move || if is_editing() { "更新する" } else { "登録する" }}
                </button>
            </div>
        </form>
    }
}
