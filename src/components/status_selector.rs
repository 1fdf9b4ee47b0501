//! Status Selector Component
//!
//! Reusable todo status dropdown.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{TodoStatus, STATUS_OPTIONS};

/// Status dropdown for the form and for list rows
#[component]
pub fn StatusSelector(
    value: Signal<TodoStatus>,
    disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<TodoStatus>,
) -> impl IntoView {
    view! {
        <select
            class="status-select"
            disabled=move || disabled.get()
            on:change=move |ev| {
                let Some(select) = ev
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
                else {
                    return;
                };
                on_change.run(TodoStatus::from_str(&select.value()));
            }
        >
            {STATUS_OPTIONS.iter().map(|(status, label)| {
                let status = *status;
                view! {
                    <option
                        value=status.as_str()
                        prop:selected=move || value.get() == status
                    >
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
