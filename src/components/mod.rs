//! UI Components
//!
//! Leptos components for the form and the list.

mod status_selector;
mod todo_form;
mod todo_list;
mod todo_row;

pub use status_selector::StatusSelector;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
