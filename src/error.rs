//! Todo Errors
//!
//! Rejections raised by the list mutators.

/// Common result type for list mutations
pub type TodoResult<T> = Result<T, TodoError>;

/// Reasons a submission is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    /// Draft has no title
    EmptyTitle,
    /// A create was attempted while an edit is open
    EditInProgress,
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::EmptyTitle => write!(f, "Invalid input: title is empty"),
            TodoError::EditInProgress => write!(f, "Conflict: an edit is in progress"),
        }
    }
}

impl std::error::Error for TodoError {}
