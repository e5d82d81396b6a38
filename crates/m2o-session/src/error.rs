use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The caller named a selection that does not exist in the store.
    #[error("no selection for {0}")]
    UnknownSelection(String),
    /// Base choices only apply to selections with multiple bases.
    #[error("selection {0} does not take a base choice")]
    BaseChoiceNotApplicable(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
