use thiserror::Error;

/// Recoverable navigation errors: the caller re-prompts, nothing unwinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// A menu selection or search index that does not exist.
    #[error("no such option: {0}")]
    NotFound(String),

    /// A link action index outside the current list.
    #[error("index {0} is out of range")]
    OutOfRange(usize),
}
