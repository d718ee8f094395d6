//! Error types shared by the page layer and the controllers.
//!
//! Controllers surface a missing element as [`DomError::MissingElement`];
//! the browser exports treat that variant as a silent no-op and only log it.

/// Failure while reading or writing the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("node is not a {expected}: {id}")]
    WrongKind { id: String, expected: &'static str },
    #[error("javascript error: {0}")]
    Js(String),
}

impl DomError {
    /// Whether this error only means the markup does not carry the element.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

/// Failure while loading a [`crate::config::PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}
