use thiserror::Error;

/// Errors raised while building or mutating navigation state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A catalog must contain at least one section
    #[error("Section catalog is empty")]
    EmptyCatalog,

    /// Section ids must be unique within a catalog
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// Section ids must be non-blank
    #[error("Invalid section id: {0:?}")]
    InvalidSectionId(String),

    /// The section is not part of the catalog
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Result type alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;
