use thiserror::Error;

/// Unified error type for tag-lineage operations
#[derive(Error, Debug)]
pub enum TagLineageError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to parse configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Hierarchy invariant violated: {0}")]
    Hierarchy(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-lineage
pub type Result<T> = std::result::Result<T, TagLineageError>;

impl TagLineageError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagLineageError::Config(msg.into())
    }

    /// Create a hierarchy error with context
    pub fn hierarchy(msg: impl Into<String>) -> Self {
        TagLineageError::Hierarchy(msg.into())
    }

    /// Create a render error with context
    pub fn render(msg: impl Into<String>) -> Self {
        TagLineageError::Render(msg.into())
    }
}
