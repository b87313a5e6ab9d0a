use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),
}

/// Failure reported by a caller-supplied async search.
///
/// The controller never propagates this; a failed search is treated as an
/// empty result set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{0}")]
    Failed(String),

    #[error("search task panicked")]
    Panicked,
}

impl SearchError {
    pub fn failed(message: impl Into<String>) -> Self {
        SearchError::Failed(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
