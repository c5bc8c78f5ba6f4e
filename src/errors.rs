use thiserror::Error;

/// Errors that can occur while loading or querying the dictionary.
///
/// An unknown word is not an error anywhere in this crate: lookups return an
/// empty sense list and the formatter renders a not-found document. Only
/// startup-time conditions (unreadable or malformed database, bad config)
/// surface here.
#[derive(Error, Debug)]
pub enum DictError {
    #[error("database error: {message} (path: {path})")]
    Database { message: String, path: String },

    #[error("parse error: {message} (path: {path}, line: {line:?})")]
    Parse {
        message: String,
        path: String,
        line: Option<u32>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `DictError`.
pub type Result<T> = std::result::Result<T, DictError>;
