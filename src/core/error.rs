use thiserror::Error;

pub type TagFileResult<T> = Result<T, TagFileError>;

#[derive(Error, Debug)]
pub enum TagFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failure (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API rejected the request with a non-2xx status that is neither
    /// an auth failure nor a missing object.
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Bad or expired credential. Never retried.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Repository, commit, or tree object does not exist. Distinct from a
    /// file being absent at a tag, which is not an error.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
