use std::path::PathBuf;

/// Every way a rewrite can fail.
///
/// All variants are terminal: nothing is retried and nothing is recovered
/// locally. The shell prints the message and exits with [`RewriteError::exit_code`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("Usage: autofix <file_path> [purpose]")]
    Usage,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    #[error("Received an empty response from the model")]
    EmptyResponse,

    #[error("Failed to access {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl RewriteError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Build an `Io` variant from a path and any displayable error.
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
