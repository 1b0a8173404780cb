use quire_db::{DbError, ErrorKind};
use thiserror::Error;

/// Errors surfaced by the CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// A core operation failed
    #[error(transparent)]
    Db(#[from] DbError),

    /// No acting user could be determined
    #[error("No user given. Pass --user or set QUIRE_USER.")]
    MissingUser,

    /// Rendering JSON output failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Stable kind name, shared with the core error taxonomy
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Db(err) => err.kind().as_str(),
            CliError::MissingUser => ErrorKind::Validation.as_str(),
            CliError::Json(_) => "output",
        }
    }

    /// Message including nested store details
    pub fn full_message(&self) -> String {
        match self {
            CliError::Db(err) => err.full_message(),
            other => other.to_string(),
        }
    }
}
