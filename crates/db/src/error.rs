use std::path::PathBuf;
use thiserror::Error;

/// The kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    List,
    Item,
}

impl Entity {
    /// Returns the human-readable name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::List => "List",
            Entity::Item => "Item",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable classification of a `DbError`, for callers that branch on the
/// failure category rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or empty required field, or an invariant violation
    Validation,
    /// A referenced list, item or parent does not exist
    NotFound,
    /// The acting user does not own the resource
    Authorization,
    /// The change would nest an item deeper than the maximum level
    DepthExceeded,
    /// The underlying store failed
    Storage,
}

impl ErrorKind {
    /// Returns the snake_case name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Authorization => "authorization",
            ErrorKind::DepthExceeded => "depth_exceeded",
            ErrorKind::Storage => "storage",
        }
    }
}

/// Database error types for Quire
#[derive(Error, Debug)]
pub enum DbError {
    /// Error establishing connection to the database
    #[error("Failed to connect to database at {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: Box<surrealdb::Error>,
    },

    /// Error during schema initialization
    #[error("Failed to initialize database schema: {0}")]
    Schema(#[source] Box<surrealdb::Error>),

    /// Error executing a query
    #[error("Query execution failed")]
    Query(#[source] Box<surrealdb::Error>),

    /// Error with database path (invalid or inaccessible)
    #[error("Invalid database path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Error creating database directory
    #[error("Failed to create database directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A referenced list or item does not exist
    #[error("{entity} '{id}' not found")]
    NotFound { entity: Entity, id: String },

    /// The acting user does not own the list or item
    #[error("Unauthorized action: {entity} '{id}' does not belong to '{user}'")]
    Unauthorized {
        entity: Entity,
        id: String,
        user: String,
    },

    /// The parent is already at the deepest level
    #[error("Maximum nesting level reached: item '{parent_id}' is at level {level}")]
    DepthExceeded { parent_id: String, level: usize },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },
}

impl From<surrealdb::Error> for DbError {
    fn from(err: surrealdb::Error) -> Self {
        DbError::Query(Box::new(err))
    }
}

impl DbError {
    /// Shorthand for a `ValidationError` with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        DbError::ValidationError {
            message: message.into(),
        }
    }

    /// Shorthand for a `NotFound` error
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Classify this error into its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::ValidationError { .. } => ErrorKind::Validation,
            DbError::NotFound { .. } => ErrorKind::NotFound,
            DbError::Unauthorized { .. } => ErrorKind::Authorization,
            DbError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
            DbError::Connection { .. }
            | DbError::Schema(_)
            | DbError::Query(_)
            | DbError::InvalidPath { .. }
            | DbError::CreateDirectory { .. } => ErrorKind::Storage,
        }
    }

    /// Get the full error message including nested SurrealDB error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            DbError::Query(err) => format!("Query execution failed: {}", err),
            other => other.to_string(),
        }
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
