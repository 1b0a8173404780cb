//! Runtime configuration for the CLI
//!
//! Resolves the database path and the acting user from command line
//! arguments, environment variables and defaults.

use crate::error::CliError;
use quire_db::{Database, DbResult};
use std::path::PathBuf;

/// Environment variable name for the database path
pub const QUIRE_DB_PATH_ENV: &str = "QUIRE_DB_PATH";

/// Environment variable name for the acting user
pub const QUIRE_USER_ENV: &str = "QUIRE_USER";

/// Login name fallback when `QUIRE_USER` is unset
const SYSTEM_USER_ENV: &str = "USER";

/// Read an environment variable, treating empty values as unset
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get the database path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --db argument
/// 2. QUIRE_DB_PATH environment variable (if non-empty)
/// 3. Default path (<project root>/.quire/data)
pub fn resolve_db_path(cli_db: Option<PathBuf>) -> DbResult<PathBuf> {
    if let Some(path) = cli_db {
        return Ok(path);
    }

    if let Some(env_path) = non_empty_env(QUIRE_DB_PATH_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    Database::default_path()
}

/// Get the acting user from command line or environment.
///
/// Priority:
/// 1. Command line --user argument (if non-empty)
/// 2. QUIRE_USER environment variable
/// 3. USER environment variable
pub fn resolve_user(cli_user: Option<&str>) -> Result<String, CliError> {
    if let Some(user) = cli_user.map(str::trim).filter(|u| !u.is_empty()) {
        return Ok(user.to_string());
    }

    non_empty_env(QUIRE_USER_ENV)
        .or_else(|| non_empty_env(SYSTEM_USER_ENV))
        .ok_or(CliError::MissingUser)
}
