//! Database and hierarchy engine for Quire
//!
//! Provides SurrealDB connection management with an embedded RocksDB
//! backend, schema initialization, the list/item data model, the
//! three-level hierarchy engine and the ownership-checked operations built
//! on top of them.

pub mod access;
pub mod error;
pub mod hierarchy;
pub mod id;
pub mod models;
pub mod repository;
pub mod schema;
pub mod todos;

pub use access::AccessGuard;
pub use error::{DbError, DbResult, Entity, ErrorKind};
pub use hierarchy::ItemForest;
pub use models::{Item, ItemNode, ItemView, ListTree, MAX_LEVEL, TodoList};
pub use repository::{ItemFlag, ItemRepository, ListRepository, WriteBatch};
pub use todos::TodoService;

use std::path::{Path, PathBuf};
use std::process::Command;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Default database path relative to project root or current working directory
pub const DEFAULT_DB_PATH: &str = ".quire/data";

/// Database wrapper providing connection management for SurrealDB
pub struct Database {
    /// The underlying SurrealDB client
    client: Surreal<Db>,
    /// Path where the database is stored
    path: PathBuf,
}

impl Database {
    /// Connect to a SurrealDB database at the specified path.
    ///
    /// Creates the database directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CreateDirectory` if directory creation fails.
    /// Returns `DbError::Connection` if database connection fails.
    pub async fn connect(path: &Path) -> DbResult<Self> {
        let path = Self::prepare_path(path)?;

        let client =
            Surreal::new::<RocksDb>(path.clone())
                .await
                .map_err(|e| DbError::Connection {
                    path: path.clone(),
                    source: Box::new(e),
                })?;

        Ok(Self { client, path })
    }

    /// Initialize the database schema.
    ///
    /// Selects the Quire namespace and database, then defines the list and
    /// item tables.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Schema` if schema initialization fails.
    pub async fn init(&self) -> DbResult<()> {
        self.client
            .use_ns("quire")
            .use_db("main")
            .await
            .map_err(|e| DbError::Schema(Box::new(e)))?;

        schema::init_schema(&self.client).await?;

        Ok(())
    }

    /// Ownership-checked list and item operations
    pub fn todos(&self) -> TodoService<'_> {
        TodoService::new(&self.client)
    }

    /// Raw access to list records, bypassing ownership checks
    pub fn lists(&self) -> ListRepository<'_> {
        ListRepository::new(&self.client)
    }

    /// Raw access to item records, bypassing ownership checks
    pub fn items(&self) -> ItemRepository<'_> {
        ItemRepository::new(&self.client)
    }

    /// Get the path where the database is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default database path based on project root.
    ///
    /// Uses `git rev-parse --show-toplevel` to find the project root and
    /// returns `<project_root>/.quire/data`. If not in a git repository,
    /// falls back to `.quire/data` relative to the current working directory.
    pub fn default_path() -> DbResult<PathBuf> {
        let base_path = find_project_root().unwrap_or_else(|| PathBuf::from("."));
        Ok(base_path.join(DEFAULT_DB_PATH))
    }

    /// Prepare the database path by validating and creating directories.
    fn prepare_path(path: &Path) -> DbResult<PathBuf> {
        let path = path.to_path_buf();

        if path.as_os_str().is_empty() {
            return Err(DbError::InvalidPath {
                path,
                reason: "path is empty".to_string(),
            });
        }

        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(|e| DbError::CreateDirectory {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(path)
    }
}

// Ensure Database is Send + Sync for async compatibility
static_assertions::assert_impl_all!(Database: Send, Sync);

/// Find the project root by running `git rev-parse --show-toplevel`.
///
/// Returns `Some(PathBuf)` with the absolute path to the git repository root,
/// or `None` if not in a git repository or the command fails.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}
