//! Database schema initialization for Quire
//!
//! Defines the SurrealDB schema for todo lists and their items. Item
//! hierarchy is a plain `parent_id` field on the item; cascade behavior is
//! handled by the hierarchy engine, not by the store.

use crate::error::DbError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// SQL statements for schema initialization
mod sql {
    /// Define the todo_list table
    pub const DEFINE_LIST_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS todo_list SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS title ON todo_list TYPE string
            ASSERT string::len(string::trim($value)) > 0;

        DEFINE FIELD IF NOT EXISTS owner ON todo_list TYPE string
            ASSERT string::len($value) > 0;

        DEFINE FIELD IF NOT EXISTS created_at ON todo_list TYPE datetime DEFAULT time::now();

        DEFINE INDEX IF NOT EXISTS todo_list_owner ON todo_list FIELDS owner;
    "#;

    /// Define the item table
    pub const DEFINE_ITEM_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS item SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS list_id ON item TYPE string;

        DEFINE FIELD IF NOT EXISTS parent_id ON item TYPE option<string>;

        DEFINE FIELD IF NOT EXISTS title ON item TYPE string
            ASSERT string::len(string::trim($value)) > 0;

        DEFINE FIELD IF NOT EXISTS completed ON item TYPE bool DEFAULT false;

        DEFINE FIELD IF NOT EXISTS expanded ON item TYPE bool DEFAULT true;

        DEFINE FIELD IF NOT EXISTS created_at ON item TYPE datetime DEFAULT time::now();

        DEFINE FIELD IF NOT EXISTS updated_at ON item TYPE datetime DEFAULT time::now();

        DEFINE INDEX IF NOT EXISTS item_list ON item FIELDS list_id;

        DEFINE INDEX IF NOT EXISTS item_parent ON item FIELDS parent_id;
    "#;
}

/// Initialize the database schema.
///
/// Creates the `todo_list` and `item` tables with their fields and
/// indexes. Idempotent: every definition uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns `DbError::Schema` if any schema definition fails.
pub async fn init_schema(client: &Surreal<Db>) -> Result<(), DbError> {
    client
        .query(sql::DEFINE_LIST_TABLE)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    client
        .query(sql::DEFINE_ITEM_TABLE)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    Ok(())
}
