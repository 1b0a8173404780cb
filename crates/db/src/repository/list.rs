//! List repository for todo list records

use super::batch::WriteBatch;
use crate::error::{DbError, DbResult, Entity};
use crate::models::TodoList;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use tracing::debug;

/// Row shape of the `todo_list` table
#[derive(Debug, Deserialize)]
struct ListRecord {
    id: Thing,
    title: String,
    owner: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<ListRecord> for TodoList {
    fn from(record: ListRecord) -> Self {
        TodoList {
            id: record.id.id.to_raw(),
            title: record.title,
            owner: record.owner,
            created_at: record.created_at,
        }
    }
}

/// Repository for todo list CRUD operations
pub struct ListRepository<'a> {
    client: &'a Surreal<Db>,
}

impl<'a> ListRepository<'a> {
    /// Create a new ListRepository with the given database client
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self { client }
    }

    /// Check if a list with the given ID exists.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Get a list by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<TodoList>> {
        debug!("Fetching list: {}", id);
        let record: Option<ListRecord> = self
            .client
            .select(("todo_list", id))
            .await
            .map_err(|e| DbError::Query(Box::new(e)))?;
        Ok(record.map(TodoList::from))
    }

    /// Get a list by ID, failing if it does not exist.
    pub async fn require(&self, id: &str) -> DbResult<TodoList> {
        self.get(id)
            .await?
            .ok_or_else(|| DbError::not_found(Entity::List, id))
    }

    /// All lists owned by `owner`, oldest first.
    pub async fn for_owner(&self, owner: &str) -> DbResult<Vec<TodoList>> {
        let mut result = self
            .client
            .query("SELECT * FROM todo_list WHERE owner = $owner ORDER BY created_at ASC")
            .bind(("owner", owner.to_string()))
            .await?;
        let records: Vec<ListRecord> = result.take(0)?;
        Ok(records.into_iter().map(TodoList::from).collect())
    }

    /// Create a list with the given ID.
    pub async fn create(&self, id: &str, title: &str, owner: &str) -> DbResult<TodoList> {
        debug!("Creating list: {} with title: {} for {}", id, title, owner);
        let query = format!(
            "CREATE todo_list:⟨{}⟩ SET title = $title, owner = $owner",
            id
        );
        self.client
            .query(&query)
            .bind(("title", title.to_string()))
            .bind(("owner", owner.to_string()))
            .await?
            .check()?;
        self.require(id).await
    }

    /// Queue deletion of a list record and any item still pointing at it.
    ///
    /// The item sweep runs after the explicit per-item deletes the caller
    /// has already staged, catching rows created since they were read.
    pub fn stage_delete(&self, batch: &mut WriteBatch, id: &str) {
        batch.push(format!("DELETE item WHERE list_id = '{}'", id));
        batch.push(format!("DELETE todo_list:⟨{}⟩", id));
    }
}
