//! Item repository for list item records
//!
//! Encapsulates the SurrealQL for reading and writing `item` records.
//! Structural checks (depth, ownership) live above this layer; the
//! repository trusts the IDs it is given to be normalized.

use super::batch::WriteBatch;
use crate::error::{DbError, DbResult, Entity};
use crate::models::Item;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use tracing::{debug, trace};

/// Row shape of the `item` table
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: Thing,
    list_id: String,
    #[serde(default)]
    parent_id: Option<String>,
    title: String,
    completed: bool,
    expanded: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            id: record.id.id.to_raw(),
            list_id: record.list_id,
            parent_id: record.parent_id,
            title: record.title,
            completed: record.completed,
            expanded: record.expanded,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Minimal row for checking item existence
#[derive(Debug, Deserialize)]
struct IdOnly {
    #[allow(dead_code)]
    id: Thing,
}

/// Record literal for an item ID
fn item_ref(id: &str) -> String {
    format!("item:⟨{}⟩", id)
}

/// Which boolean field a toggle flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFlag {
    Completed,
    Expanded,
}

impl ItemFlag {
    fn field(&self) -> &'static str {
        match self {
            ItemFlag::Completed => "completed",
            ItemFlag::Expanded => "expanded",
        }
    }
}

/// Repository for item CRUD operations
pub struct ItemRepository<'a> {
    client: &'a Surreal<Db>,
}

impl<'a> ItemRepository<'a> {
    /// Create a new ItemRepository with the given database client
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self { client }
    }

    /// Check if an item with the given ID exists.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let item: Option<IdOnly> = self
            .client
            .select(("item", id))
            .await
            .map_err(|e| DbError::Query(Box::new(e)))?;
        Ok(item.is_some())
    }

    /// Get an item by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Item>> {
        debug!("Fetching item: {}", id);
        let record: Option<ItemRecord> = self
            .client
            .select(("item", id))
            .await
            .map_err(|e| DbError::Query(Box::new(e)))?;
        Ok(record.map(Item::from))
    }

    /// Get an item by ID, failing if it does not exist.
    pub async fn require(&self, id: &str) -> DbResult<Item> {
        self.get(id)
            .await?
            .ok_or_else(|| DbError::not_found(Entity::Item, id))
    }

    /// All items of a list, oldest first.
    pub async fn for_list(&self, list_id: &str) -> DbResult<Vec<Item>> {
        let mut result = self
            .client
            .query("SELECT * FROM item WHERE list_id = $list_id ORDER BY created_at ASC")
            .bind(("list_id", list_id.to_string()))
            .await?;
        let records: Vec<ItemRecord> = result.take(0)?;
        trace!("Loaded {} items for list {}", records.len(), list_id);
        Ok(records.into_iter().map(Item::from).collect())
    }

    /// Number of items in a list.
    pub async fn count_for_list(&self, list_id: &str) -> DbResult<usize> {
        #[derive(Deserialize)]
        struct CountRow {
            count: usize,
        }

        let mut result = self
            .client
            .query("SELECT count() AS count FROM item WHERE list_id = $list_id GROUP ALL")
            .bind(("list_id", list_id.to_string()))
            .await?;
        let row: Option<CountRow> = result.take(0)?;
        Ok(row.map_or(0, |r| r.count))
    }

    /// Create an item with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Query` if the database operation fails.
    pub async fn create(
        &self,
        id: &str,
        list_id: &str,
        parent_id: Option<&str>,
        title: &str,
    ) -> DbResult<Item> {
        debug!("Creating item: {} in list {} with title: {}", id, list_id, title);

        let parent_str = match parent_id {
            Some(_) => "$parent_id",
            None => "NONE",
        };

        let query = format!(
            r#"CREATE {} SET
                list_id = $list_id,
                parent_id = {},
                title = $title,
                completed = false,
                expanded = true"#,
            item_ref(id),
            parent_str
        );

        let mut builder = self
            .client
            .query(&query)
            .bind(("list_id", list_id.to_string()))
            .bind(("title", title.to_string()));
        if let Some(parent_id) = parent_id {
            builder = builder.bind(("parent_id", parent_id.to_string()));
        }
        builder.await?.check()?;

        self.require(id).await
    }

    /// Flip a boolean field in place and return the updated item.
    pub async fn toggle(&self, id: &str, flag: ItemFlag) -> DbResult<Item> {
        debug!("Toggling {} on item: {}", flag.field(), id);
        let query = format!(
            "UPDATE {} SET {field} = !{field}, updated_at = time::now()",
            item_ref(id),
            field = flag.field()
        );
        self.client.query(&query).await?.check()?;
        self.require(id).await
    }

    /// Replace an item's title.
    pub async fn set_title(&self, id: &str, title: &str) -> DbResult<Item> {
        debug!("Renaming item: {} to {}", id, title);
        let query = format!(
            "UPDATE {} SET title = $title, updated_at = time::now()",
            item_ref(id)
        );
        self.client
            .query(&query)
            .bind(("title", title.to_string()))
            .await?
            .check()?;
        self.require(id).await
    }

    /// Queue deletion of the given items.
    pub fn stage_delete(&self, batch: &mut WriteBatch, ids: &[&str]) {
        for id in ids {
            batch.push(format!("DELETE {}", item_ref(id)));
        }
    }

    /// Queue relocation of the given items to another list.
    ///
    /// `detach` names an item whose parent link is cleared as part of the
    /// move; all other parent links are left alone.
    pub fn stage_relocate(
        &self,
        batch: &mut WriteBatch,
        ids: &[&str],
        list_id: &str,
        detach: Option<&str>,
    ) {
        for id in ids {
            let clear_parent = if detach == Some(*id) {
                ", parent_id = NONE"
            } else {
                ""
            };
            batch.push(format!(
                "UPDATE {} SET list_id = '{}'{}, updated_at = time::now()",
                item_ref(id),
                list_id,
                clear_parent
            ));
        }
    }

    /// Delete the given items in one transaction.
    ///
    /// Returns the number of items deleted.
    pub async fn delete_many(&self, ids: &[&str]) -> DbResult<usize> {
        let mut batch = WriteBatch::new();
        self.stage_delete(&mut batch, ids);
        batch.commit(self.client).await?;
        Ok(ids.len())
    }

    /// Move the given items to another list in one transaction.
    pub async fn relocate_many(
        &self,
        ids: &[&str],
        list_id: &str,
        detach: Option<&str>,
    ) -> DbResult<usize> {
        let mut batch = WriteBatch::new();
        self.stage_relocate(&mut batch, ids, list_id, detach);
        batch.commit(self.client).await?;
        Ok(ids.len())
    }
}
