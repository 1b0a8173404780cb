//! Ownership checks for list and item operations
//!
//! Every core operation resolves its target through the guard first. A
//! missing record yields `DbError::NotFound`, a record owned by someone
//! else yields `DbError::Unauthorized`; neither touches the store.

use crate::error::{DbError, DbResult, Entity};
use crate::id::normalize_id;
use crate::models::{Item, TodoList};
use crate::repository::{ItemRepository, ListRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::debug;

/// Trim the acting user, rejecting blank input
pub(crate) fn require_user(user: &str) -> DbResult<&str> {
    let user = user.trim();
    if user.is_empty() {
        return Err(DbError::validation("Acting user is required."));
    }
    Ok(user)
}

/// Resolves records on behalf of an acting user
pub struct AccessGuard<'a> {
    lists: ListRepository<'a>,
    items: ItemRepository<'a>,
}

impl<'a> AccessGuard<'a> {
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self {
            lists: ListRepository::new(client),
            items: ItemRepository::new(client),
        }
    }

    /// Resolve a list the user owns.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` if the user is blank,
    /// `DbError::NotFound` if the list does not exist and
    /// `DbError::Unauthorized` if it belongs to someone else.
    pub async fn owned_list(&self, user: &str, list_id: &str) -> DbResult<TodoList> {
        let user = require_user(user)?;
        let id = normalize_id(list_id, Entity::List)?;
        let list = self.lists.require(&id).await?;
        if !list.is_owned_by(user) {
            debug!("User {} denied access to list {}", user, id);
            return Err(DbError::Unauthorized {
                entity: Entity::List,
                id,
                user: user.to_string(),
            });
        }
        Ok(list)
    }

    /// Resolve an item the user owns through its list.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the item or its list does not exist
    /// and `DbError::Unauthorized` if the list belongs to someone else.
    pub async fn owned_item(&self, user: &str, item_id: &str) -> DbResult<(Item, TodoList)> {
        let user = require_user(user)?;
        let id = normalize_id(item_id, Entity::Item)?;
        let item = self.items.require(&id).await?;
        let list = self.lists.require(&item.list_id).await?;
        if !list.is_owned_by(user) {
            debug!("User {} denied access to item {}", user, id);
            return Err(DbError::Unauthorized {
                entity: Entity::Item,
                id,
                user: user.to_string(),
            });
        }
        Ok((item, list))
    }
}
