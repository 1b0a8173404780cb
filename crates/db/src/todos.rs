//! Core list and item operations
//!
//! Each operation takes the acting user explicitly, checks ownership
//! through the `AccessGuard`, validates structure with the hierarchy
//! engine, and only then writes. Multi-record writes go through a single
//! `WriteBatch`, so a failure leaves the store unchanged.

use crate::access::{AccessGuard, require_user};
use crate::error::{DbError, DbResult, Entity};
use crate::hierarchy::ItemForest;
use crate::id::IdGenerator;
use crate::models::{Item, ItemView, ListTree, MAX_LEVEL, TodoList};
use crate::repository::{ItemFlag, ItemRepository, ListRepository, WriteBatch};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::{debug, info};

/// Entry point for the todo list operations
pub struct TodoService<'a> {
    client: &'a Surreal<Db>,
    guard: AccessGuard<'a>,
    lists: ListRepository<'a>,
    items: ItemRepository<'a>,
}

/// Trim a title, rejecting blank input
fn require_title(title: &str) -> DbResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DbError::validation("Title is required."));
    }
    Ok(title.to_string())
}

impl<'a> TodoService<'a> {
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self {
            client,
            guard: AccessGuard::new(client),
            lists: ListRepository::new(client),
            items: ItemRepository::new(client),
        }
    }

    // ========================================
    // Lists
    // ========================================

    /// Create a new list owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` if the title or user is blank.
    pub async fn create_list(&self, user: &str, title: &str) -> DbResult<TodoList> {
        let user = require_user(user)?;
        let title = require_title(title)?;
        let id = self.unused_id(&title, Entity::List).await?;
        let list = self.lists.create(&id, &title, user).await?;
        info!("Created list {} for {}", list.id, user);
        Ok(list)
    }

    /// Lists owned by `user`, oldest first.
    pub async fn lists(&self, user: &str) -> DbResult<Vec<TodoList>> {
        let user = require_user(user)?;
        self.lists.for_owner(user).await
    }

    /// A list with its items arranged as a tree.
    pub async fn list_tree(&self, user: &str, list_id: &str) -> DbResult<ListTree> {
        let list = self.guard.owned_list(user, list_id).await?;
        let items = self.items.for_list(&list.id).await?;
        let roots = ItemForest::new(&items).to_tree();
        Ok(ListTree { list, roots })
    }

    /// Delete a list and every item in it, at any depth.
    ///
    /// Returns the number of items removed along with the list.
    pub async fn delete_list(&self, user: &str, list_id: &str) -> DbResult<usize> {
        let list = self.guard.owned_list(user, list_id).await?;
        let items = self.items.for_list(&list.id).await?;
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();

        let mut batch = WriteBatch::new();
        self.items.stage_delete(&mut batch, &ids);
        self.lists.stage_delete(&mut batch, &list.id);
        batch.commit(self.client).await?;

        info!("Deleted list {} with {} items", list.id, ids.len());
        Ok(ids.len())
    }

    // ========================================
    // Items
    // ========================================

    /// Create an item in a list, optionally under a parent.
    ///
    /// # Errors
    ///
    /// - `DbError::ValidationError` if the title, user or list ID is blank,
    ///   or the parent lives in a different list
    /// - `DbError::NotFound` if the list or parent does not exist
    /// - `DbError::Unauthorized` if the list or parent belongs to someone else
    /// - `DbError::DepthExceeded` if the parent is at the deepest level
    pub async fn create_item(
        &self,
        user: &str,
        list_id: &str,
        parent_id: Option<&str>,
        title: &str,
    ) -> DbResult<ItemView> {
        let title = require_title(title)?;
        if list_id.trim().is_empty() {
            return Err(DbError::validation("List ID is required."));
        }
        let list = self.guard.owned_list(user, list_id).await?;

        let (parent_id, level) = match parent_id {
            None => (None, 0),
            Some(raw) => {
                let (parent, _) = self.guard.owned_item(user, raw).await?;
                if parent.list_id != list.id {
                    return Err(DbError::validation(format!(
                        "Parent item '{}' belongs to a different list.",
                        parent.id
                    )));
                }
                let siblings = self.items.for_list(&list.id).await?;
                let level = ItemForest::new(&siblings).child_level(&parent.id)?;
                (Some(parent.id), level)
            }
        };

        let id = self.unused_id(&title, Entity::Item).await?;
        let item = self
            .items
            .create(&id, &list.id, parent_id.as_deref(), &title)
            .await?;
        debug!("Created item {} at level {} in list {}", item.id, level, list.id);
        Ok(ItemView::new(item, level))
    }

    /// Fetch one item with its level.
    pub async fn get_item(&self, user: &str, item_id: &str) -> DbResult<ItemView> {
        let (item, _) = self.guard.owned_item(user, item_id).await?;
        self.view(item).await
    }

    /// Flip an item's completed flag. Descendants are not touched.
    pub async fn toggle_completed(&self, user: &str, item_id: &str) -> DbResult<ItemView> {
        self.toggle(user, item_id, ItemFlag::Completed).await
    }

    /// Flip an item's expanded flag. Descendants are not touched.
    pub async fn toggle_expanded(&self, user: &str, item_id: &str) -> DbResult<ItemView> {
        self.toggle(user, item_id, ItemFlag::Expanded).await
    }

    async fn toggle(&self, user: &str, item_id: &str, flag: ItemFlag) -> DbResult<ItemView> {
        let (item, _) = self.guard.owned_item(user, item_id).await?;
        let item = self.items.toggle(&item.id, flag).await?;
        self.view(item).await
    }

    /// Replace an item's title.
    pub async fn rename_item(&self, user: &str, item_id: &str, title: &str) -> DbResult<ItemView> {
        let title = require_title(title)?;
        let (item, _) = self.guard.owned_item(user, item_id).await?;
        let item = self.items.set_title(&item.id, &title).await?;
        self.view(item).await
    }

    /// Delete an item together with all of its descendants.
    ///
    /// Returns the number of items removed.
    pub async fn delete_item(&self, user: &str, item_id: &str) -> DbResult<usize> {
        let (item, list) = self.guard.owned_item(user, item_id).await?;
        let items = self.items.for_list(&list.id).await?;
        let forest = ItemForest::new(&items);
        let ids: Vec<&str> = forest
            .subtree(&item.id)?
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();

        let removed = self.items.delete_many(&ids).await?;
        info!("Deleted item {} and {} descendants", item.id, removed - 1);
        Ok(removed)
    }

    /// Move an item and its whole subtree to another list.
    ///
    /// Every item in the subtree gets the new `list_id`; parent links
    /// inside the subtree are kept. A moved item that had a parent is
    /// detached and becomes a root of the destination list, so no parent
    /// link ever crosses lists.
    ///
    /// Returns the number of items moved.
    ///
    /// # Errors
    ///
    /// - `DbError::Unauthorized` unless the user owns both lists
    /// - `DbError::ValidationError` if the destination is the current list
    ///   or the subtree would not fit under the depth limit
    pub async fn move_item(&self, user: &str, item_id: &str, new_list_id: &str) -> DbResult<usize> {
        if new_list_id.trim().is_empty() {
            return Err(DbError::validation("New list ID is required."));
        }
        let (item, source) = self.guard.owned_item(user, item_id).await?;
        let target = self.guard.owned_list(user, new_list_id).await?;

        if source.id == target.id {
            return Err(DbError::validation(format!(
                "Item '{}' is already in list '{}'.",
                item.id, target.title
            )));
        }

        let items = self.items.for_list(&source.id).await?;
        let forest = ItemForest::new(&items);
        if forest.height(&item.id)? > MAX_LEVEL {
            return Err(DbError::validation(format!(
                "Item '{}' has more than {} levels below it and cannot be moved.",
                item.id, MAX_LEVEL
            )));
        }

        let ids: Vec<&str> = forest
            .subtree(&item.id)?
            .into_iter()
            .map(|i| i.id.as_str())
            .collect();
        let detach = (!item.is_root()).then_some(item.id.as_str());

        let moved = self.items.relocate_many(&ids, &target.id, detach).await?;
        info!(
            "Moved item {} with {} items from list {} to {}",
            item.id, moved, source.id, target.id
        );
        Ok(moved)
    }

    // ========================================
    // Helpers
    // ========================================

    /// Attach the computed level to an item.
    async fn view(&self, item: Item) -> DbResult<ItemView> {
        let items = self.items.for_list(&item.list_id).await?;
        let level = ItemForest::new(&items).level_of(&item.id)?;
        Ok(ItemView::new(item, level))
    }

    /// Find an ID not yet used by a record of the given kind.
    async fn unused_id(&self, seed: &str, entity: Entity) -> DbResult<String> {
        let mut generator = IdGenerator::new(seed);
        while let Some(id) = generator.next_id() {
            let taken = match entity {
                Entity::List => self.lists.exists(&id).await?,
                Entity::Item => self.items.exists(&id).await?,
            };
            if !taken {
                return Ok(id);
            }
        }
        Err(DbError::validation(
            "Failed to generate a unique ID after maximum retries.",
        ))
    }
}
