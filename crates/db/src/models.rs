//! Data models for Quire todo lists
//!
//! Defines the list and item entities returned by the core operations,
//! plus the tree view used to render a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deepest level an item may sit at (root items are level 0).
pub const MAX_LEVEL: usize = 2;

/// A named todo list owned by a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Short record ID
    pub id: String,

    /// List title
    pub title: String,

    /// Identity of the owning user
    pub owner: String,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TodoList {
    /// Whether `user` owns this list
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.owner == user
    }
}

/// A single entry of a todo list
///
/// Items form a tree through `parent_id`; the parent always lives in the
/// same list as the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short record ID
    pub id: String,

    /// ID of the list this item belongs to
    pub list_id: String,

    /// ID of the parent item, `None` for root items
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Item title
    pub title: String,

    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,

    /// Whether the item's children are shown
    #[serde(default = "default_expanded")]
    pub expanded: bool,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_expanded() -> bool {
    true
}

impl Item {
    /// Whether this item has no parent
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// An item together with its computed level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,

    /// Depth in the list's tree, root = 0
    pub level: usize,
}

impl ItemView {
    pub fn new(item: Item, level: usize) -> Self {
        Self { item, level }
    }

    /// Whether another item may be nested under this one
    pub fn can_have_children(&self) -> bool {
        self.level < MAX_LEVEL
    }
}

/// One node of a rendered list tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNode {
    #[serde(flatten)]
    pub view: ItemView,

    /// Child nodes, oldest first
    pub children: Vec<ItemNode>,
}

impl ItemNode {
    /// Number of items in this node's subtree, itself included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(ItemNode::size).sum::<usize>()
    }
}

/// A list with its items arranged as a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTree {
    pub list: TodoList,

    /// Root items, oldest first
    pub roots: Vec<ItemNode>,
}

impl ListTree {
    /// Total number of items in the list
    pub fn item_count(&self) -> usize {
        self.roots.iter().map(ItemNode::size).sum()
    }
}
