//! Hierarchy engine for list items
//!
//! Builds an arena over the items of one list, with index-based parent and
//! child links, and answers the structural questions the mutation
//! operations need: an item's level, whether it may take a child, which
//! items make up its subtree, and how the list renders as a tree.
//!
//! Everything here is synchronous and storage-independent.

use crate::error::{DbError, DbResult, Entity};
use crate::models::{Item, ItemNode, ItemView, MAX_LEVEL};
use std::collections::{HashMap, HashSet};

/// One arena slot
#[derive(Debug)]
struct Node<'a> {
    item: &'a Item,
    children: Vec<usize>,
}

/// Arena of the items of a single list
#[derive(Debug)]
pub struct ItemForest<'a> {
    nodes: Vec<Node<'a>>,
    index: HashMap<&'a str, usize>,
    roots: Vec<usize>,
}

impl<'a> ItemForest<'a> {
    /// Build the arena from a list's items.
    ///
    /// Child order follows the order of `items`. Items whose parent is not
    /// among `items` are kept but never reachable from a root; asking for
    /// their level reports the dangling reference.
    pub fn new(items: &'a [Item]) -> Self {
        let mut nodes = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for item in items {
            if index.contains_key(item.id.as_str()) {
                continue;
            }
            index.insert(item.id.as_str(), nodes.len());
            nodes.push(Node {
                item,
                children: Vec::new(),
            });
        }

        let mut roots = Vec::new();
        for idx in 0..nodes.len() {
            match nodes[idx].item.parent_id.as_deref() {
                None => roots.push(idx),
                Some(parent_id) => {
                    if let Some(&parent) = index.get(parent_id) {
                        nodes[parent].children.push(idx);
                    }
                }
            }
        }

        Self {
            nodes,
            index,
            roots,
        }
    }

    fn position(&self, id: &str) -> DbResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DbError::not_found(Entity::Item, id))
    }

    /// Compute an item's level by walking its parent chain to a root.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if `id` is not in the arena, and
    /// `DbError::ValidationError` if the chain loops or points at an item
    /// outside this list.
    pub fn level_of(&self, id: &str) -> DbResult<usize> {
        let mut idx = self.position(id)?;
        let mut seen = HashSet::new();
        let mut level = 0;

        loop {
            if !seen.insert(idx) {
                return Err(DbError::validation(format!(
                    "Item '{}' is part of a parent cycle",
                    id
                )));
            }
            let item = self.nodes[idx].item;
            match item.parent_id.as_deref() {
                None => return Ok(level),
                Some(parent_id) => {
                    idx = *self.index.get(parent_id).ok_or_else(|| {
                        DbError::validation(format!(
                            "Item '{}' references parent '{}' outside its list",
                            item.id, parent_id
                        ))
                    })?;
                    level += 1;
                }
            }
        }
    }

    /// Whether a child may be attached under `id`.
    pub fn can_accept_child(&self, id: &str) -> DbResult<bool> {
        Ok(self.level_of(id)? < MAX_LEVEL)
    }

    /// Level a new child of `parent_id` would get.
    ///
    /// # Errors
    ///
    /// Returns `DbError::DepthExceeded` if the parent is already at the
    /// deepest level.
    pub fn child_level(&self, parent_id: &str) -> DbResult<usize> {
        let level = self.level_of(parent_id)?;
        if level >= MAX_LEVEL {
            return Err(DbError::DepthExceeded {
                parent_id: parent_id.to_string(),
                level,
            });
        }
        Ok(level + 1)
    }

    /// The item `id` followed by all its descendants, depth-first.
    pub fn subtree(&self, id: &str) -> DbResult<Vec<&'a Item>> {
        let start = self.position(id)?;
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![start];

        while let Some(idx) = stack.pop() {
            if !seen.insert(idx) {
                continue;
            }
            let node = &self.nodes[idx];
            out.push(node.item);
            stack.extend(node.children.iter().rev());
        }

        Ok(out)
    }

    /// Deepest level below `id`, relative to `id` itself (a leaf is 0).
    pub fn height(&self, id: &str) -> DbResult<usize> {
        let start = self.position(id)?;
        let mut seen = HashSet::new();
        let mut stack = vec![(start, 0usize)];
        let mut height = 0;

        while let Some((idx, depth)) = stack.pop() {
            if !seen.insert(idx) {
                continue;
            }
            height = height.max(depth);
            for &child in &self.nodes[idx].children {
                stack.push((child, depth + 1));
            }
        }

        Ok(height)
    }

    /// Arrange the arena as a tree of root nodes with computed levels.
    pub fn to_tree(&self) -> Vec<ItemNode> {
        let mut seen = HashSet::new();
        self.roots
            .iter()
            .map(|&idx| self.build_node(idx, 0, &mut seen))
            .collect()
    }

    fn build_node(&self, idx: usize, level: usize, seen: &mut HashSet<usize>) -> ItemNode {
        seen.insert(idx);
        let node = &self.nodes[idx];
        let mut children = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            if !seen.contains(&child) {
                children.push(self.build_node(child, level + 1, seen));
            }
        }
        ItemNode {
            view: ItemView::new(node.item.clone(), level),
            children,
        }
    }
}
