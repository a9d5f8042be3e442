use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Stable identity of a tree node (and graph vertex).
///
/// Two nodes carrying the same value are still distinct vertices.
pub type NodeId = Index;

/// Which child slot of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Binary tree node in the arena.
#[derive(Debug)]
pub struct TreeNode {
    /// Payload of this node
    pub value: i64,
    /// Index of parent node in the arena, None for the root and detached nodes
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl TreeNode {
    fn new(value: i64, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary tree.
///
/// Nodes own their children only through indices, so the undirected graph
/// derived from the tree can refer back to parents without ownership cycles.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<NodeId>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a parentless node and makes it the root.
    ///
    /// A previous root stays in the arena as a detached tree.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, value: i64) -> NodeId {
        let idx = self.arena.insert(TreeNode::new(value, None));
        self.root = Some(idx);
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, side: Side, value: i64) -> DomainResult<NodeId> {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or(DomainError::ParentNotFound(parent))?;
        if parent_node.child(side).is_some() {
            return Err(DomainError::SlotOccupied { parent, side });
        }

        let idx = self.arena.insert(TreeNode::new(value, Some(parent)));
        if let Some(parent_node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent_node.left = Some(idx),
                Side::Right => parent_node.right = Some(idx),
            }
        }
        Ok(idx)
    }

    pub fn get_node(&self, idx: NodeId) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn value(&self, idx: NodeId) -> Option<i64> {
        self.arena.get(idx).map(|node| node.value)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes stored, detached ones included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator over the tree reachable from the root.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of parent-child relationships below the root.
    #[instrument(level = "debug", skip(self))]
    pub fn edge_count(&self) -> usize {
        self.iter().map(|(_, node)| node.children().count()).sum()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: NodeId) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children()
                .map(|child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Values of all leaves, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i64> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value)
            .collect()
    }

    /// First node in pre-order carrying `value`.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_value(&self, value: i64) -> DomainResult<NodeId> {
        self.iter()
            .find(|(_, node)| node.value == value)
            .map(|(idx, _)| idx)
            .ok_or(DomainError::ValueNotFound(value))
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<NodeId>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Right first so left pops first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}
