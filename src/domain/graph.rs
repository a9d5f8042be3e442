//! Undirected adjacency graph derived from a binary tree.

use std::collections::HashMap;

use tracing::{instrument, trace};

use crate::domain::arena::{NodeId, TreeArena};

/// Adjacency map: vertex → neighbors in insertion order.
///
/// Kept apart from the tree so child→parent links never need back-pointers
/// inside `TreeNode`.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the undirected graph of the tree reachable from its root.
    pub fn from_tree(tree: &TreeArena) -> Self {
        let mut graph = Self::new();
        build_graph(tree, tree.root(), &mut graph);
        graph
    }

    /// Appends `a → b` and `b → a`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    pub fn neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// True if the node has at least one recorded neighbor.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Directed adjacency entries; twice the number of undirected edges.
    pub fn directed_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Populates `graph` with the edges of the subtree rooted at `root`.
///
/// The edge to a child is appended before descending into it, so a vertex
/// lists its parent first, then its children (left, right). A node without
/// children or parent never becomes a key.
#[instrument(level = "trace", skip(tree, graph))]
pub fn build_graph(tree: &TreeArena, root: Option<NodeId>, graph: &mut Graph) {
    let Some(root) = root else {
        return;
    };
    let Some(node) = tree.get_node(root) else {
        return;
    };

    for child in node.children() {
        trace!(?root, ?child, "linking");
        graph.add_edge(child, root);
        build_graph(tree, Some(child), graph);
    }
}
