/*
Rendering lives behind a trait so the domain types stay free of termtree.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeId, TreeArena};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &TreeArena, node_idx: NodeId) -> Tree<String> {
            let (label, leaves): (String, Vec<Tree<String>>) = match arena.get_node(node_idx) {
                Some(node) => (
                    node.value.to_string(),
                    node.children().map(|c| build_tree(arena, c)).collect(),
                ),
                None => ("?".to_string(), Vec::new()),
            };
            Tree::new(label).with_leaves(leaves)
        }

        match self.root() {
            Some(root_idx) => build_tree(self, root_idx),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
