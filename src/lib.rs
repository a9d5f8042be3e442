//! Burn a binary tree as an undirected graph.
//!
//! The tree lives in a [`domain::TreeArena`]; [`domain::Graph::from_tree`]
//! derives the undirected adjacency map and [`domain::burn_graph`] spreads
//! the fire from a start node one breadth-first layer at a time.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
