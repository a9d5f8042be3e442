//! Domain layer: binary tree arena, derived graph and burn simulation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod burn;
pub mod error;
pub mod graph;

pub use arena::{NodeId, Side, TreeArena, TreeNode};
pub use burn::{burn_graph, BurnStages, FrontierPolicy};
pub use error::{DomainError, DomainResult};
pub use graph::{build_graph, Graph};
