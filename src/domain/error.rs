//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::{NodeId, Side};

/// Domain errors represent violations of tree or graph invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unable to find start node in graph")]
    StartNodeNotFound(NodeId),

    #[error("parent node not found in tree: {0:?}")]
    ParentNotFound(NodeId),

    #[error("{side} child of {parent:?} is already set")]
    SlotOccupied { parent: NodeId, side: Side },

    #[error("no node with value {0} in tree")]
    ValueNotFound(i64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
