//! Breadth-first "burning" of a graph into ignition stages.

use std::collections::{HashSet, VecDeque};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::{NodeId, TreeArena};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::graph::Graph;

/// When a node counts as ignited, which decides whether it can be queued twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrontierPolicy {
    /// Mark on enqueue: every reachable node lands in exactly one stage.
    #[default]
    Dedupe,
    /// Mark on dequeue: on cyclic graphs a node may repeat within a stage
    /// or spill into the following one. Trees burn identically either way.
    Faithful,
}

/// Ordered ignition stages; stage 0 is the start node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnStages(Vec<Vec<NodeId>>);

impl BurnStages {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn stage(&self, i: usize) -> Option<&[NodeId]> {
        self.0.get(i).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeId]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Time steps until the last node ignites: the start node's eccentricity.
    pub fn burn_time(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Maps every node to its tree value; ids missing from `tree` are skipped.
    pub fn values(&self, tree: &TreeArena) -> Vec<Vec<i64>> {
        self.0
            .iter()
            .map(|stage| stage.iter().filter_map(|&id| tree.value(id)).collect())
            .collect()
    }

    pub fn into_inner(self) -> Vec<Vec<NodeId>> {
        self.0
    }
}

/// Burns `graph` outward from `start`, one stage per BFS depth.
///
/// Fails with `StartNodeNotFound` if `start` has no recorded neighbors.
#[instrument(level = "debug", skip(graph))]
pub fn burn_graph(start: NodeId, graph: &Graph, policy: FrontierPolicy) -> DomainResult<BurnStages> {
    if !graph.contains(start) {
        return Err(DomainError::StartNodeNotFound(start));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut aflame: VecDeque<NodeId> = VecDeque::from([start]);
    if policy == FrontierPolicy::Dedupe {
        visited.insert(start);
    }

    let mut stages = Vec::new();
    while !aflame.is_empty() {
        let stage: Vec<NodeId> = aflame.iter().copied().collect();
        debug!(depth = stages.len(), size = stage.len(), "stage ignited");
        stages.push(stage);

        // Only the nodes present at stage start belong to this stage
        for _ in 0..aflame.len() {
            let Some(current) = aflame.pop_front() else {
                break;
            };
            if policy == FrontierPolicy::Faithful {
                visited.insert(current);
            }
            for &n in graph.neighbors(current).unwrap_or_default() {
                match policy {
                    FrontierPolicy::Dedupe => {
                        if visited.insert(n) {
                            aflame.push_back(n);
                        }
                    }
                    FrontierPolicy::Faithful => {
                        if !visited.contains(&n) {
                            aflame.push_back(n);
                        }
                    }
                }
            }
        }
    }

    Ok(BurnStages(stages))
}
