//! Burn service
//!
//! Derives the graph from a tree, burns it and maps the stages back to values.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, Scenario};
use crate::domain::{burn_graph, DomainError, FrontierPolicy, Graph, NodeId, TreeArena};

/// Outcome of burning one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurnReport {
    pub scenario: Scenario,
    pub start_value: i64,
    /// Node values igniting at each time step
    pub stages: Vec<Vec<i64>>,
}

impl BurnReport {
    pub fn burn_time(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }
}

/// Service for running burn simulations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurnService {
    policy: FrontierPolicy,
}

impl BurnService {
    pub fn new(policy: FrontierPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FrontierPolicy {
        self.policy
    }

    /// Burns the tree from `start`, returning the values of each stage.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn burn(&self, tree: &TreeArena, start: NodeId) -> ApplicationResult<Vec<Vec<i64>>> {
        let graph = Graph::from_tree(tree);
        debug!(
            vertices = graph.vertex_count(),
            entries = graph.directed_edge_count(),
            "graph built"
        );
        let stages = burn_graph(start, &graph, self.policy).map_err(|e| {
            match (e, tree.value(start)) {
                (DomainError::StartNodeNotFound(_), Some(value)) => {
                    ApplicationError::StartNodeNotFound { value }
                }
                (e, _) => e.into(),
            }
        })?;
        Ok(stages.values(tree))
    }

    /// Burns a scenario from its default start, or from the first node
    /// (pre-order) carrying `start_value`.
    #[instrument(level = "debug", skip(self))]
    pub fn burn_scenario(
        &self,
        scenario: Scenario,
        start_value: Option<i64>,
    ) -> ApplicationResult<BurnReport> {
        let built = scenario.build()?;
        let start = match start_value {
            Some(value) => built.tree.find_by_value(value)?,
            None => built.start,
        };
        let start_value = built.tree.value(start).unwrap_or_default();

        let stages = self.burn(&built.tree, start)?;
        info!(%scenario, start_value, stages = stages.len(), "burn complete");

        Ok(BurnReport {
            scenario,
            start_value,
            stages,
        })
    }
}
