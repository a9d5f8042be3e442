//! Hardcoded demonstration trees.

use std::fmt;

use clap::ValueEnum;
use tracing::instrument;

use crate::domain::{DomainResult, NodeId, Side, TreeArena};

/// A scenario tree together with its default start node.
#[derive(Debug)]
pub struct ScenarioTree {
    pub tree: TreeArena,
    pub start: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// 12 → (13, 10 → (14 → (21, 24), 15 → (22, 23))), burning from 14
    A,
    /// 12 → (19 → 41 → 2, 82 → (15 → 21, 95 → (7, 16))), burning from 41
    B,
    /// Single node 7 without edges; its start node is never in the graph
    Lone,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::A => write!(f, "a"),
            Scenario::B => write!(f, "b"),
            Scenario::Lone => write!(f, "lone"),
        }
    }
}

impl Scenario {
    /// Scenarios run by the demo, in order.
    pub const DEMO: [Scenario; 2] = [Scenario::A, Scenario::B];

    #[instrument(level = "debug")]
    pub fn build(self) -> DomainResult<ScenarioTree> {
        match self {
            Scenario::A => scenario_a(),
            Scenario::B => scenario_b(),
            Scenario::Lone => {
                let mut tree = TreeArena::new();
                let start = tree.insert_root(7);
                Ok(ScenarioTree { tree, start })
            }
        }
    }
}

fn scenario_a() -> DomainResult<ScenarioTree> {
    let mut tree = TreeArena::new();
    let n12 = tree.insert_root(12);
    tree.insert_child(n12, Side::Left, 13)?;
    let n10 = tree.insert_child(n12, Side::Right, 10)?;
    let n14 = tree.insert_child(n10, Side::Left, 14)?;
    tree.insert_child(n14, Side::Left, 21)?;
    tree.insert_child(n14, Side::Right, 24)?;
    let n15 = tree.insert_child(n10, Side::Right, 15)?;
    tree.insert_child(n15, Side::Left, 22)?;
    tree.insert_child(n15, Side::Right, 23)?;
    Ok(ScenarioTree { tree, start: n14 })
}

fn scenario_b() -> DomainResult<ScenarioTree> {
    let mut tree = TreeArena::new();
    let n12 = tree.insert_root(12);
    let n19 = tree.insert_child(n12, Side::Left, 19)?;
    let n41 = tree.insert_child(n19, Side::Left, 41)?;
    tree.insert_child(n41, Side::Right, 2)?;
    let n82 = tree.insert_child(n12, Side::Right, 82)?;
    let n15 = tree.insert_child(n82, Side::Left, 15)?;
    tree.insert_child(n15, Side::Left, 21)?;
    let n95 = tree.insert_child(n82, Side::Right, 95)?;
    tree.insert_child(n95, Side::Left, 7)?;
    tree.insert_child(n95, Side::Right, 16)?;
    Ok(ScenarioTree { tree, start: n41 })
}
