//! Tests for graph building and burning against the demonstration trees
//! and generated tree shapes.

use std::collections::{HashMap, HashSet, VecDeque};

use graphburn::application::{BurnService, Scenario};
use graphburn::domain::{
    burn_graph, build_graph, DomainError, FrontierPolicy, Graph, NodeId, Side, TreeArena,
};
use graphburn::util::testing;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Helpers
// ============================================================

/// Complete binary tree with `n` nodes, values 0..n in level order.
fn complete_tree(n: usize) -> TreeArena {
    let mut tree = TreeArena::new();
    if n == 0 {
        return tree;
    }
    let mut ids = vec![tree.insert_root(0)];
    for i in 1..n {
        let parent = ids[(i - 1) / 2];
        let side = if i % 2 == 1 { Side::Left } else { Side::Right };
        ids.push(tree.insert_child(parent, side, i as i64).unwrap());
    }
    tree
}

/// Path that alternates left and right children.
fn zigzag_tree(n: usize) -> TreeArena {
    let mut tree = TreeArena::new();
    let mut last = tree.insert_root(0);
    for i in 1..n {
        let side = if i % 2 == 0 { Side::Left } else { Side::Right };
        last = tree.insert_child(last, side, i as i64).unwrap();
    }
    tree
}

/// Plain BFS distances, independent of the burn simulator.
fn distances(graph: &Graph, start: NodeId) -> HashMap<NodeId, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for &n in graph.neighbors(node).unwrap_or_default() {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

// ============================================================
// Scenario Tests
// ============================================================

#[test]
fn given_scenario_a_when_burning_from_14_then_stages_cover_whole_tree() {
    let report = BurnService::default()
        .burn_scenario(Scenario::A, None)
        .unwrap();

    assert_eq!(report.start_value, 14);
    assert_eq!(
        report.stages,
        vec![vec![14], vec![10, 21, 24], vec![12, 15], vec![13, 22, 23]]
    );
}

#[test]
fn given_scenario_b_when_burning_from_41_then_matches_expected_stages() {
    let report = BurnService::default()
        .burn_scenario(Scenario::B, None)
        .unwrap();

    assert_eq!(
        report.stages,
        vec![
            vec![41],
            vec![19, 2],
            vec![12],
            vec![82],
            vec![15, 95],
            vec![21, 7, 16],
        ]
    );
    assert_eq!(report.burn_time(), 5);
}

#[rstest]
#[case(FrontierPolicy::Dedupe)]
#[case(FrontierPolicy::Faithful)]
fn given_lone_node_when_burning_then_start_node_not_found(#[case] policy: FrontierPolicy) {
    let built = Scenario::Lone.build().unwrap();
    let graph = Graph::from_tree(&built.tree);

    let result = burn_graph(built.start, &graph, policy);

    assert_eq!(result, Err(DomainError::StartNodeNotFound(built.start)));
}

#[rstest]
#[case(Scenario::A)]
#[case(Scenario::B)]
fn given_tree_when_burning_then_policies_agree(#[case] scenario: Scenario) {
    let dedupe = BurnService::new(FrontierPolicy::Dedupe)
        .burn_scenario(scenario, None)
        .unwrap();
    let faithful = BurnService::new(FrontierPolicy::Faithful)
        .burn_scenario(scenario, None)
        .unwrap();

    assert_eq!(dedupe.stages, faithful.stages);
}

// ============================================================
// Graph Builder Properties
// ============================================================

#[rstest]
#[case(complete_tree(1))]
#[case(complete_tree(2))]
#[case(complete_tree(15))]
#[case(complete_tree(20))]
#[case(zigzag_tree(9))]
#[case(Scenario::A.build().unwrap().tree)]
#[case(Scenario::B.build().unwrap().tree)]
fn given_tree_when_building_graph_then_entries_are_twice_the_edges(#[case] tree: TreeArena) {
    let graph = Graph::from_tree(&tree);

    assert_eq!(graph.directed_edge_count(), 2 * tree.edge_count());
    if tree.edge_count() > 0 {
        assert_eq!(graph.vertex_count(), tree.len());
    }
}

#[test]
fn given_scenario_a_when_building_graph_then_parent_is_listed_before_children() {
    let built = Scenario::A.build().unwrap();
    let graph = Graph::from_tree(&built.tree);

    let neighbor_values = |value: i64| -> Vec<i64> {
        let id = built.tree.find_by_value(value).unwrap();
        graph
            .neighbors(id)
            .unwrap()
            .iter()
            .filter_map(|&n| built.tree.value(n))
            .collect()
    };

    assert_eq!(neighbor_values(14), vec![10, 21, 24]);
    assert_eq!(neighbor_values(10), vec![12, 14, 15]);
    assert_eq!(neighbor_values(12), vec![13, 10]);
    assert_eq!(neighbor_values(21), vec![14]);
}

#[test]
fn given_subtree_root_when_building_then_only_subtree_edges_are_added() {
    let built = Scenario::A.build().unwrap();
    let n15 = built.tree.find_by_value(15).unwrap();

    let mut graph = Graph::new();
    build_graph(&built.tree, Some(n15), &mut graph);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.directed_edge_count(), 4);
}

// ============================================================
// Burn Properties
// ============================================================

#[rstest]
#[case(complete_tree(15), 0)]
#[case(complete_tree(15), 11)]
#[case(complete_tree(20), 19)]
#[case(zigzag_tree(9), 4)]
#[case(zigzag_tree(9), 0)]
fn given_start_when_burning_then_layers_match_bfs_distances(
    #[case] tree: TreeArena,
    #[case] start_value: i64,
) {
    let graph = Graph::from_tree(&tree);
    let start = tree.find_by_value(start_value).unwrap();

    let stages = burn_graph(start, &graph, FrontierPolicy::Dedupe).unwrap();
    let dist = distances(&graph, start);

    // stage 0 is exactly the start node
    assert_eq!(stages.stage(0), Some(&[start][..]));

    // every node sits in the stage matching its distance, exactly once
    let mut seen = HashSet::new();
    for (depth, stage) in stages.iter().enumerate() {
        for node in stage {
            assert!(seen.insert(*node), "node burned twice: {:?}", node);
            assert_eq!(dist[node], depth);
        }
    }
    assert_eq!(seen.len(), dist.len());
    assert_eq!(seen.len(), tree.len());

    // stage count is eccentricity + 1
    let eccentricity = dist.values().copied().max().unwrap();
    assert_eq!(stages.len(), eccentricity + 1);
    assert_eq!(stages.burn_time(), eccentricity);
}

#[test]
fn given_equal_values_when_burning_then_nodes_are_distinct_vertices() {
    let mut tree = TreeArena::new();
    let root = tree.insert_root(5);
    let left = tree.insert_child(root, Side::Left, 5).unwrap();
    let right = tree.insert_child(root, Side::Right, 5).unwrap();
    let graph = Graph::from_tree(&tree);

    let stages = burn_graph(left, &graph, FrontierPolicy::Dedupe).unwrap();

    assert_eq!(stages.clone().into_inner(), vec![vec![left], vec![root], vec![right]]);
    assert_eq!(stages.values(&tree), vec![vec![5], vec![5], vec![5]]);
}

#[test]
fn given_disconnected_graph_when_burning_then_unreached_nodes_are_absent() {
    let mut tree = TreeArena::new();
    let a = tree.insert_root(1);
    let b = tree.insert_root(2);
    let c = tree.insert_root(3);
    let d = tree.insert_root(4);

    let mut graph = Graph::new();
    graph.add_edge(a, b);
    graph.add_edge(c, d);

    let stages = burn_graph(a, &graph, FrontierPolicy::Dedupe).unwrap();

    assert_eq!(stages.into_inner(), vec![vec![a], vec![b]]);
}

// ============================================================
// Frontier Policy
// ============================================================

/// Triangle s-a-b: a and b ignite together and point at each other.
fn triangle() -> (Graph, NodeId, NodeId, NodeId) {
    let mut tree = TreeArena::new();
    let s = tree.insert_root(0);
    let a = tree.insert_root(1);
    let b = tree.insert_root(2);
    let mut graph = Graph::new();
    graph.add_edge(s, a);
    graph.add_edge(s, b);
    graph.add_edge(a, b);
    (graph, s, a, b)
}

#[test]
fn given_triangle_when_burning_with_dedupe_then_each_node_burns_once() {
    let (graph, s, a, b) = triangle();

    let stages = burn_graph(s, &graph, FrontierPolicy::Dedupe).unwrap();

    assert_eq!(stages.into_inner(), vec![vec![s], vec![a, b]]);
}

#[test]
fn given_triangle_when_burning_faithfully_then_node_reappears_next_stage() {
    let (graph, s, a, b) = triangle();

    let stages = burn_graph(s, &graph, FrontierPolicy::Faithful).unwrap();

    assert_eq!(stages.into_inner(), vec![vec![s], vec![a, b], vec![b]]);
}

#[test]
fn given_diamond_when_burning_faithfully_then_shared_neighbor_is_queued_twice() {
    // s - a, s - b, a - t, b - t
    let mut tree = TreeArena::new();
    let s = tree.insert_root(0);
    let a = tree.insert_root(1);
    let b = tree.insert_root(2);
    let t = tree.insert_root(3);
    let mut graph = Graph::new();
    graph.add_edge(s, a);
    graph.add_edge(s, b);
    graph.add_edge(a, t);
    graph.add_edge(b, t);

    let faithful = burn_graph(s, &graph, FrontierPolicy::Faithful).unwrap();
    let dedupe = burn_graph(s, &graph, FrontierPolicy::Dedupe).unwrap();

    assert_eq!(faithful.stage(2), Some(&[t, t][..]));
    assert_eq!(dedupe.into_inner(), vec![vec![s], vec![a, b], vec![t]]);
}
