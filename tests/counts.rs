//! End-to-end counting checks: literal small graphs, brute-force
//! cross-validation, sweep/single-size agreement, and independence from
//! the chosen orientation.

use pivotscale::builder::Builder;
use pivotscale::count::{pivot_count, pivot_sweep};
use pivotscale::ordering;
use pivotscale::types::{Count, NodeId};
use pivotscale::Graph;

fn undirected(num_nodes: NodeId, edges: &[(NodeId, NodeId)]) -> Graph {
    Builder::csr_from_edges(num_nodes, edges, true)
}

fn degree_dag(num_nodes: NodeId, edges: &[(NodeId, NodeId)]) -> Graph {
    Builder::direct_graph_degree(&undirected(num_nodes, edges))
}

/// Counts cliques of every size by checking each vertex subset.
fn brute_force_counts(num_nodes: usize, edges: &[(NodeId, NodeId)]) -> Vec<Count> {
    assert!(num_nodes <= 20);
    let mut adjacent = vec![vec![false; num_nodes]; num_nodes];
    for &(u, v) in edges {
        adjacent[u as usize][v as usize] = true;
        adjacent[v as usize][u as usize] = true;
    }
    let mut counts = vec![0 as Count; num_nodes + 1];
    for mask in 1u32..(1 << num_nodes) {
        let members: Vec<usize> = (0..num_nodes).filter(|&i| mask & (1 << i) != 0).collect();
        let is_clique = members
            .iter()
            .enumerate()
            .all(|(i, &u)| members[i + 1..].iter().all(|&v| adjacent[u][v]));
        if is_clique {
            counts[members.len()] += 1;
        }
    }
    counts
}

#[test]
fn empty_graph() {
    let dag = degree_dag(5, &[]);
    assert_eq!(pivot_count(&dag, 1), 5);
    for k in 2..=5 {
        assert_eq!(pivot_count(&dag, k), 0);
    }
    let counts = pivot_sweep(&dag, 5);
    assert_eq!(&counts[1..], &[5, 0, 0, 0, 0]);
}

#[test]
fn triangle() {
    let edges = [(0, 1), (0, 2), (1, 2)];
    let dag = degree_dag(3, &edges);
    assert_eq!(pivot_count(&dag, 2), 3);
    assert_eq!(pivot_count(&dag, 3), 1);
    assert_eq!(pivot_count(&dag, 4), 0);
    let counts = pivot_sweep(&dag, 3);
    assert_eq!(&counts[1..], &[3, 3, 1]);
}

#[test]
fn complete_four() {
    let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    let counts = pivot_sweep(&degree_dag(4, &edges), 4);
    assert_eq!(&counts[1..], &[4, 6, 4, 1]);
}

#[test]
fn two_disjoint_triangles() {
    let edges = [(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)];
    let dag = degree_dag(6, &edges);
    assert_eq!(pivot_count(&dag, 3), 2);
    assert_eq!(pivot_count(&dag, 4), 0);
}

#[test]
fn star() {
    let edges = [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)];
    let dag = degree_dag(6, &edges);
    assert_eq!(pivot_count(&dag, 2), 5);
    assert_eq!(pivot_count(&dag, 3), 0);
}

#[test]
fn five_cycle() {
    let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)];
    let dag = degree_dag(5, &edges);
    assert_eq!(pivot_count(&dag, 2), 5);
    assert_eq!(pivot_count(&dag, 3), 0);
    let counts = pivot_sweep(&dag, 5);
    assert_eq!(&counts[1..], &[5, 5, 0, 0, 0]);
}

/// Deterministic pseudo-random edge sets, dense enough to hold cliques
/// of several sizes.
fn scrambled_edges(num_nodes: NodeId, salt: u64) -> Vec<(NodeId, NodeId)> {
    let mut edges = Vec::new();
    let mut state = salt.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1);
    for u in 0..num_nodes {
        for v in (u + 1)..num_nodes {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if state >> 61 != 0 {
                edges.push((u, v));
            }
        }
    }
    edges
}

#[test]
fn matches_brute_force_on_random_graphs() {
    for num_nodes in [6, 9, 12] {
        for salt in 0..4 {
            let edges = scrambled_edges(num_nodes, salt);
            let expected = brute_force_counts(num_nodes as usize, &edges);
            let dag = degree_dag(num_nodes, &edges);
            for k in 1..=num_nodes {
                assert_eq!(
                    pivot_count(&dag, k),
                    expected[k as usize],
                    "n={} salt={} k={}",
                    num_nodes,
                    salt,
                    k
                );
            }
        }
    }
}

#[test]
fn sweep_agrees_with_single_size() {
    for num_nodes in [7, 10] {
        for salt in 0..3 {
            let edges = scrambled_edges(num_nodes, salt);
            let dag = degree_dag(num_nodes, &edges);
            let max_k = ordering::find_max_degree(&dag) + 1;
            let counts = pivot_sweep(&dag, max_k);
            for k in 1..=max_k {
                assert_eq!(
                    pivot_count(&dag, k),
                    counts[k as usize],
                    "n={} salt={} k={}",
                    num_nodes,
                    salt,
                    k
                );
            }
        }
    }
}

#[test]
fn counts_are_independent_of_orientation() {
    for salt in 0..3 {
        let edges = scrambled_edges(11, salt);
        let g = undirected(11, &edges);
        let dags = [
            Builder::direct_graph_degree(&g),
            Builder::direct_graph_core(&g, &ordering::core_sequential(&g)),
            Builder::direct_graph_core(&g, &ordering::core_approx(&g, -0.5)),
            Builder::direct_graph_scores(&g),
        ];
        for k in 1..=6 {
            let reference = pivot_count(&dags[0], k);
            for dag in &dags[1..] {
                assert_eq!(pivot_count(dag, k), reference, "salt={} k={}", salt, k);
            }
        }
    }
}

#[test]
fn heuristic_pipeline_matches_brute_force() {
    let edges = scrambled_edges(10, 7);
    let expected = brute_force_counts(10, &edges);
    let g = undirected(10, &edges);
    let dag = ordering::directionalize(&g);
    for k in 1..=10 {
        assert_eq!(pivot_count(&dag, k), expected[k as usize], "k={}", k);
    }
}
