//! Vertex orderings used to directionalize the input graph.
//!
//! A rank vector assigns every vertex a removal level; smaller rank means
//! removed earlier. The builder keeps each undirected edge only in the
//! direction of increasing rank (ties broken by degree then ID), which
//! yields the DAG the counting kernel runs over.

use rayon::prelude::*;
use std::sync::atomic::{AtomicI32, Ordering as MemOrdering};
use std::time::Instant;

use crate::builder::Builder;
use crate::graph::Graph;
use crate::stats::print_time;
use crate::types::NodeId;

const CORE_EPSILON: f64 = -0.5;
const HEURISTIC_PARAM_A: f64 = 0.0015;
const HEURISTIC_PARAM_B: f64 = 0.1;
const MIN_NODES_FOR_CORE: NodeId = 1_000_000;

pub fn find_max_degree(g: &Graph) -> NodeId {
    (0..g.num_nodes())
        .into_par_iter()
        .map(|n| g.out_degree(n))
        .max()
        .unwrap_or(0)
}

/// Decides whether core ordering is worth its cost: the input must be
/// large, and either the biggest hub's largest neighbor touches a sizable
/// fraction of the graph or the two hubs' neighborhoods overlap heavily.
pub fn core_is_advantageous(g: &Graph, param_a: f64, param_b: f64) -> bool {
    if g.num_nodes() <= MIN_NODES_FOR_CORE {
        return false;
    }
    let biggest_id = (0..g.num_nodes())
        .max_by_key(|&u| g.out_degree(u))
        .expect("graph has vertices");
    if g.out_degree(biggest_id) == 0 {
        return false;
    }
    let biggest_neigh = g
        .out_neigh(biggest_id)
        .iter()
        .copied()
        .max_by_key(|&v| g.out_degree(v))
        .expect("hub has neighbors");

    let intersection_size = sorted_intersection_size(
        g.out_neigh(biggest_id),
        g.out_neigh(biggest_neigh),
    );

    let largest_neigh_frac = g.out_degree(biggest_neigh) as f64 / g.num_nodes() as f64;
    let intersection_frac = intersection_size as f64 / g.out_degree(biggest_neigh) as f64;

    largest_neigh_frac > param_a || intersection_frac > param_b
}

fn sorted_intersection_size(a: &[NodeId], b: &[NodeId]) -> usize {
    let mut count = 0;
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            count += 1;
            i += 1;
            j += 1;
        }
    }
    count
}

/// Exact sequential k-core peel. Vertices are ranked 0..N-1 in removal
/// order, always taking one from the lowest non-empty degree bucket.
pub fn core_sequential(g: &Graph) -> Vec<NodeId> {
    let n = g.num_nodes() as usize;
    let mut ranking = vec![0 as NodeId; n];
    let mut index_in_level = vec![0 as NodeId; n];
    let mut curr_degree = vec![0 as NodeId; n];

    let mut nodes_at_degree: Vec<Vec<NodeId>> = Vec::new();
    for u in 0..n {
        let degree = g.out_degree(u as NodeId);
        curr_degree[u] = degree;
        if degree as usize >= nodes_at_degree.len() {
            nodes_at_degree.resize_with(degree as usize + 1, Vec::new);
        }
        index_in_level[u] = nodes_at_degree[degree as usize].len() as NodeId;
        nodes_at_degree[degree as usize].push(u as NodeId);
    }

    let mut num_removed: NodeId = 0;
    let mut min_degree = 0usize;
    while (num_removed as usize) < n {
        if let Some(&u) = nodes_at_degree[min_degree].last() {
            nodes_at_degree[min_degree].pop();
            curr_degree[u as usize] = -1;
            index_in_level[u as usize] = -1;
            ranking[u as usize] = num_removed;
            num_removed += 1;
            for &v in g.out_neigh(u) {
                let v_deg = curr_degree[v as usize];
                if v_deg != -1 {
                    // swap the decremented neighbor out of its bucket
                    let level = &mut nodes_at_degree[v_deg as usize];
                    let swapped_id = *level.last().expect("bucket holds v");
                    let v_idx = index_in_level[v as usize] as usize;
                    let last = level.len() - 1;
                    level.swap(v_idx, last);
                    index_in_level[swapped_id as usize] = index_in_level[v as usize];
                    level.pop();
                    // reinsert one level down
                    index_in_level[v as usize] =
                        nodes_at_degree[v_deg as usize - 1].len() as NodeId;
                    nodes_at_degree[v_deg as usize - 1].push(v);
                    curr_degree[v as usize] = v_deg - 1;
                    min_degree = min_degree.min(v_deg as usize - 1);
                }
            }
        } else {
            min_degree += 1;
        }
    }
    ranking
}

/// Approximate parallel core ordering. Peels the graph level by level,
/// removing every vertex whose residual degree falls at or below a
/// threshold derived from the remaining average degree. The threshold is
/// raised to the minimum active degree when needed so every level makes
/// progress. Negative epsilon biases removal toward low-degree vertices,
/// trading extra levels for a finer ranking.
pub fn core_approx(g: &Graph, epsilon: f64) -> Vec<NodeId> {
    let n = g.num_nodes() as usize;
    let rankings: Vec<AtomicI32> = (0..n).map(|_| AtomicI32::new(-1)).collect();
    let curr_degree: Vec<AtomicI32> = (0..n)
        .into_par_iter()
        .map(|u| AtomicI32::new(g.out_degree(u as NodeId)))
        .collect();
    let mut active_degree_total = g.num_edges_directed();
    let mut num_remaining = n as i64;
    let mut remaining: Vec<NodeId> = Vec::new();

    let mut level: NodeId = 0;
    while num_remaining > 0 {
        let avg_deg = active_degree_total as f64 / num_remaining as f64;
        let mut deg_thresh = ((1.0 + epsilon) * avg_deg) as NodeId;

        let edges_removed: i64;
        if level == 0 {
            edges_removed = (0..n as NodeId)
                .into_par_iter()
                .map(|u| {
                    if g.out_degree(u) > deg_thresh {
                        return 0;
                    }
                    rankings[u as usize].store(0, MemOrdering::Relaxed);
                    let mut local: i64 = 0;
                    for &v in g.out_neigh(u) {
                        if g.out_degree(v) > deg_thresh {
                            curr_degree[v as usize].fetch_sub(1, MemOrdering::Relaxed);
                            local += 1;
                        }
                    }
                    local + curr_degree[u as usize].load(MemOrdering::Relaxed) as i64
                })
                .sum();
            remaining = (0..n as NodeId)
                .into_par_iter()
                .filter(|&u| g.out_degree(u) > deg_thresh)
                .collect();
        } else {
            // raise the threshold to the minimum active degree so this
            // level removes at least one vertex
            let min_deg_active = AtomicI32::new(n as i32);
            remaining.par_chunks(1024).for_each(|chunk| {
                let mut local_min = n as i32;
                for &u in chunk {
                    local_min = local_min.min(curr_degree[u as usize].load(MemOrdering::Relaxed));
                }
                min_deg_active.fetch_min(local_min, MemOrdering::Relaxed);
            });
            deg_thresh = deg_thresh.max(min_deg_active.load(MemOrdering::Relaxed));

            let (removed, next_remaining): (Vec<NodeId>, Vec<NodeId>) =
                remaining.par_iter().copied().partition(|&u| {
                    curr_degree[u as usize].load(MemOrdering::Relaxed) <= deg_thresh
                });
            removed
                .par_iter()
                .for_each(|&u| rankings[u as usize].store(level, MemOrdering::Relaxed));
            edges_removed = removed
                .par_iter()
                .map(|&u| {
                    let mut local: i64 = 0;
                    for &v in g.out_neigh(u) {
                        if rankings[v as usize].load(MemOrdering::Relaxed) == -1 {
                            curr_degree[v as usize].fetch_sub(1, MemOrdering::Relaxed);
                            local += 1;
                        }
                    }
                    local + curr_degree[u as usize].load(MemOrdering::Relaxed) as i64
                })
                .sum();
            remaining = next_remaining;
        }

        active_degree_total -= edges_removed;
        num_remaining = remaining.len() as i64;
        level += 1;
    }
    rankings.into_iter().map(|a| a.into_inner()).collect()
}

/// Orients the graph into a DAG, picking the ordering by heuristic.
pub fn directionalize(g: &Graph) -> Graph {
    if core_is_advantageous(g, HEURISTIC_PARAM_A, HEURISTIC_PARAM_B) {
        println!("Using core approximation ordering...");
        let start = Instant::now();
        let ranking = core_approx(g, CORE_EPSILON);
        print_time("Ranking", start.elapsed().as_secs_f64());
        Builder::direct_graph_core(g, &ranking)
    } else {
        println!("Using degree ordering...");
        Builder::direct_graph_degree(g)
    }
}
