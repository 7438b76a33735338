//! Parallel pivot-based clique counting over a DAG orientation.
//!
//! Every vertex of the DAG is a root: its out-neighborhood is induced
//! into a scratch `SubGraph` and searched recursively. At each step a
//! maximum-degree pivot splits the candidates; vertices adjacent to the
//! pivot are absorbed into a binomial factor at the base case instead of
//! being branched on, which is what keeps the tree small.

use rayon::prelude::*;

use crate::comb::n_choose_k;
use crate::graph::Graph;
use crate::subgraph::SubGraph;
use crate::types::{Count, NodeId};

/// Counts cliques of exactly `max_k` vertices rooted in this subgraph.
/// `clique_size` is the number of vertices committed so far and
/// `num_pivots` how many of those were pivots.
fn pivot_recurse(
    sg: &mut SubGraph,
    max_k: NodeId,
    clique_size: NodeId,
    num_pivots: NodeId,
) -> Count {
    if sg.num_active() + clique_size < max_k {
        return 0;
    }
    let num_holds = clique_size - num_pivots;
    if sg.num_active() == 0 || num_holds == max_k {
        return n_choose_k(num_pivots, max_k - num_holds);
    }
    let pivot_r = sg.find_pivot();
    let mut count: Count = 0;
    let verts_to_induce = sg.active_unreachable_from_pivot(pivot_r);
    for i in verts_to_induce {
        let v_r = sg.pivot_non_neigh(i);
        if v_r == pivot_r {
            sg.induce_from_self_mutate(v_r, false);
            count += pivot_recurse(sg, max_k, clique_size + 1, num_pivots + 1);
        } else {
            sg.induce_from_self_mutate(v_r, true);
            count += pivot_recurse(sg, max_k, clique_size + 1, num_pivots);
        }
        sg.undo_self_mutate();
    }
    sg.pop_non_neighbors();
    count
}

/// Number of k-cliques in the undirected graph underlying `dag`.
pub fn pivot_count(dag: &Graph, k: NodeId) -> Count {
    (0..dag.num_nodes())
        .into_par_iter()
        .map_init(SubGraph::new, |sg, v| {
            sg.induce_from_dag(dag, v);
            pivot_recurse(sg, k, 1, 0)
        })
        .sum()
}

/// Sweep variant: at the base case, every reachable size gets its share
/// of the binomial expansion. No depth pruning here; all sizes matter.
fn pivot_recurse_sweep(
    sg: &mut SubGraph,
    max_k: NodeId,
    counts: &mut [Count],
    clique_size: NodeId,
    num_pivots: NodeId,
) {
    let holds = clique_size - num_pivots;
    if sg.num_active() == 0 || holds == max_k {
        for p in 0..=num_pivots.min(max_k - holds) {
            counts[(holds + p) as usize] += n_choose_k(num_pivots, p);
        }
        return;
    }
    let pivot_r = sg.find_pivot();
    let verts_to_induce = sg.active_unreachable_from_pivot(pivot_r);
    for i in verts_to_induce {
        let v_r = sg.pivot_non_neigh(i);
        if v_r == pivot_r {
            sg.induce_from_self_mutate(v_r, false);
            pivot_recurse_sweep(sg, max_k, counts, clique_size + 1, num_pivots + 1);
        } else {
            sg.induce_from_self_mutate(v_r, true);
            pivot_recurse_sweep(sg, max_k, counts, clique_size + 1, num_pivots);
        }
        sg.undo_self_mutate();
    }
    sg.pop_non_neighbors();
}

/// Counts cliques of every size 1..=max_k. Index 0 of the result is
/// unused. Each worker accumulates into a private vector; the vectors
/// merge by element-wise addition at the end.
pub fn pivot_sweep(dag: &Graph, max_k: NodeId) -> Vec<Count> {
    let len = max_k as usize + 1;
    (0..dag.num_nodes())
        .into_par_iter()
        .fold(
            || (SubGraph::new(), vec![0 as Count; len]),
            |(mut sg, mut local_counts), v| {
                sg.induce_from_dag(dag, v);
                pivot_recurse_sweep(&mut sg, max_k, &mut local_counts, 1, 0);
                (sg, local_counts)
            },
        )
        .map(|(_, local_counts)| local_counts)
        .reduce(
            || vec![0 as Count; len],
            |mut acc, local| {
                for (total, part) in acc.iter_mut().zip(local) {
                    *total += part;
                }
                acc
            },
        )
}
