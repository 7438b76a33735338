//! Graph construction and directionalization.
//!
//! `Builder` turns command-line options into an undirected CSR graph
//! (from a file or a synthetic generator), cleaning the edge list as it
//! goes (sorted lists, no self-loops, no duplicates). The `direct_*`
//! functions orient an undirected graph into a DAG by keeping each edge
//! in exactly one direction chosen by a predicate.

use anyhow::Result;
use rayon::prelude::*;
use std::time::Instant;

use crate::cli::CliqueArgs;
use crate::generator;
use crate::graph::Graph;
use crate::reader::{self, Input};
use crate::stats::print_time;
use crate::types::NodeId;

pub struct Builder {
    file: Option<std::path::PathBuf>,
    scale: Option<i32>,
    degree: i32,
    uniform: bool,
    symmetrize: bool,
}

impl Builder {
    pub fn from_cli(cli: &CliqueArgs) -> Self {
        Builder {
            file: cli.file.clone(),
            scale: cli.scale(),
            degree: cli.degree,
            uniform: cli.uniform(),
            symmetrize: cli.symmetrize(),
        }
    }

    /// Builds the input graph. Serialized graphs load as-is; edge lists
    /// (from file or generator) go through CSR construction.
    pub fn make_graph(&self) -> Result<Graph> {
        let start = Instant::now();
        let (edges, num_nodes) = match &self.file {
            Some(path) => match reader::read_file(path)? {
                Input::Serialized(g) => return Ok(g),
                Input::EdgeList(edges) => {
                    let max_id = edges.iter().map(|&(u, v)| u.max(v) + 1).max().unwrap_or(0);
                    (edges, max_id)
                }
            },
            None => {
                let scale = self.scale.expect("no input source");
                let edges = generator::generate(scale, self.degree, self.uniform);
                (edges, 1 << scale)
            }
        };
        let g = Self::csr_from_edges(num_nodes, &edges, self.symmetrize);
        print_time("Build Time", start.elapsed().as_secs_f64());
        Ok(g)
    }

    /// CSR construction from a raw edge list. Each adjacency list is
    /// sorted, deduplicated, and stripped of self-loops. With
    /// `symmetrize`, every edge is stored in both directions and the
    /// result is undirected; otherwise the list is taken as directed.
    pub fn csr_from_edges(num_nodes: NodeId, edges: &[(NodeId, NodeId)], symmetrize: bool) -> Graph {
        let mut adj: Vec<Vec<NodeId>> = vec![Vec::new(); num_nodes as usize];
        for &(u, v) in edges {
            adj[u as usize].push(v);
            if symmetrize {
                adj[v as usize].push(u);
            }
        }
        adj.par_iter_mut().enumerate().for_each(|(u, list)| {
            list.sort_unstable();
            list.dedup();
            list.retain(|&v| v != u as NodeId);
        });
        Self::csr_from_lists(num_nodes, !symmetrize, adj)
    }

    fn csr_from_lists(num_nodes: NodeId, directed: bool, lists: Vec<Vec<NodeId>>) -> Graph {
        let mut offsets = Vec::with_capacity(num_nodes as usize + 1);
        let mut total: i64 = 0;
        for list in &lists {
            offsets.push(total);
            total += list.len() as i64;
        }
        offsets.push(total);
        let neighs: Vec<NodeId> = lists.into_iter().flatten().collect();
        Graph::from_csr(num_nodes, directed, offsets, neighs)
    }

    /// The shared tiebreak: u comes before v when v has greater degree,
    /// or equal degree and greater ID.
    pub fn greater_degree_or_id(g: &Graph, u: NodeId, v: NodeId) -> bool {
        g.out_degree(v) > g.out_degree(u)
            || (g.out_degree(v) == g.out_degree(u) && v > u)
    }

    /// Keeps edge (u, v) of an undirected graph iff `keep(u, v)`. The
    /// filtered out-lists stay ascending; the result is directed.
    pub fn direct_by_predicate<F>(g: &Graph, keep: F) -> Graph
    where
        F: Fn(NodeId, NodeId) -> bool + Sync,
    {
        debug_assert!(!g.directed());
        let lists: Vec<Vec<NodeId>> = (0..g.num_nodes())
            .into_par_iter()
            .map(|u| {
                g.out_neigh(u)
                    .iter()
                    .copied()
                    .filter(|&v| keep(u, v))
                    .collect()
            })
            .collect();
        Self::csr_from_lists(g.num_nodes(), true, lists)
    }

    /// Orients by decreasing degree.
    pub fn direct_graph_degree(g: &Graph) -> Graph {
        Self::direct_by_predicate(g, |u, v| Self::greater_degree_or_id(g, u, v))
    }

    /// Orients by a rank vector, falling back to the degree/ID tiebreak
    /// within equal ranks.
    pub fn direct_graph_core(g: &Graph, ranking: &[NodeId]) -> Graph {
        Self::direct_by_predicate(g, |u, v| {
            ranking[u as usize] < ranking[v as usize]
                || (ranking[u as usize] == ranking[v as usize]
                    && Self::greater_degree_or_id(g, u, v))
        })
    }

    /// Orients by an iterative eigenvector-centrality score. Kept as a
    /// library alternative to the degree and core orientations.
    pub fn direct_graph_scores(g: &Graph) -> Graph {
        const MAX_ITERS: usize = 3;
        let n = g.num_nodes() as usize;
        let init_score = 1.0f32 / n as f32;
        let mut scores = vec![init_score; n];
        for _ in 0..MAX_ITERS {
            let contrib = scores.clone();
            scores = (0..g.num_nodes())
                .into_par_iter()
                .map(|u| g.out_neigh(u).iter().map(|&v| contrib[v as usize]).sum())
                .collect();
        }
        Self::direct_by_predicate(g, |u, v| {
            let (su, sv) = (scores[u as usize], scores[v as usize]);
            su < sv || (su == sv && Self::greater_degree_or_id(g, u, v))
        })
    }
}
