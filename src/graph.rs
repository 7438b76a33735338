//! Immutable CSR graph.
//!
//! Out-adjacency lists are ascending with no self-loops or duplicates once
//! built through `Builder`. Undirected graphs store every edge in both
//! directions; the `directed` flag distinguishes one-sided orientations
//! (including the DAGs produced by directionalization).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::types::NodeId;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    num_nodes: NodeId,
    directed: bool,
    offsets: Vec<i64>,
    neighs: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Graph {
    num_nodes: NodeId,
    directed: bool,
    offsets: Vec<i64>,
    neighs: Vec<NodeId>,
}

impl Graph {
    pub fn from_csr(num_nodes: NodeId, directed: bool, offsets: Vec<i64>, neighs: Vec<NodeId>) -> Self {
        debug_assert_eq!(offsets.len(), num_nodes as usize + 1);
        debug_assert_eq!(*offsets.last().unwrap_or(&0) as usize, neighs.len());
        Graph {
            num_nodes,
            directed,
            offsets,
            neighs,
        }
    }

    pub fn num_nodes(&self) -> NodeId {
        self.num_nodes
    }

    /// Number of stored (directed) adjacency entries. For an undirected
    /// graph this is twice the number of edges.
    pub fn num_edges_directed(&self) -> i64 {
        self.neighs.len() as i64
    }

    pub fn num_edges(&self) -> i64 {
        if self.directed {
            self.neighs.len() as i64
        } else {
            self.neighs.len() as i64 / 2
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn out_degree(&self, u: NodeId) -> NodeId {
        (self.offsets[u as usize + 1] - self.offsets[u as usize]) as NodeId
    }

    pub fn out_neigh(&self, u: NodeId) -> &[NodeId] {
        &self.neighs[self.offsets[u as usize] as usize..self.offsets[u as usize + 1] as usize]
    }

    pub fn print_stats(&self) {
        let direction = if self.directed { "directed" } else { "undirected" };
        let degree = if self.num_nodes > 0 {
            self.num_edges() as f64 / self.num_nodes as f64
        } else {
            0.0
        };
        println!(
            "Graph has {} nodes and {} {} edges for degree: {:.0}",
            self.num_nodes,
            self.num_edges(),
            direction,
            degree
        );
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serializable = SerializableGraph {
            num_nodes: self.num_nodes,
            directed: self.directed,
            offsets: self.offsets.clone(),
            neighs: self.neighs.clone(),
        };
        let file = File::create(path).context("Failed to create graph file")?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, &serializable).context("Failed to serialize graph")?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).context("Failed to open graph file")?;
        let reader = BufReader::new(file);
        let serializable: SerializableGraph =
            bincode::deserialize_from(reader).context("Failed to deserialize graph")?;
        Ok(Graph {
            num_nodes: serializable.num_nodes,
            directed: serializable.directed,
            offsets: serializable.offsets,
            neighs: serializable.neighs,
        })
    }
}
