//! PivotScale: parallel k-clique counting.
//!
//! Pipeline:
//! - Build: edge list (file or synthetic) to a clean undirected CSR graph
//! - Direct: pick a vertex ordering (degree or approximate core) and keep
//!   each edge only toward the higher-ranked endpoint, producing a DAG
//! - Count: per root vertex, induce the out-neighborhood into a reusable
//!   scratch subgraph and run the pivot recursion; sum across roots
//!
//! Two binaries share this library: `pivotscale` (one clique size) and
//! `pivotscale-sweep` (every size up to a bound).

pub mod builder;
pub mod cli;
pub mod comb;
pub mod count;
pub mod generator;
pub mod graph;
pub mod grouped_stack;
pub mod ordering;
pub mod reader;
pub mod stats;
pub mod subgraph;
pub mod types;

pub use builder::Builder;
pub use cli::CliqueArgs;
pub use count::{pivot_count, pivot_sweep};
pub use graph::Graph;
pub use subgraph::SubGraph;
pub use types::{Count, NodeId};
