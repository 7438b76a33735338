//! Graph input loading: edge-list text files and the serialized format.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::Graph;
use crate::types::NodeId;

/// What a file on disk resolved to: a raw edge list still needing CSR
/// construction, or an already-built serialized graph.
pub enum Input {
    EdgeList(Vec<(NodeId, NodeId)>),
    Serialized(Graph),
}

pub fn read_file(path: &Path) -> Result<Input> {
    let suffix = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match suffix {
        "el" => Ok(Input::EdgeList(read_edge_list(path, false)?)),
        "wel" => Ok(Input::EdgeList(read_edge_list(path, true)?)),
        "sg" | "wsg" => Ok(Input::Serialized(Graph::load(path)?)),
        _ => bail!("Unrecognized graph file suffix: {}", path.display()),
    }
}

/// Parses whitespace-separated `u v` pairs (`u v w` when weighted; the
/// weight is ignored). Lines starting with `#` or `%` are comments.
fn read_edge_list(path: &Path, weighted: bool) -> Result<Vec<(NodeId, NodeId)>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let fields_expected = if weighted { 3 } else { 2 };

    let mut edges = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }
        let mut fields = trimmed.split_whitespace();
        let u: NodeId = fields
            .next()
            .and_then(|f| f.parse().ok())
            .with_context(|| format!("Bad edge on line {}", line_no + 1))?;
        let v: NodeId = fields
            .next()
            .and_then(|f| f.parse().ok())
            .with_context(|| format!("Bad edge on line {}", line_no + 1))?;
        if fields.count() + 2 > fields_expected {
            bail!("Too many fields on line {}", line_no + 1);
        }
        edges.push((u, v));
    }
    Ok(edges)
}
