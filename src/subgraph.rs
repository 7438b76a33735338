//! Reversible induced-subgraph scratchpad for the pivot recursion.
//!
//! A `SubGraph` starts as the subgraph induced by the out-neighbors of a
//! DAG vertex (`induce_from_dag`). Nested restrictions mutate it in place
//! (`induce_from_self_mutate`) and can be undone exactly
//! (`undo_self_mutate`), any number of levels deep. Adjacency lists are
//! partitioned so that the first `tails[i]` entries of `adj[i]` are the
//! currently-active neighbors of `i`; entries past the tail were dropped
//! by some enclosing restriction and come back on undo.

use rustc_hash::FxHashMap;
use std::ops::Range;

use crate::graph::Graph;
use crate::grouped_stack::GroupedStack;
use crate::types::NodeId;

#[derive(Debug, Default)]
pub struct SubGraph {
    // candidate set (P set)
    active: Vec<bool>,
    active_list: Vec<NodeId>,
    // adjacency lists over local IDs, active prefix up to the tail
    adj: Vec<Vec<NodeId>>,
    tails: Vec<NodeId>,
    // frames of vertices dropped per restriction, and of pivot non-neighbors
    dropped_verts: GroupedStack<NodeId>,
    pivot_non_neighs: GroupedStack<NodeId>,
}

impl SubGraph {
    pub fn new() -> Self {
        SubGraph::default()
    }

    /// Resets this scratchpad to the subgraph induced by the DAG
    /// out-neighbors of `u`. Only forward DAG edges exist between the
    /// neighbors, so symmetry is restored explicitly while populating.
    pub fn induce_from_dag(&mut self, dag: &Graph, u: NodeId) {
        let num_orig_nodes = dag.out_degree(u) as usize;
        let mut remapper: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        remapper.reserve(num_orig_nodes);
        self.active.clear();
        self.active.resize(num_orig_nodes, false);
        self.active_list.clear();
        if self.adj.len() != num_orig_nodes {
            self.adj.resize_with(num_orig_nodes, Vec::new);
        }
        self.tails.resize(num_orig_nodes, 0);
        self.dropped_verts.clear();
        self.pivot_non_neighs.clear();
        self.pivot_non_neighs.reserve(num_orig_nodes);

        for &v in dag.out_neigh(u) {
            let v_r = remapper.len() as NodeId;
            remapper.insert(v, v_r);
            self.active[v_r as usize] = true;
            self.active_list.push(v_r);
            self.adj[v_r as usize].clear();
        }

        for &v in dag.out_neigh(u) {
            let v_r = remapper[&v];
            for &w in dag.out_neigh(v) {
                if let Some(&w_r) = remapper.get(&w) {
                    self.adj[v_r as usize].push(w_r);
                    self.adj[w_r as usize].push(v_r);
                }
            }
        }
        for &v_r in &self.active_list {
            self.tails[v_r as usize] = self.adj[v_r as usize].len() as NodeId;
        }
    }

    pub fn num_active(&self) -> NodeId {
        self.active_list.len() as NodeId
    }

    /// Currently-active neighbors of `u_r`. Only valid while `u_r` is active.
    pub fn neighs(&self, u_r: NodeId) -> &[NodeId] {
        &self.adj[u_r as usize][..self.tails[u_r as usize] as usize]
    }

    pub fn active_list(&self) -> &[NodeId] {
        &self.active_list
    }

    /// Active vertex with the highest active degree (first seen on ties).
    pub fn find_pivot(&self) -> NodeId {
        debug_assert!(self.num_active() > 0);
        let mut max_v_r = self.active_list[0];
        for &n_r in &self.active_list {
            if self.tails[n_r as usize] > self.tails[max_v_r as usize] {
                max_v_r = n_r;
            }
        }
        max_v_r
    }

    /// Collects the active vertices not adjacent to `u_r` into a fresh
    /// frame of the pivot stack and returns that frame's element range.
    /// Includes `u_r` itself since the graph has no self-loops. Read the
    /// elements back with `pivot_non_neigh`; the range stays valid while
    /// deeper pivot frames are pushed and popped above it.
    pub fn active_unreachable_from_pivot(&mut self, u_r: NodeId) -> Range<usize> {
        self.pivot_non_neighs.new_frame();
        // mark all neighbors as inactive
        let tail = self.tails[u_r as usize] as usize;
        for &v_r in &self.adj[u_r as usize][..tail] {
            self.active[v_r as usize] = false;
        }
        // difference between active and active_list is exactly the non-neighbors
        for &n_r in &self.active_list {
            if self.active[n_r as usize] {
                self.pivot_non_neighs.push(n_r);
            } else {
                self.active[n_r as usize] = true;
            }
        }
        self.pivot_non_neighs.top_frame_bounds()
    }

    pub fn pivot_non_neigh(&self, idx: usize) -> NodeId {
        self.pivot_non_neighs.get(idx)
    }

    /// Restricts the candidate set to the active neighbors of `u_r`. With
    /// `exclude_hold_set`, entries of the current pivot frame smaller than
    /// `u_r` are additionally dropped, so siblings already explored at
    /// this level are not re-counted.
    pub fn induce_from_self_mutate(&mut self, u_r: NodeId, exclude_hold_set: bool) {
        // unset all bitmap entries (temporary)
        for &n_r in &self.active_list {
            self.active[n_r as usize] = false;
        }
        // set bitmap for next active
        let tail = self.tails[u_r as usize] as usize;
        for &v_r in &self.adj[u_r as usize][..tail] {
            self.active[v_r as usize] = true;
        }
        if exclude_hold_set {
            for idx in self.pivot_non_neighs.top_frame_bounds() {
                let n_r = self.pivot_non_neighs.get(idx);
                if n_r < u_r {
                    self.active[n_r as usize] = false;
                }
            }
        }
        self.dropped_verts.new_frame();
        // active_list still holds the old candidate set; anything in it that
        // lost its bitmap entry is dropped, the rest gets its list compacted
        let mut i = 0;
        while i < self.active_list.len() {
            let n_r = self.active_list[i];
            if self.active[n_r as usize] {
                let mut j: NodeId = 0;
                while j < self.tails[n_r as usize] {
                    let v_r = self.adj[n_r as usize][j as usize];
                    if !self.active[v_r as usize] {
                        // v_r is now inactive, swap it past the tail
                        let mut new_tail = self.tails[n_r as usize] - 1;
                        while new_tail > j
                            && !self.active[self.adj[n_r as usize][new_tail as usize] as usize]
                        {
                            new_tail -= 1;
                        }
                        if new_tail > j {
                            self.adj[n_r as usize].swap(j as usize, new_tail as usize);
                        }
                        self.tails[n_r as usize] = new_tail;
                    }
                    j += 1;
                }
                i += 1;
            } else {
                // n_r is now inactive, remove from active and record as dropped
                let last = self.active_list.len() - 1;
                self.active_list.swap(i, last);
                self.active_list.pop();
                self.dropped_verts.push(n_r);
                // the swapped-in entry now sits at i, revisit it
            }
        }
    }

    /// Inverts the most recent `induce_from_self_mutate` exactly.
    pub fn undo_self_mutate(&mut self) {
        // reactivate the vertices dropped by the matching restriction
        for idx in self.dropped_verts.top_frame_bounds() {
            let n_r = self.dropped_verts.get(idx);
            self.active[n_r as usize] = true;
            self.active_list.push(n_r);
        }
        self.dropped_verts.pop_frame();
        // extend each tail forward over entries that are active again
        for idx in 0..self.active_list.len() {
            let u_r = self.active_list[idx] as usize;
            let mut new_tail = self.tails[u_r] as usize;
            while new_tail < self.adj[u_r].len() {
                if self.active[self.adj[u_r][new_tail] as usize] {
                    new_tail += 1;
                } else {
                    break;
                }
            }
            self.tails[u_r] = new_tail as NodeId;
        }
    }

    pub fn pop_non_neighbors(&mut self) {
        self.pivot_non_neighs.pop_frame();
    }
}
