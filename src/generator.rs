//! Synthetic edge-list generation: uniform-random and Kronecker (R-MAT).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::NodeId;

const RAND_SEED: u64 = 27491095;

// R-MAT partition probabilities (Graph500 parameters).
const PART_A: f64 = 0.57;
const PART_B: f64 = 0.19;
const PART_C: f64 = 0.19;

/// Generates `2^scale * degree / 2` edges over `2^scale` vertices.
pub fn generate(scale: i32, degree: i32, uniform: bool) -> Vec<(NodeId, NodeId)> {
    let num_nodes: i64 = 1i64 << scale;
    let num_edges = num_nodes * degree as i64 / 2;
    let mut rng = StdRng::seed_from_u64(RAND_SEED);
    if uniform {
        uniform_edges(&mut rng, num_nodes, num_edges)
    } else {
        kronecker_edges(&mut rng, scale, num_edges)
    }
}

fn uniform_edges(rng: &mut StdRng, num_nodes: i64, num_edges: i64) -> Vec<(NodeId, NodeId)> {
    (0..num_edges)
        .map(|_| {
            (
                rng.gen_range(0..num_nodes) as NodeId,
                rng.gen_range(0..num_nodes) as NodeId,
            )
        })
        .collect()
}

fn kronecker_edges(rng: &mut StdRng, scale: i32, num_edges: i64) -> Vec<(NodeId, NodeId)> {
    (0..num_edges)
        .map(|_| {
            let mut u: i64 = 0;
            let mut v: i64 = 0;
            for depth in 0..scale {
                let r: f64 = rng.gen();
                if r < PART_A {
                    // upper-left quadrant, both bits stay 0
                } else if r < PART_A + PART_B {
                    v |= 1 << depth;
                } else if r < PART_A + PART_B + PART_C {
                    u |= 1 << depth;
                } else {
                    u |= 1 << depth;
                    v |= 1 << depth;
                }
            }
            (u as NodeId, v as NodeId)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_respects_vertex_range() {
        let edges = generate(6, 8, true);
        assert_eq!(edges.len(), 64 * 8 / 2);
        for (u, v) in edges {
            assert!((0..64).contains(&u));
            assert!((0..64).contains(&v));
        }
    }

    #[test]
    fn kronecker_respects_vertex_range() {
        let edges = generate(6, 8, false);
        assert_eq!(edges.len(), 64 * 8 / 2);
        for (u, v) in edges {
            assert!((0..64).contains(&u));
            assert!((0..64).contains(&v));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(5, 4, false), generate(5, 4, false));
        assert_eq!(generate(5, 4, true), generate(5, 4, true));
    }
}
