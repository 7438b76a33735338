//! Binomial coefficients with a precomputed Pascal table for small arguments.

use std::sync::OnceLock;

use crate::types::{Count, NodeId};

const NUM_PRECOMPUTE: usize = 100;

/// Computes C(n, k), answering from a precomputed table when both arguments
/// are small. Arithmetic wraps on overflow; the `count128` build exists for
/// inputs whose counts exceed 64 bits.
pub struct CombCache {
    memo: Vec<Vec<Count>>,
}

impl CombCache {
    pub fn new() -> Self {
        let mut memo = vec![vec![0 as Count; NUM_PRECOMPUTE]; NUM_PRECOMPUTE];
        for n in 0..NUM_PRECOMPUTE {
            for k in 0..=n {
                memo[n][k] = if k == 0 || k == n {
                    1
                } else {
                    memo[n - 1][k - 1].wrapping_add(memo[n - 1][k])
                };
            }
        }
        CombCache { memo }
    }

    pub fn choose(&self, n: NodeId, k: NodeId) -> Count {
        debug_assert!(n >= 0 && k >= 0);
        if k > n {
            return 0;
        }
        if k == 0 || k == n {
            return 1;
        }
        if (n as usize) < NUM_PRECOMPUTE && (k as usize) < NUM_PRECOMPUTE {
            return self.memo[n as usize][k as usize];
        }
        Self::compute(n as Count, k as Count)
    }

    // Iterative product, relying on integer divisibility at each step.
    fn compute(n: Count, k: Count) -> Count {
        let k = k.min(n - k);
        let mut result: Count = 1;
        for i in 1..=k {
            result = result.wrapping_mul(n - (k - i)) / i;
        }
        result
    }
}

impl Default for CombCache {
    fn default() -> Self {
        Self::new()
    }
}

static N_CHOOSE_K: OnceLock<CombCache> = OnceLock::new();

/// Process-wide cached C(n, k).
pub fn n_choose_k(n: NodeId, k: NodeId) -> Count {
    N_CHOOSE_K.get_or_init(CombCache::new).choose(n, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_match_pascal() {
        let cache = CombCache::new();
        assert_eq!(cache.choose(0, 0), 1);
        assert_eq!(cache.choose(5, 2), 10);
        assert_eq!(cache.choose(10, 3), 120);
        assert_eq!(cache.choose(52, 5), 2_598_960);
    }

    #[test]
    fn out_of_range_k_is_zero() {
        let cache = CombCache::new();
        assert_eq!(cache.choose(4, 5), 0);
        assert_eq!(cache.choose(0, 1), 0);
    }

    #[test]
    fn symmetric_in_k() {
        let cache = CombCache::new();
        for n in 0..30 {
            for k in 0..=n {
                assert_eq!(cache.choose(n, k), cache.choose(n, n - k));
            }
        }
    }

    #[test]
    fn large_arguments_use_iterative_path() {
        let cache = CombCache::new();
        // 120 exceeds the table size in n but the result still fits in 64 bits.
        assert_eq!(cache.choose(120, 2), 7140);
        assert_eq!(cache.choose(120, 118), 7140);
    }

    #[test]
    fn global_helper_agrees_with_cache() {
        let cache = CombCache::new();
        assert_eq!(n_choose_k(20, 10), cache.choose(20, 10));
    }
}
