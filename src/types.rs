//! Shared type aliases for the counting pipeline.

/// Vertex identifier, also used for local IDs inside induced subgraphs.
/// Signed so that -1 can mark "not yet ranked" during ordering.
pub type NodeId = i32;

/// Clique-count accumulator. The `count128` feature widens it for inputs
/// whose counts overflow 64 bits.
#[cfg(feature = "count128")]
pub type Count = u128;
#[cfg(not(feature = "count128"))]
pub type Count = u64;

/// Default clique size when `-c` is not given.
pub const DEFAULT_CLIQUE_SIZE: NodeId = 3;

/// Default average degree for synthetic graphs.
pub const DEFAULT_DEGREE: i32 = 16;
