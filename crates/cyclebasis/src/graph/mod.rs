//! Graph store and spanning-tree traversal.
//!
//! Purpose
//! - Hold an immutable point/edge graph with a dense symmetric adjacency
//!   matrix (`store`), the entity types it is made of (`types`), and the
//!   iterative DFS that produces a deterministic spanning tree (`dfs`).
//! - `special` and `rand` provide graph families for tests and benches.
//!
//! Invariants
//! - Point and edge ids are dense and equal to their positions.
//! - Cells `(i,j)` and `(j,i)` always hold the same edge id (or both none).
//! - Edge endpoints are stored as a canonical `(low, high)` pair.

mod dfs;
pub mod rand;
pub mod special;
mod store;
mod types;

pub use dfs::{traverse, SpanningTree};
pub use store::{AdjMatrix, Graph};
pub use types::{Edge, EdgeId, Point, PointId};
