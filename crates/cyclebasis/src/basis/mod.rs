//! Minimum cycle basis via doubled-graph shortest paths.
//!
//! Purpose
//! - Turn a connected point/edge graph into `|E| - |V| + 1` independent
//!   cycles, each the shortest cycle allowed by the current GF(2) constraint.
//! - Reconstruct cycles as ordered point sequences on request.
//!
//! Layout
//! - `cfg`: weighting and traversal root.
//! - `doubled`: two-layer graph encoding one support vector.
//! - `extract`: per-vertex Dijkstra over the doubled graph.
//! - `solve`: orthogonalization loop and `CycleBasis`.
//! - `reconstruct`: edge list → point sequence.
//!
//! Optimality is greedy per iteration; no global minimum-weight guarantee is
//! made beyond that.

mod cfg;
mod cycle;
mod doubled;
mod extract;
mod reconstruct;
mod solve;

pub use cfg::{BasisCfg, Weighting};
pub use cycle::Cycle;
pub use doubled::DoubledGraph;
pub use extract::{extract, shortest_cycle_from};
pub use reconstruct::{point_ids, to_point_sequence};
pub use solve::{minimum_cycle_basis, CycleBasis};

/// Convenience: unit weights, root 0.
pub fn solve_with_defaults(graph: &crate::graph::Graph) -> crate::Result<CycleBasis> {
    minimum_cycle_basis(graph, &BasisCfg::default())
}
