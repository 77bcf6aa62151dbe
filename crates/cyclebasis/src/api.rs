//! Curated entry points for callers (CLI, benches, demos).
//!
//! Important
//! - Prefer these re-exports over deep module paths; internals may be split
//!   or renamed without notice.

// Graph input and traversal
pub use crate::graph::{special, traverse, Edge, EdgeId, Graph, Point, PointId, SpanningTree};
// Random inputs
pub use crate::graph::rand::{draw_connected_graph, RandomGraphCfg, ReplayToken};
// GF(2) algebra
pub use crate::gf2::{initial_support_vectors, rank as gf2_rank, SupportVector};
// Cycle basis
pub use crate::basis::{
    minimum_cycle_basis, point_ids, solve_with_defaults, to_point_sequence, BasisCfg, Cycle,
    CycleBasis, DoubledGraph, Weighting,
};
pub use crate::error::{GraphError, Result};

/// Build a graph from raw `(x, y, z)` coordinates and `(a, b)` index pairs.
///
/// Points get ids by position, edges get ids by position.
pub fn graph_from_raw(coords: &[(f64, f64, f64)], pairs: &[(usize, usize)]) -> Result<Graph> {
    let points = coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| Point::new(i, x, y, z))
        .collect();
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(i, &(a, b))| Edge::new(i, a, b))
        .collect();
    Graph::new(points, edges)
}

/// Point loops of the minimum cycle basis under `cfg`.
pub fn rings(graph: &Graph, cfg: &BasisCfg) -> Result<Vec<Vec<Point>>> {
    minimum_cycle_basis(graph, cfg)?.point_sequences(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_square_with_diagonal_gives_two_rings() {
        let g = graph_from_raw(
            &[
                (0.0, 0.0, 0.0),
                (0.0, 1.0, 0.0),
                (1.0, 1.0, 0.0),
                (1.0, 0.0, 0.0),
            ],
            &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
        )
        .unwrap();
        let rings = rings(&g, &BasisCfg::default()).unwrap();
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn raw_input_is_validated() {
        let err = graph_from_raw(&[(0.0, 0.0, 0.0)], &[(0, 3)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput { .. }));
    }
}
