//! Solver configuration.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, PointId};

/// How edge weights are assigned for the shortest-cycle search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weighting {
    /// Every edge weighs 1.0; shortest means fewest edges.
    #[default]
    Unit,
    /// Euclidean distance between endpoint positions.
    Euclidean,
}

impl Weighting {
    /// Per-edge weights indexed by edge id.
    ///
    /// Euclidean weights must be finite and strictly positive (coincident
    /// points are rejected).
    pub fn edge_weights(self, graph: &Graph) -> Result<Vec<f64>> {
        match self {
            Weighting::Unit => Ok(vec![1.0; graph.edge_count()]),
            Weighting::Euclidean => graph
                .edges()
                .iter()
                .map(|e| {
                    let w = e.length(graph.points());
                    if w.is_finite() && w > 0.0 {
                        Ok(w)
                    } else {
                        Err(GraphError::invalid(format!(
                            "edge #{} has unusable length {w}",
                            e.id.0
                        )))
                    }
                })
                .collect(),
        }
    }
}

/// Basis computation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasisCfg {
    pub weighting: Weighting,
    /// Root of the spanning tree that seeds the support vectors.
    pub root: PointId,
}

impl Default for BasisCfg {
    fn default() -> Self {
        Self {
            weighting: Weighting::Unit,
            root: PointId(0),
        }
    }
}
