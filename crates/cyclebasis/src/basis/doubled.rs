//! Doubled graph for one support vector.
//!
//! Vertex `v` of the original graph appears twice: `v` (layer 0) and its
//! mirror `v + n` (layer 1). An edge whose support bit is 0 is copied inside
//! each layer; an edge whose bit is 1 crosses between layers. A path from `v`
//! to `mirror(v)` therefore maps to a closed walk through `v` that uses an odd
//! number of support edges.

use crate::error::{GraphError, Result};
use crate::gf2::SupportVector;
use crate::graph::{AdjMatrix, EdgeId, Graph};

/// `2n × 2n` adjacency over ids of the borrowed original edges.
#[derive(Clone, Debug)]
pub struct DoubledGraph<'g> {
    graph: &'g Graph,
    adj: AdjMatrix,
}

impl<'g> DoubledGraph<'g> {
    pub fn build(graph: &'g Graph, support: &SupportVector) -> Result<Self> {
        if support.len() != graph.edge_count() {
            return Err(GraphError::LengthMismatch {
                left: graph.edge_count(),
                right: support.len(),
            });
        }
        let n = graph.point_count();
        let mut adj = AdjMatrix::new(2 * n);
        for e in graph.edges() {
            let (x, y) = (e.ends.0 .0, e.ends.1 .0);
            if support.get(e.id.0) {
                adj.connect(x, y + n, e.id);
                adj.connect(x + n, y, e.id);
            } else {
                adj.connect(x, y, e.id);
                adj.connect(x + n, y + n, e.id);
            }
        }
        Ok(Self { graph, adj })
    }

    /// The original graph.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of original vertices `n`.
    #[inline]
    pub fn base_len(&self) -> usize {
        self.graph.point_count()
    }

    /// Number of doubled vertices `2n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn mirror(&self, v: usize) -> usize {
        v + self.base_len()
    }

    #[inline]
    pub fn edge_between(&self, i: usize, j: usize) -> Option<EdgeId> {
        self.adj.edge_between(i, j)
    }

    #[inline]
    pub fn adjacency(&self) -> &AdjMatrix {
        &self.adj
    }
}
