//! Cycle in edge-list form.

use crate::gf2::SupportVector;
use crate::graph::{EdgeId, Graph};

use super::reconstruct::point_ids;

/// Ordered closed walk: consecutive edges share a point, and so do the last
/// and the first edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    pub edges: Vec<EdgeId>,
    pub weight: f64,
}

impl Cycle {
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge ids sorted ascending (order-free comparison).
    pub fn edge_set(&self) -> Vec<EdgeId> {
        let mut s = self.edges.clone();
        s.sort_unstable();
        s
    }

    /// Incidence vector over all edges of `graph`.
    pub fn support(&self, edge_count: usize) -> SupportVector {
        SupportVector::from_edges(edge_count, &self.edges)
    }

    /// Simple closed cycle: at least three edges chained end to end, back to
    /// the first point, with no point visited twice.
    pub fn is_closed(&self, graph: &Graph) -> bool {
        if self.edges.len() < 3 || self.edges.iter().any(|e| e.0 >= graph.edge_count()) {
            return false;
        }
        let Ok(mut points) = point_ids(graph, &self.edges) else {
            return false;
        };
        points.sort_unstable();
        points.windows(2).all(|w| w[0] != w[1])
    }
}
