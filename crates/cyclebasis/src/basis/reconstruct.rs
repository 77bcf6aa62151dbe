//! Edge cycle → ordered point sequence.
//!
//! The first point is the end of edge 0 not shared with edge 1; each further
//! point is the shared end of a consecutive edge pair, and the last edge must
//! close back onto the first point. A cycle of `k` edges yields `k` points. Fewer than three edges is a degenerate cycle and yields
//! an empty sequence.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, Graph, Point, PointId};

/// Point ids along the cycle.
pub fn point_ids(graph: &Graph, edges: &[EdgeId]) -> Result<Vec<PointId>> {
    if edges.len() < 3 {
        return Ok(Vec::new());
    }
    let e0 = graph.edge(edges[0]);
    let e1 = graph.edge(edges[1]);
    let joint = e0
        .shared_end(e1)
        .ok_or(GraphError::BrokenCycle { position: 0 })?;
    let first = e0
        .other_end(joint)
        .ok_or(GraphError::BrokenCycle { position: 0 })?;

    let mut out = Vec::with_capacity(edges.len());
    out.push(first);
    for (position, pair) in edges.windows(2).enumerate() {
        let shared = graph
            .edge(pair[0])
            .shared_end(graph.edge(pair[1]))
            .ok_or(GraphError::BrokenCycle { position })?;
        out.push(shared);
    }
    let last = graph.edge(edges[edges.len() - 1]);
    if last.shared_end(e0) != Some(first) {
        return Err(GraphError::BrokenCycle {
            position: edges.len() - 1,
        });
    }
    Ok(out)
}

/// Points (id and coordinates) along the cycle.
pub fn to_point_sequence(graph: &Graph, edges: &[EdgeId]) -> Result<Vec<Point>> {
    Ok(point_ids(graph, edges)?
        .into_iter()
        .map(|p| *graph.point(p))
        .collect())
}
