//! Iterative depth-first spanning tree.
//!
//! The traversal pushes edges, not vertices, onto an explicit stack. Incident
//! edges are pushed in reverse adjacency order so lower-index neighbors are
//! explored first; the resulting tree order is fully determined by the
//! adjacency layout and the start point.
//!
//! Visit markers are local to each call; the graph is never mutated and the
//! same call always returns the same tree.

use crate::error::{GraphError, Result};

use super::store::Graph;
use super::types::{EdgeId, PointId};

/// Spanning tree edges in discovery order plus a membership bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    pub edges: Vec<EdgeId>,
    in_tree: Vec<bool>,
}

impl SpanningTree {
    #[inline]
    pub fn contains(&self, e: EdgeId) -> bool {
        self.in_tree[e.0]
    }

    /// Edges outside the tree, ascending by id.
    pub fn non_tree_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.in_tree
            .iter()
            .enumerate()
            .filter(|&(_, &t)| !t)
            .map(|(i, _)| EdgeId(i))
    }

    /// True when the tree touches all `point_count` points.
    #[inline]
    pub fn is_spanning(&self, point_count: usize) -> bool {
        self.edges.len() + 1 == point_count
    }

    /// Number of points reached (tree edges + the root).
    #[inline]
    pub fn reached(&self) -> usize {
        self.edges.len() + 1
    }
}

/// Depth-first spanning tree rooted at `start`.
pub fn traverse(graph: &Graph, start: PointId) -> Result<SpanningTree> {
    let n = graph.point_count();
    if start.0 >= n {
        return Err(GraphError::invalid(format!(
            "traversal root {} is out of range for {n} points",
            start.0
        )));
    }
    let adj = graph.adjacency();
    let mut point_seen = vec![false; n];
    let mut edge_seen = vec![false; graph.edge_count()];
    let mut in_tree = vec![false; graph.edge_count()];
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    let mut stack: Vec<EdgeId> = adj.neighbors(start.0).rev().map(|(_, e)| e).collect();
    point_seen[start.0] = true;

    while let Some(eid) = stack.pop() {
        if edge_seen[eid.0] {
            continue;
        }
        edge_seen[eid.0] = true;
        let (a, b) = graph.edge(eid).ends;
        let next = if !point_seen[a.0] {
            a
        } else if !point_seen[b.0] {
            b
        } else {
            // back/cross edge
            continue;
        };
        tree.push(eid);
        in_tree[eid.0] = true;
        for (_, e) in adj.neighbors(next.0).rev() {
            if !edge_seen[e.0] {
                stack.push(e);
            }
        }
        point_seen[next.0] = true;
    }

    tracing::trace!(root = start.0, tree_edges = tree.len(), "dfs spanning tree");
    Ok(SpanningTree {
        edges: tree,
        in_tree,
    })
}
