//! Dense adjacency store.
//!
//! `AdjMatrix` is a flat `n × n` table of optional edge ids. `connect` writes
//! both `(i,j)` and `(j,i)` with the same id, so symmetry holds by
//! construction. `Graph` owns points and edges and is immutable once built.

use crate::error::{GraphError, Result};

use super::types::{Edge, EdgeId, Point, PointId};

/// Symmetric adjacency matrix over vertex indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjMatrix {
    n: usize,
    cells: Vec<Option<EdgeId>>,
}

impl AdjMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    /// Number of vertices (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Set both symmetric cells of `(i, j)` to `e`.
    #[inline]
    pub(crate) fn connect(&mut self, i: usize, j: usize, e: EdgeId) {
        self.cells[i * self.n + j] = Some(e);
        self.cells[j * self.n + i] = Some(e);
    }

    #[inline]
    pub fn edge_between(&self, i: usize, j: usize) -> Option<EdgeId> {
        self.cells[i * self.n + j]
    }

    /// Row `i` in adjacency-index order, absent cells included.
    #[inline]
    pub fn row(&self, i: usize) -> &[Option<EdgeId>] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Present neighbors of `i` in ascending index order.
    pub fn neighbors(&self, i: usize) -> impl DoubleEndedIterator<Item = (usize, EdgeId)> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.map(|e| (j, e)))
    }

    /// Boolean view of the adjacency (diagnostics and tests).
    pub fn connectivity_mask(&self) -> Vec<Vec<bool>> {
        (0..self.n)
            .map(|i| self.row(i).iter().map(Option::is_some).collect())
            .collect()
    }
}

/// Point/edge graph with a dense adjacency matrix.
#[derive(Clone, Debug)]
pub struct Graph {
    points: Vec<Point>,
    edges: Vec<Edge>,
    adj: AdjMatrix,
}

impl Graph {
    /// Build and validate a graph from upstream point and edge lists.
    ///
    /// Requirements: `points[i].id == i`; edge ids dense `0..|E|` (any input
    /// order); endpoints in range; no loops; at most one edge per point pair.
    pub fn new(points: Vec<Point>, mut edges: Vec<Edge>) -> Result<Self> {
        let n = points.len();
        for (i, p) in points.iter().enumerate() {
            if p.id.0 != i {
                return Err(GraphError::invalid(format!(
                    "point at position {i} has id {}",
                    p.id.0
                )));
            }
        }
        edges.sort_by_key(|e| e.id);
        for pair in edges.windows(2) {
            if pair[0].matches(&pair[1])? {
                return Err(GraphError::invalid(format!(
                    "edge #{} listed twice",
                    pair[0].id.0
                )));
            }
        }
        let mut adj = AdjMatrix::new(n);
        for (i, e) in edges.iter().enumerate() {
            if e.id.0 != i {
                return Err(GraphError::invalid(format!(
                    "edge ids are not dense: expected #{i}, found #{}",
                    e.id.0
                )));
            }
            let (a, b) = (e.ends.0 .0, e.ends.1 .0);
            if b >= n {
                return Err(GraphError::invalid(format!(
                    "edge #{i} references point {b}, but only {n} points exist"
                )));
            }
            if e.is_loop() {
                return Err(GraphError::invalid(format!("edge #{i} is a loop at point {a}")));
            }
            if let Some(prev) = adj.edge_between(a, b) {
                return Err(GraphError::invalid(format!(
                    "edges #{} and #{i} both join points {a} and {b}",
                    prev.0
                )));
            }
            adj.connect(a, b, e.id);
        }
        Ok(Self { points, edges, adj })
    }

    /// Assemble a graph whose lists are valid by construction (generators).
    pub(crate) fn from_valid_parts(points: Vec<Point>, edges: Vec<Edge>) -> Self {
        let mut adj = AdjMatrix::new(points.len());
        for (i, e) in edges.iter().enumerate() {
            debug_assert_eq!(e.id.0, i, "generator edge ids must be dense");
            debug_assert!(!e.is_loop() && adj.edge_between(e.ends.0 .0, e.ends.1 .0).is_none());
            adj.connect(e.ends.0 .0, e.ends.1 .0, e.id);
        }
        Self { points, edges, adj }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn adjacency(&self) -> &AdjMatrix {
        &self.adj
    }

    /// Dimension `|E| - |V| + 1` of the cycle space of a connected graph.
    #[inline]
    pub fn cycle_rank(&self) -> usize {
        (self.edges.len() + 1).saturating_sub(self.points.len())
    }

    pub fn edge_between(&self, i: PointId, j: PointId) -> Option<&Edge> {
        self.adj.edge_between(i.0, j.0).map(|e| self.edge(e))
    }

    pub fn connectivity_mask(&self) -> Vec<Vec<bool>> {
        self.adj.connectivity_mask()
    }
}
