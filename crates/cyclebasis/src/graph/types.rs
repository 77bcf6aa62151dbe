//! Point and edge entities.
//!
//! Kept small and explicit: ids are dense 0-based newtypes, endpoints are a
//! canonical `(low, high)` pair so equality never depends on input order.

use nalgebra::Vector3;

use crate::error::{GraphError, Result};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A vertex of the structural graph (e.g. an atom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub pos: Vector3<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: usize, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: PointId(id),
            pos: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.pos - other.pos).norm()
    }
}

/// Undirected edge (e.g. a bond).
///
/// Invariant: `ends.0 <= ends.1`. Construct through [`Edge::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub ends: (PointId, PointId),
}

impl Edge {
    #[inline]
    pub fn new(id: usize, a: usize, b: usize) -> Self {
        let ends = if a <= b {
            (PointId(a), PointId(b))
        } else {
            (PointId(b), PointId(a))
        };
        Self {
            id: EdgeId(id),
            ends,
        }
    }

    /// Identity check with consistency enforcement.
    ///
    /// Different ids never match. Equal ids must join the same point pair;
    /// anything else is an `EdgeConflict`.
    pub fn matches(&self, other: &Edge) -> Result<bool> {
        if self.id != other.id {
            return Ok(false);
        }
        if self.ends == other.ends {
            Ok(true)
        } else {
            Err(GraphError::EdgeConflict {
                id: self.id,
                left: self.ends,
                right: other.ends,
            })
        }
    }

    #[inline]
    pub fn touches(&self, p: PointId) -> bool {
        self.ends.0 == p || self.ends.1 == p
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.ends.0 == self.ends.1
    }

    /// The endpoint opposite to `p`, if `p` is an endpoint.
    pub fn other_end(&self, p: PointId) -> Option<PointId> {
        if self.ends.0 == p {
            Some(self.ends.1)
        } else if self.ends.1 == p {
            Some(self.ends.0)
        } else {
            None
        }
    }

    /// The single endpoint shared with `other`; `None` for zero or two.
    pub fn shared_end(&self, other: &Edge) -> Option<PointId> {
        let first = other.touches(self.ends.0);
        let second = other.touches(self.ends.1);
        match (first, second) {
            (true, false) => Some(self.ends.0),
            (false, true) => Some(self.ends.1),
            _ => None,
        }
    }

    /// Euclidean length between endpoint positions.
    #[inline]
    pub fn length(&self, points: &[Point]) -> f64 {
        points[self.ends.0 .0].distance_to(&points[self.ends.1 .0])
    }
}
