//! Small graph families used in tests, benchmarks, and demos.
//!
//! All points lie in the `z = 0` plane; edge ids follow insertion order.

use super::store::Graph;
use super::types::{Edge, Point};

/// Unit square `0-1-2-3` with the diagonal `0-2`.
///
/// ```text
/// 1 *-* 2
///   |/|
/// 0 *-* 3
/// ```
pub fn square_with_diagonal() -> Graph {
    let points = vec![
        Point::new(0, 0.0, 0.0, 0.0),
        Point::new(1, 0.0, 1.0, 0.0),
        Point::new(2, 1.0, 1.0, 0.0),
        Point::new(3, 1.0, 0.0, 0.0),
    ];
    let edges = vec![
        Edge::new(0, 0, 1),
        Edge::new(1, 1, 2),
        Edge::new(2, 2, 3),
        Edge::new(3, 3, 0),
        Edge::new(4, 0, 2),
    ];
    Graph::from_valid_parts(points, edges)
}

/// Simple cycle on `n >= 3` points placed on the unit circle.
pub fn ring(n: usize) -> Graph {
    let n = n.max(3);
    let step = std::f64::consts::TAU / n as f64;
    let points = (0..n)
        .map(|i| {
            let t = step * i as f64;
            Point::new(i, t.cos(), t.sin(), 0.0)
        })
        .collect();
    let edges = (0..n).map(|i| Edge::new(i, i, (i + 1) % n)).collect();
    Graph::from_valid_parts(points, edges)
}

/// `rows × cols` lattice with unit spacing; point `(r, c)` has index `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let points = (0..rows * cols)
        .map(|i| Point::new(i, (i % cols) as f64, (i / cols) as f64, 0.0))
        .collect();
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let i = r * cols + c;
            if c + 1 < cols {
                edges.push(Edge::new(edges.len(), i, i + 1));
            }
            if r + 1 < rows {
                edges.push(Edge::new(edges.len(), i, i + cols));
            }
        }
    }
    Graph::from_valid_parts(points, edges)
}

/// Wheel: hub `0` joined to every point of a rim ring `1..=n` (`n >= 3`).
pub fn wheel(n: usize) -> Graph {
    let n = n.max(3);
    let step = std::f64::consts::TAU / n as f64;
    let mut points = vec![Point::new(0, 0.0, 0.0, 0.0)];
    points.extend((1..=n).map(|i| {
        let t = step * (i - 1) as f64;
        Point::new(i, t.cos(), t.sin(), 0.0)
    }));
    let mut edges = Vec::with_capacity(2 * n);
    for i in 1..=n {
        edges.push(Edge::new(edges.len(), 0, i));
    }
    for i in 1..=n {
        let j = if i == n { 1 } else { i + 1 };
        edges.push(Edge::new(edges.len(), i, j));
    }
    Graph::from_valid_parts(points, edges)
}

/// Complete graph `K_n` with points on the unit circle.
pub fn complete(n: usize) -> Graph {
    let step = std::f64::consts::TAU / n.max(1) as f64;
    let points = (0..n)
        .map(|i| {
            let t = step * i as f64;
            Point::new(i, t.cos(), t.sin(), 0.0)
        })
        .collect();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push(Edge::new(edges.len(), i, j));
        }
    }
    Graph::from_valid_parts(points, edges)
}
