//! Seeded random connected graphs (random tree + extra chords).
//!
//! Model
//! - Scatter `points` uniformly in the cube `[0, side]^3`.
//! - Attach each point `i > 0` to a uniformly chosen earlier point, which
//!   yields a connected tree.
//! - Add up to `extra_edges` chords between random non-adjacent pairs.
//! - Determinism: a replay token `(seed, index)` is mixed into one RNG, so the
//!   same token always reproduces the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::store::{AdjMatrix, Graph};
use super::types::{Edge, EdgeId, Point};

/// Replay token for one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random connected graph configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphCfg {
    pub points: usize,
    /// Chords added on top of the tree; capped by the number of free pairs.
    pub extra_edges: usize,
    /// Side length of the cube that holds the points.
    pub side: f64,
}

impl Default for RandomGraphCfg {
    fn default() -> Self {
        Self {
            points: 12,
            extra_edges: 8,
            side: 10.0,
        }
    }
}

/// Draw a connected simple graph with `points` vertices and
/// `points - 1 + extra` edges, where `extra <= extra_edges`.
pub fn draw_connected_graph(cfg: RandomGraphCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.points;
    let side = cfg.side.max(1e-6);
    let points: Vec<Point> = (0..n)
        .map(|i| {
            Point::new(
                i,
                rng.gen_range(0.0..side),
                rng.gen_range(0.0..side),
                rng.gen_range(0.0..side),
            )
        })
        .collect();

    let mut adj = AdjMatrix::new(n);
    let mut edges: Vec<Edge> = Vec::with_capacity(n + cfg.extra_edges);
    fn push(edges: &mut Vec<Edge>, adj: &mut AdjMatrix, a: usize, b: usize) {
        adj.connect(a, b, EdgeId(edges.len()));
        edges.push(Edge::new(edges.len(), a, b));
    }
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        push(&mut edges, &mut adj, parent, i);
    }

    let free_pairs = (n * n.saturating_sub(1) / 2).saturating_sub(edges.len());
    let wanted = cfg.extra_edges.min(free_pairs);
    let mut added = 0;
    // Rejection sampling; dense requests fall back to a scan for free pairs.
    let mut attempts = 0usize;
    while added < wanted && attempts < 32 * wanted.max(1) {
        attempts += 1;
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b || adj.edge_between(a, b).is_some() {
            continue;
        }
        push(&mut edges, &mut adj, a, b);
        added += 1;
    }
    'scan: for a in 0..n {
        for b in a + 1..n {
            if added >= wanted {
                break 'scan;
            }
            if adj.edge_between(a, b).is_none() {
                push(&mut edges, &mut adj, a, b);
                added += 1;
            }
        }
    }
    Graph::from_valid_parts(points, edges)
}
