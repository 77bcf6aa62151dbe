//! Shortest `v → mirror(v)` paths in the doubled graph.
//!
//! One Dijkstra run per original vertex; the lightest result over all runs is
//! the shortest cycle consistent with the support vector. Ties keep the
//! earliest start vertex. Inside a run, the queue breaks distance ties by the
//! lower vertex index and relaxation is strict, so predecessor choice is
//! deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};

use super::cycle::Cycle;
use super::doubled::DoubledGraph;

/// Queue entry ordered for min-heap use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
struct QueueItem {
    dist: f64,
    v: usize,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: smallest distance (then smallest index) on top
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.v.cmp(&self.v))
    }
}

/// Shortest path from `start` to its mirror, as an edge list.
///
/// `weights` is indexed by original edge id. Returns `None` when the mirror
/// is unreachable, `start` is not an original vertex, or `weights` does not
/// cover every edge.
pub fn shortest_cycle_from(doubled: &DoubledGraph<'_>, start: usize, weights: &[f64]) -> Option<Cycle> {
    if start >= doubled.base_len() || weights.len() < doubled.graph().edge_count() {
        return None;
    }
    let target = doubled.mirror(start);
    let size = doubled.len();
    let adj = doubled.adjacency();
    let mut dist = vec![f64::INFINITY; size];
    let mut prev: Vec<Option<usize>> = vec![None; size];
    let mut heap = BinaryHeap::new();
    dist[start] = 0.0;
    heap.push(QueueItem { dist: 0.0, v: start });

    while let Some(QueueItem { dist: d, v }) = heap.pop() {
        if v == target {
            break;
        }
        if d > dist[v] {
            continue; // stale entry
        }
        for (u, e) in adj.neighbors(v) {
            let nd = d + weights[e.0];
            if nd < dist[u] {
                dist[u] = nd;
                prev[u] = Some(v);
                heap.push(QueueItem { dist: nd, v: u });
            }
        }
    }
    if !dist[target].is_finite() {
        return None;
    }

    let mut edges = Vec::new();
    let mut cur = target;
    while cur != start {
        let p = prev[cur]?;
        edges.push(adj.edge_between(p, cur)?);
        cur = p;
    }
    edges.reverse();
    Some(Cycle {
        edges,
        weight: dist[target],
    })
}

/// Lightest cycle over all start vertices; first found wins ties.
///
/// `iteration` only labels the `NoCycle` error.
pub fn extract(doubled: &DoubledGraph<'_>, weights: &[f64], iteration: usize) -> Result<Cycle> {
    let n = doubled.base_len();
    let mut best: Option<Cycle> = None;
    for candidate in search_all(doubled, weights, n).into_iter().flatten() {
        if best.as_ref().map_or(true, |b| candidate.weight < b.weight) {
            best = Some(candidate);
        }
    }
    best.ok_or(GraphError::NoCycle { iteration })
}

#[cfg(not(feature = "parallel"))]
fn search_all(doubled: &DoubledGraph<'_>, weights: &[f64], n: usize) -> Vec<Option<Cycle>> {
    (0..n)
        .map(|v| shortest_cycle_from(doubled, v, weights))
        .collect()
}

// Results come back in start order, so the merge in `extract` keeps the
// serial tie rule.
#[cfg(feature = "parallel")]
fn search_all(doubled: &DoubledGraph<'_>, weights: &[f64], n: usize) -> Vec<Option<Cycle>> {
    use rayon::prelude::*;
    (0..n)
        .into_par_iter()
        .map(|v| shortest_cycle_from(doubled, v, weights))
        .collect()
}
