//! Greedy orthogonalization loop.
//!
//! For each of the `|E| - |V| + 1` support vectors `S_k`:
//! 1. build the doubled graph of `S_k` and extract the lightest cycle `C_k`
//!    with odd intersection against `S_k`;
//! 2. for every later `S_j` with `⟨C_k, S_j⟩ = 1`, set `S_j ← S_j ⊕ S_k`.
//!
//! After step 2 every remaining `S_j` is orthogonal to `C_1..C_k`, so each
//! new cycle is independent of the ones already chosen.

use crate::error::{GraphError, Result};
use crate::gf2::{self, initial_support_vectors, SupportVector};
use crate::graph::{traverse, Graph, Point};

use super::cfg::BasisCfg;
use super::cycle::Cycle;
use super::doubled::DoubledGraph;
use super::extract::extract;
use super::reconstruct::to_point_sequence;

/// Ordered, GF(2)-independent set of cycles, shortest-first per iteration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CycleBasis {
    pub cycles: Vec<Cycle>,
}

impl CycleBasis {
    #[inline]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cycle> {
        self.cycles.iter()
    }

    pub fn total_weight(&self) -> f64 {
        self.cycles.iter().map(|c| c.weight).sum()
    }

    /// Every cycle as an ordered point sequence.
    pub fn point_sequences(&self, graph: &Graph) -> Result<Vec<Vec<Point>>> {
        self.cycles
            .iter()
            .map(|c| to_point_sequence(graph, &c.edges))
            .collect()
    }

    /// Check that this is a basis of the cycle space of `graph`: right size,
    /// closed cycles, full GF(2) rank.
    pub fn verify(&self, graph: &Graph) -> Result<()> {
        if self.cycles.len() != graph.cycle_rank() {
            return Err(GraphError::invalid(format!(
                "basis has {} cycles, cycle space has dimension {}",
                self.cycles.len(),
                graph.cycle_rank()
            )));
        }
        if let Some(k) = self.cycles.iter().position(|c| !c.is_closed(graph)) {
            return Err(GraphError::invalid(format!("cycle {k} is not closed")));
        }
        let supports: Vec<SupportVector> = self
            .cycles
            .iter()
            .map(|c| c.support(graph.edge_count()))
            .collect();
        let r = gf2::rank(&supports)?;
        if r != supports.len() {
            return Err(GraphError::invalid(format!(
                "cycles are dependent: rank {r} of {}",
                supports.len()
            )));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CycleBasis {
    type Item = &'a Cycle;
    type IntoIter = std::slice::Iter<'a, Cycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

/// Minimum cycle basis of a connected simple graph.
pub fn minimum_cycle_basis(graph: &Graph, cfg: &BasisCfg) -> Result<CycleBasis> {
    let n = graph.point_count();
    if n == 0 {
        return Ok(CycleBasis::default());
    }
    let _span = tracing::debug_span!("minimum_cycle_basis", points = n, edges = graph.edge_count())
        .entered();

    let tree = traverse(graph, cfg.root)?;
    if !tree.is_spanning(n) {
        return Err(GraphError::Disconnected {
            reached: tree.reached(),
            total: n,
        });
    }
    let weights = cfg.weighting.edge_weights(graph)?;
    let m = graph.cycle_rank();
    let mut supports = initial_support_vectors(&tree, graph.edge_count(), m);
    debug_assert_eq!(supports.len(), m);

    let mut cycles = Vec::with_capacity(m);
    for k in 0..m {
        let doubled = DoubledGraph::build(graph, &supports[k])?;
        let cycle = extract(&doubled, &weights, k)?;
        let cycle_vec = cycle.support(graph.edge_count());
        let (done, rest) = supports.split_at_mut(k + 1);
        let s_k = &done[k];
        for s_j in rest.iter_mut() {
            if cycle_vec.odd_intersection(s_j)? {
                s_j.xor_assign(s_k)?;
            }
        }
        tracing::debug!(iteration = k, len = cycle.len(), weight = cycle.weight, "cycle");
        cycles.push(cycle);
    }

    let basis = CycleBasis { cycles };
    tracing::info!(
        cycles = basis.len(),
        total_weight = basis.total_weight(),
        "cycle basis complete"
    );
    Ok(basis)
}
