//! Ring-size census over a batch of random structures.
//!
//! Draws a few seeded random graphs, computes each minimum cycle basis with
//! Euclidean weights, and prints how many rings of each size were found.

use std::collections::BTreeMap;

use cyclebasis::api::{
    draw_connected_graph, minimum_cycle_basis, BasisCfg, RandomGraphCfg, ReplayToken, Weighting,
};

fn main() {
    let cfg = BasisCfg {
        weighting: Weighting::Euclidean,
        ..BasisCfg::default()
    };
    let mut census: BTreeMap<usize, usize> = BTreeMap::new();
    for index in 0..8 {
        let g = draw_connected_graph(
            RandomGraphCfg {
                points: 30,
                extra_edges: 12,
                side: 6.0,
            },
            ReplayToken { seed: 2024, index },
        );
        let basis = minimum_cycle_basis(&g, &cfg).expect("random graphs are connected");
        for c in &basis {
            *census.entry(c.len()).or_default() += 1;
        }
    }
    for (size, count) in census {
        println!("{size:>3}-rings: {count}");
    }
}
