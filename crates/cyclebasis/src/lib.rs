//! Minimum cycle bases of point/edge graphs (ring detection).
//!
//! Pipeline: graph store → DFS spanning tree → initial GF(2) support vectors
//! → per-vector doubled graph → shortest odd cycle → orthogonalization.
//! Cycles come out as edge lists; `basis::to_point_sequence` turns one into an
//! ordered point loop.
//!
//! API Policy
//! - `api` re-exports the surface the CLI and benches use. Everything else is
//!   reachable through the module paths but may move.

pub mod api;
pub mod basis;
pub mod error;
pub mod gf2;
pub mod graph;

pub use error::{GraphError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::basis::{minimum_cycle_basis, BasisCfg, Cycle, CycleBasis, Weighting};
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::{Edge, EdgeId, Graph, Point, PointId};
}
