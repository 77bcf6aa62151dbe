//! Error type shared by graph construction, traversal, and the basis solver.
//!
//! Two classes live in one enum:
//! - input problems (`InvalidInput`, `Disconnected`) are reported to the caller
//!   and the computation is abandoned without partial results;
//! - invariant violations (`EdgeConflict`, `LengthMismatch`, `BrokenCycle`,
//!   `NoCycle`) mean corrupted input or a bug. `is_fatal()` flags them so the
//!   orchestrating layer can refuse to continue.

use std::fmt;

use crate::graph::{EdgeId, PointId};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    /// Malformed point/edge lists (gaps, out-of-range endpoints, loops, ...).
    InvalidInput { reason: String },
    /// The spanning traversal from the root did not reach every point.
    Disconnected { reached: usize, total: usize },
    /// Two edges share an id but connect different point pairs.
    EdgeConflict {
        id: EdgeId,
        left: (PointId, PointId),
        right: (PointId, PointId),
    },
    /// GF(2) operands of different lengths.
    LengthMismatch { left: usize, right: usize },
    /// Consecutive cycle edges at `position` do not share exactly one endpoint.
    BrokenCycle { position: usize },
    /// No start point reached its mirror in the doubled graph.
    NoCycle { iteration: usize },
}

impl GraphError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// True for invariant violations that must halt the computation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EdgeConflict { .. }
                | Self::LengthMismatch { .. }
                | Self::BrokenCycle { .. }
                | Self::NoCycle { .. }
        )
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid graph input: {reason}"),
            Self::Disconnected { reached, total } => write!(
                f,
                "graph is not connected: traversal reached {reached} of {total} points"
            ),
            Self::EdgeConflict { id, left, right } => write!(
                f,
                "graph inconsistency: edge #{} joins {}-{} and {}-{}",
                id.0, left.0 .0, left.1 .0, right.0 .0, right.1 .0
            ),
            Self::LengthMismatch { left, right } => write!(
                f,
                "graph inconsistency: support vectors of length {left} and {right}"
            ),
            Self::BrokenCycle { position } => write!(
                f,
                "graph inconsistency: cycle edges {position} and {} do not share exactly one point",
                position + 1
            ),
            Self::NoCycle { iteration } => write!(
                f,
                "graph inconsistency: no cycle satisfies support vector {iteration}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
