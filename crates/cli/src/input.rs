//! JSON point/edge documents handed over by the upstream structure parser.
//!
//! Shape:
//! `{ "points": [{"id", "x", "y", "z"}...], "edges": [{"number", "ends": [a, b]}...] }`
//! Ids are 0-based unless the caller asks for 1-based (LAMMPS-style) input.

use anyhow::{bail, Context, Result};
use cyclebasis::api::{Edge, Graph, Point};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct GraphDoc {
    pub points: Vec<PointRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PointRecord {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub number: usize,
    pub ends: [usize; 2],
}

impl GraphDoc {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing graph document")
    }

    /// Validate and build the library graph. Points may be listed in any order.
    pub fn into_graph(self, one_based: bool) -> Result<Graph> {
        let shift = |v: usize, what: &str| -> Result<usize> {
            if !one_based {
                return Ok(v);
            }
            match v.checked_sub(1) {
                Some(s) => Ok(s),
                None => bail!("{what} 0 is not valid with 1-based ids"),
            }
        };
        let mut points = Vec::with_capacity(self.points.len());
        for p in &self.points {
            points.push(Point::new(shift(p.id, "point id")?, p.x, p.y, p.z));
        }
        points.sort_by_key(|p| p.id);
        let mut edges = Vec::with_capacity(self.edges.len());
        for e in &self.edges {
            edges.push(Edge::new(
                shift(e.number, "edge number")?,
                shift(e.ends[0], "point id")?,
                shift(e.ends[1], "point id")?,
            ));
        }
        Ok(Graph::new(points, edges)?)
    }
}

/// Read and build a graph from a JSON file.
pub fn read_graph(path: &Path, one_based: bool) -> Result<Graph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    GraphDoc::parse(&text)?
        .into_graph(one_based)
        .with_context(|| format!("building graph from {}", path.display()))
}
