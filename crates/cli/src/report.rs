//! Result rendering: text blocks for terminals, JSON for files, plus a
//! provenance sidecar next to every written artifact.

use anyhow::{Context, Result};
use cyclebasis::api::{point_ids, CycleBasis, Graph};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct EdgeOut {
    pub number: usize,
    pub ends: [usize; 2],
}

#[derive(Debug, Serialize)]
pub struct PointOut {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Serialize)]
pub struct CycleOut {
    pub index: usize,
    pub length: usize,
    pub weight: f64,
    pub edges: Vec<EdgeOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointOut>>,
}

/// Serializable view of a basis; point loops only when requested.
pub fn cycles_out(graph: &Graph, basis: &CycleBasis, with_points: bool) -> Result<Vec<CycleOut>> {
    let mut out = Vec::with_capacity(basis.len());
    for (index, c) in basis.iter().enumerate() {
        let edges = c
            .edges
            .iter()
            .map(|&e| {
                let (a, b) = graph.edge(e).ends;
                EdgeOut {
                    number: e.0,
                    ends: [a.0, b.0],
                }
            })
            .collect();
        let points = if with_points {
            let ids = point_ids(graph, &c.edges)
                .with_context(|| format!("reconstructing cycle {index}"))?;
            Some(
                ids.into_iter()
                    .map(|p| {
                        let pt = graph.point(p);
                        PointOut {
                            id: p.0,
                            x: pt.pos.x,
                            y: pt.pos.y,
                            z: pt.pos.z,
                        }
                    })
                    .collect(),
            )
        } else {
            None
        };
        out.push(CycleOut {
            index,
            length: c.len(),
            weight: c.weight,
            edges,
            points,
        });
    }
    Ok(out)
}

/// One `C<k>: ...` block per cycle, separated by blank lines.
pub fn render_text(cycles: &[CycleOut]) -> String {
    let mut s = String::new();
    for c in cycles {
        s.push_str(&format!("C{}: ", c.index));
        match &c.points {
            Some(points) => {
                for p in points {
                    s.push_str(&format!("{}({}, {}, {}), ", p.id, p.x, p.y, p.z));
                }
            }
            None => {
                for e in &c.edges {
                    s.push_str(&format!("#{}({}-{}), ", e.number, e.ends[0], e.ends[1]));
                }
            }
        }
        s.push_str("\n\n");
    }
    s
}

/// Write `cycles` as pretty JSON to `out` and a provenance sidecar next to it.
pub fn write_results(out: &Path, cycles: &[CycleOut], params: Value) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(cycles)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = provenance_path(out);
    let doc = json!({
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "version": cyclebasis::VERSION,
        "params": params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("cycles"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclebasis::api::{solve_with_defaults, special};
    use tempfile::tempdir;

    #[test]
    fn text_lists_edges_per_cycle() {
        let g = special::square_with_diagonal();
        let b = solve_with_defaults(&g).unwrap();
        let text = render_text(&cycles_out(&g, &b, false).unwrap());
        assert!(text.starts_with("C0: #"));
        assert!(text.contains("C1: "));
        assert!(text.contains("#4(0-2)"));
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn text_blocks_render_exactly() {
        let cycles = vec![CycleOut {
            index: 0,
            length: 1,
            weight: 1.0,
            edges: vec![EdgeOut {
                number: 4,
                ends: [0, 2],
            }],
            points: Some(vec![PointOut {
                id: 2,
                x: 1.0,
                y: 0.5,
                z: 0.0,
            }]),
        }];
        assert_eq!(render_text(&cycles), "C0: 2(1, 0.5, 0), \n\n");
    }

    #[test]
    fn text_lists_points_when_requested() {
        let g = special::square_with_diagonal();
        let b = solve_with_defaults(&g).unwrap();
        let cycles = cycles_out(&g, &b, true).unwrap();
        assert!(cycles.iter().all(|c| c.points.as_ref().map(Vec::len) == Some(3)));
        let text = render_text(&cycles);
        assert!(text.contains("0(0, 0, 0)"));
    }

    #[test]
    fn provenance_path_rewrites_extension() {
        let derived = provenance_path(Path::new("/tmp/output/rings.json"));
        assert_eq!(derived, Path::new("/tmp/output/rings.provenance.json"));
    }

    #[test]
    fn write_results_creates_both_files() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("rings.json");
        let g = special::grid(2, 3);
        let b = solve_with_defaults(&g).unwrap();
        let cycles = cycles_out(&g, &b, false).unwrap();
        let sidecar = write_results(&out, &cycles, json!({"weights": "unit"})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["length"], 4);
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["weights"], "unit");
        assert_eq!(prov["outputs"][0], out.to_string_lossy().as_ref());
    }
}
