use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cyclebasis::api::{minimum_cycle_basis, BasisCfg, PointId, Weighting};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod report;

#[derive(Parser)]
#[command(name = "cycles")]
#[command(about = "Minimum cycle basis (ring detection) for point/edge graphs")]
struct Cmd {
    /// JSON document with `points` and `edges`
    #[arg(long)]
    infile: PathBuf,

    /// Print each cycle as an ordered point loop instead of an edge list
    #[arg(long)]
    points: bool,

    /// Edge weights for the shortest-cycle search
    #[arg(long, value_enum, default_value_t = WeightArg::Unit)]
    weights: WeightArg,

    /// Point id used as spanning-tree root
    #[arg(long, default_value_t = 0)]
    root: usize,

    /// Ids in the input start at 1 (LAMMPS atom/bond numbering)
    #[arg(long)]
    one_based: bool,

    /// Print JSON instead of text blocks
    #[arg(long)]
    json: bool,

    /// Also write JSON results (and a provenance sidecar) to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeightArg {
    Unit,
    Euclidean,
}

impl From<WeightArg> for Weighting {
    fn from(w: WeightArg) -> Self {
        match w {
            WeightArg::Unit => Weighting::Unit,
            WeightArg::Euclidean => Weighting::Euclidean,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let infile = cmd.infile.display().to_string();
    tracing::info!(infile, points = cmd.points, json = cmd.json, "run");
    let graph = input::read_graph(&cmd.infile, cmd.one_based)?;
    tracing::info!(
        points = graph.point_count(),
        edges = graph.edge_count(),
        expected_cycles = graph.cycle_rank(),
        "graph loaded"
    );

    let cfg = BasisCfg {
        weighting: cmd.weights.into(),
        root: PointId(cmd.root),
    };
    let basis = minimum_cycle_basis(&graph, &cfg).map_err(|err| {
        if err.is_fatal() {
            tracing::error!(%err, "graph invariant violated");
        }
        err
    })?;
    let cycles = report::cycles_out(&graph, &basis, cmd.points)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&cycles)?);
    } else {
        print!("{}", report::render_text(&cycles));
    }

    if let Some(out) = &cmd.out {
        let params = serde_json::json!({
            "infile": infile,
            "weights": format!("{:?}", cfg.weighting).to_lowercase(),
            "root": cmd.root,
            "one_based": cmd.one_based,
            "points": cmd.points,
        });
        let sidecar = report::write_results(out, &cycles, params)
            .with_context(|| format!("writing results to {}", out.display()))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "results written");
    }
    Ok(())
}
