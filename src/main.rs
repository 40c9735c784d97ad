//! Headless driver: runs the simulation against a scripted threat path and
//! emits one JSON snapshot per line.
//!
//! Usage:
//!   panic-sim --ticks 600 --path circle > run.jsonl
//!   RUST_LOG=panic_sim=debug panic-sim --config tuning.json --output out/

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use panic_sim::flush::{flush_run_to_jsonl, write_jsonl};
use panic_sim::{Bounds, PropEvent, SimConfig, Simulation, Vec2, WorldSnapshot};

/// Frame duration reported to the simulation (60 fps).
const FRAME_DT: f64 = 1.0 / 60.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ThreatPath {
    /// Circle the centre at a third of the shorter side.
    Circle,
    /// Sweep left and right through the centre line.
    Sweep,
    /// Park the threat far outside the area.
    Idle,
}

impl ThreatPath {
    fn position(self, tick: u64, bounds: &Bounds) -> Vec2 {
        let centre = bounds.center();
        let t = tick as f64;
        match self {
            ThreatPath::Circle => {
                let radius = bounds.width.min(bounds.height) / 3.0;
                centre.orbit(t * 0.02, radius)
            }
            ThreatPath::Sweep => {
                let phase = (t * 0.01).sin();
                Vec2::new(centre.x + phase * bounds.width * 0.5, centre.y)
            }
            ThreatPath::Idle => Vec2::new(-10_000.0, -10_000.0),
        }
    }
}

#[derive(Parser)]
#[command(name = "panic-sim")]
#[command(about = "Run the panicking-agent simulation headless and dump JSONL snapshots")]
struct Args {
    /// Number of ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Override the configured seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured prop count
    #[arg(long)]
    props: Option<usize>,

    /// JSON tuning file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit a snapshot every N ticks
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Scripted threat movement
    #[arg(long, value_enum, default_value_t = ThreatPath::Circle)]
    path: ThreatPath,

    /// Write snapshots.jsonl and events.jsonl here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(props) = args.props {
        config.prop_count = props;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let every = args.every.max(1);

    let mut sim = Simulation::with_config(config);
    let bounds = sim.config().bounds;
    let mut snapshots: Vec<WorldSnapshot> = Vec::new();
    let mut events: Vec<PropEvent> = Vec::new();
    let mut stdout = BufWriter::new(io::stdout().lock());

    for tick in 0..args.ticks {
        let report = sim.step(args.path.position(tick, &bounds), FRAME_DT);
        events.extend(report.events);

        if report.tick % every == 0 || tick + 1 == args.ticks {
            let snapshot = sim.snapshot();
            if args.output.is_some() {
                snapshots.push(snapshot);
            } else {
                write_jsonl(&mut stdout, [snapshot]).context("failed to write snapshot")?;
            }
        }
    }
    stdout.flush().context("failed to flush stdout")?;

    if let Some(dir) = &args.output {
        flush_run_to_jsonl(&snapshots, &events, dir)
            .with_context(|| format!("failed to write run to {}", dir.display()))?;
    }

    let stolen = events
        .iter()
        .filter(|e| e.kind == panic_sim::PropEventKind::Stolen)
        .count();
    tracing::info!(
        ticks = args.ticks,
        score = sim.score(),
        stolen,
        released = events.len() - stolen,
        "run complete"
    );
    Ok(())
}
