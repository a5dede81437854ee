//! concrete-recycling — demolition / construction material exchange on a
//! 20×20 grid with one recycling hub.
//!
//! ```text
//! concrete-recycling [CONFIG.toml] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the reference parameterisation is used (20
//! demolition and 20 construction projects, 37 ticks).  Output goes to
//! `output/concrete` unless another directory is given: CSV files by default,
//! a single `output.db` when built with `--features sqlite`.  Set
//! `RUST_LOG=debug` to see every status change and transfer.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rh_agent::Participant;
use rh_core::Tick;
use rh_grid::SpatialIndex;
use rh_hub::HubStore;
use rh_output::{OutputWriter, SimOutputObserver};
use rh_sim::{MetricsSnapshot, ModelConfig, SimBuilder, SimObserver};

const DEFAULT_OUTPUT_DIR: &str = "output/concrete";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    state_rows:  usize,
    metric_rows: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, state_rows: 0, metric_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, metrics: &MetricsSnapshot) {
        self.metric_rows += 1;
        self.inner.on_tick_end(tick, metrics);
    }

    fn on_snapshot<G: SpatialIndex>(
        &mut self,
        tick:   Tick,
        agents: &[Participant],
        hubs:   &HubStore,
        grid:   &G,
    ) {
        self.state_rows += agents.len();
        self.inner.on_snapshot(tick, agents, hubs, grid);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ModelConfig::from_file(&path)
            .with_context(|| format!("loading model config from {path}"))?,
        None => ModelConfig::default(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

    info!(
        demolition = config.num_demolition,
        construction = config.num_construction,
        hubs = config.num_hubs,
        recycling_tendency = config.recycling_probability(),
        ticks = config.sim.total_ticks,
        seed = config.sim.seed,
        "configuration loaded"
    );

    // 1. Build the model.
    let mut sim = SimBuilder::new(config)?.build()?;

    // 2. Set up output.
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    #[cfg(not(feature = "sqlite"))]
    let writer = rh_output::CsvWriter::new(&out_dir)?;
    #[cfg(feature = "sqlite")]
    let writer = rh_output::SqliteWriter::new(&out_dir)?;
    let mut inner_obs = SimOutputObserver::new(writer);
    if let Some(baseline) = sim.metrics.first() {
        inner_obs.record_baseline(baseline);
    }
    let mut obs = CountingObserver::new(inner_obs);

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("Output written to {}", out_dir.display());
    println!("  metrics      : {} rows", obs.metric_rows + 1);
    println!("  agent states : {} rows", obs.state_rows);
    println!();

    if let Some(m) = sim.final_metrics() {
        println!("Final metrics after {} ticks", m.tick);
        println!("{}", "-".repeat(48));
        for (label, value) in m.series() {
            println!("{label:<32} {value:>14.3}");
        }
        println!("{:<32} {:>14}", "Finished projects", m.finished_agents);
        println!("{:<32} {:>14}", "Incomplete projects", m.incomplete_agents);
    }

    Ok(())
}
