//! The `Sim` struct and its tick loop.

use rh_agent::{AgentError, BusinessContext, Participant, Peers};
use rh_core::{AgentId, SimRng, Tick};
use rh_grid::SpatialIndex;
use rh_hub::HubStore;
use tracing::{debug, info};

use crate::{MetricsSnapshot, ModelConfig, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<G>` owns all model state and drives the tick loop described in the
/// [crate docs][crate].  Every agent is activated exactly once per tick, in
/// an order freshly shuffled with the simulation's own [`SimRng`]; material
/// moved by one agent is visible to every agent stepped after it.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<G: SpatialIndex> {
    pub config: ModelConfig,

    /// Number of completed ticks.
    pub tick: Tick,

    /// All participants, indexed by `AgentId`.
    pub agents: Vec<Participant>,

    pub hubs: HubStore,

    pub grid: G,

    /// One snapshot per completed tick, plus the build-time baseline at
    /// index 0.
    pub metrics: Vec<MetricsSnapshot>,

    pub(crate) rng: SimRng,

    /// Activation order, reshuffled every tick.
    pub(crate) order: Vec<AgentId>,
}

impl<G: SpatialIndex> Sim<G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.sim.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// A hub contract violation aborts the run with the error.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.sim.end_tick();
        info!(
            agents = self.agents.len(),
            hubs = self.hubs.len(),
            ticks = end.0,
            seed = self.config.sim.seed,
            "simulation start"
        );
        while self.tick < end {
            self.tick_with(observer)?;
        }
        observer.on_sim_end(self.tick);

        if let Some(m) = self.final_metrics() {
            info!(
                tick = m.tick,
                direct_recycled = m.direct_recycled,
                hub_recycled = m.hub_recycled,
                not_recycled = m.not_recycled,
                raw_material_consumed = m.raw_material_consumed,
                finished = m.finished_agents,
                incomplete = m.incomplete_agents,
                "simulation end"
            );
        }
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_with(observer)?;
        }
        Ok(())
    }

    /// Advance one tick without an observer and return its snapshot.
    pub fn step(&mut self) -> SimResult<MetricsSnapshot> {
        let snapshot = self.process_tick(self.tick)?;
        self.tick = self.tick + 1;
        Ok(snapshot)
    }

    /// Snapshot after the most recent tick (the baseline before any tick).
    pub fn final_metrics(&self) -> Option<&MetricsSnapshot> {
        self.metrics.last()
    }

    /// `true` once every participant is finished or incomplete.
    pub fn all_terminal(&self) -> bool {
        self.agents.iter().all(|p| p.status().is_terminal())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);
        let snapshot = self.process_tick(now)?;
        observer.on_tick_end(now, &snapshot);

        let interval = self.config.sim.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents, &self.hubs, &self.grid);
        }
        self.tick = now + 1;
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<MetricsSnapshot> {
        self.rng.shuffle(&mut self.order);

        for &id in &self.order {
            let (me, peers) =
                Peers::split(&mut self.agents, id).ok_or(AgentError::UnknownAgent(id))?;
            let mut ctx = BusinessContext {
                agent: id,
                hub:   me.hub(),
                tick:  now,
                grid:  &mut self.grid,
                hubs:  &mut self.hubs,
                peers,
                rng:   &mut self.rng,
            };
            me.step(&mut ctx)?;
        }

        let bad_hubs = self.hubs.audit();
        if bad_hubs > 0 {
            debug!(tick = %now, bad_hubs, "hub audit failed");
        }

        let snapshot = MetricsSnapshot::collect(now + 1, &self.agents, &self.hubs);
        self.metrics.push(snapshot.clone());
        Ok(snapshot)
    }
}
