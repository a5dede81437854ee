//! Simulation observer trait for progress reporting and data collection.

use rh_agent::Participant;
use rh_core::Tick;
use rh_grid::SpatialIndex;
use rh_hub::HubStore;

use crate::MetricsSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, m: &MetricsSnapshot) {
///         println!("{tick}: {} finished", m.finished_agents);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the snapshot just collected.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &MetricsSnapshot) {}

    /// Called at snapshot intervals (every `output_interval_ticks` ticks).
    ///
    /// Read-only access to every participant, the hubs and the grid, so that
    /// output writers can record per-agent state without the sim knowing
    /// about any output format.
    fn on_snapshot<G: SpatialIndex>(
        &mut self,
        _tick:   Tick,
        _agents: &[Participant],
        _hubs:   &HubStore,
        _grid:   &G,
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
