//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rh_agent::Participant;
use rh_core::Tick;
use rh_grid::SpatialIndex;
use rh_hub::HubStore;
use rh_sim::{MetricsSnapshot, SimObserver};

use crate::row::{AgentStateRow, MetricsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the metric series and agent-state snapshots
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Write the build-time baseline row (`sim.metrics[0]`), which the tick
    /// loop never reports through `on_tick_end`.
    pub fn record_baseline(&mut self, baseline: &MetricsSnapshot) {
        let result = self.writer.write_metrics(&MetricsRow::from(baseline));
        self.store_err(result);
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, metrics: &MetricsSnapshot) {
        let result = self.writer.write_metrics(&MetricsRow::from(metrics));
        self.store_err(result);
    }

    fn on_snapshot<G: SpatialIndex>(
        &mut self,
        tick:   Tick,
        agents: &[Participant],
        _hubs:  &HubStore,
        grid:   &G,
    ) {
        let rows: Vec<AgentStateRow> = agents
            .iter()
            .map(|p| AgentStateRow::new(tick, p, grid.position(p.id())))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agent_states(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
