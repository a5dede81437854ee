//! The `OutputWriter` trait implemented by all backend writers.

use rh_sim::MetricsSnapshot;

use crate::{AgentStateRow, MetricsRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent states.
    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()>;

    /// Write one metric row.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Dump a whole in-memory metric table (e.g. `sim.metrics`) and finish.
pub fn write_metrics_table<W: OutputWriter>(
    writer:  &mut W,
    metrics: &[MetricsSnapshot],
) -> OutputResult<()> {
    for m in metrics {
        writer.write_metrics(&MetricsRow::from(m))?;
    }
    writer.finish()
}
