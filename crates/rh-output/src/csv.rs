//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `metrics.csv`
//! - `agent_states.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentStateRow, MetricsRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics:  Writer<File>,
    states:   Writer<File>,
    finished: bool,
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record([
            "tick",
            "direct_recycled",
            "hub_recycled",
            "not_recycled",
            "raw_material_consumed",
            "hub_stock",
            "demolition_supply",
            "construction_demand",
            "finished_agents",
            "incomplete_agents",
            "wrap_up_drift",
        ])?;

        let mut states = Writer::from_path(dir.join("agent_states.csv"))?;
        states.write_record([
            "agent_id",
            "tick",
            "kind",
            "status",
            "is_recycling",
            "hub_id",
            "x",
            "y",
            "running_time",
            "amount_recycled",
            "amount_hub",
            "amount_non_circular",
            "current_amount",
        ])?;

        Ok(Self {
            metrics,
            states,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        for row in rows {
            self.states.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.kind.to_string(),
                row.status.to_string(),
                opt(row.is_recycling.map(u8::from)),
                opt(row.hub_id),
                opt(row.cell.map(|c| c.x)),
                opt(row.cell.map(|c| c.y)),
                row.running_time.to_string(),
                row.amount_recycled.to_string(),
                row.amount_hub.to_string(),
                row.amount_non_circular.to_string(),
                row.current_amount.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.direct_recycled.to_string(),
            row.hub_recycled.to_string(),
            row.not_recycled.to_string(),
            row.raw_material_consumed.to_string(),
            row.hub_stock.to_string(),
            row.demolition_supply.to_string(),
            row.construction_demand.to_string(),
            row.finished_agents.to_string(),
            row.incomplete_agents.to_string(),
            row.wrap_up_drift.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.states.flush()?;
        Ok(())
    }
}
