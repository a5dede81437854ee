//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `metrics` and `agent_states`.

use std::path::Path;

use rusqlite::Connection;

use crate::{AgentStateRow, MetricsRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS metrics (
                 tick                  INTEGER PRIMARY KEY,
                 direct_recycled       REAL    NOT NULL,
                 hub_recycled          REAL    NOT NULL,
                 not_recycled          REAL    NOT NULL,
                 raw_material_consumed REAL    NOT NULL,
                 hub_stock             REAL    NOT NULL,
                 demolition_supply     REAL    NOT NULL,
                 construction_demand   REAL    NOT NULL,
                 finished_agents       INTEGER NOT NULL,
                 incomplete_agents     INTEGER NOT NULL,
                 wrap_up_drift         REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_states (
                 agent_id            INTEGER NOT NULL,
                 tick                INTEGER NOT NULL,
                 kind                TEXT    NOT NULL,
                 status              TEXT    NOT NULL,
                 is_recycling        INTEGER,
                 hub_id              INTEGER,
                 x                   INTEGER,
                 y                   INTEGER,
                 running_time        INTEGER NOT NULL,
                 amount_recycled     REAL    NOT NULL,
                 amount_hub          REAL    NOT NULL,
                 amount_non_circular REAL    NOT NULL,
                 current_amount      REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_agent_states(&mut self, rows: &[AgentStateRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_states \
                 (agent_id, tick, kind, status, is_recycling, hub_id, x, y, running_time, \
                  amount_recycled, amount_hub, amount_non_circular, current_amount) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick,
                    row.kind,
                    row.status,
                    row.is_recycling,
                    row.hub_id,
                    row.cell.map(|c| c.x),
                    row.cell.map(|c| c.y),
                    row.running_time,
                    row.amount_recycled,
                    row.amount_hub,
                    row.amount_non_circular,
                    row.current_amount,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO metrics \
             (tick, direct_recycled, hub_recycled, not_recycled, raw_material_consumed, \
              hub_stock, demolition_supply, construction_demand, finished_agents, \
              incomplete_agents, wrap_up_drift) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.tick,
                row.direct_recycled,
                row.hub_recycled,
                row.not_recycled,
                row.raw_material_consumed,
                row.hub_stock,
                row.demolition_supply,
                row.construction_demand,
                row.finished_agents,
                row.incomplete_agents,
                row.wrap_up_drift,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
