//! Integration tests for rh-output.

#[cfg(test)]
mod csv_tests {
    use rh_core::{Cell, SimConfig};
    use rh_sim::{MetricsSnapshot, ModelConfig, SimBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentStateRow, MetricsRow};
    use crate::writer::{OutputWriter, write_metrics_table};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn state_row(agent_id: u32, tick: u64) -> AgentStateRow {
        AgentStateRow {
            agent_id,
            tick,
            kind:                "demolition",
            status:              "active",
            is_recycling:        Some(true),
            hub_id:              None,
            cell:                Some(Cell::new(agent_id, 2)),
            running_time:        tick,
            amount_recycled:     1.5,
            amount_hub:          0.0,
            amount_non_circular: 0.0,
            current_amount:      3.25,
        }
    }

    fn metrics_row(tick: u64) -> MetricsRow {
        MetricsRow::from(&MetricsSnapshot {
            tick,
            direct_recycled: 12.5,
            hub_stock:       40.0,
            finished_agents: 2,
            ..MetricsSnapshot::default()
        })
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("metrics.csv").exists());
        assert!(dir.path().join("agent_states.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[0], "tick");
        assert_eq!(headers[1], "direct_recycled");
        assert_eq!(headers.len(), 11);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(&headers2[..4], ["agent_id", "tick", "kind", "status"]);
        assert_eq!(headers2.len(), 13);
    }

    #[test]
    fn csv_agent_states_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![state_row(0, 5), state_row(1, 5)];
        w.write_agent_states(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "0");      // agent_id
        assert_eq!(&read_rows[0][2], "demolition");
        assert_eq!(&read_rows[0][4], "1");      // is_recycling
        assert_eq!(&read_rows[0][5], "");       // no hub
        assert_eq!(&read_rows[1][6], "1");      // x
        assert_eq!(&read_rows[1][7], "2");      // y
        assert_eq!(&read_rows[1][12], "3.25");  // current_amount
    }

    #[test]
    fn csv_metrics_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_metrics(&metrics_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "12.5");
        assert_eq!(&read_rows[0][5], "40");
        assert_eq!(&read_rows[0][8], "2");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn metrics_table_dump() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let table: Vec<MetricsSnapshot> = (0..4)
            .map(|t| MetricsSnapshot { tick: t, ..MetricsSnapshot::default() })
            .collect();
        write_metrics_table(&mut w, &table).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
    }

    #[test]
    fn integration_csv() {
        use crate::observer::SimOutputObserver;

        let config = ModelConfig {
            num_demolition:   3,
            num_construction: 2,
            width:            5,
            height:           5,
            sim: SimConfig { total_ticks: 6, seed: 1, output_interval_ticks: 2 },
            ..ModelConfig::default()
        };
        let mut sim = SimBuilder::new(config).unwrap().build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        obs.record_baseline(&sim.metrics[0]);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 5 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_states.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 15, "expected 15 agent rows, got {}", rows.len());

        // baseline + one row per tick
        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[6][0], "6");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rh_core::Cell;
    use tempfile::TempDir;

    use crate::row::{AgentStateRow, MetricsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn state_row(agent_id: u32, is_recycling: Option<bool>) -> AgentStateRow {
        AgentStateRow {
            agent_id,
            tick:                1,
            kind:                if is_recycling.is_some() { "demolition" } else { "construction" },
            status:              "passive",
            is_recycling,
            hub_id:              Some(0),
            cell:                Some(Cell::new(3, 4)),
            running_time:        1,
            amount_recycled:     0.0,
            amount_hub:          0.0,
            amount_non_circular: 0.0,
            current_amount:      4.5,
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_agent_state_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![state_row(0, Some(true)), state_row(1, Some(false)), state_row(2, None)];
        w.write_agent_states(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM agent_states", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_sink_has_null_recycling_flag() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_agent_states(&[state_row(7, None)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let val: Option<i64> = conn.query_row(
            "SELECT is_recycling FROM agent_states WHERE agent_id = 7", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(val, None);
    }

    #[test]
    fn sqlite_metrics_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_metrics(&MetricsRow {
            tick:                  7,
            direct_recycled:       10.0,
            hub_recycled:          20.0,
            not_recycled:          0.0,
            raw_material_consumed: 0.0,
            hub_stock:             5.0,
            demolition_supply:     1.0,
            construction_demand:   -2.0,
            finished_agents:       3,
            incomplete_agents:     1,
            wrap_up_drift:         0.0,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, hub, finished): (i64, f64, i64) = conn.query_row(
            "SELECT tick, hub_recycled, finished_agents FROM metrics WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(tick, 7);
        assert_eq!(hub, 20.0);
        assert_eq!(finished, 3);
    }
}
