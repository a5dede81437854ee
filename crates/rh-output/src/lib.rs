//! `rh-output` — simulation output writers for the recycling-hub model.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                     |
//! |----------|---------|-----------------------------------|
//! | *(none)* | CSV     | `metrics.csv`, `agent_states.csv` |
//! | `sqlite` | SQLite  | `output.db`                       |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rh_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rh_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! obs.record_baseline(&sim.metrics[0]);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentStateRow, MetricsRow};
pub use writer::{OutputWriter, write_metrics_table};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
