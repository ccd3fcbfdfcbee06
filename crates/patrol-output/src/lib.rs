//! `patrol-output` — simulation output writers for the patrol framework.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                        |
//! |-----------|---------|----------------------------------------------------------------------|
//! | *(none)*  | CSV     | `agent_snapshots.csv`, `sound_events.csv`, `tick_summaries.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                                                          |
//! | `parquet` | Parquet | `agent_snapshots.parquet`, `sound_events.parquet`, `tick_summaries.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `patrol_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use patrol_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, SoundEventRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
