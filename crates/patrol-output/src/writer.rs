//! The writer seam between the observer bridge and the storage backends.

use crate::{AgentSnapshotRow, OutputResult, SoundEventRow, TickSummaryRow};

/// Sink for simulation output rows.
///
/// Implemented by the CSV, SQLite, and Parquet backends.  Callers hand in
/// rows batched per tick or per snapshot; a writer may buffer further
/// internally, but after [`finish`](OutputWriter::finish) everything must
/// be on disk.
pub trait OutputWriter {
    /// Record one snapshot's worth of agent rows.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Record one tick's sound emissions.
    fn write_sounds(&mut self, rows: &[SoundEventRow]) -> OutputResult<()>;

    /// Record the per-tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush buffers and close the underlying files.
    ///
    /// Idempotent — a second call is a no-op, not an error.
    fn finish(&mut self) -> OutputResult<()>;
}
