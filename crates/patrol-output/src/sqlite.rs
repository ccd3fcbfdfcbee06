//! SQLite output backend (feature `sqlite`).
//!
//! Everything lands in one `output.db` per run: tables `agent_snapshots`,
//! `sound_events`, and `tick_summaries`.  WAL journaling keeps per-tick
//! commits cheap; readers can attach to the database while the sim is
//! still running.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, SoundEventRow, TickSummaryRow};

/// Single-database SQLite writer.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open `dir/output.db`, creating the file and schema as needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id INTEGER NOT NULL,
                 tick     INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 activity TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS sound_events (
                 tick      INTEGER NOT NULL,
                 source_id INTEGER NOT NULL,
                 x         REAL    NOT NULL,
                 y         REAL    NOT NULL,
                 volume    REAL    NOT NULL,
                 kind      TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick           INTEGER PRIMARY KEY,
                 sim_time_secs  REAL    NOT NULL,
                 sounds_emitted INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots (agent_id, tick, x, y, activity) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick,
                    row.x,
                    row.y,
                    row.activity,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_sounds(&mut self, rows: &[SoundEventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO sound_events (tick, source_id, x, y, volume, kind) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.source_id,
                    row.x,
                    row.y,
                    row.volume,
                    row.kind,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, sim_time_secs, sounds_emitted) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.tick, row.sim_time_secs, row.sounds_emitted],
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
