//! Integration tests for patrol-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, SoundEventRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x: agent_id as f32 * 2.0,
            y: 0.5,
            activity: "patrolling",
        }
    }

    fn sound_row(tick: u64, source_id: u32) -> SoundEventRow {
        SoundEventRow {
            tick,
            source_id,
            x: 1.0,
            y: 2.0,
            volume: 0.75,
            kind: "walk",
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            sim_time_secs:  tick as f64 * 0.25,
            sounds_emitted: tick,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("sound_events.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "x", "y", "activity"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("sound_events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "source_id", "x", "y", "volume", "kind"]);

        let mut rdr3 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers3: Vec<_> = rdr3.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers3, ["tick", "sim_time_secs", "sounds_emitted"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][4], "patrolling");
        assert_eq!(&read_rows[1][2], "2"); // x = agent_id * 2.0
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_sound_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_sounds(&[sound_row(2, 7)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("sound_events.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "2");    // tick
        assert_eq!(&read_rows[0][1], "7");    // source_id
        assert_eq!(&read_rows[0][4], "0.75"); // volume
        assert_eq!(&read_rows[0][5], "walk");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");    // tick
        assert_eq!(&read_rows[0][1], "0.75"); // 3 * 0.25 s
        assert_eq!(&read_rows[0][2], "3");    // sounds_emitted
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
        w.write_sounds(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use std::sync::Arc;

        use patrol_behavior::AgentProfile;
        use patrol_core::{SimConfig, Vec2};
        use patrol_route::{CycleMode, PatrolRoute};
        use patrol_sim::SimBuilder;
        use patrol_sound::NullSoundField;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            dt_secs:                 0.25,
            total_ticks:             6,
            seed:                    1,
            num_threads:             Some(1),
            snapshot_interval_ticks: 2,
        };
        let profile = AgentProfile {
            patrol_speed: 2.0,
            search_speed: 4.0,
            wait_secs:    1.0,
            emits_sound:  true,
            volume:       1.0,
        };
        let route = Arc::new(PatrolRoute::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)],
            CycleMode::Loop,
        ));

        let mut builder = SimBuilder::new(config.clone(), NullSoundField);
        for i in 0..3u32 {
            builder
                .spawn(profile, Arc::clone(&route), Vec2::new(i as f32 * 3.0, 0.0))
                .unwrap();
        }
        let mut sim = builder.build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // snapshot_interval = 2 → snapshots at ticks 0, 2, 4 → 3 ticks × 3 agents.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 3 ticks × 3 agents = 9 snapshot rows");
        assert_eq!(&rows[0][4], "waiting", "agents spend tick 0 waiting");

        // Every agent emits a walk sound every tick: 3 agents × 6 ticks.
        let mut rdr = csv::Reader::from_path(dir.path().join("sound_events.csv")).unwrap();
        assert_eq!(rdr.records().count(), 18);

        // One summary row per tick.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 6);
        assert_eq!(&summaries[2][1], "0.5", "tick 2 at 0.25 s per tick");
        assert_eq!(&summaries[0][2], "3", "all three agents emitted on tick 0");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{AgentSnapshotRow, SoundEventRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            AgentSnapshotRow { agent_id: 0, tick: 1, x: 0.0, y: 0.0, activity: "waiting" },
            AgentSnapshotRow { agent_id: 1, tick: 1, x: 3.5, y: 0.0, activity: "patrolling" },
            AgentSnapshotRow { agent_id: 2, tick: 1, x: 6.0, y: 2.0, activity: "searching" },
        ];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_activity_stored_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[AgentSnapshotRow {
            agent_id: 0, tick: 0, x: 1.0, y: 2.0, activity: "searching",
        }]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let activity: String = conn.query_row(
            "SELECT activity FROM agent_snapshots WHERE agent_id = 0", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(activity, "searching");
    }

    #[test]
    fn sqlite_sound_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            SoundEventRow { tick: 4, source_id: 0, x: 0.0, y: 0.0, volume: 1.0, kind: "walk" },
            SoundEventRow { tick: 4, source_id: 1, x: 3.0, y: 0.0, volume: 0.5, kind: "walk" },
        ];
        w.write_sounds(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sound_events WHERE tick = 4", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 2);

        let kind: String = conn.query_row(
            "SELECT kind FROM sound_events WHERE source_id = 1", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(kind, "walk");
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 7, sim_time_secs: 1.75, sounds_emitted: 42,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, sim_time, sounds): (i64, f64, i64) = conn.query_row(
            "SELECT tick, sim_time_secs, sounds_emitted FROM tick_summaries WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(tick, 7);
        assert_eq!(sim_time, 1.75);
        assert_eq!(sounds, 42);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::row::{AgentSnapshotRow, SoundEventRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("agent_snapshots.parquet").exists());
        assert!(dir.path().join("sound_events.parquet").exists());
        assert!(dir.path().join("tick_summaries.parquet").exists());
    }

    #[test]
    fn parquet_snapshot_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        let rows = vec![
            AgentSnapshotRow { agent_id: 0, tick: 2, x: 0.0, y: 0.0, activity: "waiting" },
            AgentSnapshotRow { agent_id: 1, tick: 2, x: 3.5, y: 0.0, activity: "patrolling" },
        ];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("agent_snapshots.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2, "expected 2 rows");

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, ["agent_id", "tick", "x", "y", "activity"]);
    }

    #[test]
    fn parquet_sound_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_sounds(&[SoundEventRow {
            tick: 9, source_id: 3, x: 1.0, y: 1.0, volume: 1.0, kind: "walk",
        }]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("sound_events.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 1);

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, ["tick", "source_id", "x", "y", "volume", "kind"]);
    }

    #[test]
    fn parquet_activity_column_type() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[AgentSnapshotRow {
            agent_id: 0, tick: 0, x: 0.0, y: 0.0, activity: "waiting",
        }]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("agent_snapshots.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();

        let activity_field = schema.field_with_name("activity").unwrap();
        assert_eq!(*activity_field.data_type(), DataType::Utf8);
    }

    #[test]
    fn parquet_finish_required() {
        // A Parquet file whose writer was NOT closed is invalid (missing footer).
        // We verify that a dropped-without-finish writer produces an unreadable file.
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_snapshots(&[AgentSnapshotRow {
                agent_id: 0, tick: 0, x: 0.0, y: 0.0, activity: "waiting",
            }]).unwrap();
            // Drop without calling finish() — ArrowWriter's Drop will NOT write the footer.
        }

        let file = std::fs::File::open(dir.path().join("agent_snapshots.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
