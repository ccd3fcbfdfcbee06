//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.parquet`
//! - `sound_events.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    Float32Builder, Float64Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, SoundEventRow, TickSummaryRow};

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("agent_id", DataType::UInt32,  false),
        Field::new("tick",     DataType::UInt64,  false),
        Field::new("x",        DataType::Float32, false),
        Field::new("y",        DataType::Float32, false),
        Field::new("activity", DataType::Utf8,    false),
    ]))
}

fn sound_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",      DataType::UInt64,  false),
        Field::new("source_id", DataType::UInt32,  false),
        Field::new("x",         DataType::Float32, false),
        Field::new("y",         DataType::Float32, false),
        Field::new("volume",    DataType::Float32, false),
        Field::new("kind",      DataType::Utf8,    false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",           DataType::UInt64,  false),
        Field::new("sim_time_secs",  DataType::Float64, false),
        Field::new("sounds_emitted", DataType::UInt64,  false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    snapshots:     Option<ArrowWriter<File>>,
    sounds:        Option<ArrowWriter<File>>,
    summaries:     Option<ArrowWriter<File>>,
    snap_schema:   Arc<Schema>,
    sound_schema:  Arc<Schema>,
    summ_schema:   Arc<Schema>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let snap_schema  = snapshot_schema();
        let sound_schema = sound_schema();
        let summ_schema  = summary_schema();

        let snap_file = File::create(dir.join("agent_snapshots.parquet"))?;
        let snapshots = ArrowWriter::try_new(
            snap_file,
            Arc::clone(&snap_schema),
            Some(snappy_props()),
        )?;

        let sound_file = File::create(dir.join("sound_events.parquet"))?;
        let sounds = ArrowWriter::try_new(
            sound_file,
            Arc::clone(&sound_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            snapshots: Some(snapshots),
            sounds:    Some(sounds),
            summaries: Some(summaries),
            snap_schema,
            sound_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut agent_ids  = UInt32Builder::new();
        let mut ticks      = UInt64Builder::new();
        let mut xs         = Float32Builder::new();
        let mut ys         = Float32Builder::new();
        let mut activities = StringBuilder::new();

        for row in rows {
            agent_ids.append_value(row.agent_id);
            ticks.append_value(row.tick);
            xs.append_value(row.x);
            ys.append_value(row.y);
            activities.append_value(row.activity);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(agent_ids.finish()),
                Arc::new(ticks.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(activities.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_sounds(&mut self, rows: &[SoundEventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.sounds.as_mut() else {
            return Ok(());
        };

        let mut ticks      = UInt64Builder::new();
        let mut source_ids = UInt32Builder::new();
        let mut xs         = Float32Builder::new();
        let mut ys         = Float32Builder::new();
        let mut volumes    = Float32Builder::new();
        let mut kinds      = StringBuilder::new();

        for row in rows {
            ticks.append_value(row.tick);
            source_ids.append_value(row.source_id);
            xs.append_value(row.x);
            ys.append_value(row.y);
            volumes.append_value(row.volume);
            kinds.append_value(row.kind);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.sound_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(source_ids.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(volumes.finish()),
                Arc::new(kinds.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks     = UInt64Builder::new();
        let mut sim_times = Float64Builder::new();
        let mut sounds    = UInt64Builder::new();

        ticks.append_value(row.tick);
        sim_times.append_value(row.sim_time_secs);
        sounds.append_value(row.sounds_emitted);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(sim_times.finish()),
                Arc::new(sounds.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.snapshots.take() {
            w.close()?;
        }
        if let Some(w) = self.sounds.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
