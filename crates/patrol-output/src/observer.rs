//! The observer that turns sim hooks into output rows.

use patrol_behavior::BehaviorController;
use patrol_core::{SimConfig, Tick, Vec2};
use patrol_sim::SimObserver;
use patrol_sound::SoundEvent;

use crate::row::{AgentSnapshotRow, SoundEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots, sound events, and tick
/// summaries to any [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Observer hooks cannot return errors, so the first write failure is
/// parked internally (later writes are still attempted); ask for it with
/// [`take_error`][Self::take_error] once the run ends.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    dt_secs:    f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-seconds conversion in summary rows.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            dt_secs:    config.dt_secs,
            last_error: None,
        }
    }

    /// The first write failure of the run, if there was one.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Give back the inner writer, e.g. to inspect files after the run.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn sim_time(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.dt_secs as f64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        // First failure wins; later ones usually just repeat it.
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, sounds: usize) {
        let row = TickSummaryRow {
            tick:           tick.0,
            sim_time_secs:  self.sim_time(tick),
            sounds_emitted: sounds as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sounds(&mut self, tick: Tick, sounds: &[SoundEvent]) {
        let rows: Vec<SoundEventRow> = sounds
            .iter()
            .map(|event| SoundEventRow {
                tick:      tick.0,
                source_id: event.source.0,
                x:         event.position.x,
                y:         event.position.y,
                volume:    event.volume,
                kind:      event.kind.as_str(),
            })
            .collect();

        let result = self.writer.write_sounds(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, positions: &[Vec2], controllers: &[BehaviorController]) {
        let rows: Vec<AgentSnapshotRow> = positions
            .iter()
            .zip(controllers)
            .enumerate()
            .map(|(i, (position, controller))| AgentSnapshotRow {
                agent_id: i as u32,
                tick:     tick.0,
                x:        position.x,
                y:        position.y,
                activity: controller.activity().as_str(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
