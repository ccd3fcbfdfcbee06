//! The emission sink agents write into.

use crate::event::SoundEvent;

/// Receives every sound emitted during a tick.
///
/// This is the seam where a propagation model plugs in.  Implementations
/// are called from the tick loop's apply phase, one event at a time, in
/// agent order — so a deterministic field sees a deterministic stream.
pub trait SoundField {
    fn emit(&mut self, event: SoundEvent);
}

/// Discards every event.  For runs where nobody listens.
#[derive(Default)]
pub struct NullSoundField;

impl SoundField for NullSoundField {
    fn emit(&mut self, _event: SoundEvent) {}
}

/// Accumulates every event in order.  Useful for tests and for scenario
/// code that post-processes a tick's emissions.
#[derive(Default)]
pub struct RecordingSoundField {
    events: Vec<SoundEvent>,
}

impl RecordingSoundField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SoundEvent] {
        &self.events
    }

    /// Drain the recorded events, leaving the field empty.
    pub fn take_events(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl SoundField for RecordingSoundField {
    fn emit(&mut self, event: SoundEvent) {
        self.events.push(event);
    }
}
