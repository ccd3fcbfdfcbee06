//! Plain data row types written by output backends.

/// A snapshot of one agent's position and activity at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    /// Activity label: `"waiting"`, `"patrolling"`, or `"searching"`.
    pub activity: &'static str,
}

/// One emitted sound event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEventRow {
    pub tick:      u64,
    pub source_id: u32,
    /// Where the sound was made — the source's pre-move position that tick.
    pub x:         f32,
    pub y:         f32,
    pub volume:    f32,
    pub kind:      &'static str,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub sim_time_secs:  f64,
    pub sounds_emitted: u64,
}
