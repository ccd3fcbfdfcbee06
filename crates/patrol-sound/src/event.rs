//! Sound events emitted by agents.

use patrol_core::{AgentId, Vec2};

/// What produced a sound.
///
/// Walking is the only kind agents emit today; the enum is non-exhaustive so
/// scenario crates compiled against a future set keep working.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum SoundKind {
    /// Footsteps while moving or idling on patrol.
    #[default]
    Walk,
}

impl SoundKind {
    /// Human-readable label, useful for CSV/Parquet column values.
    pub fn as_str(self) -> &'static str {
        match self {
            SoundKind::Walk => "walk",
        }
    }
}

impl std::fmt::Display for SoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted sound: who, where, how loud, what kind.
///
/// `position` is the emitter's position at the *start* of the tick, before
/// any movement that tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundEvent {
    pub source: AgentId,
    pub position: Vec2,
    pub volume: f32,
    pub kind: SoundKind,
}

impl SoundEvent {
    pub fn new(source: AgentId, position: Vec2, volume: f32, kind: SoundKind) -> Self {
        Self { source, position, volume, kind }
    }
}
