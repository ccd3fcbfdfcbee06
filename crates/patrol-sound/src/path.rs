//! Sound-intensity path records.

use patrol_core::Vec2;

/// One point of a sound-intensity path: a position to investigate and the
/// net intensity the propagation model computed for it.
///
/// Paths are ordered most-urgent-first; agents consume them strictly from
/// the front.  The lead point's `net_intensity` is also what decides whether
/// a new path replaces one already being investigated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub position: Vec2,
    pub net_intensity: f32,
}

impl PathPoint {
    pub fn new(position: Vec2, net_intensity: f32) -> Self {
        Self { position, net_intensity }
    }
}
