//! Patrol route representation.

use patrol_core::Vec2;

/// What happens when a patrol reaches either end of the waypoint sequence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleMode {
    /// Wrap around to the far end, keeping the direction of travel.
    Loop,
    /// Reverse and retrace the sequence.
    Bounce,
}

impl CycleMode {
    /// Human-readable label, matching the route CSV `cycle` column.
    pub fn as_str(self) -> &'static str {
        match self {
            CycleMode::Loop   => "loop",
            CycleMode::Bounce => "bounce",
        }
    }
}

impl std::fmt::Display for CycleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered waypoint sequence with a cycle mode.
///
/// Fields are `pub` for direct indexed access; a route has no invariants
/// beyond what the type states (an empty route is legal and is treated as
/// "nothing to patrol" by the behavior layer).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    /// Waypoint positions in patrol order.
    pub points: Vec<Vec2>,
    /// End-of-sequence behavior.
    pub cycle: CycleMode,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec2>, cycle: CycleMode) -> Self {
        Self { points, cycle }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position of waypoint `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds — cursors guarantee in-bounds targets.
    #[inline]
    pub fn point(&self, i: usize) -> Vec2 {
        self.points[i]
    }

    /// Index of the waypoint closest to `pos` by squared distance.
    ///
    /// Linear scan; ties resolve to the lowest index (strict `<`).  Returns
    /// `None` only for an empty route.
    pub fn closest_waypoint(&self, pos: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &p) in self.points.iter().enumerate() {
            let d = pos.dist_sq(p);
            match best {
                Some((_, best_d)) if d < best_d => best = Some((i, d)),
                None => best = Some((i, d)),
                _ => {}
            }
        }
        best.map(|(i, _)| i)
    }
}
