//! Cycle-aware route cursor.
//!
//! The cursor is the only mutable piece of patrol state: which waypoint the
//! agent is heading for and in which direction it is walking the sequence.
//! "No target chosen yet" is modelled by the *absence* of a cursor
//! (`Option<RouteCursor>` in the behavior state), not by a sentinel index,
//! so every constructed cursor carries a valid in-bounds target.

use patrol_core::Vec2;

use crate::route::{CycleMode, PatrolRoute};

/// Direction of travel along the waypoint sequence.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ascending waypoint indices.
    Forward,
    /// Descending waypoint indices.
    Backward,
}

impl Direction {
    #[inline]
    pub fn flip(self) -> Direction {
        match self {
            Direction::Forward  => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Index delta for one step in this direction.
    #[inline]
    fn step(self) -> isize {
        match self {
            Direction::Forward  => 1,
            Direction::Backward => -1,
        }
    }
}

/// Position within a patrol cycle: the waypoint being approached plus the
/// direction of travel.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteCursor {
    /// Index of the waypoint currently being approached.  Always in bounds.
    pub target: usize,
    pub direction: Direction,
}

impl RouteCursor {
    /// First patrol decision: target the waypoint closest to `pos`.
    ///
    /// Travel starts descending when the closest waypoint is index 0 and
    /// ascending otherwise, as if the agent had just come from the target's
    /// predecessor.  Returns `None` for an empty route.
    pub fn initial(route: &PatrolRoute, pos: Vec2) -> Option<RouteCursor> {
        let target = route.closest_waypoint(pos)?;
        let direction = if target == 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Some(RouteCursor { target, direction })
    }

    /// Step to the next waypoint after reaching the current target.
    ///
    /// Interior targets step one index in the current direction.  At either
    /// end of the sequence the route's [`CycleMode`] decides: `Loop` wraps
    /// modulo the length keeping the direction, `Bounce` flips the direction
    /// and steps back inward.  A single-waypoint route never moves the
    /// cursor.
    pub fn advance(&mut self, route: &PatrolRoute) {
        let n = route.len() as isize;
        if n < 2 {
            return;
        }
        let candidate = self.target as isize + self.direction.step();
        match route.cycle {
            CycleMode::Loop => {
                self.target = candidate.rem_euclid(n) as usize;
            }
            CycleMode::Bounce => {
                if (0..n).contains(&candidate) {
                    self.target = candidate as usize;
                } else {
                    self.direction = self.direction.flip();
                    self.target =
                        (self.target as isize + self.direction.step()) as usize;
                }
            }
        }
    }
}
