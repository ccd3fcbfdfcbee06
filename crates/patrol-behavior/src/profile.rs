//! Immutable per-agent configuration.

use crate::error::{BehaviorError, BehaviorResult};

/// Everything about an agent that is fixed at spawn time.
///
/// Speeds are metres per simulated second; `wait_secs` is the pause at each
/// reached waypoint.  Profiles are validated once when the agent is spawned
/// — the tick path assumes them well-formed and never re-checks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentProfile {
    /// Movement speed while patrolling between waypoints.
    pub patrol_speed: f32,
    /// Movement speed while investigating a sound path.
    pub search_speed: f32,
    /// Pause duration at each reached waypoint.
    pub wait_secs: f32,
    /// Whether the agent emits a walk sound each tick.
    pub emits_sound: bool,
    /// Volume stamped on emitted sound events.
    pub volume: f32,
}

impl AgentProfile {
    /// Reject profiles the state machine's assumptions do not cover.
    pub fn validate(&self) -> BehaviorResult<()> {
        let checks = [
            ("patrol_speed", self.patrol_speed),
            ("search_speed", self.search_speed),
            ("wait_secs", self.wait_secs),
            ("volume", self.volume),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(BehaviorError::Profile(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
