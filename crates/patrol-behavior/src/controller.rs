//! The behavior controller — one agent's patrol/search state machine.

use std::sync::Arc;

use patrol_core::{AgentId, Vec2, advance};
use patrol_route::{PatrolRoute, RouteCursor};
use patrol_sound::{PathPoint, SoundEvent, SoundKind};

use crate::activity::Activity;
use crate::profile::AgentProfile;
use crate::state::BehaviorState;

/// Squared distance at which a patrol waypoint counts as reached.
pub const ARRIVAL_TOLERANCE_SQ: f32 = 0.05;

/// Squared distance at which a search-path point counts as reached.
pub const SEARCH_TOLERANCE_SQ: f32 = 0.5;

/// What one tick produced: the agent's moved position and, if sound
/// emission is enabled, a walk sound stamped with the *pre-move* position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickOutput {
    pub position: Vec2,
    pub sound: Option<SoundEvent>,
}

/// Per-agent state machine: patrol waypoints, pause at each, divert to
/// investigate sound paths, resume afterwards.
///
/// The controller is driven by [`tick`][Self::tick] once per frame and
/// receives investigation requests through
/// [`notify_sound_source`][Self::notify_sound_source] between frames.  It
/// never fails: degenerate inputs (no waypoints, empty paths) degrade to
/// no-ops.
pub struct BehaviorController {
    agent: AgentId,
    profile: AgentProfile,
    route: Arc<PatrolRoute>,
    state: BehaviorState,
}

impl BehaviorController {
    /// `profile` is assumed validated (see [`AgentProfile::validate`]); the
    /// sim builder does this at spawn time.
    pub fn new(agent: AgentId, profile: AgentProfile, route: Arc<PatrolRoute>) -> Self {
        let state = BehaviorState::new(&profile);
        Self { agent, profile, route, state }
    }

    // ── Per-tick entry point ──────────────────────────────────────────────

    /// Advance one frame: emit the walk sound, then run exactly one
    /// activity's logic.
    ///
    /// `position` is the agent's current position; the moved position comes
    /// back in the output (the controller owns no transform).  The sound
    /// event, when enabled, is emitted every tick regardless of activity
    /// and carries the position *before* this tick's movement.
    pub fn tick(&mut self, position: Vec2, dt: f32) -> TickOutput {
        let sound = self.profile.emits_sound.then(|| {
            SoundEvent::new(self.agent, position, self.profile.volume, SoundKind::Walk)
        });

        let position = match self.state.activity {
            Activity::Waiting => {
                self.wait_step(dt);
                position
            }
            Activity::Patrolling => self.patrol_step(position, dt),
            Activity::Searching => self.search_step(position, dt),
        };

        TickOutput { position, sound }
    }

    // ── Interruption entry point ──────────────────────────────────────────

    /// Offer the agent a sound-intensity path to investigate.
    ///
    /// Entering a search parks the current activity in `resume_to`; repeat
    /// notifications while already searching leave `resume_to` alone, so
    /// the original pre-search activity survives any number of follow-ups
    /// (one level of interruption, never a stack).
    ///
    /// The offered path replaces the held one only when nothing useful is
    /// held, or when its lead point is strictly more intense than the held
    /// lead — a less or equally urgent report is discarded and the current
    /// investigation continues.
    ///
    /// Must be called between ticks, never concurrently with [`tick`].
    pub fn notify_sound_source(&mut self, path: Vec<PathPoint>) {
        if self.state.activity != Activity::Searching {
            self.state.resume_to = self.state.activity;
            self.state.activity = Activity::Searching;
        }

        let adopt = match self.state.search_path.front() {
            None => true,
            Some(held) => match path.first() {
                Some(offered) => offered.net_intensity > held.net_intensity,
                None => false,
            },
        };
        if adopt {
            self.state.search_path = path.into();
        }
    }

    // ── Activity steps ────────────────────────────────────────────────────

    /// Count down the pause; on expiry hand control to patrol and re-arm
    /// the timer for the next pause.  No movement while waiting.
    fn wait_step(&mut self, dt: f32) {
        self.state.wait_remaining -= dt;
        if self.state.wait_remaining <= 0.0 {
            self.state.resume_to = Activity::Waiting;
            self.state.activity = Activity::Patrolling;
            self.state.wait_remaining = self.profile.wait_secs;
        }
    }

    /// Walk toward the current target waypoint; on arrival start the next
    /// pause and advance the cursor.
    ///
    /// The first call chooses the closest waypoint as the initial target.
    /// Arrival is move-then-check, so an agent can land and transition in
    /// the same tick.  A single-waypoint route is approached and then held:
    /// no arrival transition fires, the agent just stands there.
    fn patrol_step(&mut self, position: Vec2, dt: f32) -> Vec2 {
        if self.state.cursor.is_none() {
            self.state.cursor = RouteCursor::initial(&self.route, position);
        }
        let Some(mut cursor) = self.state.cursor else {
            // empty route: nothing to patrol
            return position;
        };

        let target = self.route.point(cursor.target);
        let moved = advance(position, target, self.profile.patrol_speed, dt);

        if moved.dist_sq(target) < ARRIVAL_TOLERANCE_SQ && self.route.len() > 1 {
            self.state.resume_to = Activity::Patrolling;
            self.state.activity = Activity::Waiting;
            cursor.advance(&self.route);
            self.state.cursor = Some(cursor);
        }
        moved
    }

    /// Chase the front of the search path, one action per tick:
    /// out of tolerance → move; within tolerance → pop; path empty → exit
    /// the search and restore the parked activity, leaving `Searching` in
    /// `resume_to` as the history marker.
    fn search_step(&mut self, position: Vec2, dt: f32) -> Vec2 {
        let Some(&lead) = self.state.search_path.front() else {
            self.state.activity = self.state.resume_to;
            self.state.resume_to = Activity::Searching;
            return position;
        };

        if position.dist_sq(lead.position) > SEARCH_TOLERANCE_SQ {
            advance(position, lead.position, self.profile.search_speed, dt)
        } else {
            self.state.search_path.pop_front();
            position
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    #[inline]
    pub fn route(&self) -> &Arc<PatrolRoute> {
        &self.route
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.state.activity
    }

    #[inline]
    pub fn resume_to(&self) -> Activity {
        self.state.resume_to
    }

    #[inline]
    pub fn cursor(&self) -> Option<RouteCursor> {
        self.state.cursor
    }

    #[inline]
    pub fn wait_remaining(&self) -> f32 {
        self.state.wait_remaining
    }

    /// The held search path, front first.
    pub fn search_path(&self) -> impl Iterator<Item = &PathPoint> {
        self.state.search_path.iter()
    }

    #[inline]
    pub fn state(&self) -> &BehaviorState {
        &self.state
    }
}
