//! The controller's mutable state.

use std::collections::VecDeque;

use patrol_route::RouteCursor;
use patrol_sound::PathPoint;

use crate::activity::Activity;
use crate::profile::AgentProfile;

/// Everything the behavior controller mutates.
///
/// Fields are `pub` for inspection (tests, output rows); only
/// [`BehaviorController`][crate::BehaviorController] writes them.
///
/// # Invariants
///
/// - `cursor` is `None` until the first patrol decision; once set, its
///   target is a valid index into the agent's route for the agent's
///   lifetime.
/// - `resume_to` holds the activity to restore when the current search
///   ends.  After a search exits it holds `Searching` until the next
///   transition overwrites it — a history marker saying "what just ended
///   was a search".
/// - `search_path` is consumed strictly from the front.
#[derive(Clone, Debug)]
pub struct BehaviorState {
    pub activity: Activity,
    pub resume_to: Activity,
    pub cursor: Option<RouteCursor>,
    pub wait_remaining: f32,
    pub search_path: VecDeque<PathPoint>,
}

impl BehaviorState {
    /// Fresh state at agent spawn: `Waiting` with a full timer, no patrol
    /// target chosen yet.
    pub fn new(profile: &AgentProfile) -> Self {
        Self {
            activity: Activity::Waiting,
            resume_to: Activity::Waiting,
            cursor: None,
            wait_remaining: profile.wait_secs,
            search_path: VecDeque::new(),
        }
    }
}
