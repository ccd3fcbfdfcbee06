//! The three-state activity domain.

/// What the agent is doing right now.
///
/// Exactly one activity is active at a time.  Agents spawn `Waiting` with a
/// full wait timer, so they pause once before their first patrol leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Activity {
    /// Paused at (or spawned near) a waypoint, counting down the wait timer.
    #[default]
    Waiting,
    /// Walking the waypoint sequence.
    Patrolling,
    /// Following a sound-intensity path toward a suspected source.
    Searching,
}

impl Activity {
    /// Human-readable label, useful for CSV/Parquet column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Waiting    => "waiting",
            Activity::Patrolling => "patrolling",
            Activity::Searching  => "searching",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
