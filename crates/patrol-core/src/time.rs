//! Simulation time model.
//!
//! The canonical time unit is an integer [`Tick`]; simulated seconds are
//! derived from it (`sim_time = tick * dt_secs`).  Keeping the counter
//! integral makes loop bounds and snapshot intervals exact — only durations
//! such as wait timers and movement steps are fractional.  One tick is one
//! behavior frame: a guard simulation stepping at 10 Hz runs with
//! `dt_secs = 0.1`, and a 3 s waypoint pause then lasts 30 ticks.
//!
//! `dt_secs` is fixed for the whole run; nothing in the workspace supports
//! mid-run retiming.

use std::fmt;

use crate::error::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Absolute position on the simulation timeline, counted in frames.
///
/// `u64` never overflows in practice: even at 100 frames per simulated
/// second the counter outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

/// `Tick - Tick` is a span, not a position, so subtraction yields `u64`.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The tick counter plus its mapping to simulated seconds.
///
/// Owned by the tick loop; everything else reads it.  Plain data, cheap to
/// copy around.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds one tick represents.
    pub dt_secs: f32,
    /// The tick currently being (or about to be) processed.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock at tick 0 with the given frame length.
    pub fn new(dt_secs: f32) -> Self {
        Self {
            dt_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Step to the next tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Elapsed simulated seconds since tick 0.
    ///
    /// Derived from the tick count in f64, so long runs do not accumulate
    /// per-frame rounding.
    #[inline]
    pub fn sim_time_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt_secs as f64
    }

    /// Ticks needed to cover `secs` simulated seconds, rounding up so a
    /// timer of `secs` is never cut short.  Non-positive spans take no
    /// ticks.
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if secs <= 0.0 {
            return 0;
        }
        (secs / self.dt_secs).ceil() as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.sim_time_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the scenario crate and handed to the sim builder, which calls
/// [`SimConfig::validate`] before anything runs.  The tick loop itself
/// never re-checks these values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.  Must be finite and positive.
    pub dt_secs: f32,

    /// Total ticks to simulate.  For 60 s at 10 Hz: 600.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical scenarios.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Fire the snapshot observer hook every N ticks.  1 = every tick.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// A fresh [`SimClock`] for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt_secs)
    }

    /// Reject configurations the tick loop cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.dt_secs.is_finite() || self.dt_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "dt_secs must be finite and positive, got {}",
                self.dt_secs
            )));
        }
        if self.snapshot_interval_ticks == 0 {
            return Err(CoreError::Config(
                "snapshot_interval_ticks must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
