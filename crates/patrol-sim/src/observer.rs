//! Hook points into the tick loop.

use patrol_behavior::BehaviorController;
use patrol_core::{Tick, Vec2};
use patrol_sound::SoundEvent;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// Every method has a no-op default, so an implementor overrides only the
/// hooks it cares about.
///
/// # Example — watching for noisy ticks
///
/// ```rust,ignore
/// struct NoiseAlarm { threshold: usize }
///
/// impl SimObserver for NoiseAlarm {
///     fn on_tick_end(&mut self, tick: Tick, sounds: usize) {
///         if sounds > self.threshold {
///             println!("{tick}: {sounds} sounds — something is up");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Runs first each tick, before any controller is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Runs last each tick.  `sounds` is how many sound events the tick
    /// emitted.
    fn on_tick_end(&mut self, _tick: Tick, _sounds: usize) {}

    /// Runs after the apply phase with the tick's sound events, in
    /// ascending source `AgentId` order.  Skipped on silent ticks.
    ///
    /// The same events have already been routed into the sim's
    /// [`SoundField`][patrol_sound::SoundField]; this hook is for recording
    /// and scenario scripting, not propagation.
    fn on_sounds(&mut self, _tick: Tick, _sounds: &[SoundEvent]) {}

    /// Runs every `config.snapshot_interval_ticks` ticks with read-only
    /// views of the whole scene, so recorders never need to know the sim's
    /// internals.  The two slices are parallel, indexed by `AgentId`.
    fn on_snapshot(
        &mut self,
        _tick:        Tick,
        _positions:   &[Vec2],
        _controllers: &[BehaviorController],
    ) {}

    /// Runs once, after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// The observer equivalent of `/dev/null`, for runs nobody is watching.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
