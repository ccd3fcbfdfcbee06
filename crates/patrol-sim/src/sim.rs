//! The `Sim` struct and its tick loop.

use patrol_behavior::{BehaviorController, TickOutput};
use patrol_core::{AgentId, SimClock, SimConfig, Vec2};
use patrol_sound::{PathPoint, SoundEvent, SoundField};

use crate::{SimError, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<F>` holds all simulation state and drives the two-phase tick loop:
///
/// 1. **Intent phase** (optionally parallel with the `parallel` feature):
///    every controller computes a [`TickOutput`] from its agent's current
///    position.  Controllers mutate only their own state, so this phase is
///    embarrassingly parallel.
/// 2. **Apply phase** (sequential, ascending `AgentId` for determinism):
///    write each agent's new position back, then route its walk sound into
///    the [`SoundField`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<F: SoundField> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock.  Tracks the current tick and maps it to sim time.
    pub clock: SimClock,

    /// Current agent positions, indexed by `AgentId`.  Controllers receive
    /// their position by value each tick; only the apply phase writes here.
    pub positions: Vec<Vec2>,

    /// Per-agent behavior controllers, indexed by `AgentId`.
    pub controllers: Vec<BehaviorController>,

    /// Every walk sound emitted during the apply phase lands here.
    pub field: F,
}

impl<F: SoundField> Sim<F> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Running never fails: controllers absorb bad input by standing still.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let sounds = self.process_tick();
            if !sounds.is_empty() {
                observer.on_sounds(now, &sounds);
            }
            observer.on_tick_end(now, sounds.len());
            if now.0.is_multiple_of(self.config.snapshot_interval_ticks) {
                observer.on_snapshot(now, &self.positions, &self.controllers);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for scenario scripts that inject sound paths
    /// between stretches of the run.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let sounds = self.process_tick();
            if !sounds.is_empty() {
                observer.on_sounds(now, &sounds);
            }
            observer.on_tick_end(now, sounds.len());
            if now.0.is_multiple_of(self.config.snapshot_interval_ticks) {
                observer.on_snapshot(now, &self.positions, &self.controllers);
            }
            self.clock.advance();
        }
    }

    /// Forward a sound-intensity path to one agent's controller.
    ///
    /// The controller switches to searching and keeps whichever path has the
    /// more intense lead point; see
    /// [`BehaviorController::notify_sound_source`].  Takes effect on the next
    /// tick.
    ///
    /// Returns [`SimError::UnknownAgent`] if no agent has this id.
    pub fn notify_sound_source(&mut self, agent: AgentId, path: Vec<PathPoint>) -> SimResult<()> {
        match self.controllers.get_mut(agent.index()) {
            Some(controller) => {
                controller.notify_sound_source(path);
                Ok(())
            }
            None => Err(SimError::UnknownAgent(agent)),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance every agent one tick.  Returns the tick's sound events in
    /// ascending source `AgentId` order.
    fn process_tick(&mut self) -> Vec<SoundEvent> {
        // ── Phase 1: intent (produce) ─────────────────────────────────────
        let outputs = self.compute_outputs();

        // ── Phase 2: apply (consume) ──────────────────────────────────────
        //
        // Sequential application in ascending AgentId order makes positions
        // and the field's event stream deterministic even when the intent
        // phase ran in parallel.
        let mut sounds = Vec::new();
        for (i, output) in outputs.into_iter().enumerate() {
            self.positions[i] = output.position;
            if let Some(event) = output.sound {
                self.field.emit(event);
                sounds.push(event);
            }
        }
        sounds
    }

    /// Compute every agent's [`TickOutput`] for this tick.
    ///
    /// With the `parallel` Cargo feature, controllers tick on Rayon's thread
    /// pool; each owns its state, so the only shared read is the positions
    /// slice.
    fn compute_outputs(&mut self) -> Vec<TickOutput> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let controllers = &mut self.controllers;
        let positions   = self.positions.as_slice();
        let dt          = self.clock.dt_secs;

        #[cfg(not(feature = "parallel"))]
        {
            controllers
                .iter_mut()
                .zip(positions)
                .map(|(controller, &position)| controller.tick(position, dt))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            controllers
                .par_iter_mut()
                .zip(positions.par_iter())
                .map(|(controller, &position)| controller.tick(position, dt))
                .collect()
        }
    }
}
