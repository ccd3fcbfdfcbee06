//! Builder for constructing a [`Sim`].

use std::sync::Arc;

use patrol_behavior::{AgentProfile, BehaviorController};
use patrol_core::{AgentId, SimConfig, Vec2};
use patrol_route::PatrolRoute;
use patrol_sound::SoundField;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<F>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - `F: SoundField` — the emission sink (use
///   [`NullSoundField`][patrol_sound::NullSoundField] when nobody listens)
/// - at least one agent, added with [`spawn`][Self::spawn]
///
/// Agents are numbered in spawn order: the first spawn is `AgentId(0)`, the
/// second `AgentId(1)`, and so on.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = SimBuilder::new(config, NullSoundField);
/// let guard = builder.spawn(profile, Arc::clone(&route), Vec2::ZERO)?;
/// let mut sim = builder.build()?;
/// sim.run_ticks(300, &mut NoopObserver);
/// sim.notify_sound_source(guard, path)?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<F: SoundField> {
    config:      SimConfig,
    field:       F,
    controllers: Vec<BehaviorController>,
    positions:   Vec<Vec2>,
}

impl<F: SoundField> SimBuilder<F> {
    /// Create a builder with the run configuration and the sound field.
    pub fn new(config: SimConfig, field: F) -> Self {
        Self {
            config,
            field,
            controllers: Vec::new(),
            positions:   Vec::new(),
        }
    }

    /// Add one agent and return its id.
    ///
    /// The profile is validated here, so a negative speed or wait time fails
    /// at scene assembly rather than mid-run.  Routes are shared read-only:
    /// clone the `Arc` when several agents walk the same beat.
    pub fn spawn(
        &mut self,
        profile: AgentProfile,
        route:   Arc<PatrolRoute>,
        start:   Vec2,
    ) -> SimResult<AgentId> {
        let agent = AgentId(self.controllers.len() as u32);
        profile
            .validate()
            .map_err(|source| SimError::Profile { agent, source })?;
        self.controllers.push(BehaviorController::new(agent, profile, route));
        self.positions.push(start);
        Ok(agent)
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<F>> {
        self.config.validate()?;
        if self.controllers.is_empty() {
            return Err(SimError::NoAgents);
        }

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            positions:   self.positions,
            controllers: self.controllers,
            field:       self.field,
        })
    }
}
