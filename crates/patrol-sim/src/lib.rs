//! `patrol-sim` — tick loop orchestrator for the patrol framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Intent — every controller computes one TickOutput from its agent's
//!              current position (parallel with the `parallel` feature).
//!   ② Apply  — in ascending AgentId order: write the new position back,
//!              route the walk sound into the SoundField, fire observers.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                        |
//! |------------|-----------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use patrol_route::{CycleMode, PatrolRoute};
//! use patrol_sim::{NoopObserver, SimBuilder};
//! use patrol_sound::NullSoundField;
//!
//! let route = Arc::new(PatrolRoute::new(points, CycleMode::Loop));
//! let mut builder = SimBuilder::new(config, NullSoundField);
//! builder.spawn(profile, route, start)?;
//! let mut sim = builder.build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
