//! `patrol-behavior` — the per-agent patrol/search state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`profile`]    | `AgentProfile` — immutable per-agent configuration         |
//! | [`activity`]   | `Activity` — Waiting / Patrolling / Searching              |
//! | [`state`]      | `BehaviorState` — the controller's mutable state           |
//! | [`controller`] | `BehaviorController`, `TickOutput`, arrival tolerances     |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Tick contract
//!
//! A controller owns no position.  The driver hands in the agent's current
//! position each tick and takes back a [`TickOutput`] with the moved
//! position and an optional sound event:
//!
//! ```text
//! loop {
//!     let out = controller.tick(position, dt);
//!     position = out.position;
//!     if let Some(event) = out.sound { field.emit(event); }
//! }
//! ```
//!
//! [`BehaviorController::notify_sound_source`] is the one entry point called
//! from outside the tick cadence.  It must run between ticks — controller
//! state lives in a single logical thread of control; nothing here is
//! `Sync`-protected.
//!
//! # Interruption model
//!
//! A search interrupts whatever was active (Patrolling or Waiting) and the
//! interrupted activity is parked in a single `resume_to` slot.  Exactly one
//! level of interruption exists: further notifications while searching only
//! compete on path urgency, they never stack.

pub mod activity;
pub mod controller;
pub mod error;
pub mod profile;
pub mod state;


pub use activity::Activity;
pub use controller::{
    ARRIVAL_TOLERANCE_SQ, BehaviorController, SEARCH_TOLERANCE_SQ, TickOutput,
};
pub use error::{BehaviorError, BehaviorResult};
pub use profile::AgentProfile;
pub use state::BehaviorState;
