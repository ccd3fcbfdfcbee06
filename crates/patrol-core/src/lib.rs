//! `patrol-core` — foundational types for the `patrol_sim` framework.
//!
//! This crate is a dependency of every other `patrol-*` crate.  It
//! intentionally has no `patrol-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `RouteId`                                      |
//! | [`vec2`]   | `Vec2`, squared distance, the `advance` movement primitive |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`rng`]    | `SimRng` — seeded scenario RNG                            |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, RouteId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use vec2::{Vec2, advance};
