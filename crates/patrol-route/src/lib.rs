//! `patrol-route` — patrol routes and cycle-aware traversal.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`route`]  | `PatrolRoute`, `CycleMode`, closest-waypoint query        |
//! | [`cursor`] | `RouteCursor`, `Direction` — which waypoint is next       |
//! | [`loader`] | `load_routes_csv`, `load_routes_reader`                   |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                            |
//!
//! # Traversal model (summary)
//!
//! A route is an ordered waypoint list plus a [`CycleMode`].  A
//! [`RouteCursor`] tracks the waypoint currently being approached and the
//! direction of travel; [`RouteCursor::advance`] applies the cycle rule when
//! a waypoint is reached:
//!
//! ```text
//! Loop:    …, n-2, n-1, 0, 1, …          (wraps, direction kept)
//! Bounce:  0, 1, …, n-1, n-2, …, 1, 0, … (reverses at the ends)
//! ```
//!
//! Routes are immutable after construction and shared across agents
//! (`Arc<PatrolRoute>`); each agent owns its own cursor.

pub mod cursor;
pub mod error;
pub mod loader;
pub mod route;

#[cfg(test)]
mod tests;

pub use cursor::{Direction, RouteCursor};
pub use error::{RouteError, RouteResult};
pub use loader::{load_routes_csv, load_routes_reader};
pub use route::{CycleMode, PatrolRoute};
