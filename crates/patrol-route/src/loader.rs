//! CSV route loader.
//!
//! # CSV format
//!
//! One row per waypoint.  All rows for the same route must share the same
//! `cycle` value, and route ids must be contiguous from 0.
//!
//! ```csv
//! route_id,seq,x,y,cycle
//! 0,0,0.0,0.0,loop
//! 0,1,12.0,0.0,loop
//! 0,2,12.0,8.0,loop
//! 1,0,20.0,4.0,bounce
//! 1,1,28.0,4.0,bounce
//! ```
//!
//! **`cycle`** field:
//!
//! | Value    | Meaning                                       |
//! |----------|-----------------------------------------------|
//! | `loop`   | [`CycleMode::Loop`] — wrap at the ends        |
//! | `bounce` | [`CycleMode::Bounce`] — reverse at the ends   |
//!
//! Rows may appear in any order; waypoints are sorted by `seq` per route.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use patrol_core::Vec2;

use crate::error::{RouteError, RouteResult};
use crate::route::{CycleMode, PatrolRoute};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route_id: u32,
    seq:      u32,
    x:        f32,
    y:        f32,
    cycle:    String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load patrol routes from a CSV file.
///
/// Returns a `Vec` indexed by `RouteId`; ids in the file must be contiguous
/// from 0.  An empty file yields an empty `Vec`.
pub fn load_routes_csv(path: &Path) -> RouteResult<Vec<PatrolRoute>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// scenario data.
pub fn load_routes_reader<R: Read>(reader: R) -> RouteResult<Vec<PatrolRoute>> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: HashMap<u32, Vec<RouteRecord>> = HashMap::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        by_route.entry(row.route_id).or_default().push(row);
    }

    let route_count = by_route.keys().map(|&id| id as usize + 1).max().unwrap_or(0);

    // ── Build one PatrolRoute per id ──────────────────────────────────────
    let mut routes: Vec<PatrolRoute> = Vec::with_capacity(route_count);

    for id in 0..route_count as u32 {
        let mut rows = by_route
            .remove(&id)
            .ok_or(RouteError::MissingRoute(id))?;

        rows.sort_by_key(|r| r.seq);
        for pair in rows.windows(2) {
            if pair[0].seq == pair[1].seq {
                return Err(RouteError::DuplicateSeq { route: id, seq: pair[0].seq });
            }
        }

        // All rows for the same route are expected to share the cycle mode.
        let cycle = parse_cycle(&rows[0].cycle)?;
        for r in &rows[1..] {
            if parse_cycle(&r.cycle)? != cycle {
                return Err(RouteError::CycleMismatch(id));
            }
        }

        let points: Vec<Vec2> = rows.iter().map(|r| Vec2::new(r.x, r.y)).collect();
        routes.push(PatrolRoute::new(points, cycle));
    }

    Ok(routes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_cycle(s: &str) -> Result<CycleMode, RouteError> {
    match s.trim() {
        "loop"   => Ok(CycleMode::Loop),
        "bounce" => Ok(CycleMode::Bounce),
        other => Err(RouteError::Parse(format!(
            "invalid cycle {other:?}: expected \"loop\" or \"bounce\""
        ))),
    }
}
