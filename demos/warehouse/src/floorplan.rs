//! Warehouse floor definition: the patrol routes guards walk and the
//! scripted sound trails the demo injects.
//!
//! The floor is a 40 x 30 m box:
//!
//! ```text
//!  (2,28) +----------------------------------+ (38,28)
//!         |                      dock door   |
//!         |                      (34,24) *   |
//!         |                                  |
//!         |   (10,15)---(20,15)---(30,15)    |   route 1: centre aisle,
//!         |                                  |   bounce
//!         |                                  |
//!  (2,2)  +----------------------------------+ (38,2)
//!          route 0: full perimeter, loop
//! ```

use std::io::Cursor;
use std::sync::Arc;

use patrol_core::{SimRng, Vec2};
use patrol_route::{PatrolRoute, RouteResult, load_routes_reader};
use patrol_sound::PathPoint;

/// Floor plan in the same CSV format `load_routes_csv` reads from disk.
const ROUTES_CSV: &str = "\
route_id,seq,x,y,cycle
0,0,2.0,2.0,loop
0,1,38.0,2.0,loop
0,2,38.0,28.0,loop
0,3,2.0,28.0,loop
1,0,10.0,15.0,bounce
1,1,20.0,15.0,bounce
1,2,30.0,15.0,bounce
";

/// Parse the embedded floor plan into shareable routes.
pub fn load_floor_routes() -> RouteResult<Vec<Arc<PatrolRoute>>> {
    let routes = load_routes_reader(Cursor::new(ROUTES_CSV))?;
    Ok(routes.into_iter().map(Arc::new).collect())
}

/// Spawn position near `route.point(anchor)`, jittered so guards sharing a
/// route do not start in lockstep.
pub fn jittered_start(route: &PatrolRoute, anchor: usize, rng: &mut SimRng) -> Vec2 {
    let base = route.point(anchor);
    Vec2::new(
        base.x + rng.gen_range(-0.5..0.5),
        base.y + rng.gen_range(-0.5..0.5),
    )
}

/// Intensity trail left by the pallet crash at the dock door, loudest
/// point first.
pub fn breach_path() -> Vec<PathPoint> {
    vec![
        PathPoint::new(Vec2::new(34.0, 24.0), 4.0),
        PathPoint::new(Vec2::new(30.0, 20.0), 3.1),
        PathPoint::new(Vec2::new(26.0, 17.0), 2.4),
    ]
}

/// What the same crash sounds like from the centre aisle: one faint lead.
pub fn echo_path() -> Vec<PathPoint> {
    vec![PathPoint::new(Vec2::new(30.0, 17.0), 1.2)]
}
