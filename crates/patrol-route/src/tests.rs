//! Unit tests for patrol-route.

use patrol_core::Vec2;

use crate::{CycleMode, Direction, PatrolRoute, RouteCursor};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn route(points: &[(f32, f32)], cycle: CycleMode) -> PatrolRoute {
    PatrolRoute::new(
        points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        cycle,
    )
}

/// Advance `cursor` `n` times, collecting the visited target indices.
fn targets_after(mut cursor: RouteCursor, route: &PatrolRoute, n: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        cursor.advance(route);
        out.push(cursor.target);
    }
    out
}

// ── PatrolRoute ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_queries {
    use super::*;

    #[test]
    fn closest_waypoint_basic() {
        let r = route(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)], CycleMode::Loop);
        assert_eq!(r.closest_waypoint(Vec2::new(9.0, 0.0)), Some(1));
        assert_eq!(r.closest_waypoint(Vec2::new(19.0, 1.0)), Some(2));
        assert_eq!(r.closest_waypoint(Vec2::new(-5.0, 0.0)), Some(0));
    }

    #[test]
    fn closest_waypoint_tie_takes_lowest_index() {
        let r = route(&[(0.0, 0.0), (2.0, 0.0)], CycleMode::Bounce);
        // (1, 0) is exactly equidistant from both waypoints.
        assert_eq!(r.closest_waypoint(Vec2::new(1.0, 0.0)), Some(0));
    }

    #[test]
    fn closest_waypoint_empty_route() {
        let r = route(&[], CycleMode::Loop);
        assert_eq!(r.closest_waypoint(Vec2::ZERO), None);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn cycle_mode_labels() {
        assert_eq!(CycleMode::Loop.to_string(), "loop");
        assert_eq!(CycleMode::Bounce.as_str(), "bounce");
    }
}

// ── RouteCursor ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cursor {
    use super::*;

    #[test]
    fn initial_targets_closest() {
        let r = route(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)], CycleMode::Loop);
        let c = RouteCursor::initial(&r, Vec2::new(11.0, 0.0)).unwrap();
        assert_eq!(c.target, 1);
        assert_eq!(c.direction, Direction::Forward);
    }

    #[test]
    fn initial_at_index_zero_starts_backward() {
        let r = route(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)], CycleMode::Loop);
        let c = RouteCursor::initial(&r, Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(c.target, 0);
        assert_eq!(c.direction, Direction::Backward);
    }

    #[test]
    fn initial_empty_route_is_none() {
        let r = route(&[], CycleMode::Bounce);
        assert!(RouteCursor::initial(&r, Vec2::ZERO).is_none());
    }

    #[test]
    fn loop_wraps_keeping_direction() {
        let r = route(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], CycleMode::Loop);
        let c = RouteCursor { target: 0, direction: Direction::Forward };
        assert_eq!(targets_after(c, &r, 6), vec![1, 2, 3, 0, 1, 2]);
    }

    #[test]
    fn loop_backward_wraps_to_far_end() {
        let r = route(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], CycleMode::Loop);
        let c = RouteCursor { target: 0, direction: Direction::Backward };
        assert_eq!(targets_after(c, &r, 5), vec![3, 2, 1, 0, 3]);
    }

    #[test]
    fn bounce_oscillates_without_immediate_repeats() {
        let r = route(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], CycleMode::Bounce);
        let c = RouteCursor { target: 0, direction: Direction::Forward };
        assert_eq!(
            targets_after(c, &r, 10),
            vec![1, 2, 3, 2, 1, 0, 1, 2, 3, 2]
        );
    }

    #[test]
    fn bounce_two_points_alternates() {
        let r = route(&[(0.0, 0.0), (5.0, 0.0)], CycleMode::Bounce);
        let c = RouteCursor { target: 0, direction: Direction::Forward };
        assert_eq!(targets_after(c, &r, 4), vec![1, 0, 1, 0]);
    }

    #[test]
    fn loop_two_points_alternates() {
        let r = route(&[(0.0, 0.0), (5.0, 0.0)], CycleMode::Loop);
        let c = RouteCursor { target: 1, direction: Direction::Forward };
        assert_eq!(targets_after(c, &r, 3), vec![0, 1, 0]);
    }

    #[test]
    fn single_waypoint_never_advances() {
        let r = route(&[(4.0, 4.0)], CycleMode::Bounce);
        let mut c = RouteCursor { target: 0, direction: Direction::Forward };
        c.advance(&r);
        assert_eq!(c.target, 0);
        assert_eq!(c.direction, Direction::Forward);
    }

    #[test]
    fn direction_flip() {
        assert_eq!(Direction::Forward.flip(), Direction::Backward);
        assert_eq!(Direction::Backward.flip(), Direction::Forward);
    }
}

// ── CSV Loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{CycleMode, RouteError, load_routes_reader};

    const CSV: &[u8] = b"\
route_id,seq,x,y,cycle\n\
0,1,12.0,0.0,loop\n\
0,0,0.0,0.0,loop\n\
0,2,12.0,8.0,loop\n\
1,0,20.0,4.0,bounce\n\
1,1,28.0,4.0,bounce\n\
";

    #[test]
    fn loads_two_routes() {
        let routes = load_routes_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].len(), 3);
        assert_eq!(routes[0].cycle, CycleMode::Loop);
        assert_eq!(routes[1].len(), 2);
        assert_eq!(routes[1].cycle, CycleMode::Bounce);
    }

    #[test]
    fn waypoints_sorted_by_seq() {
        let routes = load_routes_reader(Cursor::new(CSV)).unwrap();
        let xs: Vec<f32> = routes[0].points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 12.0, 12.0]);
        assert_eq!(routes[0].point(2).y, 8.0);
    }

    #[test]
    fn empty_input_is_empty_vec() {
        let routes = load_routes_reader(Cursor::new(b"route_id,seq,x,y,cycle\n".as_slice()))
            .unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn gap_in_route_ids_errors() {
        let bad = b"\
route_id,seq,x,y,cycle\n\
0,0,0.0,0.0,loop\n\
2,0,1.0,1.0,loop\n\
";
        let err = load_routes_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::MissingRoute(1)));
    }

    #[test]
    fn duplicate_seq_errors() {
        let bad = b"\
route_id,seq,x,y,cycle\n\
0,0,0.0,0.0,loop\n\
0,0,1.0,1.0,loop\n\
";
        let err = load_routes_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::DuplicateSeq { route: 0, seq: 0 }));
    }

    #[test]
    fn cycle_mismatch_errors() {
        let bad = b"\
route_id,seq,x,y,cycle\n\
0,0,0.0,0.0,loop\n\
0,1,1.0,1.0,bounce\n\
";
        let err = load_routes_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::CycleMismatch(0)));
    }

    #[test]
    fn invalid_cycle_value_errors() {
        let bad = b"\
route_id,seq,x,y,cycle\n\
0,0,0.0,0.0,zigzag\n\
";
        let err = load_routes_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }
}
