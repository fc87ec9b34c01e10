//! Waypoint following for humans
//!
//! Humans walk straight at their current waypoint and loop through the route
//! forever. There is no avoidance: a route through furniture walks through it.

use super::state::Human;
use crate::diagnostics::DiagnosticsSink;
use crate::{consts::DEGENERATE_EPSILON, heading};

impl Human {
    /// Advance the human by one tick.
    ///
    /// Facing is taken from the vector to the current waypoint before the
    /// route advances, so on the tick a waypoint is reached the cone still
    /// points along the approach and only swings to the next leg one tick
    /// later. A human sitting exactly on its waypoint faces 0 and counts as
    /// arrived whatever the radius.
    pub fn patrol(&mut self, delta: f32, arrive_radius: f32, diag: &mut dyn DiagnosticsSink) {
        let to_target = self.target() - self.pos;
        let distance = to_target.length();

        self.facing = Some(heading(to_target));

        if distance < arrive_radius || distance < DEGENERATE_EPSILON {
            self.advance_waypoint();
            return;
        }

        let next = self.pos + (to_target / distance) * self.speed * delta;
        if next.is_finite() {
            self.pos = next;
        } else {
            log::warn!("Human patrol produced non-finite position {next}, holding at {}", self.pos);
            diag.non_finite_reset("human position");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticsCounter, NoDiagnostics};
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn square_route() -> Human {
        Human::new(
            Vec2::ZERO,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(20.0, 20.0),
                Vec2::new(0.0, 20.0),
            ],
            10.0,
            PI * 2.0 / 3.0,
            200.0,
        )
        .unwrap()
    }

    #[test]
    fn test_moves_toward_waypoint_at_speed() {
        let mut h = Human::new(Vec2::ZERO, vec![Vec2::new(100.0, 0.0)], 2.0, 1.0, 200.0).unwrap();
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert_eq!(h.pos, Vec2::new(2.0, 0.0));
        h.patrol(0.5, 5.0, &mut NoDiagnostics);
        assert_eq!(h.pos, Vec2::new(3.0, 0.0));
        assert_eq!(h.facing, Some(0.0));
    }

    #[test]
    fn test_arrival_advances_without_moving() {
        let mut h = Human::new(Vec2::new(98.0, 0.0), vec![Vec2::new(100.0, 0.0), Vec2::ZERO], 2.0, 1.0, 200.0)
            .unwrap();
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert_eq!(h.waypoint_index(), 1);
        assert_eq!(h.pos, Vec2::new(98.0, 0.0));
        // Facing still describes the approach to the reached waypoint
        assert_eq!(h.facing, Some(0.0));
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert!((h.facing.unwrap() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_standing_on_waypoint_faces_zero() {
        let mut h = square_route();
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert_eq!(h.facing, Some(0.0));
        assert_eq!(h.waypoint_index(), 1);
    }

    #[test]
    fn test_route_is_cyclic() {
        let mut h = square_route();
        let mut wraps = 0;
        let mut last = h.waypoint_index();
        for _ in 0..200 {
            h.patrol(1.0, 5.0, &mut NoDiagnostics);
            let idx = h.waypoint_index();
            assert!(idx < h.waypoints().len());
            if idx != last {
                assert_eq!(idx, (last + 1) % 4);
                if idx == 0 {
                    wraps += 1;
                }
                last = idx;
            }
        }
        assert!(wraps >= 3, "only wrapped {wraps} times");
    }

    #[test]
    fn test_facing_tracks_leg_direction() {
        let mut h = square_route();
        // Arrive at (0,0), then head east toward (20,0)
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert_eq!(h.facing, Some(0.0));
        // Reach (20,0) then turn south (+y)
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert_eq!(h.waypoint_index(), 2);
        h.patrol(1.0, 5.0, &mut NoDiagnostics);
        assert!((h.facing.unwrap() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_step_holds_position() {
        let mut h = Human::new(Vec2::ZERO, vec![Vec2::new(100.0, 0.0)], f32::INFINITY, 1.0, 200.0).unwrap();
        let mut diag = DiagnosticsCounter::default();
        h.patrol(1.0, 5.0, &mut diag);
        assert_eq!(h.pos, Vec2::ZERO);
        assert_eq!(diag.non_finite_resets, 1);
    }

    #[test]
    fn test_zero_radius_on_waypoint_still_advances() {
        let mut h = Human::new(Vec2::ZERO, vec![Vec2::ZERO, Vec2::new(100.0, 0.0)], 1.0, 1.0, 200.0).unwrap();
        let mut diag = DiagnosticsCounter::default();
        h.patrol(1.0, 0.0, &mut diag);
        assert_eq!(h.waypoint_index(), 1);
        for _ in 0..49 {
            h.patrol(1.0, 0.0, &mut diag);
        }
        assert_eq!(h.pos, Vec2::new(49.0, 0.0));
        assert_eq!(diag.non_finite_resets, 0);
    }
}
