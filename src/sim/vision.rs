//! Sight cones
//!
//! A human sees a point when it is within sight range and inside the cone
//! around the human's facing. Walls and furniture do not block sight.

use glam::Vec2;

use super::state::Human;
use crate::{angle_between, heading};

/// Point-in-cone test.
///
/// `fov` is the full cone angle; the target is visible when its bearing is
/// within `fov / 2` of `facing`. A missing facing counts as 0. A target at
/// exactly `range` is still visible.
pub fn can_see(observer: Vec2, facing: Option<f32>, fov: f32, range: f32, target: Vec2) -> bool {
    let offset = target - observer;
    if offset.length() > range {
        return false;
    }
    let facing = facing.filter(|f| f.is_finite()).unwrap_or(0.0);
    angle_between(facing, heading(offset)) <= fov / 2.0
}

impl Human {
    /// Whether this human currently sees `target`
    pub fn can_see(&self, target: Vec2) -> bool {
        can_see(self.pos, self.facing, self.fov, self.sight_range, target)
    }

    /// Outline of the sight cone for rendering: the apex followed by
    /// `segments + 1` points along the far arc
    pub fn sight_cone(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let start = self.facing_or_default() - self.fov / 2.0;
        let step = self.fov / segments as f32;
        std::iter::once(self.pos)
            .chain((0..=segments).map(|i| {
                let angle = start + step * i as f32;
                self.pos + Vec2::new(angle.cos(), angle.sin()) * self.sight_range
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    const FOV: f32 = PI * 2.0 / 3.0;

    #[test]
    fn test_straight_ahead_in_range() {
        assert!(can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(150.0, 0.0)));
    }

    #[test]
    fn test_diagonal_out_of_range() {
        // |(150,150)| = 212.13 > 200, even though the 45 degree bearing is inside the cone
        assert!(!can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(150.0, 150.0)));
        // |(100,100)| = 141.42, bearing 0.785 <= 1.047
        assert!(can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_outside_cone_angle() {
        // Bearing 90 degrees against a 60 degree half-angle
        assert!(!can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(0.0, 100.0)));
        // Directly behind
        assert!(!can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(-50.0, 0.0)));
    }

    #[test]
    fn test_exact_range_is_visible() {
        assert!(can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(200.0, 0.0)));
        assert!(!can_see(Vec2::ZERO, Some(0.0), FOV, 200.0, Vec2::new(200.5, 0.0)));
    }

    #[test]
    fn test_wraparound_behind_zero() {
        // Facing 0.1 with half-angle 0.2; target bearing 2π - 0.05 is 0.15 away
        let target = Vec2::new((TAU - 0.05).cos(), (TAU - 0.05).sin()) * 50.0;
        assert!(can_see(Vec2::ZERO, Some(0.1), 0.4, 200.0, target));
        // Same target from a facing of 2π + 0.1
        assert!(can_see(Vec2::ZERO, Some(TAU + 0.1), 0.4, 200.0, target));
        // 0.25 away is outside
        let far = Vec2::new((-0.15f32).cos(), (-0.15f32).sin()) * 50.0;
        assert!(!can_see(Vec2::ZERO, Some(0.1), 0.4, 200.0, far));
    }

    #[test]
    fn test_missing_facing_defaults_to_east() {
        assert!(can_see(Vec2::ZERO, None, FOV, 200.0, Vec2::new(50.0, 10.0)));
        assert!(!can_see(Vec2::ZERO, None, FOV, 200.0, Vec2::new(-50.0, 10.0)));
        assert!(can_see(Vec2::ZERO, Some(f32::NAN), FOV, 200.0, Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn test_target_on_observer_has_zero_bearing() {
        assert!(can_see(Vec2::ONE, Some(0.0), FOV, 200.0, Vec2::ONE));
        assert!(!can_see(Vec2::ONE, Some(PI), FOV, 200.0, Vec2::ONE));
    }

    #[test]
    fn test_observer_offset() {
        let observer = Vec2::new(200.0, 100.0);
        assert!(can_see(observer, Some(PI), FOV, 200.0, Vec2::new(50.0, 100.0)));
        assert!(!can_see(observer, Some(0.0), FOV, 200.0, Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_sight_cone_outline() {
        let mut h = Human::new(Vec2::new(10.0, 0.0), vec![Vec2::ZERO], 1.0, FOV, 200.0).unwrap();
        h.facing = Some(0.0);
        let cone = h.sight_cone(10);
        assert_eq!(cone.len(), 12);
        assert_eq!(cone[0], Vec2::new(10.0, 0.0));
        for p in &cone[1..] {
            assert!(((*p - h.pos).length() - 200.0).abs() < 1e-3);
        }
        let first = (cone[1] - h.pos).normalize();
        assert!((first.y.atan2(first.x) + FOV / 2.0).abs() < 1e-5);
        let mid = (cone[6] - h.pos).normalize();
        assert!(mid.y.abs() < 1e-5 && mid.x > 0.0);
    }

    proptest! {
        #[test]
        fn prop_visibility_monotonic_in_distance(
            facing in -10.0f32..10.0,
            bearing in -PI..PI,
            range in 1.0f32..500.0,
            d1 in 0.5f32..1000.0,
            d2 in 0.5f32..1000.0,
        ) {
            // Bearings sitting on the cone edge can flip with rounding
            prop_assume!((angle_between(facing, bearing) - FOV / 2.0).abs() > 1e-3);
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            let dir = Vec2::new(bearing.cos(), bearing.sin());
            let seen_far = can_see(Vec2::ZERO, Some(facing), FOV, range, dir * far);
            let seen_near = can_see(Vec2::ZERO, Some(facing), FOV, range, dir * near);
            // Moving closer along the same bearing never hides the target
            prop_assert!(!seen_far || seen_near);
            if far > range * 1.001 {
                prop_assert!(!seen_far);
            }
        }
    }
}
