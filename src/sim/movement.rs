//! Cat movement from held direction keys
//!
//! Keys map to isometric screen diagonals: up walks north-west, right walks
//! north-east. Each key contributes a unit vector and held keys add, so
//! up+right is a straight screen-up move of length √2.

use glam::Vec2;

use super::tick::TickInput;

const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;

pub const DIR_UP: Vec2 = Vec2::new(-DIAG, -DIAG);
pub const DIR_DOWN: Vec2 = Vec2::new(DIAG, DIAG);
pub const DIR_LEFT: Vec2 = Vec2::new(-DIAG, DIAG);
pub const DIR_RIGHT: Vec2 = Vec2::new(DIAG, -DIAG);

/// Summed movement direction for the held keys (not normalized)
pub fn input_direction(input: &TickInput) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if input.up {
        dir += DIR_UP;
    }
    if input.down {
        dir += DIR_DOWN;
    }
    if input.left {
        dir += DIR_LEFT;
    }
    if input.right {
        dir += DIR_RIGHT;
    }
    dir
}

/// Where the cat would end up this tick, clamped to the world bounds.
///
/// The move is not committed here; collision decides that.
pub fn candidate_position(
    pos: Vec2,
    input: &TickInput,
    speed: f32,
    delta: f32,
    world_min: Vec2,
    world_max: Vec2,
) -> Vec2 {
    let moved = pos + input_direction(input) * speed * delta;
    moved.clamp(world_min, world_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Vec2 = Vec2::new(-800.0, -800.0);
    const MAX: Vec2 = Vec2::new(1500.0, 1200.0);

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_single_keys_are_unit_diagonals() {
        for dir in [DIR_UP, DIR_DOWN, DIR_LEFT, DIR_RIGHT] {
            assert!((dir.length() - 1.0).abs() < 1e-6);
            assert!((dir.x.abs() - dir.y.abs()).abs() < 1e-6);
        }
        assert_eq!(input_direction(&held(true, false, false, false)), DIR_UP);
        assert_eq!(input_direction(&TickInput::default()), Vec2::ZERO);
    }

    #[test]
    fn test_combined_keys_add_without_normalizing() {
        let dir = input_direction(&held(true, false, false, true));
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y + std::f32::consts::SQRT_2).abs() < 1e-6);

        let dir = input_direction(&held(false, true, false, true));
        assert!((dir - Vec2::new(std::f32::consts::SQRT_2, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        assert_eq!(input_direction(&held(true, true, false, false)), Vec2::ZERO);
        assert_eq!(input_direction(&held(true, true, true, true)), Vec2::ZERO);
    }

    #[test]
    fn test_candidate_scales_with_speed_and_delta() {
        let input = held(false, true, false, false);
        let one = candidate_position(Vec2::ZERO, &input, 4.0, 1.0, MIN, MAX);
        let two = candidate_position(Vec2::ZERO, &input, 4.0, 2.0, MIN, MAX);
        assert!((one.length() - 4.0).abs() < 1e-5);
        assert!((two - one * 2.0).length() < 1e-5);
    }

    #[test]
    fn test_clamped_at_world_minimum() {
        // Wall corner of the living room with the world clamped to it
        let min = Vec2::new(-150.0, -150.0);
        let left = held(false, false, true, false);
        let mut pos = Vec2::new(-150.0, -150.0);
        for _ in 0..10 {
            pos = candidate_position(pos, &left, 4.0, 1.0, min, MAX);
            assert_eq!(pos.x, -150.0);
        }
        // y still advances: left walks south-west
        assert!(pos.y > -150.0);
    }

    #[test]
    fn test_clamped_at_world_maximum() {
        let pos = candidate_position(Vec2::new(1499.0, 0.0), &held(false, true, false, false), 4.0, 1.0, MIN, MAX);
        assert_eq!(pos.x, 1500.0);
    }
}
