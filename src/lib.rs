//! Sneaky Cat - An isometric stealth game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, patrols, sight cones)
//! - `level`: Level layout data and the built-in living room level
//! - `tuning`: Data-driven game balance
//! - `diagnostics`: Optional debug sink for collision boxes and sight cones
//! - `error`: Construction and configuration errors

pub mod diagnostics;
pub mod error;
pub mod level;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, LevelError, SneakError, SneakResult};
pub use level::LevelSpec;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation delta for one frame at the reference 60 Hz rate.
    /// Speeds and timers are expressed in these frame units.
    pub const FRAME_DELTA: f32 = 1.0;

    /// Level grid size in world units
    pub const TILE_SIZE: f32 = 50.0;

    /// Cat defaults
    pub const CAT_SPEED: f32 = 4.0;
    pub const CAT_HALF_WIDTH: f32 = 15.0;
    pub const CAT_HALF_HEIGHT: f32 = 10.0;
    /// Frames the cat stays hidden after being spotted (2 seconds at 60 Hz)
    pub const RESPAWN_DELAY: f32 = 120.0;

    /// World clamp for the cat
    pub const WORLD_MIN_X: f32 = -800.0;
    pub const WORLD_MIN_Y: f32 = -800.0;
    pub const WORLD_MAX_X: f32 = 1500.0;
    pub const WORLD_MAX_Y: f32 = 1200.0;

    /// Human defaults
    pub const HUMAN_SPEED: f32 = 1.0;
    pub const HUMAN_FOV: f32 = std::f32::consts::PI * 2.0 / 3.0; // 120 degrees, full cone
    pub const HUMAN_SIGHT_RANGE: f32 = 200.0;
    /// A human within this distance of its waypoint has reached it
    pub const WAYPOINT_ARRIVE_RADIUS: f32 = 5.0;

    /// Divisor applied to the isometric y axis
    pub const ISO_DIVISOR: f32 = 2.0;

    /// Below this length a vector is treated as zero (no direction)
    pub const DEGENERATE_EPSILON: f32 = 1e-6;
}

/// Normalized angle to [0, 2π)
#[inline]
pub fn normalize_angle_positive(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Absolute angular distance between two angles, folded into [0, π]
#[inline]
pub fn angle_between(a: f32, b: f32) -> f32 {
    let diff = (normalize_angle_positive(a) - normalize_angle_positive(b)).abs();
    if diff > std::f32::consts::PI {
        std::f32::consts::TAU - diff
    } else {
        diff
    }
}

/// Heading of a vector, or 0 when the vector has no direction
#[inline]
pub fn heading(v: Vec2) -> f32 {
    if v.length() < consts::DEGENERATE_EPSILON {
        0.0
    } else {
        v.y.atan2(v.x)
    }
}

/// Convert cartesian grid coordinates to isometric world coordinates
#[inline]
pub fn to_isometric(cart: Vec2, divisor: f32) -> Vec2 {
    Vec2::new(cart.x - cart.y, (cart.x + cart.y) / divisor)
}

/// Convert isometric world coordinates back to cartesian grid coordinates
#[inline]
pub fn from_isometric(iso: Vec2, divisor: f32) -> Vec2 {
    let sum = iso.y * divisor;
    Vec2::new((sum + iso.x) / 2.0, (sum - iso.x) / 2.0)
}

/// Painter's-order sort key for isometric rendering (larger draws later)
#[inline]
pub fn isometric_depth(pos: Vec2, height: f32) -> f32 {
    pos.y + pos.x / 2.0 + height
}
