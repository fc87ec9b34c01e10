//! Game balance values
//!
//! Loaded from JSON so levels can be tweaked without a rebuild. Any field
//! missing from the file keeps its default.

use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Cat ===
    /// World units moved per frame unit
    pub cat_speed: f32,
    /// Collision box half-extents
    pub cat_half_extents: Vec2,
    /// Frames spent hidden after being spotted
    pub respawn_delay: f32,

    // === World ===
    /// Lowest allowed cat position per axis
    pub world_min: Vec2,
    /// Highest allowed cat position per axis
    pub world_max: Vec2,
    /// Divisor for the isometric y axis
    pub iso_divisor: f32,

    // === Humans ===
    /// Distance at which a waypoint counts as reached
    pub arrive_radius: f32,
    /// Full sight cone angle used when a level omits it (radians)
    pub human_fov: f32,
    /// Sight distance used when a level omits it
    pub human_sight_range: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cat_speed: CAT_SPEED,
            cat_half_extents: Vec2::new(CAT_HALF_WIDTH, CAT_HALF_HEIGHT),
            respawn_delay: RESPAWN_DELAY,

            world_min: Vec2::new(WORLD_MIN_X, WORLD_MIN_Y),
            world_max: Vec2::new(WORLD_MAX_X, WORLD_MAX_Y),
            iso_divisor: ISO_DIVISOR,

            arrive_radius: WAYPOINT_ARRIVE_RADIUS,
            human_fov: HUMAN_FOV,
            human_sight_range: HUMAN_SIGHT_RANGE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load tuning from a file, using defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let tuning = Self::from_json(&json)?;
                log::info!("Loaded tuning from {}", path.display());
                Ok(tuning)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No tuning at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("cat_speed", self.cat_speed),
            ("respawn_delay", self.respawn_delay),
            ("iso_divisor", self.iso_divisor),
            ("arrive_radius", self.arrive_radius),
            ("human_fov", self.human_fov),
            ("human_sight_range", self.human_sight_range),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.arrive_radius == 0.0 {
            return Err(ConfigError::Invalid("arrive_radius must be positive".into()));
        }
        if self.iso_divisor == 0.0 {
            return Err(ConfigError::Invalid("iso_divisor must be non-zero".into()));
        }
        if !self.cat_half_extents.is_finite() || self.cat_half_extents.min_element() < 0.0 {
            return Err(ConfigError::Invalid("cat_half_extents must be finite and non-negative".into()));
        }
        if !self.world_min.is_finite() || !self.world_max.is_finite() {
            return Err(ConfigError::Invalid("world bounds must be finite".into()));
        }
        if self.world_min.x > self.world_max.x || self.world_min.y > self.world_max.y {
            return Err(ConfigError::Invalid(format!(
                "world_min {} exceeds world_max {}",
                self.world_min, self.world_max
            )));
        }
        Ok(())
    }

    /// True when `p` lies inside the world clamp
    pub fn in_world(&self, p: Vec2) -> bool {
        p.cmpge(self.world_min).all() && p.cmple(self.world_max).all()
    }
}
