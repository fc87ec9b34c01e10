//! Level layout data
//!
//! A `LevelSpec` is plain data (usually JSON) describing where everything
//! starts. `GameState::from_level` validates it and builds the runtime state.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, LevelError};
use crate::sim::geometry::{Rect, Shape};
use crate::to_isometric;
use crate::tuning::Tuning;

/// A static blocker; `hit_region` is relative to `pos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub pos: Vec2,
    /// Decorative obstacles have no hit region and never block
    #[serde(default)]
    pub hit_region: Option<Shape>,
}

/// An exit; `region` is relative to `pos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitSpec {
    pub pos: Vec2,
    pub region: Shape,
}

/// A patrolling human
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanSpec {
    pub start: Vec2,
    pub waypoints: Vec<Vec2>,
    #[serde(default = "default_human_speed")]
    pub speed: f32,
    /// Full cone angle; falls back to `Tuning::human_fov`
    #[serde(default)]
    pub fov: Option<f32>,
    /// Falls back to `Tuning::human_sight_range`
    #[serde(default)]
    pub sight_range: Option<f32>,
}

fn default_human_speed() -> f32 {
    HUMAN_SPEED
}

/// Complete description of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: String,
    pub cat_start: Vec2,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    #[serde(default)]
    pub exits: Vec<ExitSpec>,
    #[serde(default)]
    pub humans: Vec<HumanSpec>,
}

impl LevelSpec {
    /// Parse a level from JSON. Layout checks happen in `validate`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let level = Self::from_json(&std::fs::read_to_string(path.as_ref())?)?;
        log::info!("Loaded level '{}' from {}", level.name, path.as_ref().display());
        Ok(level)
    }

    /// Check the layout can be simulated with `tuning`
    pub fn validate(&self, tuning: &Tuning) -> Result<(), LevelError> {
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.pos.is_finite() {
                return Err(LevelError::NonFinite("obstacle position"));
            }
            if let Some(region) = &obstacle.hit_region {
                region
                    .validate()
                    .map_err(|reason| LevelError::MalformedObstacle { index, reason })?;
            }
        }

        for (index, exit) in self.exits.iter().enumerate() {
            if !exit.pos.is_finite() {
                return Err(LevelError::NonFinite("exit position"));
            }
            exit.region
                .validate()
                .map_err(|reason| LevelError::MalformedExit { index, reason })?;
        }

        for (human, spec) in self.humans.iter().enumerate() {
            if spec.waypoints.is_empty() {
                return Err(LevelError::EmptyWaypoints { human });
            }
            let invalid = |reason: &str| LevelError::InvalidHuman {
                human,
                reason: reason.to_string(),
            };
            if !spec.start.is_finite() || spec.waypoints.iter().any(|w| !w.is_finite()) {
                return Err(invalid("non-finite start or waypoint"));
            }
            if !spec.speed.is_finite() || spec.speed < 0.0 {
                return Err(invalid("speed must be finite and non-negative"));
            }
            if spec.fov.is_some_and(|f| !f.is_finite() || f < 0.0) {
                return Err(invalid("fov must be finite and non-negative"));
            }
            if spec.sight_range.is_some_and(|r| !r.is_finite() || r < 0.0) {
                return Err(invalid("sight range must be finite and non-negative"));
            }
        }

        let start = self.cat_start;
        if !start.is_finite() {
            return Err(LevelError::NonFinite("cat start"));
        }
        if !tuning.in_world(start) {
            return Err(LevelError::SpawnOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }
        let cat = Rect::from_center(start, tuning.cat_half_extents);
        let blocked = self.obstacles.iter().position(|o| {
            o.hit_region
                .as_ref()
                .is_some_and(|r| r.translated(o.pos).intersects_rect(&cat))
        });
        if let Some(obstacle) = blocked {
            return Err(LevelError::SpawnBlocked {
                x: start.x,
                y: start.y,
                obstacle,
            });
        }

        Ok(())
    }

    /// Two-room flat: living room on the left, bedroom on the right, a
    /// window in each outer wall and one human walking a loop through both
    pub fn living_room() -> Self {
        let s = TILE_SIZE;
        let mut obstacles = Vec::new();
        let mut exits = Vec::new();

        let mut wall = |x: f32, y: f32| {
            obstacles.push(ObstacleSpec {
                pos: Vec2::new(x * s, y * s),
                hit_region: Some(wall_footprint(s)),
            });
        };

        // Living room, door gap in the north wall at x = 0
        for x in -3..=3 {
            if x != 0 {
                wall(x as f32, -3.0);
            }
            wall(x as f32, 3.0);
        }
        // West wall, window at y = -2
        for y in -3..=3 {
            if y != -2 {
                wall(-3.0, y as f32);
            }
        }
        // Divider, door gap at y = 0
        for y in -3..=3 {
            if y != 0 {
                wall(3.0, y as f32);
            }
        }
        // Bedroom
        for x in 4..=8 {
            wall(x as f32, -3.0);
            wall(x as f32, 3.0);
        }
        // East wall, window at y = 2
        for y in -3..=3 {
            if y != 2 {
                wall(8.0, y as f32);
            }
        }

        exits.push(ExitSpec {
            pos: Vec2::new(-3.0 * s, -2.0 * s),
            region: wall_footprint(s),
        });
        exits.push(ExitSpec {
            pos: Vec2::new(8.0 * s, 2.0 * s),
            region: wall_footprint(s),
        });

        // Furniture footprints are isometric diamonds
        let long = Shape::polygon(vec![
            Vec2::new(0.0, s / 2.0),
            Vec2::new(s, 0.0),
            Vec2::new(s * 2.0, s / 2.0),
            Vec2::new(s, s),
        ]);
        let small = Shape::polygon(vec![
            Vec2::new(0.0, s / 2.0),
            Vec2::new(s / 2.0, 0.0),
            Vec2::new(s, s / 2.0),
            Vec2::new(s / 2.0, s),
        ]);
        let furniture = [
            (Vec2::new(-1.5 * s, 2.0 * s), &long),  // sofa
            (Vec2::new(0.0, 0.0), &small),          // coffee table
            (Vec2::new(6.0 * s, -1.0 * s), &long),  // bed
            (Vec2::new(7.0 * s, 1.5 * s), &small),  // dresser
        ];
        for (pos, shape) in furniture {
            obstacles.push(ObstacleSpec {
                pos,
                hit_region: Some(shape.clone()),
            });
        }

        let humans = vec![HumanSpec {
            start: Vec2::new(200.0, 100.0),
            waypoints: vec![
                Vec2::new(200.0, 100.0),
                Vec2::new(-100.0, 150.0),
                Vec2::new(-50.0, 300.0),
                Vec2::new(150.0, 250.0),
            ],
            speed: HUMAN_SPEED,
            fov: None,
            sight_range: None,
        }];

        Self {
            name: "living room".into(),
            cat_start: to_isometric(Vec2::ZERO, ISO_DIVISOR),
            obstacles,
            exits,
            humans,
        }
    }
}

/// Footprint of one wall (or window) tile: a quarter tile either side of the
/// anchor, one tile tall above it
fn wall_footprint(s: f32) -> Shape {
    Shape::rect(-s / 4.0, -s, s / 2.0, s)
}
