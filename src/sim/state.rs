//! Game state and core simulation types
//!
//! Everything the tick reads or mutates lives here. Hosts render from these
//! types directly and never mutate them between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Shape};
use crate::error::LevelError;
use crate::level::LevelSpec;
use crate::tuning::Tuning;

/// Current phase of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Cat is sneaking around
    Playing,
    /// Cat reached an exit; ticks do nothing from here on
    Escaped,
}

/// The cat's detection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CatState {
    /// Controllable and detectable
    Free,
    /// Spotted: hidden and ignoring input until the countdown runs out
    Caught { remaining: f32 },
}

/// The player's cat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub pos: Vec2,
    pub speed: f32,
    pub half_extents: Vec2,
    pub state: CatState,
    /// Position from the most recent committed tick, used to recover from
    /// non-finite values
    pub last_good_pos: Vec2,
}

impl Cat {
    pub fn new(pos: Vec2, speed: f32, half_extents: Vec2) -> Self {
        Self {
            pos,
            speed,
            half_extents,
            state: CatState::Free,
            last_good_pos: pos,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self.state, CatState::Free)
    }

    /// Whether the renderer should draw the cat at all
    pub fn is_visible(&self) -> bool {
        self.is_free()
    }

    pub fn opacity(&self) -> f32 {
        if self.is_free() { 1.0 } else { 0.0 }
    }

    /// Collision box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.half_extents)
    }

    /// Enter the caught state. Returns false (and leaves the countdown alone)
    /// when the cat is already caught.
    pub fn get_caught(&mut self, delay: f32) -> bool {
        if !self.is_free() {
            return false;
        }
        self.state = CatState::Caught { remaining: delay };
        true
    }

    /// Run down the caught countdown. Returns true on the tick the cat
    /// becomes free again; its position is untouched, so it reappears where
    /// it was spotted.
    pub fn tick_cooldown(&mut self, delta: f32) -> bool {
        if let CatState::Caught { ref mut remaining } = self.state {
            *remaining -= delta;
            if *remaining <= 0.0 {
                self.state = CatState::Free;
                return true;
            }
        }
        false
    }
}

/// A patrolling human
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Human {
    pub pos: Vec2,
    pub speed: f32,
    /// Heading in radians; `None` until the first patrol step
    pub facing: Option<f32>,
    /// Full sight cone angle in radians
    pub fov: f32,
    pub sight_range: f32,
    waypoints: Vec<Vec2>,
    waypoint_index: usize,
}

impl Human {
    /// Create a human heading for the first waypoint. Fails on an empty route.
    pub fn new(
        pos: Vec2,
        waypoints: Vec<Vec2>,
        speed: f32,
        fov: f32,
        sight_range: f32,
    ) -> Result<Self, LevelError> {
        if waypoints.is_empty() {
            return Err(LevelError::EmptyWaypoints { human: 0 });
        }
        Ok(Self {
            pos,
            speed,
            facing: None,
            fov,
            sight_range,
            waypoints,
            waypoint_index: 0,
        })
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn waypoint_index(&self) -> usize {
        self.waypoint_index
    }

    /// The waypoint currently walked toward
    pub fn target(&self) -> Vec2 {
        self.waypoints[self.waypoint_index]
    }

    /// Move on to the next waypoint, wrapping to the first
    pub(crate) fn advance_waypoint(&mut self) {
        self.waypoint_index = (self.waypoint_index + 1) % self.waypoints.len();
    }

    /// Heading, treating a human that has not moved yet as facing east
    pub fn facing_or_default(&self) -> f32 {
        self.facing.unwrap_or(0.0)
    }
}

/// Static blocker
#[derive(Debug, Clone)]
pub struct Obstacle {
    pos: Vec2,
    hit_region: Option<Shape>,
    world_region: Option<Shape>,
}

impl Obstacle {
    /// `hit_region` is relative to `pos`
    pub fn new(pos: Vec2, hit_region: Option<Shape>) -> Self {
        let world_region = hit_region.as_ref().map(|shape| shape.translated(pos));
        Self {
            pos,
            hit_region,
            world_region,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn hit_region(&self) -> Option<&Shape> {
        self.hit_region.as_ref()
    }

    /// Hit region in world coordinates
    pub fn world_region(&self) -> Option<&Shape> {
        self.world_region.as_ref()
    }
}

/// Region that ends the level when the cat stands in it
#[derive(Debug, Clone)]
pub struct ExitZone {
    pos: Vec2,
    world_region: Shape,
}

impl ExitZone {
    /// `region` is relative to `pos`
    pub fn new(pos: Vec2, region: Shape) -> Self {
        let world_region = region.translated(pos);
        Self { pos, world_region }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn world_region(&self) -> &Shape {
        &self.world_region
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.world_region.contains_point(p)
    }
}

/// Something the host may want to react to (UI banners, sounds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A human saw the cat
    Spotted { human: usize, at: Vec2 },
    /// The cat is back after its countdown
    Respawned { at: Vec2 },
    /// A move was rejected by an obstacle
    MoveBlocked { obstacle: usize },
    /// The cat reached an exit
    Escaped { exit: usize },
}

/// Complete level state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub cat: Cat,
    pub humans: Vec<Human>,
    pub obstacles: Vec<Obstacle>,
    pub exits: Vec<ExitZone>,
    /// True from the tick the cat is spotted until it respawns
    pub spotted: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Build and validate a level against `tuning`, which is checked too
    pub fn from_level(level: &LevelSpec, tuning: Tuning) -> Result<Self, LevelError> {
        tuning
            .validate()
            .map_err(|e| LevelError::InvalidTuning(e.to_string()))?;
        level.validate(&tuning)?;

        let humans = level
            .humans
            .iter()
            .enumerate()
            .map(|(i, h)| {
                Human::new(
                    h.start,
                    h.waypoints.clone(),
                    h.speed,
                    h.fov.unwrap_or(tuning.human_fov),
                    h.sight_range.unwrap_or(tuning.human_sight_range),
                )
                .map_err(|_| LevelError::EmptyWaypoints { human: i })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let state = Self {
            cat: Cat::new(level.cat_start, tuning.cat_speed, tuning.cat_half_extents),
            humans,
            obstacles: level
                .obstacles
                .iter()
                .map(|o| Obstacle::new(o.pos, o.hit_region.clone()))
                .collect(),
            exits: level
                .exits
                .iter()
                .map(|e| ExitZone::new(e.pos, e.region.clone()))
                .collect(),
            tuning,
            time_ticks: 0,
            phase: GamePhase::Playing,
            spotted: false,
            events: Vec::new(),
        };

        log::info!(
            "Level '{}' ready: {} obstacles, {} exits, {} humans",
            level.name,
            state.obstacles.len(),
            state.exits.len(),
            state.humans.len()
        );

        Ok(state)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events raised since the last drain, without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
