//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only through the `delta` passed to `tick`
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (humans and obstacles in level order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod movement;
pub mod patrol;
pub mod state;
pub mod tick;
pub mod vision;

pub use autopilot::Autopilot;
pub use collision::{MoveOutcome, first_overlap, resolve_move};
pub use geometry::{Rect, Shape};
pub use movement::{candidate_position, input_direction};
pub use state::{Cat, CatState, ExitZone, GameEvent, GamePhase, GameState, Human, Obstacle};
pub use tick::{TickInput, tick, tick_with_diagnostics};
pub use vision::can_see;
