//! Collision between the cat and static obstacles
//!
//! A move is tested at its end position only. If the cat's box overlaps any
//! obstacle there, the whole move is thrown away (both axes, no sliding).
//! Nothing is swept, so a cat moving further per tick than an obstacle is
//! thick can pass straight through it.

use glam::Vec2;

use super::geometry::Rect;
use super::state::Obstacle;
use crate::diagnostics::DiagnosticsSink;

/// Result of resolving a candidate move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Where the cat is after resolution
    pub position: Vec2,
    /// Index of the first obstacle that rejected the move
    pub blocked_by: Option<usize>,
}

impl MoveOutcome {
    pub fn committed(&self) -> bool {
        self.blocked_by.is_none()
    }
}

/// Index of the first obstacle overlapping `rect`, skipping obstacles that
/// have no hit region
pub fn first_overlap(
    rect: &Rect,
    obstacles: &[Obstacle],
    diag: &mut dyn DiagnosticsSink,
) -> Option<usize> {
    let mut hit = None;
    for (i, obstacle) in obstacles.iter().enumerate() {
        match obstacle.world_region() {
            Some(region) => {
                if hit.is_none() && region.intersects_rect(rect) {
                    hit = Some(i);
                }
            }
            None => diag.missing_hit_region(i),
        }
    }
    hit
}

/// Commit `candidate` unless the cat's box there overlaps an obstacle, in
/// which case the cat stays at `previous`
pub fn resolve_move(
    previous: Vec2,
    candidate: Vec2,
    half_extents: Vec2,
    obstacles: &[Obstacle],
    diag: &mut dyn DiagnosticsSink,
) -> MoveOutcome {
    if !candidate.is_finite() {
        log::warn!("Discarding non-finite cat move to {candidate}");
        diag.non_finite_reset("cat position");
        return MoveOutcome {
            position: previous,
            blocked_by: None,
        };
    }

    let rect = Rect::from_center(candidate, half_extents);
    let blocked_by = first_overlap(&rect, obstacles, diag);
    diag.cat_box(&rect, blocked_by.is_some());

    MoveOutcome {
        position: if blocked_by.is_some() { previous } else { candidate },
        blocked_by,
    }
}
