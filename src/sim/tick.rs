//! Per-frame simulation tick
//!
//! One call advances the level by one frame: humans patrol, sight is checked,
//! then the cat moves, collides and may reach an exit.

use serde::{Deserialize, Serialize};

use super::collision::resolve_move;
use super::movement::candidate_position;
use super::state::{GameEvent, GamePhase, GameState};
use crate::diagnostics::{DiagnosticsSink, NoDiagnostics};

/// Direction keys held at the start of the tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame. `delta` is in frame units (1.0 at 60 Hz).
pub fn tick(state: &mut GameState, input: &TickInput, delta: f32) {
    tick_with_diagnostics(state, input, delta, &mut NoDiagnostics);
}

/// `tick`, reporting debug data to `diag`
pub fn tick_with_diagnostics(
    state: &mut GameState,
    input: &TickInput,
    delta: f32,
    diag: &mut dyn DiagnosticsSink,
) {
    if state.phase == GamePhase::Escaped {
        return;
    }

    let delta = if delta.is_finite() && delta >= 0.0 {
        delta
    } else {
        log::warn!("Ignoring invalid tick delta {delta}");
        diag.non_finite_reset("delta");
        0.0
    };

    state.time_ticks += 1;

    if !state.cat.pos.is_finite() {
        log::warn!("Cat position {} is not finite, restoring {}", state.cat.pos, state.cat.last_good_pos);
        diag.non_finite_reset("cat position");
        state.cat.pos = state.cat.last_good_pos;
    }

    // Humans walk their routes
    let arrive_radius = state.tuning.arrive_radius;
    for (i, human) in state.humans.iter_mut().enumerate() {
        human.patrol(delta, arrive_radius, diag);
        diag.sight_cone(i, human.pos, human.facing_or_default(), human.fov, human.sight_range);
    }

    // A caught cat only counts down; it cannot be spotted again meanwhile
    if !state.cat.is_free() {
        if state.cat.tick_cooldown(delta) {
            state.spotted = false;
            log::debug!("Cat respawned at {} (tick {})", state.cat.pos, state.time_ticks);
            state.push_event(GameEvent::Respawned { at: state.cat.pos });
        }
        return;
    }

    if let Some(human) = state.humans.iter().position(|h| h.can_see(state.cat.pos)) {
        state.cat.get_caught(state.tuning.respawn_delay);
        state.spotted = true;
        log::debug!("Cat spotted by human {} at {} (tick {})", human, state.cat.pos, state.time_ticks);
        state.push_event(GameEvent::Spotted {
            human,
            at: state.cat.pos,
        });
        return;
    }

    // Move, then let collision accept or undo the move
    let candidate = candidate_position(
        state.cat.pos,
        input,
        state.cat.speed,
        delta,
        state.tuning.world_min,
        state.tuning.world_max,
    );
    let outcome = resolve_move(
        state.cat.pos,
        candidate,
        state.cat.half_extents,
        &state.obstacles,
        diag,
    );
    if let Some(obstacle) = outcome.blocked_by {
        state.push_event(GameEvent::MoveBlocked { obstacle });
    }
    state.cat.pos = outcome.position;
    state.cat.last_good_pos = outcome.position;

    if let Some(exit) = state.exits.iter().position(|e| e.contains(state.cat.pos)) {
        state.phase = GamePhase::Escaped;
        log::info!("Cat escaped through exit {} after {} ticks", exit, state.time_ticks);
        state.push_event(GameEvent::Escaped { exit });
    }
}
