//! Debug output from inside the tick
//!
//! The simulation reports collision boxes, sight cones and recoveries to a
//! sink handed to `tick_with_diagnostics`. Hosts that draw debug overlays
//! implement the trait; everyone else gets `NoDiagnostics`.

use glam::Vec2;

use crate::sim::geometry::Rect;

/// Receiver for per-tick debug data. Every method defaults to a no-op.
pub trait DiagnosticsSink {
    /// The cat's collision box for this tick's candidate move
    fn cat_box(&mut self, _rect: &Rect, _blocked: bool) {}

    /// A human's sight cone after patrolling
    fn sight_cone(&mut self, _human: usize, _apex: Vec2, _facing: f32, _fov: f32, _range: f32) {}

    /// An obstacle without a hit region was skipped during collision
    fn missing_hit_region(&mut self, _obstacle: usize) {}

    /// A non-finite value was discarded and state reset to last known good
    fn non_finite_reset(&mut self, _what: &'static str) {}
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {}

/// Forwards everything to the `log` crate at trace level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn cat_box(&mut self, rect: &Rect, blocked: bool) {
        log::trace!("cat box {:?} blocked={}", rect, blocked);
    }

    fn sight_cone(&mut self, human: usize, apex: Vec2, facing: f32, fov: f32, range: f32) {
        log::trace!("human {human} cone at {apex} facing {facing:.3} fov {fov:.3} range {range}");
    }

    fn missing_hit_region(&mut self, obstacle: usize) {
        log::trace!("obstacle {obstacle} has no hit region, skipped");
    }

    fn non_finite_reset(&mut self, what: &'static str) {
        log::trace!("non-finite {what} reset");
    }
}

/// Tallies events, for hosts that only want counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsCounter {
    pub cat_boxes: u32,
    pub blocked_moves: u32,
    pub sight_cones: u32,
    pub skipped_obstacles: u32,
    pub non_finite_resets: u32,
}

impl DiagnosticsSink for DiagnosticsCounter {
    fn cat_box(&mut self, _rect: &Rect, blocked: bool) {
        self.cat_boxes += 1;
        if blocked {
            self.blocked_moves += 1;
        }
    }

    fn sight_cone(&mut self, _human: usize, _apex: Vec2, _facing: f32, _fov: f32, _range: f32) {
        self.sight_cones += 1;
    }

    fn missing_hit_region(&mut self, _obstacle: usize) {
        self.skipped_obstacles += 1;
    }

    fn non_finite_reset(&mut self, _what: &'static str) {
        self.non_finite_resets += 1;
    }
}
