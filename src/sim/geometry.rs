//! Axis-aligned rectangles and convex polygons
//!
//! All hit regions in the game are one of these two shapes. Touching edges
//! never count as an overlap, for rect/rect and polygon/rect alike, so the cat
//! can slide flush along a wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle centred on `center` extending `half` in each direction
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self::new(center.x - half.x, center.y - half.y, half.x * 2.0, half.y * 2.0)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Overlap test. Rectangles that only share an edge or corner are apart.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.x >= self.x + self.w
            || other.x + other.w <= self.x
            || other.y >= self.y + self.h
            || other.y + other.h <= self.y)
    }

    /// Inclusive point containment
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()) {
            return Err("rectangle has non-finite components".into());
        }
        if self.w < 0.0 || self.h < 0.0 {
            return Err(format!("rectangle has negative size {}x{}", self.w, self.h));
        }
        Ok(())
    }
}

/// Hit-test shape in some local or world frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect(Rect),
    /// Convex polygon, vertices in either winding order
    Polygon { points: Vec<Vec2> },
}

impl Shape {
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Shape::Rect(Rect::new(x, y, w, h))
    }

    pub fn polygon(points: impl Into<Vec<Vec2>>) -> Self {
        Shape::Polygon {
            points: points.into(),
        }
    }

    /// Same shape moved by `offset` (local to world)
    pub fn translated(&self, offset: Vec2) -> Shape {
        match self {
            Shape::Rect(r) => Shape::Rect(r.translated(offset)),
            Shape::Polygon { points } => Shape::Polygon {
                points: points.iter().map(|p| *p + offset).collect(),
            },
        }
    }

    /// Tight axis-aligned bounds
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(r) => *r,
            Shape::Polygon { points } if points.is_empty() => Rect::new(0.0, 0.0, 0.0, 0.0),
            Shape::Polygon { points } => {
                let (min, max) = points.iter().fold(
                    (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
                    |(min, max), p| (min.min(*p), max.max(*p)),
                );
                Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
            }
        }
    }

    /// Inclusive point containment (polygons are assumed convex)
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Shape::Rect(r) => r.contains_point(p),
            Shape::Polygon { points } => {
                if points.len() < 3 {
                    return false;
                }
                let mut sign = 0.0f32;
                for (a, b) in edges(points) {
                    let cross = (b - a).perp_dot(p - a);
                    if cross == 0.0 {
                        continue;
                    }
                    if sign == 0.0 {
                        sign = cross.signum();
                    } else if cross.signum() != sign {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Overlap with an axis-aligned rect, touching counts as apart
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        match self {
            Shape::Rect(r) => r.intersects(rect),
            Shape::Polygon { points } => {
                // The bounds test covers the x and y axes of the SAT
                if points.len() < 3 || !self.bounds().intersects(rect) {
                    return false;
                }
                let corners = [
                    rect.min(),
                    Vec2::new(rect.x + rect.w, rect.y),
                    rect.max(),
                    Vec2::new(rect.x, rect.y + rect.h),
                ];
                for (a, b) in edges(points) {
                    let axis = (b - a).perp();
                    let (pmin, pmax) = project(points, axis);
                    let (rmin, rmax) = project(&corners, axis);
                    if pmax <= rmin || rmax <= pmin {
                        return false;
                    }
                }
                true
            }
        }
    }

    /// Check the shape is usable as a hit region
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Shape::Rect(r) => r.validate(),
            Shape::Polygon { points } => {
                if points.len() < 3 {
                    return Err(format!("polygon needs at least 3 points, got {}", points.len()));
                }
                if points.iter().any(|p| !p.is_finite()) {
                    return Err("polygon has non-finite vertices".into());
                }
                let mut sign = 0.0f32;
                let mut area2 = 0.0f32;
                for (i, (a, b)) in edges(points).enumerate() {
                    let c = points[(i + 2) % points.len()];
                    let cross = (b - a).perp_dot(c - b);
                    area2 += a.perp_dot(b);
                    if cross == 0.0 {
                        continue;
                    }
                    if sign == 0.0 {
                        sign = cross.signum();
                    } else if cross.signum() != sign {
                        return Err("polygon is not convex".into());
                    }
                }
                if area2 == 0.0 {
                    return Err("polygon has zero area".into());
                }
                Ok(())
            }
        }
    }
}

/// Consecutive vertex pairs, closing back to the first vertex
fn edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    points
        .iter()
        .enumerate()
        .map(move |(i, a)| (*a, points[(i + 1) % points.len()]))
}

fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
        let d = p.dot(axis);
        (lo.min(d), hi.max(d))
    })
}
