use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Rectangular play area anchored at the origin.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
        }
    }
}

/// Which walls were hit during a single [`Bounds::confine`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive `(min, max)` corners of the area inset by `padding` on every side.
    ///
    /// When the padding is wider than half the area, both corners collapse onto the centre.
    pub fn inset(&self, padding: f64) -> (Vec2, Vec2) {
        let (min_x, max_x) = inset_axis(self.width, padding);
        let (min_y, max_y) = inset_axis(self.height, padding);
        (Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    pub fn contains_inset(&self, p: Vec2, padding: f64) -> bool {
        let (min, max) = self.inset(padding);
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Keep `pos` inside the inset area.
    ///
    /// On every axis where `pos` crossed the boundary the position is clamped
    /// exactly onto it and the velocity component is reversed and scaled by
    /// `restitution`.
    pub fn confine(
        &self,
        pos: &mut Vec2,
        vel: &mut Vec2,
        padding: f64,
        restitution: f64,
    ) -> WallHit {
        let (min, max) = self.inset(padding);
        let mut hit = WallHit::default();

        if pos.x < min.x || pos.x > max.x {
            vel.x *= -restitution;
            pos.x = pos.x.clamp(min.x, max.x);
            hit.x = true;
        }
        if pos.y < min.y || pos.y > max.y {
            vel.y *= -restitution;
            pos.y = pos.y.clamp(min.y, max.y);
            hit.y = true;
        }
        hit
    }
}

fn inset_axis(extent: f64, padding: f64) -> (f64, f64) {
    let lo = padding;
    let hi = extent - padding;
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = extent * 0.5;
        (mid, mid)
    }
}
