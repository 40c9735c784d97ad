use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Smallest distance used as a divisor. Anything closer is treated as this far apart.
pub const DISTANCE_FLOOR: f64 = 1e-4;

/// Plain 2D vector in canvas units (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    /// Unit vector pointing from `from` towards `self`.
    ///
    /// The distance is floored at [`DISTANCE_FLOOR`], so coincident points
    /// yield a zero vector instead of NaN.
    pub fn direction_from(self, from: Vec2) -> Vec2 {
        let delta = self - from;
        delta * (1.0 / delta.length().max(DISTANCE_FLOOR))
    }

    /// Rescale to `max` when longer than `max`, keeping the direction.
    pub fn clamp_length(self, max: f64) -> Vec2 {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }

    /// Point on a circle of `radius` around `self` at `angle` radians.
    pub fn orbit(self, angle: f64, radius: f64) -> Vec2 {
        Vec2::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4_is_5() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn direction_from_is_unit_length() {
        let d = Vec2::new(10.0, 10.0).direction_from(Vec2::new(4.0, 2.0));
        assert!((d.length() - 1.0).abs() < 1e-12);
        assert!(d.x > 0.0 && d.y > 0.0);
    }

    #[test]
    fn direction_from_coincident_points_is_zero_not_nan() {
        let p = Vec2::new(240.0, 160.0);
        let d = p.direction_from(p);
        assert!(d.is_finite());
        assert_eq!(d, Vec2::ZERO);
    }

    #[test]
    fn clamp_length_keeps_direction() {
        let v = Vec2::new(30.0, 40.0).clamp_length(5.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!((v.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_length_leaves_short_vectors_alone() {
        let v = Vec2::new(1.0, -1.0);
        assert_eq!(v.clamp_length(5.0), v);
    }

    #[test]
    fn orbit_lies_on_circle() {
        let c = Vec2::new(100.0, 50.0);
        let p = c.orbit(1.3, 20.0);
        assert!((p.distance(c) - 20.0).abs() < 1e-9);
    }
}
