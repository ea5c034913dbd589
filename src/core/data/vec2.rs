use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
        }
    }

    /// Scales down to unit length when longer than one; shorter vectors pass through.
    #[must_use]
    pub fn clamp_length(self) -> Self {
        let length = self.length();

        if length > 1.0 {
            self * length.recip()
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    const EPSILON: f64 = 1e-12;

    fn assert_vec_approx_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual.x - expected.x).abs() <= EPSILON && (actual.y - expected.y).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn rotated_quarter_turn_maps_x_to_y() {
        assert_vec_approx_eq(Vec2::new(1.0, 0.0).rotated(FRAC_PI_2), Vec2::new(0.0, 1.0));
        assert_vec_approx_eq(Vec2::new(0.0, 1.0).rotated(FRAC_PI_2), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn clamp_length_normalises_diagonal() {
        let clamped = Vec2::new(1.0, 1.0).clamp_length();

        assert_vec_approx_eq(clamped, Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
    }

    #[test]
    fn clamp_length_keeps_short_vectors() {
        let short = Vec2::new(0.3, -0.4);

        assert_eq!(short.clamp_length(), short);
        assert_eq!(Vec2::ZERO.clamp_length(), Vec2::ZERO);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(0.5, -4.0);

        assert_eq!(v, Vec2::new(1.5, -2.0));
    }
}
