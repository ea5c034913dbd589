use std::ops::Mul;

use crate::core::data::complex::Complex;
use crate::core::data::vec2::Vec2;

/// Homogeneous 2-D transform stored row-major, applied to column vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    rows: [[f64; 3]; 3],
}

impl Affine2 {
    pub const IDENTITY: Self = Self {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[must_use]
    pub fn translation(offset: Vec2) -> Self {
        Self {
            rows: [[1.0, 0.0, offset.x], [0.0, 1.0, offset.y], [0.0, 0.0, 1.0]],
        }
    }

    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            rows: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[must_use]
    pub fn scaling(factor: f64) -> Self {
        Self {
            rows: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[must_use]
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        let [r0, r1, _] = self.rows;

        Vec2 {
            x: r0[0] * point.x + r0[1] * point.y + r0[2],
            y: r1[0] * point.x + r1[1] * point.y + r1[2],
        }
    }

    /// Maps a point into the complex plane, x to the real axis and y to the imaginary axis.
    #[must_use]
    pub fn apply_to_complex(&self, point: Vec2) -> Complex {
        let mapped = self.apply(point);
        Complex::new(mapped.x, mapped.y)
    }

    /// Column-major 4×4 embedding (z passes through) for graphics uniforms.
    #[must_use]
    pub fn to_mat4_column_major(&self) -> [f32; 16] {
        let [r0, r1, _] = self.rows;

        [
            r0[0] as f32, r1[0] as f32, 0.0, 0.0,
            r0[1] as f32, r1[1] as f32, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            r0[2] as f32, r1[2] as f32, 0.0, 1.0,
        ]
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut rows = [[0.0; 3]; 3];

        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }

        Self { rows }
    }
}
