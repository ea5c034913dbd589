use crate::core::data::vec2::Vec2;

/// Camera placement in device-pixel units, before the viewport fit is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec2,
    pub scale: f64,
    /// Radians in `[-π, π)`.
    pub angle: f64,
}

impl CameraState {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.scale.is_finite() && self.angle.is_finite()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraWarning {
    ScaleClamped,
    NonFiniteReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraUpdateReport {
    pub clamped: bool,
    pub reset: bool,
    pub warning: Option<CameraWarning>,
}
