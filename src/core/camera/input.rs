use crate::core::data::vec2::Vec2;

/// Continuous per-frame camera axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    /// Pan direction, length at most one.
    pub dir: Vec2,
    /// Positive zooms in.
    pub scale: f64,
    /// Positive input decreases the camera angle.
    pub rotate: f64,
}

impl CameraInput {
    /// Enforces `|dir| <= 1` and clamps both axes to `[-1, 1]`. NaN axes become 0.
    #[must_use]
    pub fn normalized(self) -> Self {
        let axis = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        let dir = if self.dir.is_finite() {
            self.dir.clamp_length()
        } else {
            Vec2::ZERO
        };

        Self {
            dir,
            scale: axis(self.scale),
            rotate: axis(self.rotate),
        }
    }
}
