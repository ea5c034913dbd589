use std::f64::consts::PI;

pub const DEFAULT_ZOOM_IN_SPEED: f64 = 0.5;
pub const DEFAULT_ZOOM_OUT_SPEED: f64 = 1.5;
pub const DEFAULT_ROTATE_SPEED: f64 = PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Fractional scale change per second at full zoom-in input.
    pub zoom_in_speed: f64,
    /// Fractional scale change per second at full zoom-out input.
    pub zoom_out_speed: f64,
    /// Radians per second at full rotate input.
    pub rotate_speed: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_in_speed: DEFAULT_ZOOM_IN_SPEED,
            zoom_out_speed: DEFAULT_ZOOM_OUT_SPEED,
            rotate_speed: DEFAULT_ROTATE_SPEED,
            min_scale: 1e-15,
            max_scale: 1e4,
        }
    }
}
