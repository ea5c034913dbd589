use crate::core::camera::input::CameraInput;
use crate::core::data::vec2::Vec2;

/// Stick deflection below this is treated as rest.
pub const STICK_DEADZONE: f64 = 0.15;
/// Analogue trigger travel that counts as a press.
pub const TRIGGER_THRESHOLD: f64 = 0.5;

/// Stick positions of one gamepad, each in `[-1, 1]` with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GamepadAxes {
    pub left_x: f64,
    pub left_y: f64,
    pub right_x: f64,
    pub right_y: f64,
}

impl GamepadAxes {
    /// Left stick pans, right stick x rotates and right stick y zooms (up zooms in).
    #[must_use]
    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            dir: Vec2::new(deadzone(self.left_x), deadzone(self.left_y)),
            scale: deadzone(self.right_y),
            rotate: deadzone(self.right_x),
        }
        .normalized()
    }
}

fn deadzone(value: f64) -> f64 {
    if !value.is_finite() || value.abs() < STICK_DEADZONE {
        0.0
    } else {
        value
    }
}
