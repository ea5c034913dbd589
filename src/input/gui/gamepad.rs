use gilrs::{Axis, Button, EventType, Gilrs};
use tracing::{debug, info, warn};

use crate::core::controls::control::Control;
use crate::core::controls::control_state::ControlState;
use crate::core::controls::gamepad::GamepadAxes;

pub const GAMEPAD_HELP: &[(&str, &str)] = &[
    ("Left stick", "pan"),
    ("Right stick", "zoom (y), rotate (x)"),
    ("RB / LB", "next / previous seed"),
    ("RT / LT, D-pad right / left", "next / previous palette"),
    ("Start", "reset camera"),
];

/// Digital buttons. The analogue triggers go through [`trigger_control`] instead.
#[must_use]
pub fn button_control(button: Button) -> Option<Control> {
    let control = match button {
        Button::RightTrigger => Control::NextSeed,
        Button::LeftTrigger => Control::PrevSeed,
        Button::DPadRight => Control::NextPalette,
        Button::DPadLeft => Control::PrevPalette,
        Button::Start => Control::ResetCamera,
        _ => return None,
    };

    Some(control)
}

#[must_use]
pub fn trigger_control(button: Button) -> Option<Control> {
    match button {
        Button::RightTrigger2 => Some(Control::NextPalette),
        Button::LeftTrigger2 => Some(Control::PrevPalette),
        _ => None,
    }
}

/// Polls the first connected gamepad into a [`ControlState`].
pub struct GamepadInput {
    gilrs: Gilrs,
}

impl GamepadInput {
    /// `None` when the platform has no gamepad backend; the viewer keeps running on keys.
    pub fn new() -> Option<Self> {
        match Gilrs::new() {
            Ok(gilrs) => {
                for (_, gamepad) in gilrs.gamepads() {
                    info!(name = gamepad.name(), "gamepad connected");
                }
                Some(Self { gilrs })
            }
            Err(err) => {
                warn!(error = %err, "gamepad support unavailable");
                None
            }
        }
    }

    pub fn poll(&mut self, controls: &mut ControlState) {
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::ButtonPressed(button, _) => {
                    if let Some(control) = button_control(button) {
                        controls.handle(control, true);
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(control) = button_control(button) {
                        controls.handle(control, false);
                    }
                }
                EventType::ButtonChanged(button, value, _) => {
                    if let Some(control) = trigger_control(button) {
                        controls.handle_axis(control, f64::from(value));
                    }
                }
                EventType::Connected => debug!(id = ?event.id, "gamepad connected"),
                EventType::Disconnected => debug!(id = ?event.id, "gamepad disconnected"),
                _ => {}
            }
        }

        let axes = self
            .gilrs
            .gamepads()
            .next()
            .map(|(_, gamepad)| GamepadAxes {
                left_x: f64::from(gamepad.value(Axis::LeftStickX)),
                left_y: f64::from(gamepad.value(Axis::LeftStickY)),
                right_x: f64::from(gamepad.value(Axis::RightStickX)),
                right_y: f64::from(gamepad.value(Axis::RightStickY)),
            })
            .unwrap_or_default();

        controls.set_gamepad_axes(axes);
    }
}
