use crate::core::camera::input::CameraInput;
use crate::core::controls::control::Control;
use crate::core::controls::edge_detector::EdgeDetector;
use crate::core::controls::frame_input::{ControlSnapshot, FrameInput};
use crate::core::controls::gamepad::{GamepadAxes, TRIGGER_THRESHOLD};
use crate::core::data::vec2::Vec2;

/// Accumulates control transitions between frames and hands out one snapshot per frame.
///
/// Continuous controls are read from the held set at snapshot time. One-shot
/// controls latch on their rising edge and are cleared by the snapshot that
/// reports them.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    edges: EdgeDetector<Control>,
    pending: ControlSnapshot,
    gamepad: GamepadAxes,
}

impl ControlState {
    pub fn handle(&mut self, control: Control, pressed: bool) {
        if self.edges.update(control, pressed) {
            self.latch(control);
        }
    }

    /// An analogue input driving a one-shot control, pressed past [`TRIGGER_THRESHOLD`].
    pub fn handle_axis(&mut self, control: Control, value: f64) {
        if self.edges.axis(control, value, TRIGGER_THRESHOLD) {
            self.latch(control);
        }
    }

    /// Latest stick positions; added to the keyboard axes until replaced.
    pub fn set_gamepad_axes(&mut self, axes: GamepadAxes) {
        self.gamepad = axes;
    }

    fn latch(&mut self, control: Control) {
        let events = &mut self.pending.frame.events;
        let presentation = &mut self.pending.presentation;

        match control {
            Control::ResetCamera => events.reset_camera = true,
            Control::NextSeed => events.next_seed = true,
            Control::PrevSeed => events.prev_seed = true,
            Control::NextPalette => events.next_palette = true,
            Control::PrevPalette => events.prev_palette = true,
            Control::ToggleFullscreen => presentation.fullscreen = true,
            Control::ToggleVsync => presentation.vsync = true,
            Control::TogglePaletteStrip => presentation.palette_strip = true,
            _ => {}
        }
    }

    /// `suppressed` is set while another widget owns the keyboard; the result is neutral
    /// and latched edges are dropped.
    pub fn snapshot(&mut self, suppressed: bool) -> ControlSnapshot {
        let pending = std::mem::take(&mut self.pending);

        if suppressed {
            return ControlSnapshot::default();
        }

        ControlSnapshot {
            frame: FrameInput {
                camera: self.camera_input(),
                events: pending.frame.events,
            },
            presentation: pending.presentation,
        }
    }

    pub fn reset(&mut self) {
        self.edges.release_all();
        self.pending = ControlSnapshot::default();
        self.gamepad = GamepadAxes::default();
    }

    fn camera_input(&self) -> CameraInput {
        let held = |control| self.edges.is_held(control);
        let pad = self.gamepad.camera_input();

        CameraInput {
            dir: Vec2 {
                x: pad.dir.x + axis_from_pair(held(Control::MoveRight), held(Control::MoveLeft)),
                y: pad.dir.y + axis_from_pair(held(Control::MoveUp), held(Control::MoveDown)),
            },
            scale: pad.scale + axis_from_pair(held(Control::ZoomIn), held(Control::ZoomOut)),
            rotate: pad.rotate
                + axis_from_pair(held(Control::RotateRight), held(Control::RotateLeft)),
        }
        .normalized()
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controls::frame_input::FrameEvents;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn held_controls_drive_camera_axes() {
        let mut state = ControlState::default();

        state.handle(Control::MoveRight, true);
        state.handle(Control::ZoomOut, true);
        state.handle(Control::RotateLeft, true);

        let snapshot = state.snapshot(false);
        assert_eq!(snapshot.frame.camera.dir, Vec2::new(1.0, 0.0));
        assert_eq!(snapshot.frame.camera.scale, -1.0);
        assert_eq!(snapshot.frame.camera.rotate, -1.0);

        // still held on the next frame
        assert_eq!(state.snapshot(false).frame.camera.scale, -1.0);

        state.handle(Control::ZoomOut, false);
        assert_eq!(state.snapshot(false).frame.camera.scale, 0.0);
    }

    #[test]
    fn diagonal_pan_is_normalised() {
        let mut state = ControlState::default();

        state.handle(Control::MoveUp, true);
        state.handle(Control::MoveLeft, true);

        let dir = state.snapshot(false).frame.camera.dir;
        assert!((dir.x + FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((dir.y - FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn opposing_controls_cancel() {
        let mut state = ControlState::default();

        state.handle(Control::ZoomIn, true);
        state.handle(Control::ZoomOut, true);

        assert_eq!(state.snapshot(false).frame.camera.scale, 0.0);
    }

    #[test]
    fn one_shot_fires_once_even_with_repeats() {
        let mut state = ControlState::default();

        state.handle(Control::NextSeed, true);
        state.handle(Control::NextSeed, true);

        let first = state.snapshot(false);
        let second = state.snapshot(false);

        assert!(first.frame.events.next_seed);
        assert!(!second.frame.events.next_seed);
    }

    #[test]
    fn one_shot_needs_release_before_firing_again() {
        let mut state = ControlState::default();

        state.handle(Control::NextPalette, true);
        state.snapshot(false);
        state.handle(Control::NextPalette, true);
        assert!(!state.snapshot(false).frame.events.next_palette);

        state.handle(Control::NextPalette, false);
        state.handle(Control::NextPalette, true);
        assert!(state.snapshot(false).frame.events.next_palette);
    }

    #[test]
    fn presentation_toggles_are_kept_apart_from_frame_events() {
        let mut state = ControlState::default();

        state.handle(Control::ToggleFullscreen, true);
        state.handle(Control::ToggleVsync, true);

        let snapshot = state.snapshot(false);
        assert!(snapshot.presentation.fullscreen);
        assert!(snapshot.presentation.vsync);
        assert!(!snapshot.presentation.palette_strip);
        assert_eq!(snapshot.frame.events, FrameEvents::default());
    }

    #[test]
    fn suppressed_snapshot_is_neutral_and_drops_edges() {
        let mut state = ControlState::default();

        state.handle(Control::MoveUp, true);
        state.handle(Control::ResetCamera, true);

        assert_eq!(state.snapshot(true), ControlSnapshot::default());

        let after = state.snapshot(false);
        assert_eq!(after.frame.camera.dir, Vec2::new(0.0, 1.0));
        assert!(!after.frame.events.reset_camera);
    }

    #[test]
    fn gamepad_sticks_feed_camera_axes() {
        let mut state = ControlState::default();

        state.set_gamepad_axes(GamepadAxes {
            left_x: -0.5,
            right_x: 0.75,
            right_y: -1.0,
            ..GamepadAxes::default()
        });

        let camera = state.snapshot(false).frame.camera;
        assert_eq!(camera.dir, Vec2::new(-0.5, 0.0));
        assert_eq!(camera.rotate, 0.75);
        assert_eq!(camera.scale, -1.0);
    }

    #[test]
    fn gamepad_and_keys_combine_then_clamp() {
        let mut state = ControlState::default();

        state.handle(Control::ZoomIn, true);
        state.set_gamepad_axes(GamepadAxes {
            right_y: 0.5,
            left_x: -1.0,
            ..GamepadAxes::default()
        });
        state.handle(Control::MoveRight, true);

        let camera = state.snapshot(false).frame.camera;
        assert_eq!(camera.scale, 1.0);
        assert_eq!(camera.dir, Vec2::ZERO);
    }

    #[test]
    fn trigger_past_threshold_fires_one_event() {
        let mut state = ControlState::default();

        state.handle_axis(Control::NextPalette, 0.3);
        assert!(!state.snapshot(false).frame.events.next_palette);

        state.handle_axis(Control::NextPalette, 0.6);
        state.handle_axis(Control::NextPalette, 0.9);
        assert!(state.snapshot(false).frame.events.next_palette);
        assert!(!state.snapshot(false).frame.events.next_palette);

        state.handle_axis(Control::NextPalette, 0.1);
        state.handle_axis(Control::NextPalette, 1.0);
        assert!(state.snapshot(false).frame.events.next_palette);
    }

    #[test]
    fn reset_clears_held_and_pending() {
        let mut state = ControlState::default();
        state.handle(Control::MoveUp, true);
        state.handle(Control::PrevSeed, true);
        state.set_gamepad_axes(GamepadAxes {
            left_y: 1.0,
            ..GamepadAxes::default()
        });

        state.reset();

        assert_eq!(state.snapshot(false), ControlSnapshot::default());
    }
}
