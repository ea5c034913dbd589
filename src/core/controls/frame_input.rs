use crate::core::camera::input::CameraInput;

/// One-shot selection events raised during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEvents {
    pub reset_camera: bool,
    pub next_seed: bool,
    pub prev_seed: bool,
    pub next_palette: bool,
    pub prev_palette: bool,
}

impl FrameEvents {
    #[must_use]
    pub fn changes_selection(&self) -> bool {
        self.next_seed || self.prev_seed || self.next_palette || self.prev_palette
    }
}

/// Everything the compositor consumes from the input side for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub camera: CameraInput,
    pub events: FrameEvents,
}

/// Presentation-only switches; they never reach the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationEdges {
    pub fullscreen: bool,
    pub vsync: bool,
    pub palette_strip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlSnapshot {
    pub frame: FrameInput,
    pub presentation: PresentationEdges,
}
