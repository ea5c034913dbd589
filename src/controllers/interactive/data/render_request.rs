use std::sync::Arc;

use crate::controllers::compositor::frame_state::FrameState;

/// One render job: a frozen frame plus presentation-only overlay settings.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub frame: Arc<FrameState>,
    pub palette_strip_rows: u32,
}

impl RenderRequest {
    #[must_use]
    pub fn new(frame: Arc<FrameState>, palette_strip_rows: u32) -> Self {
        Self {
            frame,
            palette_strip_rows,
        }
    }

    /// Whether rendering `other` would reproduce this request's pixels.
    #[must_use]
    pub fn same_output(&self, other: &Self) -> bool {
        self.palette_strip_rows == other.palette_strip_rows && self.frame.same_content(&other.frame)
    }
}
