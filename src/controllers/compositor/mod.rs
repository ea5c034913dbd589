pub mod compositor;
pub mod config;
pub mod errors;
pub mod frame_state;
pub mod render;
pub mod timer;

pub use compositor::FrameCompositor;
pub use config::{CompositorConfig, PALETTE_STRIP_ROWS};
pub use errors::{CompositorError, RenderFrameError};
pub use frame_state::FrameState;
pub use render::render_frame;
pub use timer::{FrameStats, FrameTick, FrameTimer};
