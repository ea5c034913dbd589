//! Background render worker for the interactive viewer.
//!
//! The GUI submits [`RenderRequest`]s; the worker always renders the newest one,
//! cancelling anything in flight, and hands finished frames to an
//! [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render::RenderError;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use ports::renderer::{CpuFrameRenderer, FrameRendererPort};
