use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentOutcome {
    Presented,
    /// The surface was lost and rebuilt; the current frame must be rendered again.
    SurfaceRebuilt,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterStatus {
    pub last_presented_generation: u64,
    pub last_render_duration: Option<Duration>,
    pub last_error: Option<String>,
}

pub trait GuiPresenterPort {
    type Error: Error + 'static;

    /// Stays valid across surface rebuilds.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<PresentOutcome, Self::Error>;

    /// Returns the viewport actually in effect, which falls back to the default size
    /// when the requested one cannot be used.
    fn resize(&mut self, width: u32, height: u32) -> Viewport;

    /// Tears down and recreates the surface, e.g. after a vsync or fullscreen change.
    fn rebuild_surface(&mut self, vsync: bool) -> Result<(), Self::Error>;

    fn viewport(&self) -> Viewport;

    fn status(&self) -> PresenterStatus;
}
