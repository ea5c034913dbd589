use winit::{event_loop::EventLoopProxy, window::Window};

use crate::input::gui::command::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::errors::PixelsPresenterError;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        vsync: bool,
    ) -> Result<PixelsPresenter, PixelsPresenterError> {
        PixelsPresenter::new(window, event_loop_proxy, vsync)
    }
}
