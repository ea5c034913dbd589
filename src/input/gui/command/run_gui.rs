use std::error::Error;
use std::marker::PhantomData;

use tracing::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopBuilder;
use winit::window::{Fullscreen, Window, WindowBuilder};

use crate::controllers::compositor::compositor::FrameCompositor;
use crate::controllers::compositor::config::CompositorConfig;
use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::gui_app::{GuiApp, GuiOptions};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::command::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

const WINDOW_TITLE: &str = "Fractal Viewer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    options: GuiOptions,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            options: GuiOptions::default(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.options.fullscreen = fullscreen;
        self
    }

    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.options.vsync = vsync;
        self
    }

    /// Opens the window and runs the viewer until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(1024.0, 768.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .with_fullscreen(self.options.fullscreen.then_some(Fullscreen::Borderless(None)))
                .build(&event_loop)?,
        ));

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, self.options.vsync)?;

        let compositor = FrameCompositor::new(CompositorConfig {
            viewport: presenter.viewport(),
            ..CompositorConfig::default()
        })?;
        let controller = InteractiveController::new(presenter.share_adapter());

        info!(
            fullscreen = self.options.fullscreen,
            vsync = self.options.vsync,
            "viewer window open"
        );

        let app = GuiApp::new(window, &event_loop, presenter, controller, compositor, self.options);
        app.run(event_loop)
    }
}
