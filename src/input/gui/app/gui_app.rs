use std::error::Error;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{debug, info};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window};

use crate::controllers::compositor::compositor::FrameCompositor;
use crate::controllers::compositor::config::PALETTE_STRIP_ROWS;
use crate::controllers::compositor::frame_state::FrameState;
use crate::controllers::compositor::timer::{FrameStats, FrameTimer};
use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::controls::control_state::ControlState;
use crate::core::controls::frame_input::PresentationEdges;
use crate::core::controls::toggle_switch::ToggleSwitch;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresentOutcome};
use crate::input::gui::events::GuiEvent;
use crate::input::gui::gamepad::{GAMEPAD_HELP, GamepadInput};
use crate::input::gui::keymap::{KEY_HELP, KeyAction, key_action};

use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiOptions {
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Control loop of the viewer: input in, one compositor step per redraw, render
/// requests out, and the presenter's surface lifecycle.
pub struct GuiApp<P: GuiPresenterPort> {
    window: &'static Window,
    presenter: P,
    controller: InteractiveController,
    compositor: FrameCompositor,
    controls: ControlState,
    gamepad: Option<GamepadInput>,
    timer: FrameTimer,
    fullscreen: ToggleSwitch,
    vsync: ToggleSwitch,
    palette_strip: ToggleSwitch,
    last_request: Option<RenderRequest>,
    last_stats: Option<FrameStats>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: P,
        controller: InteractiveController,
        compositor: FrameCompositor,
        options: GuiOptions,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            controller,
            compositor,
            controls: ControlState::default(),
            gamepad: GamepadInput::new(),
            timer: FrameTimer::new(),
            fullscreen: ToggleSwitch::new(options.fullscreen),
            vsync: ToggleSwitch::new(options.vsync),
            palette_strip: ToggleSwitch::new(false),
            last_request: None,
            last_stats: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Blocks until the window closes. A failure inside the loop stops it and is returned.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), Box<dyn Error>> {
        let mut fatal: Option<Box<dyn Error>> = None;

        event_loop.run(|event, elwt| {
            if let Err(err) = self.handle_event(event, elwt) {
                tracing::error!(error = %err, "viewer stopped");
                fatal = Some(err);
                elwt.exit();
            }
        })?;

        self.controller.shutdown();

        match fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_event(
        &mut self,
        event: Event<GuiEvent>,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) -> Result<(), Box<dyn Error>> {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(&event, elwt)?;
            }
            Event::UserEvent(GuiEvent::Wake) | Event::AboutToWait => {
                self.window.request_redraw();
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) -> Result<(), Box<dyn Error>> {
        let response = self.egui_state.on_window_event(self.window, event);

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;

                // releases always go through so no key stays stuck behind a widget
                if pressed && response.consumed {
                    return Ok(());
                }

                if let PhysicalKey::Code(code) = event.physical_key {
                    match key_action(code) {
                        Some(KeyAction::Quit) if pressed => elwt.exit(),
                        Some(KeyAction::Control(control)) => self.controls.handle(control, pressed),
                        _ => {}
                    }
                }
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => self.controls.reset(),
            WindowEvent::RedrawRequested => self.redraw()?,
            _ => {}
        }

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        let viewport = self.presenter.resize(width, height);
        self.compositor.resize(viewport);
    }

    fn redraw(&mut self) -> Result<(), Box<dyn Error>> {
        let tick = self.timer.tick();
        if tick.stats.is_some() {
            self.last_stats = tick.stats;
        }

        if let Some(gamepad) = self.gamepad.as_mut() {
            gamepad.poll(&mut self.controls);
        }

        let snapshot = self.controls.snapshot(self.egui_ctx.wants_keyboard_input());
        self.apply_presentation(snapshot.presentation)?;

        let frame = self.compositor.advance(&snapshot.frame, tick.dt)?;
        self.submit_if_changed(frame);

        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if self.presenter.render(egui_output, &self.egui_ctx)? == PresentOutcome::SurfaceRebuilt {
            self.after_surface_rebuild();
        }

        Ok(())
    }

    fn apply_presentation(&mut self, edges: PresentationEdges) -> Result<(), P::Error> {
        self.palette_strip.update(edges.palette_strip);

        self.fullscreen.update(edges.fullscreen);
        if self.fullscreen.toggled() {
            info!(fullscreen = self.fullscreen.value(), "fullscreen toggled");
            self.window
                .set_fullscreen(self.fullscreen.value().then_some(Fullscreen::Borderless(None)));
            self.presenter.rebuild_surface(self.vsync.value())?;
            self.after_surface_rebuild();
        }

        self.vsync.update(edges.vsync);
        if self.vsync.toggled() {
            info!(vsync = self.vsync.value(), "vsync toggled");
            self.presenter.rebuild_surface(self.vsync.value())?;
            self.after_surface_rebuild();
        }

        Ok(())
    }

    /// The new surface starts blank, so the last frame goes back to the worker.
    fn after_surface_rebuild(&mut self) {
        self.timer.restart();
        self.compositor.resize(self.presenter.viewport());

        match self.last_request.take() {
            Some(request) if request.frame.viewport() == self.compositor.viewport() => {
                self.controller.submit_request(request.clone());
                self.last_request = Some(request);
            }
            _ => debug!("viewport changed with the surface, next frame resubmits"),
        }
    }

    fn submit_if_changed(&mut self, frame: Arc<FrameState>) {
        let strip_rows = if self.palette_strip.value() {
            PALETTE_STRIP_ROWS
        } else {
            0
        };
        let request = RenderRequest::new(frame, strip_rows);

        if self
            .last_request
            .as_ref()
            .is_some_and(|last| last.same_output(&request))
        {
            return;
        }

        self.controller.submit_request(request.clone());
        self.last_request = Some(request);
    }

    fn overlay_lines(&self) -> Vec<String> {
        let camera = self.compositor.camera().state();
        let viewport = self.compositor.viewport();
        let status = self.presenter.status();
        let mut lines = vec![
            format!(
                "Seed {}/{}: {}",
                self.compositor.seeds().active_index() + 1,
                self.compositor.seeds().len(),
                self.compositor.seed()
            ),
            format!("Palette: {}", self.compositor.palette_name()),
            format!(
                "Camera: scale {:.3e}, angle {:.3}, at ({:.1}, {:.1})",
                camera.scale, camera.angle, camera.position.x, camera.position.y
            ),
            format!("Viewport: {}x{}", viewport.width(), viewport.height()),
            format!(
                "Vsync: {}  Fullscreen: {}  Strip: {}",
                on_off(self.vsync.value()),
                on_off(self.fullscreen.value()),
                on_off(self.palette_strip.value())
            ),
            format!(
                "Submitted: {}  Presented: {}",
                self.controller.last_submitted_generation(),
                status.last_presented_generation
            ),
        ];

        if let Some(stats) = self.last_stats {
            lines.push(format!(
                "{:.1} fps ({:.2} ms)",
                stats.fps,
                stats.average_frame.as_secs_f64() * 1000.0
            ));
        }
        if let Some(duration) = status.last_render_duration {
            lines.push(format!("Last render: {} ms", duration.as_millis()));
        }

        lines
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let lines = self.overlay_lines();
        let last_error = self.presenter.status().last_error;
        let raw_input = self.egui_state.take_egui_input(self.window);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal Viewer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 200.0])
                .show(ctx, |ui| {
                    for line in &lines {
                        ui.label(line);
                    }

                    if let Some(message) = &last_error {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.collapsing("Keys", |ui| {
                        for (keys, action) in KEY_HELP.iter().chain(GAMEPAD_HELP) {
                            ui.label(format!("{}: {}", keys, action));
                        }
                    });
                });
        })
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
