use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use tracing::{debug, error, info, warn};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::ports::presenter::{GuiPresenterPort, PresentOutcome, PresenterStatus};
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::errors::PixelsPresenterError;

struct Surface {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
}

impl Surface {
    fn new(window: &'static Window, viewport: Viewport, vsync: bool) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);

        let pixels = PixelsBuilder::new(viewport.width(), viewport.height(), surface_texture)
            .enable_vsync(vsync)
            .build()?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
        })
    }
}

/// Window presenter: the latest worker frame in a `pixels` framebuffer with the egui
/// overlay drawn on top.
pub struct PixelsPresenter {
    window: &'static Window,
    surface: Option<Surface>,
    adapter: Arc<PixelsAdapter>,
    viewport: Viewport,
    surface_size: [u32; 2],
    vsync: bool,
    has_frame: bool,
    status: PresenterStatus,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        vsync: bool,
    ) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let viewport = Viewport::new_or_default(size.width, size.height);
        let surface = Surface::new(window, viewport, vsync)?;

        info!(
            width = viewport.width(),
            height = viewport.height(),
            vsync,
            "pixels surface created"
        );

        Ok(Self {
            window,
            surface: Some(surface),
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            viewport,
            surface_size: [size.width, size.height],
            vsync,
            has_frame: false,
            status: PresenterStatus::default(),
        })
    }

    fn take_render_event(&mut self) {
        let Some(event) = self.adapter.render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let pixel_rect = frame.pixel_buffer.pixel_rect();

                if frame.generation > self.status.last_presented_generation
                    && pixel_rect == self.viewport.pixel_rect()
                {
                    self.copy_frame(&frame);
                }
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.status.last_presented_generation {
                    self.status.last_error = Some(error.message);
                }
            }
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), surface.pixels.frame_mut()) {
            Ok(()) => {
                self.has_frame = true;
                self.status.last_presented_generation = frame.generation;
                self.status.last_render_duration = Some(frame.render_duration);
                self.status.last_error = None;
            }
            Err(err) => warn!(generation = frame.generation, error = %err, "frame dropped"),
        }
    }

    fn clear(surface: &mut Surface) {
        for pixel in surface.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<PresentOutcome, Self::Error> {
        if self.surface_size.contains(&0) {
            return Ok(PresentOutcome::Presented);
        }

        self.take_render_event();

        let has_frame = self.has_frame;
        let surface_size = self.surface_size;
        let Some(surface) = self.surface.as_mut() else {
            return Err(PixelsPresenterError::NoSurface);
        };

        if !has_frame {
            Self::clear(surface);
        }

        let result = surface.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let pixels_per_point = egui_ctx.pixels_per_point();
            let clipped_primitives = egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point,
            };
            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                surface
                    .egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            surface.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                surface
                    .egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                surface.egui_renderer.free_texture(id);
            }

            Ok(())
        });

        match result {
            Ok(()) => Ok(PresentOutcome::Presented),
            Err(pixels::Error::Surface(err)) => {
                warn!(error = %err, "surface lost, rebuilding");
                self.rebuild_surface(self.vsync)?;
                Ok(PresentOutcome::SurfaceRebuilt)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Viewport {
        self.surface_size = [width, height];

        if width == 0 || height == 0 {
            debug!("window minimised, keeping viewport");
            return self.viewport;
        }

        let mut viewport = Viewport::new(width, height).unwrap_or_else(|err| {
            warn!(error = %err, "unusable window size, using default viewport");
            Viewport::default()
        });

        let Some(surface) = self.surface.as_mut() else {
            self.viewport = viewport;
            return viewport;
        };

        if let Err(err) = surface.pixels.resize_surface(width, height) {
            warn!(error = %err, width, height, "surface resize failed");
        }

        if let Err(err) = surface.pixels.resize_buffer(viewport.width(), viewport.height()) {
            warn!(error = %err, "buffer resize failed, using default viewport");
            viewport = Viewport::default();

            if let Err(err) = surface.pixels.resize_buffer(viewport.width(), viewport.height()) {
                error!(error = %err, "default buffer size rejected");
            }
        }

        self.viewport = viewport;
        self.has_frame = false;
        viewport
    }

    fn rebuild_surface(&mut self, vsync: bool) -> Result<(), Self::Error> {
        // the old surface must be gone before the window can be bound again
        self.surface = None;
        self.has_frame = false;
        self.vsync = vsync;

        let size = self.window.inner_size();
        self.surface_size = [size.width, size.height];
        if let Ok(viewport) = Viewport::new(size.width, size.height) {
            self.viewport = viewport;
        }

        self.surface = Some(Surface::new(self.window, self.viewport, vsync)?);
        info!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            vsync,
            "pixels surface rebuilt"
        );

        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn status(&self) -> PresenterStatus {
        self.status.clone()
    }
}
