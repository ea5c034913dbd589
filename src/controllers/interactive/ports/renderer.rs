use crate::controllers::compositor::errors::RenderFrameError;
use crate::controllers::compositor::render::render_frame;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::cancellation::CancelToken;
use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FrameRendererPort: Send + Sync {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, RenderFrameError>;
}

/// Rayon CPU rasteriser.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuFrameRenderer;

impl FrameRendererPort for CpuFrameRenderer {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, RenderFrameError> {
        render_frame(&request.frame, request.palette_strip_rows, cancel)
    }
}
