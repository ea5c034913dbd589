//! Interactive Julia/Mandelbrot viewer.
//!
//! The core is headless: a camera integrates pan, zoom and rotate input, a compositor
//! freezes each frame into a [`FrameState`], and the escape-time renderer turns that
//! into RGB pixels. The `gui` feature adds a winit + pixels window on top.

pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
mod logging;
pub mod presenters;

pub use controllers::cli::raster::{RasterController, RasterOptions, describe_presets};
pub use controllers::compositor::{
    CompositorConfig, FrameCompositor, FrameState, PALETTE_STRIP_ROWS, render_frame,
};
pub use crate::core::data::viewport::Viewport;
pub use logging::init_tracing;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::command::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
