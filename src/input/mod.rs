//! Input adapters that turn user interaction into compositor frames.

#[cfg(feature = "gui")]
pub mod gui;
