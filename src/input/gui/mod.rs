//! Windowed front end: winit for the window and input, pixels for the framebuffer,
//! egui for the status overlay, gilrs for gamepads.

pub mod app;
pub mod command;
pub mod events;
pub mod gamepad;
pub mod keymap;
