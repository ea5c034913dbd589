pub mod config;
pub mod controller;
pub mod input;
pub mod state;

pub use config::CameraConfig;
pub use controller::CameraController;
pub use input::CameraInput;
pub use state::{CameraState, CameraUpdateReport, CameraWarning};
