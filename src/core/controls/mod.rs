pub mod control;
pub mod control_state;
pub mod edge_detector;
pub mod frame_input;
pub mod gamepad;
pub mod toggle_switch;

pub use control::Control;
pub use control_state::ControlState;
pub use edge_detector::EdgeDetector;
pub use frame_input::{ControlSnapshot, FrameEvents, FrameInput, PresentationEdges};
pub use gamepad::GamepadAxes;
pub use toggle_switch::ToggleSwitch;
