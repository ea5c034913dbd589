/// User events delivered to the GUI event loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The render worker published a frame or an error. Redraw to pick it up.
    Wake,
}
