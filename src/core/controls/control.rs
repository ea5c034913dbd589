/// Logical controls, independent of the device that drives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    ResetCamera,
    NextSeed,
    PrevSeed,
    NextPalette,
    PrevPalette,
    ToggleFullscreen,
    ToggleVsync,
    TogglePaletteStrip,
}
