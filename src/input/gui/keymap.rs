use winit::keyboard::KeyCode;

use crate::core::controls::control::Control;

/// What a physical key does in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Control(Control),
    Quit,
}

#[must_use]
pub fn key_action(key: KeyCode) -> Option<KeyAction> {
    let control = match key {
        KeyCode::Escape => return Some(KeyAction::Quit),
        KeyCode::KeyA => Control::MoveLeft,
        KeyCode::KeyD => Control::MoveRight,
        KeyCode::KeyW => Control::MoveUp,
        KeyCode::KeyS => Control::MoveDown,
        KeyCode::ArrowUp | KeyCode::Space => Control::ZoomIn,
        KeyCode::ArrowDown | KeyCode::ShiftLeft => Control::ZoomOut,
        KeyCode::ArrowLeft | KeyCode::KeyQ => Control::RotateLeft,
        KeyCode::ArrowRight | KeyCode::KeyE => Control::RotateRight,
        KeyCode::KeyR => Control::ResetCamera,
        KeyCode::Tab => Control::NextSeed,
        KeyCode::KeyT => Control::PrevSeed,
        KeyCode::KeyX => Control::NextPalette,
        KeyCode::KeyZ => Control::PrevPalette,
        KeyCode::KeyF => Control::ToggleFullscreen,
        KeyCode::Backquote => Control::ToggleVsync,
        KeyCode::KeyP => Control::TogglePaletteStrip,
        _ => return None,
    };

    Some(KeyAction::Control(control))
}

pub const KEY_HELP: &[(&str, &str)] = &[
    ("WASD", "pan"),
    ("Up/Down, Space/LShift", "zoom"),
    ("Left/Right, Q/E", "rotate"),
    ("R", "reset camera"),
    ("Tab/T", "next/previous seed"),
    ("X/Z", "next/previous palette"),
    ("F", "fullscreen"),
    ("`", "vsync"),
    ("P", "palette strip"),
    ("Esc", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_keys_share_a_control() {
        assert_eq!(key_action(KeyCode::ArrowUp), key_action(KeyCode::Space));
        assert_eq!(key_action(KeyCode::ArrowDown), key_action(KeyCode::ShiftLeft));
        assert_eq!(key_action(KeyCode::ArrowLeft), key_action(KeyCode::KeyQ));
        assert_eq!(key_action(KeyCode::ArrowRight), key_action(KeyCode::KeyE));
    }

    #[test]
    fn selection_keys() {
        assert_eq!(key_action(KeyCode::Tab), Some(KeyAction::Control(Control::NextSeed)));
        assert_eq!(key_action(KeyCode::KeyT), Some(KeyAction::Control(Control::PrevSeed)));
        assert_eq!(key_action(KeyCode::KeyX), Some(KeyAction::Control(Control::NextPalette)));
        assert_eq!(key_action(KeyCode::KeyZ), Some(KeyAction::Control(Control::PrevPalette)));
    }

    #[test]
    fn escape_quits_and_unbound_keys_are_ignored() {
        assert_eq!(key_action(KeyCode::Escape), Some(KeyAction::Quit));
        assert_eq!(key_action(KeyCode::KeyM), None);
    }
}
