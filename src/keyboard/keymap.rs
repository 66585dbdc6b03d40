//! Key code definitions and mapping from winit's physical keys
//!
//! Key codes follow the GLFW numbering: printable keys use the ASCII value of
//! their unshifted US-layout character, everything else lives above 255.

use winit::keyboard::{KeyCode as WinitKeyCode, NativeKeyCode, PhysicalKey};

/// Represents a logical key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(-1);

    pub const SPACE: KeyCode = KeyCode(32);
    pub const APOSTROPHE: KeyCode = KeyCode(39);
    pub const COMMA: KeyCode = KeyCode(44);
    pub const MINUS: KeyCode = KeyCode(45);
    pub const PERIOD: KeyCode = KeyCode(46);
    pub const SLASH: KeyCode = KeyCode(47);
    pub const DIGIT_0: KeyCode = KeyCode(48);
    pub const SEMICOLON: KeyCode = KeyCode(59);
    pub const EQUAL: KeyCode = KeyCode(61);
    pub const A: KeyCode = KeyCode(65);
    pub const LEFT_BRACKET: KeyCode = KeyCode(91);
    pub const BACKSLASH: KeyCode = KeyCode(92);
    pub const RIGHT_BRACKET: KeyCode = KeyCode(93);
    pub const GRAVE_ACCENT: KeyCode = KeyCode(96);
    pub const WORLD_1: KeyCode = KeyCode(161);
    pub const WORLD_2: KeyCode = KeyCode(162);

    pub const ESCAPE: KeyCode = KeyCode(256);
    pub const ENTER: KeyCode = KeyCode(257);
    pub const TAB: KeyCode = KeyCode(258);
    pub const BACKSPACE: KeyCode = KeyCode(259);
    pub const INSERT: KeyCode = KeyCode(260);
    pub const DELETE: KeyCode = KeyCode(261);
    pub const RIGHT: KeyCode = KeyCode(262);
    pub const LEFT: KeyCode = KeyCode(263);
    pub const DOWN: KeyCode = KeyCode(264);
    pub const UP: KeyCode = KeyCode(265);
    pub const PAGE_UP: KeyCode = KeyCode(266);
    pub const PAGE_DOWN: KeyCode = KeyCode(267);
    pub const HOME: KeyCode = KeyCode(268);
    pub const END: KeyCode = KeyCode(269);
    pub const CAPS_LOCK: KeyCode = KeyCode(280);
    pub const SCROLL_LOCK: KeyCode = KeyCode(281);
    pub const NUM_LOCK: KeyCode = KeyCode(282);
    pub const PRINT_SCREEN: KeyCode = KeyCode(283);
    pub const PAUSE: KeyCode = KeyCode(284);
    pub const F1: KeyCode = KeyCode(290);
    pub const KP_0: KeyCode = KeyCode(320);
    pub const KP_DECIMAL: KeyCode = KeyCode(330);
    pub const KP_DIVIDE: KeyCode = KeyCode(331);
    pub const KP_MULTIPLY: KeyCode = KeyCode(332);
    pub const KP_SUBTRACT: KeyCode = KeyCode(333);
    pub const KP_ADD: KeyCode = KeyCode(334);
    pub const KP_ENTER: KeyCode = KeyCode(335);
    pub const KP_EQUAL: KeyCode = KeyCode(336);
    pub const LEFT_SHIFT: KeyCode = KeyCode(340);
    pub const LEFT_CONTROL: KeyCode = KeyCode(341);
    pub const LEFT_ALT: KeyCode = KeyCode(342);
    pub const LEFT_SUPER: KeyCode = KeyCode(343);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(344);
    pub const RIGHT_CONTROL: KeyCode = KeyCode(345);
    pub const RIGHT_ALT: KeyCode = KeyCode(346);
    pub const RIGHT_SUPER: KeyCode = KeyCode(347);
    pub const MENU: KeyCode = KeyCode(348);

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Offset from a base code, used for contiguous ranges (digits, letters, F-keys)
    const fn offset(base: KeyCode, n: i32) -> KeyCode {
        KeyCode(base.0 + n)
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as WK;
        match code {
            WK::Space => Self::SPACE,
            WK::Quote => Self::APOSTROPHE,
            WK::Comma => Self::COMMA,
            WK::Minus => Self::MINUS,
            WK::Period => Self::PERIOD,
            WK::Slash => Self::SLASH,
            WK::Digit0 => Self::offset(Self::DIGIT_0, 0),
            WK::Digit1 => Self::offset(Self::DIGIT_0, 1),
            WK::Digit2 => Self::offset(Self::DIGIT_0, 2),
            WK::Digit3 => Self::offset(Self::DIGIT_0, 3),
            WK::Digit4 => Self::offset(Self::DIGIT_0, 4),
            WK::Digit5 => Self::offset(Self::DIGIT_0, 5),
            WK::Digit6 => Self::offset(Self::DIGIT_0, 6),
            WK::Digit7 => Self::offset(Self::DIGIT_0, 7),
            WK::Digit8 => Self::offset(Self::DIGIT_0, 8),
            WK::Digit9 => Self::offset(Self::DIGIT_0, 9),
            WK::Semicolon => Self::SEMICOLON,
            WK::Equal => Self::EQUAL,
            WK::KeyA => Self::offset(Self::A, 0),
            WK::KeyB => Self::offset(Self::A, 1),
            WK::KeyC => Self::offset(Self::A, 2),
            WK::KeyD => Self::offset(Self::A, 3),
            WK::KeyE => Self::offset(Self::A, 4),
            WK::KeyF => Self::offset(Self::A, 5),
            WK::KeyG => Self::offset(Self::A, 6),
            WK::KeyH => Self::offset(Self::A, 7),
            WK::KeyI => Self::offset(Self::A, 8),
            WK::KeyJ => Self::offset(Self::A, 9),
            WK::KeyK => Self::offset(Self::A, 10),
            WK::KeyL => Self::offset(Self::A, 11),
            WK::KeyM => Self::offset(Self::A, 12),
            WK::KeyN => Self::offset(Self::A, 13),
            WK::KeyO => Self::offset(Self::A, 14),
            WK::KeyP => Self::offset(Self::A, 15),
            WK::KeyQ => Self::offset(Self::A, 16),
            WK::KeyR => Self::offset(Self::A, 17),
            WK::KeyS => Self::offset(Self::A, 18),
            WK::KeyT => Self::offset(Self::A, 19),
            WK::KeyU => Self::offset(Self::A, 20),
            WK::KeyV => Self::offset(Self::A, 21),
            WK::KeyW => Self::offset(Self::A, 22),
            WK::KeyX => Self::offset(Self::A, 23),
            WK::KeyY => Self::offset(Self::A, 24),
            WK::KeyZ => Self::offset(Self::A, 25),
            WK::BracketLeft => Self::LEFT_BRACKET,
            WK::Backslash => Self::BACKSLASH,
            WK::BracketRight => Self::RIGHT_BRACKET,
            WK::Backquote => Self::GRAVE_ACCENT,
            WK::IntlBackslash => Self::WORLD_1,
            WK::IntlRo | WK::IntlYen => Self::WORLD_2,

            WK::Escape => Self::ESCAPE,
            WK::Enter => Self::ENTER,
            WK::Tab => Self::TAB,
            WK::Backspace => Self::BACKSPACE,
            WK::Insert => Self::INSERT,
            WK::Delete => Self::DELETE,
            WK::ArrowRight => Self::RIGHT,
            WK::ArrowLeft => Self::LEFT,
            WK::ArrowDown => Self::DOWN,
            WK::ArrowUp => Self::UP,
            WK::PageUp => Self::PAGE_UP,
            WK::PageDown => Self::PAGE_DOWN,
            WK::Home => Self::HOME,
            WK::End => Self::END,
            WK::CapsLock => Self::CAPS_LOCK,
            WK::ScrollLock => Self::SCROLL_LOCK,
            WK::NumLock => Self::NUM_LOCK,
            WK::PrintScreen => Self::PRINT_SCREEN,
            WK::Pause => Self::PAUSE,

            // Function keys
            WK::F1 => Self::offset(Self::F1, 0),
            WK::F2 => Self::offset(Self::F1, 1),
            WK::F3 => Self::offset(Self::F1, 2),
            WK::F4 => Self::offset(Self::F1, 3),
            WK::F5 => Self::offset(Self::F1, 4),
            WK::F6 => Self::offset(Self::F1, 5),
            WK::F7 => Self::offset(Self::F1, 6),
            WK::F8 => Self::offset(Self::F1, 7),
            WK::F9 => Self::offset(Self::F1, 8),
            WK::F10 => Self::offset(Self::F1, 9),
            WK::F11 => Self::offset(Self::F1, 10),
            WK::F12 => Self::offset(Self::F1, 11),
            WK::F13 => Self::offset(Self::F1, 12),
            WK::F14 => Self::offset(Self::F1, 13),
            WK::F15 => Self::offset(Self::F1, 14),
            WK::F16 => Self::offset(Self::F1, 15),
            WK::F17 => Self::offset(Self::F1, 16),
            WK::F18 => Self::offset(Self::F1, 17),
            WK::F19 => Self::offset(Self::F1, 18),
            WK::F20 => Self::offset(Self::F1, 19),
            WK::F21 => Self::offset(Self::F1, 20),
            WK::F22 => Self::offset(Self::F1, 21),
            WK::F23 => Self::offset(Self::F1, 22),
            WK::F24 => Self::offset(Self::F1, 23),
            WK::F25 => Self::offset(Self::F1, 24),

            // Numpad keys
            WK::Numpad0 => Self::offset(Self::KP_0, 0),
            WK::Numpad1 => Self::offset(Self::KP_0, 1),
            WK::Numpad2 => Self::offset(Self::KP_0, 2),
            WK::Numpad3 => Self::offset(Self::KP_0, 3),
            WK::Numpad4 => Self::offset(Self::KP_0, 4),
            WK::Numpad5 => Self::offset(Self::KP_0, 5),
            WK::Numpad6 => Self::offset(Self::KP_0, 6),
            WK::Numpad7 => Self::offset(Self::KP_0, 7),
            WK::Numpad8 => Self::offset(Self::KP_0, 8),
            WK::Numpad9 => Self::offset(Self::KP_0, 9),
            WK::NumpadDecimal => Self::KP_DECIMAL,
            WK::NumpadDivide => Self::KP_DIVIDE,
            WK::NumpadMultiply => Self::KP_MULTIPLY,
            WK::NumpadSubtract => Self::KP_SUBTRACT,
            WK::NumpadAdd => Self::KP_ADD,
            WK::NumpadEnter => Self::KP_ENTER,
            WK::NumpadEqual => Self::KP_EQUAL,

            // Modifiers
            WK::ShiftLeft => Self::LEFT_SHIFT,
            WK::ControlLeft => Self::LEFT_CONTROL,
            WK::AltLeft => Self::LEFT_ALT,
            WK::SuperLeft => Self::LEFT_SUPER,
            WK::ShiftRight => Self::RIGHT_SHIFT,
            WK::ControlRight => Self::RIGHT_CONTROL,
            WK::AltRight => Self::RIGHT_ALT,
            WK::SuperRight => Self::RIGHT_SUPER,
            WK::ContextMenu => Self::MENU,

            // Fallback for any unmapped keys
            _ => Self::UNKNOWN,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => Self::from(code),
            PhysicalKey::Unidentified(_) => Self::UNKNOWN,
        }
    }
}

/// Platform scancode for a physical key, `0` when none is available
///
/// On desktop platforms this is the value the OS reported (evdev code on
/// Linux, set-1 scancode on Windows, virtual keycode on macOS).
pub fn scancode(key: PhysicalKey) -> u32 {
    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    {
        use winit::platform::scancode::PhysicalKeyExtScancode;
        if let Some(code) = key.to_scancode() {
            return code;
        }
    }

    native_scancode(key)
}

/// Scancode carried by an unidentified key's native code
pub(crate) fn native_scancode(key: PhysicalKey) -> u32 {
    match key {
        PhysicalKey::Unidentified(native) => match native {
            NativeKeyCode::Android(code) => code,
            NativeKeyCode::MacOS(code) => u32::from(code),
            NativeKeyCode::Windows(code) => u32::from(code),
            NativeKeyCode::Xkb(code) => code,
            NativeKeyCode::Unidentified => 0,
        },
        PhysicalKey::Code(_) => 0,
    }
}
