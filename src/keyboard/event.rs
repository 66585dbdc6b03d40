//! Keyboard event types

use super::KeyCode;
use crate::format;
use bitflags::bitflags;
use std::fmt;

/// Nature of a key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum KeyAction {
    /// Key was released
    Release = 0,
    /// Key was pressed down
    Press = 1,
    /// Key is held and the platform auto-repeated it
    Repeat = 2,
}

impl KeyAction {
    /// Raw action code as reported to sinks
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Parse a raw action code, `None` for anything unrecognized
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held (or lock keys active) when an event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 0x0001;
        const CONTROL = 0x0002;
        const ALT = 0x0004;
        const SUPER = 0x0008;
        const CAPS_LOCK = 0x0010;
        const NUM_LOCK = 0x0020;
    }
}

/// A single key transition
///
/// `action` keeps the raw code so that values outside [`KeyAction`] can still
/// be described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Raw action code, see [`KeyAction`]
    pub action: i32,
    /// Logical key code
    pub key: KeyCode,
    /// Platform scancode
    pub scancode: u32,
    /// Modifiers active for this event
    pub mods: Modifiers,
    /// Printable name of the key, when the platform can resolve one
    pub key_name: Option<String>,
}

impl KeyEvent {
    pub fn new(
        action: KeyAction,
        key: KeyCode,
        scancode: u32,
        mods: Modifiers,
        key_name: Option<String>,
    ) -> Self {
        Self {
            action: action.code(),
            key,
            scancode,
            mods,
            key_name,
        }
    }

    /// Parsed action, `None` if the raw code is unrecognized
    pub fn action(&self) -> Option<KeyAction> {
        KeyAction::from_code(self.action)
    }

    /// True for the Escape key going down (repeats excluded)
    pub fn is_escape_press(&self) -> bool {
        self.action() == Some(KeyAction::Press) && self.key == KeyCode::ESCAPE
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::describe_key_event(
            self.action,
            self.key,
            self.scancode,
            self.mods,
            self.key_name.as_deref(),
        ))
    }
}

/// A text character produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharEvent {
    /// Unicode scalar value
    pub codepoint: u32,
}

impl CharEvent {
    pub fn new(codepoint: u32) -> Self {
        Self { codepoint }
    }
}

impl From<char> for CharEvent {
    fn from(c: char) -> Self {
        Self::new(c as u32)
    }
}

impl fmt::Display for CharEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::describe_char_event(self.codepoint))
    }
}
