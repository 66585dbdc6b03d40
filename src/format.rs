//! Human-readable descriptions of keyboard events
//!
//! Pure functions only. Nothing here fails: unrecognized values degrade to
//! empty labels so a malformed event still produces a line.

use crate::keyboard::{KeyAction, KeyCode, Modifiers};
use std::fmt::Write;

/// Modifier labels in output order
const MODIFIER_LABELS: [(Modifiers, &str); 6] = [
    (Modifiers::ALT, "alt"),
    (Modifiers::CAPS_LOCK, "caps_lk"),
    (Modifiers::CONTROL, "ctrl"),
    (Modifiers::NUM_LOCK, "num_lk"),
    (Modifiers::SHIFT, "shift"),
    (Modifiers::SUPER, "super"),
];

/// Label for a raw action code, empty for unrecognized codes
pub fn describe_action(action: i32) -> &'static str {
    match KeyAction::from_code(action) {
        Some(KeyAction::Release) => "RELEASE",
        Some(KeyAction::Press) => "PRESS",
        Some(KeyAction::Repeat) => "REPEAT",
        None => "",
    }
}

/// Comma-separated labels of the set modifiers
///
/// Always `alt, caps_lk, ctrl, num_lk, shift, super` order, no spaces.
pub fn describe_modifiers(mods: Modifiers) -> String {
    MODIFIER_LABELS
        .iter()
        .filter(|(flag, _)| mods.contains(*flag))
        .map(|(_, label)| *label)
        .collect::<Vec<_>>()
        .join(",")
}

/// One log line for a key event
///
/// `Key event: <ACTION>, key: <key>[ (<name>)], scancode: 0x<hex>[, mods: <mods>]`
pub fn describe_key_event(
    action: i32,
    key: KeyCode,
    scancode: u32,
    mods: Modifiers,
    key_name: Option<&str>,
) -> String {
    let mut out = format!("Key event: {}, key: {}", describe_action(action), key.as_i32());

    if let Some(name) = key_name {
        let _ = write!(out, " ({})", name);
    }
    let _ = write!(out, ", scancode: {:#x}", scancode);

    let mods = describe_modifiers(mods);
    if !mods.is_empty() {
        let _ = write!(out, ", mods: {}", mods);
    }

    out
}

/// One log line for a character event
pub fn describe_char_event(codepoint: u32) -> String {
    format!("Codepoint: {}", codepoint)
}
