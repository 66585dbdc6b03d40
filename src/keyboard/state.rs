//! Keyboard state tracking and translation of winit input into [`KeyEvent`]s

use super::keymap::scancode;
use super::{CharEvent, KeyAction, KeyCode, KeyEvent, Modifiers};
use winit::event::ElementState;
use winit::keyboard::{Key, ModifiersState, PhysicalKey};

/// Held modifiers for the focused window
///
/// winit delivers held modifiers separately from key events, so they are
/// tracked here and stamped onto each event. winit never reports lock state,
/// so `CAPS_LOCK` and `NUM_LOCK` are never set.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Modifiers from the latest `ModifiersChanged`
    held: Modifiers,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held modifiers
    pub fn set_modifiers(&mut self, state: ModifiersState) {
        let mut held = Modifiers::empty();
        held.set(Modifiers::SHIFT, state.shift_key());
        held.set(Modifiers::CONTROL, state.control_key());
        held.set(Modifiers::ALT, state.alt_key());
        held.set(Modifiers::SUPER, state.super_key());
        self.held = held;
    }

    /// Modifiers stamped onto the next event
    pub fn modifiers(&self) -> Modifiers {
        self.held
    }

    /// Translate one key transition
    pub fn key_event(
        &self,
        physical: PhysicalKey,
        logical: &Key,
        state: ElementState,
        repeat: bool,
    ) -> KeyEvent {
        KeyEvent::new(
            action_of(state, repeat),
            KeyCode::from(physical),
            scancode(physical),
            self.modifiers(),
            key_name(logical),
        )
    }
}

/// Map winit's pressed/released state plus repeat flag onto an action
pub fn action_of(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, false) => KeyAction::Press,
        (ElementState::Pressed, true) => KeyAction::Repeat,
    }
}

/// Printable name for a logical key, `None` for named or whitespace keys
pub fn key_name(logical: &Key) -> Option<String> {
    match logical {
        Key::Character(text)
            if !text.is_empty() && !text.chars().any(|c| c.is_control() || c.is_whitespace()) =>
        {
            Some(text.to_string())
        }
        _ => None,
    }
}

/// Character events for the text a key produced
///
/// Releases never produce text; control characters (Escape, Backspace, Enter)
/// are dropped so only typed characters are reported.
pub fn char_events(text: Option<&str>, state: ElementState) -> Vec<CharEvent> {
    match (text, state) {
        (Some(text), ElementState::Pressed) => text
            .chars()
            .filter(|c| !c.is_control())
            .map(CharEvent::from)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{KeyCode as WinitKeyCode, NamedKey};

    fn character(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn action_from_state_and_repeat() {
        assert_eq!(action_of(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(action_of(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(action_of(ElementState::Released, false), KeyAction::Release);
        assert_eq!(action_of(ElementState::Released, true), KeyAction::Release);
    }

    #[test]
    fn key_name_only_for_printable_characters() {
        assert_eq!(key_name(&character("a")), Some("a".to_string()));
        assert_eq!(key_name(&character("A")), Some("A".to_string()));
        assert_eq!(key_name(&character(" ")), None);
        assert_eq!(key_name(&character("\u{1b}")), None);
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), None);
    }

    #[test]
    fn modifiers_follow_modifiers_changed() {
        let mut state = KeyboardState::new();
        assert!(state.modifiers().is_empty());

        state.set_modifiers(ModifiersState::SHIFT | ModifiersState::CONTROL);
        assert_eq!(state.modifiers(), Modifiers::SHIFT | Modifiers::CONTROL);

        state.set_modifiers(ModifiersState::ALT | ModifiersState::SUPER);
        assert_eq!(state.modifiers(), Modifiers::ALT | Modifiers::SUPER);

        state.set_modifiers(ModifiersState::empty());
        assert!(state.modifiers().is_empty());
    }

    #[test]
    fn lock_keys_report_no_lock_flags() {
        let state = KeyboardState::new();
        let locks = Modifiers::CAPS_LOCK | Modifiers::NUM_LOCK;

        for (code, named) in [
            (WinitKeyCode::CapsLock, NamedKey::CapsLock),
            (WinitKeyCode::NumLock, NamedKey::NumLock),
        ] {
            let event = state.key_event(
                PhysicalKey::Code(code),
                &Key::Named(named),
                ElementState::Pressed,
                false,
            );
            assert!(!event.mods.intersects(locks));
        }
        assert!(state.modifiers().is_empty());
    }

    #[test]
    fn key_event_carries_translated_fields() {
        let mut state = KeyboardState::new();
        state.set_modifiers(ModifiersState::SHIFT);

        let event = state.key_event(
            PhysicalKey::Code(WinitKeyCode::KeyA),
            &character("A"),
            ElementState::Pressed,
            false,
        );

        assert_eq!(event.action(), Some(KeyAction::Press));
        assert_eq!(event.key, KeyCode::A);
        assert_eq!(event.mods, Modifiers::SHIFT);
        assert_eq!(event.key_name.as_deref(), Some("A"));
    }

    #[test]
    fn char_events_skip_releases_and_control_characters() {
        assert_eq!(
            char_events(Some("a"), ElementState::Pressed),
            vec![CharEvent::new(97)]
        );
        assert_eq!(
            char_events(Some("ü€"), ElementState::Pressed),
            vec![CharEvent::new(0xfc), CharEvent::new(0x20ac)]
        );
        assert!(char_events(Some("a"), ElementState::Released).is_empty());
        assert!(char_events(Some("\u{1b}"), ElementState::Pressed).is_empty());
        assert!(char_events(None, ElementState::Pressed).is_empty());
    }
}
