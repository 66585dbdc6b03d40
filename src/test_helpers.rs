//! Shared test utilities
//!
//! Event builders, failing and counting writers, and a `Session` that drives
//! the same translate → dispatch → log pipeline the window adapter uses.

use crate::keyboard::{char_events, KeyAction, KeyCode, KeyEvent, KeyboardState, Modifiers};
use crate::shell::{Console, Lifecycle};
use std::io;
use winit::event::ElementState;
use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

/// Default scancode used in tests (0x1e, the A key on a PC keyboard)
pub const DEFAULT_SCANCODE: u32 = 30;

/// Creates a key event with no modifiers and no name
pub fn key(action: KeyAction, code: KeyCode) -> KeyEvent {
    KeyEvent::new(action, code, DEFAULT_SCANCODE, Modifiers::empty(), None)
}

/// Creates a key press event
pub fn press(code: KeyCode) -> KeyEvent {
    key(KeyAction::Press, code)
}

/// Creates a key release event
pub fn release(code: KeyCode) -> KeyEvent {
    key(KeyAction::Release, code)
}

/// Writer that always fails
pub struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory writer that counts flushes and what was written before each
#[derive(Debug, Default)]
pub struct FlushCounter {
    pub buf: Vec<u8>,
    /// Buffer length at every flush
    pub flushed_at: Vec<usize>,
}

impl FlushCounter {
    pub fn flushes(&self) -> usize {
        self.flushed_at.len()
    }
}

impl io::Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed_at.push(self.buf.len());
        Ok(())
    }
}

/// A running shell logging into a buffer
pub struct Session {
    pub lifecycle: Lifecycle,
    pub keyboard: KeyboardState,
    pub console: Console<Vec<u8>>,
}

impl Session {
    pub fn start() -> Self {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start();
        Self {
            lifecycle,
            keyboard: KeyboardState::new(),
            console: Console::new(Vec::new()),
        }
    }

    /// Deliver one key transition the way the window adapter does
    pub fn key(&mut self, code: WinitKeyCode, logical: Key, state: ElementState, repeat: bool, text: Option<&str>) {
        let event = self
            .keyboard
            .key_event(PhysicalKey::Code(code), &logical, state, repeat);
        self.lifecycle
            .dispatch_key(&mut self.console, &event)
            .expect("write key line");
        for ch in char_events(text, state) {
            self.lifecycle
                .dispatch_char(&mut self.console, &ch)
                .expect("write char line");
        }
    }

    /// Press and release a printable key
    pub fn tap(&mut self, code: WinitKeyCode, ch: &str) {
        self.key(code, Key::Character(ch.into()), ElementState::Pressed, false, Some(ch));
        self.key(code, Key::Character(ch.into()), ElementState::Released, false, None);
    }

    pub fn escape(&mut self, state: ElementState, repeat: bool) {
        self.key(
            WinitKeyCode::Escape,
            Key::Named(NamedKey::Escape),
            state,
            repeat,
            Some("\u{1b}"),
        );
    }

    /// Consume the session, returning the logged lines
    pub fn lines(self) -> Vec<String> {
        String::from_utf8(self.console.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
