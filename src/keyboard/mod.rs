//! Keyboard event types, key codes and winit translation

mod event;
mod state;
pub mod keymap;

pub use event::{CharEvent, KeyAction, KeyEvent, Modifiers};
pub use state::{action_of, char_events, key_name, KeyboardState};
pub use keymap::{scancode, KeyCode};
