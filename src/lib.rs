//! Keyboard Echo - window-based keyboard event logger
//!
//! Opens a single window and prints one line per key transition and per typed
//! character. Pressing Escape closes the window.

pub mod config;
pub mod error;
pub mod format;
pub mod keyboard;
pub mod shell;
pub mod surface;
pub mod test_helpers;
pub mod window;

pub use config::Config;
pub use error::{ErrorReporter, ShellError};
pub use shell::{Console, EventSink, Flow};
