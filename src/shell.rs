//! Application shell: event sinks, the console sink and loop lifecycle

use crate::keyboard::{CharEvent, KeyEvent};
use std::io::{self, Write};

/// Name and version of the windowing backend
pub const BACKEND: &str = "winit 0.30";

/// What the loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// Consumer of translated keyboard input
///
/// The window adapter calls these for every key transition and every typed
/// character. Returning [`Flow::Close`] from `on_key` sets the close flag.
pub trait EventSink {
    fn on_key(&mut self, event: &KeyEvent) -> io::Result<Flow>;

    fn on_char(&mut self, event: &CharEvent) -> io::Result<()>;
}

/// Sink that logs every event as a line on its writer
///
/// Each line is flushed right away so a piped reader sees events in order.
pub struct Console<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write the startup lines
    pub fn write_banner(&mut self, version: &str) -> io::Result<()> {
        self.line(format_args!("Windowing backend: {}", version))?;
        self.line(format_args!("Press Esc to exit"))
    }

    /// Lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> EventSink for Console<W> {
    fn on_key(&mut self, event: &KeyEvent) -> io::Result<Flow> {
        let close = event.is_escape_press();
        self.line(format_args!("{}", event))?;

        if close {
            self.line(format_args!("Received Esc, closing..."))?;
            return Ok(Flow::Close);
        }
        Ok(Flow::Continue)
    }

    fn on_char(&mut self, event: &CharEvent) -> io::Result<()> {
        self.line(format_args!("{}", event))
    }
}

/// Full backend version string shown at startup
pub fn backend_version() -> String {
    format!(
        "{} ({} {})",
        BACKEND,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Shell lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Uninitialized,
    Running,
    Terminated,
}

/// Loop state: the lifecycle, the close flag and a pending-frame flag
///
/// Events are only delivered while running. The close flag is examined once
/// per iteration, after all pending events were dispatched; a frame is
/// presented after any iteration that dispatched input.
#[derive(Debug)]
pub struct Lifecycle {
    state: ShellState,
    should_close: bool,
    frame_pending: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: ShellState::Uninitialized,
            should_close: false,
            frame_pending: false,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Library and window are up
    pub fn start(&mut self) {
        if self.state == ShellState::Uninitialized {
            self.state = ShellState::Running;
        }
    }

    /// Stop for good, from any state (startup failure or loop exit)
    pub fn terminate(&mut self) {
        self.state = ShellState::Terminated;
    }

    /// Set the close flag, e.g. for the window's close button
    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    /// Ask for a frame at the end of this iteration
    pub fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    /// Consume the pending frame; true if one should be presented now
    pub fn take_frame(&mut self) -> bool {
        let pending = self.frame_pending && self.state == ShellState::Running;
        self.frame_pending = false;
        pending
    }

    /// Hand a key event to the sink and set the close flag on Escape press
    ///
    /// The Escape check does not depend on the sink: a sink whose output is
    /// gone still closes the window.
    pub fn dispatch_key<S: EventSink>(&mut self, sink: &mut S, event: &KeyEvent) -> io::Result<()> {
        if self.state != ShellState::Running {
            return Ok(());
        }
        self.request_frame();

        let result = sink.on_key(event);
        if event.is_escape_press() || matches!(result, Ok(Flow::Close)) {
            self.request_close();
        }
        result.map(|_| ())
    }

    /// Hand a character event to the sink
    pub fn dispatch_char<S: EventSink>(&mut self, sink: &mut S, event: &CharEvent) -> io::Result<()> {
        if self.state != ShellState::Running {
            return Ok(());
        }
        self.request_frame();
        sink.on_char(event)
    }

    /// End of one loop iteration. Returns true once the loop must stop.
    pub fn end_iteration(&mut self) -> bool {
        if self.state == ShellState::Running && self.should_close {
            self.state = ShellState::Terminated;
        }
        self.state == ShellState::Terminated
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyAction, KeyCode, Modifiers};
    use crate::test_helpers::{key, press, BrokenPipe, FlushCounter};

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn banner_lines() {
        let mut console = Console::new(Vec::new());
        console.write_banner("winit 0.30 (linux x86_64)").unwrap();
        assert_eq!(
            output(console),
            "Windowing backend: winit 0.30 (linux x86_64)\nPress Esc to exit\n"
        );
    }

    #[test]
    fn backend_version_names_backend() {
        assert!(backend_version().starts_with(BACKEND));
    }

    #[test]
    fn console_logs_key_and_char_events() {
        let mut console = Console::new(Vec::new());
        let flow = console
            .on_key(&KeyEvent::new(
                KeyAction::Press,
                KeyCode::A,
                0x1e,
                Modifiers::empty(),
                Some("a".to_string()),
            ))
            .unwrap();
        console.on_char(&CharEvent::new(97)).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(console.lines(), 2);
        assert_eq!(
            output(console),
            "Key event: PRESS, key: 65 (a), scancode: 0x1e\nCodepoint: 97\n"
        );
    }

    #[test]
    fn console_closes_on_escape_press() {
        let mut console = Console::new(Vec::new());
        let flow = console.on_key(&key(KeyAction::Press, KeyCode::ESCAPE)).unwrap();

        assert_eq!(flow, Flow::Close);
        assert_eq!(
            output(console),
            "Key event: PRESS, key: 256, scancode: 0x1e\nReceived Esc, closing...\n"
        );
    }

    #[test]
    fn console_ignores_escape_release_and_repeat() {
        let mut console = Console::new(Vec::new());
        for action in [KeyAction::Release, KeyAction::Repeat] {
            let flow = console.on_key(&key(action, KeyCode::ESCAPE)).unwrap();
            assert_eq!(flow, Flow::Continue);
        }
        assert!(!output(console).contains("Received Esc"));
    }

    #[test]
    fn console_flushes_every_line() {
        let mut console = Console::new(FlushCounter::default());
        console.write_banner("winit 0.30").unwrap();
        console.on_key(&press(KeyCode::A)).unwrap();
        console.on_char(&CharEvent::new(97)).unwrap();
        console.on_key(&press(KeyCode::ESCAPE)).unwrap();

        let out = console.into_inner();
        let text = String::from_utf8(out.buf.clone()).unwrap();
        // Banner (2), key, char, Escape key and its closing message
        assert_eq!(out.flushes(), 6);
        // Each flush lands right after a newline
        let ends: Vec<usize> = text.match_indices('\n').map(|(i, _)| i + 1).collect();
        assert_eq!(out.flushed_at, ends);
    }

    #[test]
    fn console_reports_write_failure() {
        let mut console = Console::new(BrokenPipe);
        let err = console.on_key(&press(KeyCode::A)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(console.lines(), 0);
    }

    #[test]
    fn lifecycle_happy_path() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), ShellState::Uninitialized);

        lifecycle.start();
        assert_eq!(lifecycle.state(), ShellState::Running);
        assert!(!lifecycle.end_iteration());

        lifecycle.request_close();
        assert!(lifecycle.end_iteration());
        assert_eq!(lifecycle.state(), ShellState::Terminated);
    }

    #[test]
    fn lifecycle_failure_skips_running() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.terminate();
        assert_eq!(lifecycle.state(), ShellState::Terminated);

        // No way back once terminated
        lifecycle.start();
        assert_eq!(lifecycle.state(), ShellState::Terminated);
    }

    #[test]
    fn lifecycle_escape_sets_close_flag() {
        let mut lifecycle = Lifecycle::new();
        let mut console = Console::new(Vec::new());
        lifecycle.start();

        lifecycle
            .dispatch_key(&mut console, &key(KeyAction::Repeat, KeyCode::ESCAPE))
            .unwrap();
        assert!(!lifecycle.should_close());

        lifecycle
            .dispatch_key(&mut console, &key(KeyAction::Press, KeyCode::ESCAPE))
            .unwrap();
        assert!(lifecycle.should_close());
        assert!(lifecycle.end_iteration());
    }

    #[test]
    fn lifecycle_drops_events_before_start() {
        let mut lifecycle = Lifecycle::new();
        let mut console = Console::new(Vec::new());

        lifecycle
            .dispatch_key(&mut console, &key(KeyAction::Press, KeyCode::ESCAPE))
            .unwrap();
        lifecycle.dispatch_char(&mut console, &CharEvent::new(97)).unwrap();

        assert!(!lifecycle.should_close());
        assert_eq!(console.lines(), 0);
    }

    #[test]
    fn lifecycle_escape_closes_even_if_output_fails() {
        let mut lifecycle = Lifecycle::new();
        let mut console = Console::new(BrokenPipe);
        lifecycle.start();

        assert!(lifecycle.dispatch_key(&mut console, &press(KeyCode::ESCAPE)).is_err());
        assert!(lifecycle.should_close());
        assert!(lifecycle.end_iteration());
    }

    #[test]
    fn lifecycle_frames_follow_input() {
        let mut lifecycle = Lifecycle::new();
        let mut console = Console::new(Vec::new());

        // Nothing to present before the window exists
        lifecycle.request_frame();
        assert!(!lifecycle.take_frame());

        lifecycle.start();
        assert!(!lifecycle.take_frame());

        lifecycle.dispatch_key(&mut console, &press(KeyCode::A)).unwrap();
        assert!(lifecycle.take_frame());
        assert!(!lifecycle.take_frame());

        lifecycle.dispatch_char(&mut console, &CharEvent::new(97)).unwrap();
        assert!(lifecycle.take_frame());
    }
}
