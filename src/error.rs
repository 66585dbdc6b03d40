//! Error types and the error-stream reporter

use crate::surface::SurfaceInitError;
use std::io::{self, Write};
use thiserror::Error;
use winit::error::{EventLoopError, OsError};

/// Errors raised while bringing up or running the window
#[derive(Debug, Error)]
pub enum ShellError {
    /// The windowing library could not be initialized
    #[error("event loop init failed: {0}")]
    Init(EventLoopError),
    /// The window could not be created
    #[error("window creation failed: {0}")]
    CreateWindow(OsError),
    /// The event loop stopped with an error
    #[error("event loop failed: {0}")]
    Run(EventLoopError),
    /// Writing an event line failed
    #[error("output failed: {0}")]
    Output(#[from] io::Error),
    /// The window surface could not be set up; the loop runs without frames
    #[error("surface setup failed: {0}")]
    Surface(#[from] SurfaceInitError),
    /// A frame could not be presented
    #[error("present failed: {0}")]
    Present(#[from] wgpu::SurfaceError),
}

impl ShellError {
    /// Numeric code printed alongside the description
    pub fn code(&self) -> i32 {
        match self {
            ShellError::Init(_) => 1,
            ShellError::CreateWindow(_) => 2,
            ShellError::Run(_) => 3,
            ShellError::Output(_) => 4,
            ShellError::Surface(_) => 5,
            ShellError::Present(_) => 6,
        }
    }

    /// Whether the process has to stop
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::Init(_) | ShellError::CreateWindow(_) | ShellError::Run(_)
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }
}

/// Context handed to the window adapter for reporting errors
///
/// Owns the error stream, so nothing global is needed to route collaborator
/// errors.
pub struct ErrorReporter<W: Write> {
    sink: W,
    reported: usize,
}

impl<W: Write> ErrorReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, reported: 0 }
    }

    /// Write one `Window error` line and flush
    pub fn report(&mut self, code: i32, description: &str) {
        self.reported += 1;
        log::debug!("reporting error {}: {}", code, description);
        let result = writeln!(
            self.sink,
            "Window error (code: {}, description: {})",
            code, description
        )
        .and_then(|_| self.sink.flush());
        if let Err(e) = result {
            log::warn!("error stream unavailable: {}", e);
        }
    }

    /// Report a [`ShellError`] with its code
    pub fn report_error(&mut self, error: &ShellError) {
        self.report(error.code(), &error.to_string());
    }

    /// Number of errors reported so far
    pub fn reported(&self) -> usize {
        self.reported
    }

    /// Consume the reporter, returning the underlying stream
    pub fn into_inner(self) -> W {
        self.sink
    }
}
