//! winit glue: window creation, the wait-driven loop and event delivery

use crate::config::WindowConfig;
use crate::error::{ErrorReporter, ShellError};
use crate::keyboard::{char_events, KeyboardState};
use crate::shell::{EventSink, Lifecycle, ShellState};
use crate::surface::Presenter;
use std::io::Write;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Adapter between winit's `ApplicationHandler` callbacks and an [`EventSink`]
pub struct WindowApp<'a, S: EventSink, E: Write> {
    settings: WindowConfig,
    sink: S,
    errors: &'a mut ErrorReporter<E>,
    keyboard: KeyboardState,
    lifecycle: Lifecycle,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    failure: Option<ShellError>,
}

impl<'a, S: EventSink, E: Write> WindowApp<'a, S, E> {
    pub fn new(settings: WindowConfig, sink: S, errors: &'a mut ErrorReporter<E>) -> Self {
        Self {
            settings,
            sink,
            errors,
            keyboard: KeyboardState::new(),
            lifecycle: Lifecycle::new(),
            window: None,
            presenter: None,
            failure: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!(
                    "window created ({}x{})",
                    self.settings.width,
                    self.settings.height
                );
                let window = Arc::new(window);
                // Without a surface the window still logs input, it just shows nothing
                match Presenter::new(Arc::clone(&window)) {
                    Ok(presenter) => self.presenter = Some(presenter),
                    Err(e) => self.report(e),
                }
                self.lifecycle.start();
                self.lifecycle.request_frame();
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                let err = ShellError::CreateWindow(e);
                self.errors.report_error(&err);
                self.failure = Some(err);
                self.lifecycle.terminate();
                self.teardown(event_loop);
            }
        }
    }

    fn report(&mut self, err: impl Into<ShellError>) {
        self.errors.report_error(&err.into());
    }

    /// Present one frame if input or the window system asked for it
    fn present(&mut self) {
        if !self.lifecycle.take_frame() {
            return;
        }
        if let Some(presenter) = self.presenter.as_mut() {
            if let Err(e) = presenter.present() {
                self.errors.report_error(&ShellError::from(e));
            }
        }
    }

    fn teardown(&mut self, event_loop: &ActiveEventLoop) {
        // The surface holds a handle to the window, drop it first
        self.presenter = None;
        if self.window.take().is_some() {
            log::debug!("window destroyed");
        }
        event_loop.exit();
    }
}

impl<S: EventSink, E: Write> ApplicationHandler for WindowApp<'_, S, E> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && self.lifecycle.state() == ShellState::Uninitialized {
            self.create_window(event_loop);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        match &self.window {
            Some(window) if window.id() == window_id => {}
            _ => return,
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested by the window system");
                self.lifecycle.request_close();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.keyboard.set_modifiers(modifiers.state());
            }
            // Synthetic events replay keys held across focus changes
            WindowEvent::KeyboardInput {
                is_synthetic: true, ..
            } => {}
            WindowEvent::KeyboardInput { event, .. } => {
                let key = self.keyboard.key_event(
                    event.physical_key,
                    &event.logical_key,
                    event.state,
                    event.repeat,
                );
                if let Err(e) = self.lifecycle.dispatch_key(&mut self.sink, &key) {
                    self.report(e);
                }

                for ch in char_events(event.text.as_deref(), event.state) {
                    if let Err(e) = self.lifecycle.dispatch_char(&mut self.sink, &ch) {
                        self.report(e);
                    }
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(size);
                }
                self.lifecycle.request_frame();
            }
            WindowEvent::RedrawRequested => {
                self.lifecycle.request_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.lifecycle.end_iteration() {
            self.teardown(event_loop);
        } else {
            self.present();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.presenter = None;
        self.window = None;
        self.lifecycle.terminate();
        log::debug!("event loop exiting");
    }
}

/// Open the window and block until it closes
///
/// Startup and loop failures are reported through `errors` and returned. On
/// success the sink is handed back.
pub fn run<S: EventSink, E: Write>(
    settings: &WindowConfig,
    sink: S,
    errors: &mut ErrorReporter<E>,
) -> Result<S, ShellError> {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            let err = ShellError::Init(e);
            errors.report_error(&err);
            return Err(err);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = WindowApp::new(settings.clone(), sink, errors);
    if let Err(e) = event_loop.run_app(&mut app) {
        let err = ShellError::Run(e);
        app.errors.report_error(&err);
        return Err(err);
    }

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(app.sink),
    }
}
