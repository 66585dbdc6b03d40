//! Keyboard Echo - prints every key and character event of a window
//!
//! Exit status is 0 when the window is closed, 1 if the windowing library or
//! the window could not be brought up.

use anyhow::{Context, Result};
use std::io::{stderr, stdout};
use std::process::ExitCode;

use keyboard_echo::{
    shell::backend_version, window, Config, Console, ErrorReporter,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut errors = ErrorReporter::new(stderr());

    // A broken settings file is not fatal
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("ignoring config: {}", e);
        Config::default()
    });

    let mut console = Console::new(stdout());
    console
        .write_banner(&backend_version())
        .context("failed to write startup banner")?;

    match window::run(&config.window, console, &mut errors) {
        Ok(console) => {
            log::info!("closed after {} lines", console.lines());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(ExitCode::from(e.exit_code())),
    }
}
