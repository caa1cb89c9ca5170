//! Awareness-Splash: timed fullscreen lockdown across every monitor.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod endpoint_volume;
mod error;
mod error_dialog;
mod gdi_painter;
mod keyboard_hook;
mod mci_video;
mod surface_window;
#[cfg(test)]
mod tests;
mod wide;

pub(crate) use {
    app::App,
    endpoint_volume::CoreAudioResolver,
    error::{AppError, Result as AppResult},
    keyboard_hook::WindowsKeyHook,
    surface_window::WindowHost,
};

use crate::{config::Config, error_dialog::show_error};

use awareness_splash_core::SplashError;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
    monitor::MonitorHandle,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "awareness_splash=debug,awareness_splash_core=debug";
const NO_MONITORS_MESSAGE: &str = "No monitors found.";
const EXIT_CODE_FAILURE: i32 = 1;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // A panic must never leave the Windows key swallowed system-wide.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        keyboard_hook::emergency_unhook();
        default_hook(info);
    }));

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(EXIT_CODE_FAILURE);
        }
    };

    let settings = match config.session_settings() {
        Ok(s) => s,
        Err(e) => {
            error!("Invalid config: {:?}", e);
            std::process::exit(EXIT_CODE_FAILURE);
        }
    };

    let event_loop = EventLoopBuilder::new().build();

    let monitors: Vec<MonitorHandle> = event_loop.available_monitors().collect();
    if monitors.is_empty() {
        show_error(NO_MONITORS_MESSAGE);
        std::process::exit(EXIT_CODE_FAILURE);
    }
    info!(monitors = monitors.len(), "Monitors enumerated");

    let mut settings = Some(settings);
    let mut app: Option<App> = None;

    event_loop.run(move |event, target, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some(settings) = settings.take() else {
                    return;
                };
                match App::start(settings, &monitors, target) {
                    Ok(started) => app = Some(started),
                    Err(e) => {
                        error!(error = ?e, "Failed to start session");
                        let message = match &e {
                            AppError::Core {
                                source: SplashError::NoDisplaysFound { .. },
                                ..
                            } => NO_MONITORS_MESSAGE.to_string(),
                            other => other.to_string(),
                        };
                        show_error(&message);
                        *control_flow = ControlFlow::ExitWithCode(EXIT_CODE_FAILURE);
                        return;
                    }
                }
            }
            Event::NewEvents(_) => {
                if let Some(running) = app.as_mut()
                    && let Some(code) = running.on_wake()
                {
                    app = None;
                    *control_flow = ControlFlow::ExitWithCode(code);
                    return;
                }
            }
            Event::WindowEvent {
                window_id, event, ..
            } => {
                if let Some(running) = app.as_mut() {
                    running.on_window_event(window_id, &event);
                }
            }
            Event::RedrawRequested(window_id) => {
                if let Some(running) = app.as_mut() {
                    running.on_redraw(window_id);
                }
            }
            _ => {}
        }

        if let Some(running) = &app {
            *control_flow = running.control_flow();
        }
    });
}
