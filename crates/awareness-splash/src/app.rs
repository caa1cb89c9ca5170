use crate::{
    AppResult, CoreAudioResolver, WindowHost, WindowsKeyHook, surface_window::display_info,
};

use awareness_splash_core::{
    InputDisposition, SessionCoordinator, SessionSettings, SessionStatus, SplashError,
    SurfaceInput, SurfaceSize,
};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tao::{
    event::{ElementState, WindowEvent},
    event_loop::{ControlFlow, EventLoopWindowTarget},
    keyboard::{KeyCode, ModifiersState},
    monitor::MonitorHandle,
    window::WindowId,
};
use tracing::{debug, info, instrument, trace, warn};

type Session = SessionCoordinator<WindowHost, WindowsKeyHook, CoreAudioResolver>;

/// Whether a key press is the Alt+F4 close shortcut.
pub(crate) fn is_close_shortcut(key: KeyCode, modifiers: ModifiersState) -> bool {
    key == KeyCode::F4 && modifiers.alt_key()
}

/// Longest gap between two presses that still counts as a double click.
pub(crate) const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(500);

/// Local pointer button transitions as surface input.
///
/// `since_last_press` is the time since the previous press on the same
/// window, if any.
pub(crate) fn pointer_input(
    state: ElementState,
    since_last_press: Option<Duration>,
) -> SurfaceInput {
    match state {
        ElementState::Pressed => match since_last_press {
            Some(gap) if gap <= DOUBLE_CLICK_INTERVAL => SurfaceInput::PointerDoubleClick,
            _ => SurfaceInput::PointerPress,
        },
        _ => SurfaceInput::PointerClick,
    }
}

/// Next tick deadline after a tick that was due at `due`.
///
/// Stays on the one-second grid while the loop keeps up. After a stall
/// longer than one interval the grid restarts from `now` so missed ticks
/// are not replayed in a burst.
pub(crate) fn next_deadline(due: Instant, now: Instant, interval: Duration) -> Instant {
    let next = due + interval;
    if next <= now { now + interval } else { next }
}

/// Lockdown session bound to the event loop.
///
/// Lives on the event-loop thread; every window event and tick is routed
/// through here to the session coordinator.
pub struct App {
    session: Option<Session>,
    next_tick: Instant,
    modifiers: ModifiersState,
    last_press: Option<(WindowId, Instant)>,
}

impl App {
    /// Open one surface per monitor and start the countdown.
    #[track_caller]
    #[instrument(skip_all, fields(monitors = monitors.len()))]
    pub(crate) fn start<T>(
        settings: SessionSettings,
        monitors: &[MonitorHandle],
        target: &EventLoopWindowTarget<T>,
    ) -> AppResult<Self> {
        let displays = monitors
            .iter()
            .enumerate()
            .map(|(index, monitor)| display_info(index, monitor))
            .collect();

        let session = SessionCoordinator::start(
            settings,
            displays,
            WindowsKeyHook::new(),
            CoreAudioResolver::new(),
            |display| {
                let monitor =
                    monitors
                        .get(display.index)
                        .ok_or_else(|| SplashError::SurfaceCreationFailed {
                            display: display.index,
                            reason: "Monitor disappeared before its window was created"
                                .to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                WindowHost::create(target, monitor, display).map_err(|e| {
                    SplashError::SurfaceCreationFailed {
                        display: display.index,
                        reason: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })
            },
        )?;

        let next_tick = Instant::now() + session.tick_interval();

        info!(
            surfaces = session.surfaces().len(),
            input_suppressed = session.is_input_suppressed(),
            "Lockdown running"
        );

        Ok(Self {
            session: Some(session),
            next_tick,
            modifiers: ModifiersState::empty(),
            last_press: None,
        })
    }

    /// How the event loop should wait for the next tick.
    pub(crate) fn control_flow(&self) -> ControlFlow {
        match self.session {
            Some(_) => ControlFlow::WaitUntil(self.next_tick),
            None => ControlFlow::Wait,
        }
    }

    /// Tick if the deadline has passed. Returns the exit code once the
    /// session has expired and been torn down.
    pub(crate) fn on_wake(&mut self) -> Option<i32> {
        let now = Instant::now();
        if now < self.next_tick {
            return None;
        }

        let session = self.session.as_mut()?;
        self.next_tick = next_deadline(self.next_tick, now, session.tick_interval());

        if session.on_tick() == SessionStatus::Running {
            return None;
        }

        let session = self.session.take()?;
        match session.finish() {
            Ok(code) => {
                info!(exit_code = code, "Session complete");
                Some(code)
            }
            Err(session) => {
                warn!("Session reported expiry but refused to finish");
                self.session = Some(session);
                None
            }
        }
    }

    /// Route a window event to its surface.
    pub(crate) fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent<'_>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(index) = session.find_surface(|host| host.window_id() == window_id) else {
            trace!(?window_id, "Event for unknown window");
            return;
        };

        let input = match event {
            WindowEvent::CloseRequested => Some(SurfaceInput::CloseRequested),
            WindowEvent::MouseInput { state, .. } => {
                let now = Instant::now();
                let since_last_press = self
                    .last_press
                    .filter(|(id, _)| *id == window_id)
                    .map(|(_, at)| now.saturating_duration_since(at));
                let input = pointer_input(*state, since_last_press);
                match input {
                    SurfaceInput::PointerPress => self.last_press = Some((window_id, now)),
                    SurfaceInput::PointerDoubleClick => self.last_press = None,
                    _ => {}
                }
                Some(input)
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && is_close_shortcut(event.physical_key, self.modifiers) =>
            {
                Some(SurfaceInput::CloseShortcut)
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                None
            }
            WindowEvent::Resized(size) => {
                if let Some(surface) = session.surface_mut(index) {
                    surface.resize(SurfaceSize {
                        width: size.width,
                        height: size.height,
                    });
                }
                None
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                if let Some(surface) = session.surface_mut(index) {
                    surface.resize(SurfaceSize {
                        width: new_inner_size.width,
                        height: new_inner_size.height,
                    });
                }
                None
            }
            _ => None,
        };

        if let Some(input) = input
            && session.handle_input(index, input) == InputDisposition::Proceed
        {
            // Closing only ever happens through expiry teardown.
            debug!(display = index, ?input, "Input after expiry, teardown pending");
        }
    }

    /// Repaint the surface owning `window_id`.
    pub(crate) fn on_redraw(&mut self, window_id: WindowId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(index) = session.find_surface(|host| host.window_id() == window_id)
            && let Some(surface) = session.surface_mut(index)
        {
            surface.redraw();
        }
    }
}
