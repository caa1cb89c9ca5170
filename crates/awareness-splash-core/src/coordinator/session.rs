//! Session orchestration: startup ordering, tick fan-out and teardown.

use crate::{
    AudioDeviceResolver, CoreResult, CountdownController, CountdownEvent, DisplayInfo,
    GlobalInputSuppressor, InputDisposition, KeyboardHookBackend, PresentationSurface,
    SessionSettings, SessionState, SplashError, SurfaceHost, SurfaceInput, SystemVolumeOverride,
};

use std::{panic::Location, rc::Rc, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, error, info, info_span, instrument, warn};

/// Exit code of a session that ran to expiry.
pub const EXIT_CODE_EXPIRED: i32 = 0;

/// Whether the event loop should keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Countdown still running.
    Running,
    /// Countdown reached zero; call [`SessionCoordinator::finish`].
    Expired,
}

/// Owns every resource of one lockdown session.
///
/// Teardown order on expiry: stop ticking, release surface media, uninstall
/// the keyboard hook, restore volume, close surfaces.
pub struct SessionCoordinator<H, K, R>
where
    H: SurfaceHost,
    K: KeyboardHookBackend,
    R: AudioDeviceResolver,
{
    controller: CountdownController,
    tick_interval: Duration,
    surfaces: Vec<PresentationSurface<H>>,
    suppressor: GlobalInputSuppressor<K>,
    volume: SystemVolumeOverride<R>,
    restore_volume_on_exit: bool,
    torn_down: bool,
}

impl<H, K, R> SessionCoordinator<H, K, R>
where
    H: SurfaceHost,
    K: KeyboardHookBackend,
    R: AudioDeviceResolver,
{
    /// Start a session across `displays`.
    ///
    /// Peripherals are engaged before any surface exists. The first display
    /// that comes up gets the audio-enabled surface. A display whose host cannot be created
    /// is skipped.
    ///
    /// # Errors
    ///
    /// `NoDisplaysFound` when `displays` is empty (nothing is started),
    /// `InvalidSettings` for a zero duration, or the last host error when no
    /// surface could be created at all.
    #[track_caller]
    #[instrument(skip_all, fields(displays = displays.len()))]
    pub fn start<F>(
        settings: SessionSettings,
        displays: Vec<DisplayInfo>,
        hook_backend: K,
        audio_resolver: R,
        mut create_host: F,
    ) -> CoreResult<Self>
    where
        F: FnMut(&DisplayInfo) -> CoreResult<H>,
    {
        if displays.is_empty() {
            return Err(SplashError::NoDisplaysFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut controller = CountdownController::new(settings.schedule())?;
        let state = controller.state();
        let span = info_span!("session", session_id = %state.id());
        let _entered = span.enter();

        let mut suppressor = GlobalInputSuppressor::new(hook_backend);
        if let Err(e) = suppressor.install() {
            warn!(error = ?e, "Keyboard hook unavailable, continuing without it");
        }

        let mut volume = SystemVolumeOverride::new(audio_resolver);
        if let Some(percent) = settings.target_volume_percent {
            volume.apply(percent);
        }

        let mut surfaces = Vec::with_capacity(displays.len());
        let mut last_error = None;

        for display in displays {
            // First surface that comes up carries the audio.
            let audio_enabled = surfaces.is_empty();
            match create_host(&display) {
                Ok(host) => {
                    let options = settings.surface_options(audio_enabled);
                    surfaces.push(PresentationSurface::new(
                        host,
                        display,
                        options,
                        Rc::clone(&state),
                    ));
                }
                Err(e) => {
                    let display_index = display.index;
                    error!(display = display_index, error = ?e, "Failed to create surface");
                    last_error = Some(e);
                }
            }
        }

        if surfaces.is_empty() {
            if settings.restore_volume_on_exit {
                volume.restore();
            }
            return Err(last_error.unwrap_or(SplashError::NoDisplaysFound {
                location: ErrorLocation::from(Location::caller()),
            }));
        }

        let tick_interval = controller.start();

        info!(surfaces = surfaces.len(), "Session started");

        Ok(Self {
            controller,
            tick_interval,
            surfaces,
            suppressor,
            volume,
            restore_volume_on_exit: settings.restore_volume_on_exit,
            torn_down: false,
        })
    }

    /// How often the caller must call [`on_tick`](Self::on_tick).
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Advance the shared clock by one second.
    pub fn on_tick(&mut self) -> SessionStatus {
        let events = self.controller.on_tick(&mut self.surfaces);
        if events.contains(&CountdownEvent::SessionExpired) {
            SessionStatus::Expired
        } else {
            SessionStatus::Running
        }
    }

    /// Whether the clock is still running.
    pub fn is_running(&self) -> bool {
        self.controller.is_ticking()
    }

    /// Shared session state.
    pub fn state(&self) -> Rc<SessionState> {
        self.controller.state()
    }

    /// All surfaces, in display order.
    pub fn surfaces(&self) -> &[PresentationSurface<H>] {
        &self.surfaces
    }

    /// Mutable access to one surface.
    pub fn surface_mut(&mut self, index: usize) -> Option<&mut PresentationSurface<H>> {
        self.surfaces.get_mut(index)
    }

    /// Index of the first surface whose host matches `predicate`.
    pub fn find_surface(&self, predicate: impl Fn(&H) -> bool) -> Option<usize> {
        self.surfaces
            .iter()
            .position(|surface| predicate(surface.host()))
    }

    /// Route local input to a surface. Unknown indices are discarded.
    pub fn handle_input(&self, index: usize, input: SurfaceInput) -> InputDisposition {
        self.surfaces
            .get(index)
            .map_or(InputDisposition::Discard, |surface| {
                surface.handle_input(input)
            })
    }

    /// Whether the keyboard hook is active.
    pub fn is_input_suppressed(&self) -> bool {
        self.suppressor.is_installed()
    }

    /// Tear the session down and return the process exit code.
    ///
    /// Hands the coordinator back unchanged while the countdown is still
    /// running: closing is only ever unlocked by expiry.
    #[instrument(skip_all)]
    pub fn finish(mut self) -> Result<i32, Self> {
        if !self.controller.state().close_allowed() {
            return Err(self);
        }
        self.teardown();
        Ok(EXIT_CODE_EXPIRED)
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        self.controller.stop();

        for surface in &mut self.surfaces {
            surface.release_resources();
        }

        self.release_peripherals();

        let surfaces = std::mem::take(&mut self.surfaces);
        let count = surfaces.len();
        for surface in surfaces {
            if !surface.request_close() {
                warn!(display = surface.display().index, "Surface refused to close");
            }
        }

        info!(surfaces = count, "Session torn down");
    }

    fn release_peripherals(&mut self) {
        if let Err(e) = self.suppressor.uninstall() {
            warn!(error = ?e, "Failed to uninstall keyboard hook");
        }
        if self.restore_volume_on_exit {
            self.volume.restore();
        }
        debug!("Peripherals released");
    }
}

impl<H, K, R> Drop for SessionCoordinator<H, K, R>
where
    H: SurfaceHost,
    K: KeyboardHookBackend,
    R: AudioDeviceResolver,
{
    fn drop(&mut self) {
        if !self.torn_down {
            warn!("Session dropped before expiry, releasing peripherals");
            self.release_peripherals();
        }
    }
}
