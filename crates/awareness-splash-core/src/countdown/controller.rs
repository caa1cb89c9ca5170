//! The shared countdown clock.
//!
//! One controller per session is the sole writer of [`SessionState`]. Each
//! tick fans the new remaining time out to every observer synchronously,
//! switches secondary content exactly once, and expires the session at zero.

use crate::{CoreResult, SessionState, SplashError, countdown::TICK_INTERVAL};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    rc::Rc,
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Receives countdown updates. Implemented by presentation surfaces.
pub trait CountdownObserver {
    /// Show the new remaining time. Must not fail.
    fn apply_remaining_time(&mut self, remaining_seconds: u32);

    /// Switch the background to `image_path`. Returns whether the switch took effect.
    fn apply_secondary_content(&mut self, image_path: &Path) -> bool;
}

/// Timing parameters for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownSchedule {
    /// Total countdown length, must be > 0.
    pub duration_seconds: u32,
    /// Remaining time at which the secondary content is switched in.
    pub secondary_threshold_seconds: u32,
    /// Secondary background image, if configured.
    pub secondary_image: Option<PathBuf>,
}

/// One-shot notifications raised by a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownEvent {
    /// The secondary background was handed to the observers.
    SecondaryContentDue {
        /// Image that was applied.
        image_path: PathBuf,
    },
    /// Remaining time reached zero; closing is now allowed.
    SessionExpired,
}

/// Authoritative tick source for every surface of a session.
#[derive(Debug)]
pub struct CountdownController {
    state: Rc<SessionState>,
    secondary_threshold_seconds: u32,
    secondary_image: Option<PathBuf>,
    ticking: bool,
}

impl CountdownController {
    /// Create a stopped controller and its session state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` when the duration is zero.
    #[track_caller]
    pub fn new(schedule: CountdownSchedule) -> CoreResult<Self> {
        if schedule.duration_seconds == 0 {
            return Err(SplashError::InvalidSettings {
                reason: "countdown duration must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if schedule.secondary_threshold_seconds >= schedule.duration_seconds {
            warn!(
                threshold = schedule.secondary_threshold_seconds,
                duration = schedule.duration_seconds,
                "Secondary switch threshold is not below the duration and will never fire"
            );
        }

        Ok(Self {
            state: Rc::new(SessionState::new(schedule.duration_seconds)),
            secondary_threshold_seconds: schedule.secondary_threshold_seconds,
            secondary_image: schedule.secondary_image,
            ticking: false,
        })
    }

    /// Shared state handle for surfaces.
    pub fn state(&self) -> Rc<SessionState> {
        Rc::clone(&self.state)
    }

    /// Begin the recurring tick. Returns the interval the caller must schedule.
    #[instrument(skip(self), fields(session_id = %self.state.id()))]
    pub fn start(&mut self) -> Duration {
        if !self.state.close_allowed() {
            self.ticking = true;
            info!(
                duration = self.state.total_duration_seconds(),
                threshold = self.secondary_threshold_seconds,
                "Countdown started"
            );
        }
        TICK_INTERVAL
    }

    /// Stop ticking. Later ticks are no-ops.
    pub fn stop(&mut self) {
        if self.ticking {
            debug!(session_id = %self.state.id(), "Countdown stopped");
        }
        self.ticking = false;
    }

    /// Whether the caller should keep scheduling ticks.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Advance the clock by one second and notify `observers`.
    ///
    /// No-op when not started, stopped, or already expired.
    pub fn on_tick<O: CountdownObserver>(&mut self, observers: &mut [O]) -> Vec<CountdownEvent> {
        if !self.ticking || self.state.close_allowed() {
            return Vec::new();
        }

        let remaining = self.state.decrement();
        for observer in observers.iter_mut() {
            observer.apply_remaining_time(remaining);
        }

        let mut events = Vec::new();

        if !self.state.secondary_content_shown() && remaining == self.secondary_threshold_seconds
        {
            match self.secondary_image.as_deref() {
                Some(path) if path.is_file() => {
                    let applied = observers
                        .iter_mut()
                        .map(|observer| observer.apply_secondary_content(path))
                        .filter(|applied| *applied)
                        .count();
                    if applied == 0 {
                        warn!(
                            session_id = %self.state.id(),
                            image_path = ?path,
                            "Secondary image failed on every surface, keeping primary"
                        );
                    } else {
                        self.state.mark_secondary_content_shown();
                        info!(
                            session_id = %self.state.id(),
                            image_path = ?path,
                            applied,
                            surfaces = observers.len(),
                            "Secondary content due"
                        );
                        events.push(CountdownEvent::SecondaryContentDue {
                            image_path: path.to_path_buf(),
                        });
                    }
                }
                Some(path) => {
                    warn!(image_path = ?path, "Secondary image does not resolve, keeping primary");
                }
                None => {}
            }
        }

        if remaining == 0 {
            self.ticking = false;
            info!(session_id = %self.state.id(), "Session expired");
            events.push(CountdownEvent::SessionExpired);
        }

        events
    }
}
