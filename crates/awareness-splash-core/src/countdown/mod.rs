mod controller;
mod format;

pub use {
    controller::{CountdownController, CountdownEvent, CountdownObserver, CountdownSchedule},
    format::format_remaining,
};

use std::time::Duration;

/// Cadence of the shared countdown clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
