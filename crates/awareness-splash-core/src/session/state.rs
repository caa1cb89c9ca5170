use std::cell::Cell;

use uuid::Uuid;

/// Shared countdown state for one lockdown session.
///
/// Handed to every surface as `Rc<SessionState>`. Only the
/// [`CountdownController`](crate::CountdownController) mutates it; surfaces
/// read `close_allowed` to decide whether a close attempt may proceed.
///
/// `close_allowed` is true if and only if `remaining_seconds == 0`, and both
/// one-way flags never revert once set.
#[derive(Debug)]
pub struct SessionState {
    id: Uuid,
    total_duration_seconds: u32,
    remaining_seconds: Cell<u32>,
    close_allowed: Cell<bool>,
    secondary_content_shown: Cell<bool>,
}

impl SessionState {
    /// Create the state for a session of `total_duration_seconds` (> 0).
    pub fn new(total_duration_seconds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            total_duration_seconds,
            remaining_seconds: Cell::new(total_duration_seconds),
            close_allowed: Cell::new(false),
            secondary_content_shown: Cell::new(false),
        }
    }

    /// Session id used for log correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Configured countdown length.
    pub fn total_duration_seconds(&self) -> u32 {
        self.total_duration_seconds
    }

    /// Seconds left on the shared clock.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds.get()
    }

    /// Whether surfaces may close.
    pub fn close_allowed(&self) -> bool {
        self.close_allowed.get()
    }

    /// Whether the secondary background has been switched in.
    pub fn secondary_content_shown(&self) -> bool {
        self.secondary_content_shown.get()
    }

    /// Decrement by one second, never below zero. Returns the new value.
    ///
    /// Reaching zero flips `close_allowed`.
    pub(crate) fn decrement(&self) -> u32 {
        let remaining = self.remaining_seconds.get().saturating_sub(1);
        self.remaining_seconds.set(remaining);
        if remaining == 0 {
            self.close_allowed.set(true);
        }
        remaining
    }

    pub(crate) fn mark_secondary_content_shown(&self) {
        self.secondary_content_shown.set(true);
    }
}
