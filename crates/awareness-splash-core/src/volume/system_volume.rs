//! Temporary override of the default output device's master volume.
//!
//! Every failure is swallowed and logged: the session runs the same with or
//! without audio control.

use crate::volume::{AudioDeviceResolver, VolumeEndpoint, VolumeOverrideRecord};

use tracing::{debug, info, instrument, warn};

enum DeviceSlot<E> {
    Unresolved,
    Resolved(E),
    Unavailable,
}

/// Overrides and later restores the system volume.
pub struct SystemVolumeOverride<R: AudioDeviceResolver> {
    resolver: R,
    device: DeviceSlot<R::Endpoint>,
    record: VolumeOverrideRecord,
}

impl<R: AudioDeviceResolver> SystemVolumeOverride<R> {
    /// Wrap a resolver. Nothing is resolved until the first `apply`.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            device: DeviceSlot::Unresolved,
            record: VolumeOverrideRecord::default(),
        }
    }

    /// Set the master volume to `target_percent` (clamped to 0-100).
    ///
    /// The previous level is captured only on the first successful call.
    /// Returns whether the level was set.
    #[instrument(skip(self))]
    pub fn apply(&mut self, target_percent: u8) -> bool {
        let target = f32::from(target_percent.min(100)) / 100.0;

        self.ensure_resolved();
        let DeviceSlot::Resolved(endpoint) = &self.device else {
            return false;
        };

        let previous = if self.record.previous_scalar_volume.is_none() {
            match endpoint.scalar() {
                Ok(level) => Some(level),
                Err(e) => {
                    warn!(error = ?e, "Failed to read current volume, not overriding");
                    return false;
                }
            }
        } else {
            None
        };

        if let Err(e) = endpoint.set_scalar(target) {
            warn!(error = ?e, "Failed to set master volume");
            return false;
        }

        if previous.is_some() {
            self.record.previous_scalar_volume = previous;
        }
        self.record.target_scalar_volume = Some(target);

        info!(
            target,
            previous = ?self.record.previous_scalar_volume,
            "System volume overridden"
        );

        true
    }

    /// Write back the level captured by `apply`. Runs at most once.
    ///
    /// Returns whether the level was restored by this call.
    #[instrument(skip(self))]
    pub fn restore(&mut self) -> bool {
        if self.record.restored {
            return false;
        }
        let Some(previous) = self.record.previous_scalar_volume else {
            debug!("No volume override to restore");
            return false;
        };
        let DeviceSlot::Resolved(endpoint) = &self.device else {
            return false;
        };

        // One attempt only; a failed write is not retried later.
        self.record.restored = true;

        match endpoint.set_scalar(previous) {
            Ok(()) => {
                info!(level = previous, "System volume restored");
                true
            }
            Err(e) => {
                warn!(error = ?e, "Failed to restore master volume");
                false
            }
        }
    }

    /// Override bookkeeping.
    pub fn record(&self) -> VolumeOverrideRecord {
        self.record
    }

    fn ensure_resolved(&mut self) {
        if let DeviceSlot::Unresolved = self.device {
            self.device = match self.resolver.resolve_default() {
                Ok(endpoint) => {
                    debug!("Default audio output device resolved");
                    DeviceSlot::Resolved(endpoint)
                }
                Err(e) => {
                    warn!(error = ?e, "No audio output device, volume control disabled");
                    DeviceSlot::Unavailable
                }
            };
        }
    }
}
