//! Default render device master volume through Core Audio.

use awareness_splash_core::{AudioDeviceResolver, CoreResult, VolumeEndpoint};

use tracing::instrument;

/// Resolves the default console render endpoint.
#[derive(Debug, Default)]
pub struct CoreAudioResolver {
    com_initialized: bool,
}

impl CoreAudioResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl AudioDeviceResolver for CoreAudioResolver {
    type Endpoint = CoreAudioEndpoint;

    #[track_caller]
    #[instrument(skip(self))]
    fn resolve_default(&mut self) -> CoreResult<Self::Endpoint> {
        if !self.com_initialized {
            platform::initialize_com();
            self.com_initialized = true;
        }
        platform::default_endpoint()
    }
}

/// Master volume control of one output device.
pub struct CoreAudioEndpoint {
    #[cfg(target_os = "windows")]
    volume: windows::Win32::Media::Audio::Endpoints::IAudioEndpointVolume,
}

impl VolumeEndpoint for CoreAudioEndpoint {
    #[track_caller]
    fn scalar(&self) -> CoreResult<f32> {
        platform::scalar(self)
    }

    #[track_caller]
    fn set_scalar(&self, level: f32) -> CoreResult<()> {
        platform::set_scalar(self, level)
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use super::CoreAudioEndpoint;

    use awareness_splash_core::{CoreResult, SplashError};

    use std::{panic::Location, ptr};

    use error_location::ErrorLocation;
    use tracing::{debug, info};
    use windows::Win32::{
        Media::Audio::{
            Endpoints::IAudioEndpointVolume, IMMDeviceEnumerator, MMDeviceEnumerator, eConsole,
            eRender,
        },
        System::Com::{CLSCTX_ALL, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx},
    };

    pub(super) fn initialize_com() {
        // The event loop may already have initialised COM on this thread.
        // SAFETY: called on the UI thread with no reserved pointer.
        if let Err(e) = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) } {
            debug!(error = %e, "CoInitializeEx reported an existing apartment");
        }
    }

    #[track_caller]
    pub(super) fn default_endpoint() -> CoreResult<CoreAudioEndpoint> {
        let unavailable = |step: &str, e: windows::core::Error| SplashError::VolumeDeviceUnavailable {
            reason: format!("{step} failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        };

        // SAFETY: COM is initialised on this thread; all interfaces are reference counted.
        let volume = unsafe {
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)
                    .map_err(|e| unavailable("CoCreateInstance(MMDeviceEnumerator)", e))?;
            let device = enumerator
                .GetDefaultAudioEndpoint(eRender, eConsole)
                .map_err(|e| unavailable("GetDefaultAudioEndpoint", e))?;
            device
                .Activate::<IAudioEndpointVolume>(CLSCTX_ALL, None)
                .map_err(|e| unavailable("Activate(IAudioEndpointVolume)", e))?
        };

        info!("Default audio endpoint resolved");
        Ok(CoreAudioEndpoint { volume })
    }

    #[track_caller]
    pub(super) fn scalar(endpoint: &CoreAudioEndpoint) -> CoreResult<f32> {
        // SAFETY: `volume` is a live interface owned by the endpoint.
        unsafe { endpoint.volume.GetMasterVolumeLevelScalar() }.map_err(|e| {
            SplashError::VolumeControlFailed {
                reason: format!("GetMasterVolumeLevelScalar failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    pub(super) fn set_scalar(endpoint: &CoreAudioEndpoint, level: f32) -> CoreResult<()> {
        // SAFETY: `volume` is a live interface; a null event context is allowed.
        unsafe { endpoint.volume.SetMasterVolumeLevelScalar(level, ptr::null()) }.map_err(|e| {
            SplashError::VolumeControlFailed {
                reason: format!("SetMasterVolumeLevelScalar({level}) failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::CoreAudioEndpoint;

    use awareness_splash_core::{CoreResult, SplashError};

    use std::panic::Location;

    use error_location::ErrorLocation;

    pub(super) fn initialize_com() {}

    #[track_caller]
    pub(super) fn default_endpoint() -> CoreResult<CoreAudioEndpoint> {
        Err(SplashError::VolumeDeviceUnavailable {
            reason: "Endpoint volume control is only supported on Windows".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub(super) fn scalar(_endpoint: &CoreAudioEndpoint) -> CoreResult<f32> {
        Err(unsupported())
    }

    #[track_caller]
    pub(super) fn set_scalar(_endpoint: &CoreAudioEndpoint, _level: f32) -> CoreResult<()> {
        Err(unsupported())
    }

    #[track_caller]
    fn unsupported() -> SplashError {
        SplashError::VolumeControlFailed {
            reason: "Endpoint volume control is only supported on Windows".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
