use crate::CoreResult;

/// Master volume control of one audio output device.
///
/// Levels are scalars in `0.0..=1.0`.
pub trait VolumeEndpoint {
    /// Current master level.
    fn scalar(&self) -> CoreResult<f32>;

    /// Set the master level.
    fn set_scalar(&self, level: f32) -> CoreResult<()>;
}

/// Finds the default output device.
pub trait AudioDeviceResolver {
    /// Endpoint type produced by this resolver.
    type Endpoint: VolumeEndpoint;

    /// Resolve the default render device.
    fn resolve_default(&mut self) -> CoreResult<Self::Endpoint>;
}
