/// Bookkeeping for the one volume override a process performs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VolumeOverrideRecord {
    /// Level captured before the first successful override.
    pub previous_scalar_volume: Option<f32>,
    /// Level the override applied.
    pub target_scalar_volume: Option<f32>,
    /// Whether the captured level has been written back.
    pub restored: bool,
}
