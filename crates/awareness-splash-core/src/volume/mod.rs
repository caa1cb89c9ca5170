mod endpoint;
mod override_record;
mod system_volume;

pub use {
    endpoint::{AudioDeviceResolver, VolumeEndpoint},
    override_record::VolumeOverrideRecord,
    system_volume::SystemVolumeOverride,
};
