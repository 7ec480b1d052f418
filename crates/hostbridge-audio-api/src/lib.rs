mod software;
mod types;

pub use software::SoftwareVolume;
pub use types::{StreamType, VolumeDirection, VolumeFlags};

use std::sync::Arc;

/// Service name under which hosts register their volume capability.
pub const AUDIO_SERVICE: &str = "audio";

/// Volume control provided by the host platform.
///
/// Implementations are owned by the OS layer; callers resolve them on demand
/// and must tolerate their absence.
pub trait AudioService: Send + Sync {
    /// Moves the volume of `stream` one step in `direction`.
    fn adjust_stream_volume(&self, stream: StreamType, direction: VolumeDirection, flags: VolumeFlags);
}

pub type AudioServiceRef = Arc<dyn AudioService + Send + Sync>;
