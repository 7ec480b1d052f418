use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Audio stream a volume adjustment applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    VoiceCall = 0,
    System = 1,
    Ring = 2,
    Music = 3,
    Alarm = 4,
    Notification = 5,
}

impl StreamType {
    pub const ALL: [StreamType; 6] = [
        StreamType::VoiceCall,
        StreamType::System,
        StreamType::Ring,
        StreamType::Music,
        StreamType::Alarm,
        StreamType::Notification,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            StreamType::VoiceCall => "voice_call",
            StreamType::System => "system",
            StreamType::Ring => "ring",
            StreamType::Music => "music",
            StreamType::Alarm => "alarm",
            StreamType::Notification => "notification",
        }
    }
}

impl Default for StreamType {
    fn default() -> Self {
        Self::Music
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VolumeDirection {
    Raise,
    Lower,
}

impl VolumeDirection {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            VolumeDirection::Raise => "up",
            VolumeDirection::Lower => "down",
        }
    }
}

bitflags! {
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VolumeFlags: u32 {
        const NONE = 0;

        /// Ask the system to display its volume indicator.
        const SHOW_UI = 1 << 0;
    }
}
