//! Hardware key interception.
//!
//! Volume keys are handled here and never reach the default chain; the audio
//! capability is looked up on every press because hosts may add or withdraw it.

use hostbridge_audio_api::{StreamType, VolumeDirection, VolumeFlags, AUDIO_SERVICE};

use crate::config::InputConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::host::HostPlatform;
use crate::services::ServiceRegistry;

/// Platform key code (Android key code numbering).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(0);
    pub const BACK: KeyCode = KeyCode(4);
    pub const NUM_0: KeyCode = KeyCode(7);
    pub const DPAD_UP: KeyCode = KeyCode(19);
    pub const DPAD_DOWN: KeyCode = KeyCode(20);
    pub const DPAD_LEFT: KeyCode = KeyCode(21);
    pub const DPAD_RIGHT: KeyCode = KeyCode(22);
    pub const VOLUME_UP: KeyCode = KeyCode(24);
    pub const VOLUME_DOWN: KeyCode = KeyCode(25);
    pub const A: KeyCode = KeyCode(29);
    pub const TAB: KeyCode = KeyCode(61);
    pub const SPACE: KeyCode = KeyCode(62);
    pub const ENTER: KeyCode = KeyCode(66);
    pub const DEL: KeyCode = KeyCode(67);
    pub const ESCAPE: KeyCode = KeyCode(111);
    pub const VOLUME_MUTE: KeyCode = KeyCode(164);

    /// Digit key `0..=9`.
    #[inline]
    pub fn digit(d: u8) -> Option<KeyCode> {
        (d <= 9).then(|| KeyCode(Self::NUM_0.0 + u32::from(d)))
    }

    /// Letter key, case-insensitive.
    #[inline]
    pub fn letter(c: char) -> Option<KeyCode> {
        let c = c.to_ascii_uppercase();
        c.is_ascii_uppercase()
            .then(|| KeyCode(Self::A.0 + (c as u32 - 'A' as u32)))
    }
}

/// Key-down record delivered by the OS. Read-only for the bridge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// Auto-repeat while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    #[inline]
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            repeat: false,
        }
    }

    #[inline]
    pub fn repeated(code: KeyCode) -> Self {
        Self { code, repeat: true }
    }
}

/// Intercepts volume keys and drives the audio capability directly.
#[derive(Debug, Clone)]
pub struct VolumeKeyInterceptor {
    stream: StreamType,
    flags: VolumeFlags,
}

impl Default for VolumeKeyInterceptor {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

impl VolumeKeyInterceptor {
    pub fn new(cfg: &InputConfig) -> Self {
        let flags = if cfg.show_volume_ui {
            VolumeFlags::SHOW_UI
        } else {
            VolumeFlags::NONE
        };
        Self {
            stream: cfg.volume_stream,
            flags,
        }
    }

    #[inline]
    pub fn volume_direction(code: KeyCode) -> Option<VolumeDirection> {
        match code {
            KeyCode::VOLUME_UP => Some(VolumeDirection::Raise),
            KeyCode::VOLUME_DOWN => Some(VolumeDirection::Lower),
            _ => None,
        }
    }

    /// Volume keys are always consumed, whether or not the volume changed.
    /// Everything else returns whatever the host's default chain returns.
    pub fn on_key_down(&self, host: &mut dyn HostPlatform, event: &KeyEvent) -> bool {
        let Some(direction) = Self::volume_direction(event.code) else {
            return host.base_key_down(event);
        };

        if let Err(e) = self.adjust(host.services(), direction) {
            log::warn!("volume {} ignored: {e}", direction.as_str());
        }
        true
    }

    fn adjust(&self, services: &ServiceRegistry, direction: VolumeDirection) -> BridgeResult<()> {
        let audio = services.audio().ok_or(BridgeError::CapabilityUnavailable {
            service: AUDIO_SERVICE,
        })?;

        log::debug!("volume {} on {}", direction.as_str(), self.stream.as_str());
        audio.adjust_stream_volume(self.stream, direction, self.flags);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_volume_keys_have_a_direction() {
        assert_eq!(
            VolumeKeyInterceptor::volume_direction(KeyCode::VOLUME_UP),
            Some(VolumeDirection::Raise)
        );
        assert_eq!(
            VolumeKeyInterceptor::volume_direction(KeyCode::VOLUME_DOWN),
            Some(VolumeDirection::Lower)
        );
        assert_eq!(VolumeKeyInterceptor::volume_direction(KeyCode::VOLUME_MUTE), None);
        assert_eq!(VolumeKeyInterceptor::volume_direction(KeyCode::ENTER), None);
        assert_eq!(VolumeKeyInterceptor::volume_direction(KeyCode::UNKNOWN), None);
    }

    #[test]
    fn key_code_tables() {
        assert_eq!(KeyCode::letter('a'), Some(KeyCode(29)));
        assert_eq!(KeyCode::letter('Z'), Some(KeyCode(54)));
        assert_eq!(KeyCode::letter('1'), None);
        assert_eq!(KeyCode::digit(0), Some(KeyCode(7)));
        assert_eq!(KeyCode::digit(9), Some(KeyCode(16)));
        assert_eq!(KeyCode::digit(10), None);
    }

    #[test]
    fn flags_follow_config() {
        let quiet = VolumeKeyInterceptor::new(&InputConfig {
            volume_stream: StreamType::Ring,
            show_volume_ui: false,
        });
        assert_eq!(quiet.flags, VolumeFlags::NONE);
        assert_eq!(quiet.stream, StreamType::Ring);

        let default = VolumeKeyInterceptor::default();
        assert_eq!(default.flags, VolumeFlags::SHOW_UI);
        assert_eq!(default.stream, StreamType::Music);
    }
}
