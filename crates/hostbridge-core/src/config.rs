use std::fs;
use std::io;
use std::path::Path;

use hostbridge_audio_api::StreamType;
use serde::{Deserialize, Serialize};

use crate::display::LARGE_SCREEN_MIN_DP;
use crate::error::{BridgeError, BridgeResult};

pub const DEFAULT_CONFIG_PATH: &str = "hostbridge.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Device-independent width at which a display counts as large.
    #[serde(default = "default_large_screen_min_dp")]
    pub large_screen_min_dp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub volume_stream: StreamType,

    #[serde(default = "default_true")]
    pub show_volume_ui: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Treat window focus loss/gain as pause/resume (desktop hosts).
    #[serde(default)]
    pub focus_drives_lifecycle: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter; `RUST_LOG` wins when set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_max_steps")]
    pub max_steps: u32,

    #[serde(default = "default_initial_step")]
    pub initial_step: u32,
}

fn default_true() -> bool {
    true
}
fn default_large_screen_min_dp() -> f64 {
    LARGE_SCREEN_MIN_DP
}
fn default_title() -> String {
    "hostbridge".to_string()
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_filter() -> String {
    "info".to_string()
}
fn default_max_steps() -> u32 {
    15
}
fn default_initial_step() -> u32 {
    8
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            large_screen_min_dp: default_large_screen_min_dp(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            volume_stream: StreamType::Music,
            show_volume_ui: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            initial_step: default_initial_step(),
        }
    }
}

impl HostConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s).map_err(|message| BridgeError::Config {
                path: path.to_path_buf(),
                message,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BridgeError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        let cfg: Self = toml::from_str(s).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), String> {
        let dp = self.display.large_screen_min_dp;
        if !dp.is_finite() || dp <= 0.0 {
            return Err(format!(
                "display.large_screen_min_dp must be a positive number, got {dp}"
            ));
        }
        Ok(())
    }
}
