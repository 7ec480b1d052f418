pub mod bridge;
pub mod config;
pub mod display;
pub mod error;
pub mod host;
pub mod input;
pub mod lifecycle;
pub mod native;
pub mod services;
pub mod shutdown;

pub use crate::bridge::HostBridge;
pub use crate::config::HostConfig;
pub use crate::display::{DisplayClass, DisplayClassifier, DisplayMetrics};
pub use crate::error::{BridgeError, BridgeResult};
pub use crate::host::{HostCallbacks, HostPlatform, SavedState, WindowFlags};
pub use crate::input::{KeyCode, KeyEvent, VolumeKeyInterceptor};
pub use crate::lifecycle::LifecyclePhase;
pub use crate::native::{ChannelNativeBridge, NativeBridge, NativeHandoff, NativeNotification};
pub use crate::services::ServiceRegistry;
pub use crate::shutdown::ShutdownToken;
