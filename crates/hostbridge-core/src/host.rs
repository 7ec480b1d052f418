use bitflags::bitflags;

use crate::input::KeyEvent;
use crate::services::ServiceRegistry;

bitflags! {
    /// Window policy flags a host can apply on request.
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const NONE = 0;

        const KEEP_SCREEN_ON = 0x0000_0080;
    }
}

/// Opaque state the OS hands back when it recreates the host component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState(pub Vec<u8>);

/// What the OS adapter provides to the bridge.
///
/// `base_*` methods are the default handling chain the bridge delegates to;
/// the rest are platform capabilities.
pub trait HostPlatform {
    fn base_create(&mut self, saved_state: Option<&SavedState>);
    fn base_pause(&mut self);
    fn base_resume(&mut self);

    /// Default key handling. Returns true if the key was consumed.
    fn base_key_down(&mut self, event: &KeyEvent) -> bool;

    fn add_window_flags(&mut self, flags: WindowFlags);

    /// Physical pixel size of the default display.
    fn default_display_size(&self) -> (u32, u32);

    /// Display density scale factor (1.0 = baseline).
    fn display_density(&self) -> f64;

    fn services(&self) -> &ServiceRegistry;
}

/// Lifecycle and input contract the OS adapter drives.
///
/// Callbacks arrive serially on the UI thread and run to completion.
pub trait HostCallbacks {
    fn on_create(&mut self, host: &mut dyn HostPlatform, saved_state: Option<&SavedState>);

    fn on_pause(&mut self, host: &mut dyn HostPlatform);

    fn on_resume(&mut self, host: &mut dyn HostPlatform);

    /// Returns true if the event was consumed.
    fn on_key_down(&mut self, host: &mut dyn HostPlatform, event: &KeyEvent) -> bool;

    /// The native library reported itself loaded.
    fn on_native_loaded(&mut self) {}
}
