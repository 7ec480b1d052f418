use hostbridge_core::config::WindowConfig;
use hostbridge_core::{HostPlatform, KeyCode, KeyEvent, SavedState, ServiceRegistry, WindowFlags};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowId};

use crate::error::PlatformError;

/// winit-backed implementation of the host interface.
///
/// Owns the window, the default monitor handle and the service registry.
pub struct WinitHost {
    cfg: WindowConfig,
    window: Option<Window>,
    monitor: Option<MonitorHandle>,
    window_flags: WindowFlags,
    services: ServiceRegistry,
    exit_requested: bool,
}

impl WinitHost {
    pub fn new(cfg: WindowConfig, services: ServiceRegistry) -> Self {
        Self {
            cfg,
            window: None,
            monitor: None,
            window_flags: WindowFlags::NONE,
            services,
            exit_requested: false,
        }
    }

    #[inline]
    pub fn window_id(&self) -> Option<WindowId> {
        self.window.as_ref().map(Window::id)
    }

    #[inline]
    pub fn window_flags(&self) -> WindowFlags {
        self.window_flags
    }

    #[inline]
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    #[inline]
    pub fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// Creates the window and captures the default monitor.
    pub(crate) fn attach(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        if self.window.is_some() {
            return Ok(());
        }

        let attrs = Window::default_attributes()
            .with_title(self.cfg.title.clone())
            .with_inner_size(LogicalSize::new(self.cfg.width, self.cfg.height));
        let window = event_loop.create_window(attrs)?;

        self.monitor = event_loop
            .primary_monitor()
            .or_else(|| window.current_monitor());
        if self.monitor.is_none() {
            log::warn!("no monitor reported, using window metrics for the display");
        }

        self.window = Some(window);
        Ok(())
    }
}

impl HostPlatform for WinitHost {
    fn base_create(&mut self, saved_state: Option<&SavedState>) {
        log::debug!(
            "host created (saved state: {} bytes)",
            saved_state.map_or(0, |s| s.0.len())
        );
    }

    fn base_pause(&mut self) {
        log::debug!("host paused");
    }

    fn base_resume(&mut self) {
        log::debug!("host resumed");
        self.request_redraw();
    }

    fn base_key_down(&mut self, event: &KeyEvent) -> bool {
        if event.code == KeyCode::ESCAPE || event.code == KeyCode::BACK {
            self.request_exit();
            return true;
        }
        false
    }

    fn add_window_flags(&mut self, flags: WindowFlags) {
        let added = flags - self.window_flags;
        self.window_flags |= flags;

        if added.contains(WindowFlags::KEEP_SCREEN_ON) {
            // winit has no screen-timeout control; the flag is only recorded.
            log::debug!("keep screen on");
        }
    }

    fn default_display_size(&self) -> (u32, u32) {
        if let Some(m) = &self.monitor {
            let size = m.size();
            return (size.width, size.height);
        }
        if let Some(w) = &self.window {
            let size = w.inner_size();
            return (size.width, size.height);
        }
        (self.cfg.width, self.cfg.height)
    }

    fn display_density(&self) -> f64 {
        if let Some(m) = &self.monitor {
            return m.scale_factor();
        }
        self.window.as_ref().map_or(1.0, Window::scale_factor)
    }

    fn services(&self) -> &ServiceRegistry {
        &self.services
    }
}
