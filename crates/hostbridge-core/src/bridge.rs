use crate::config::HostConfig;
use crate::display::{DisplayClass, DisplayClassifier, DisplayMetrics};
use crate::host::{HostCallbacks, HostPlatform, SavedState, WindowFlags};
use crate::input::{KeyEvent, VolumeKeyInterceptor};
use crate::lifecycle::LifecyclePhase;
use crate::native::{NativeBridge, NativeHandoff};

/// The host-side bridge.
///
/// Owns the derived display classification and the native boundary; everything
/// else (window, display, services, default handling) is borrowed from the
/// [`HostPlatform`] passed into each callback.
///
/// Ordering rule: base handling always runs before the native notification.
pub struct HostBridge<N: NativeBridge> {
    native: N,
    classifier: DisplayClassifier,
    interceptor: VolumeKeyInterceptor,

    display: Option<(DisplayClass, DisplayMetrics)>,
    handoff: NativeHandoff,
    phase: LifecyclePhase,
}

impl<N: NativeBridge> HostBridge<N> {
    pub fn new(native: N, cfg: &HostConfig) -> Self {
        Self {
            native,
            classifier: DisplayClassifier::new(cfg.display.large_screen_min_dp),
            interceptor: VolumeKeyInterceptor::new(&cfg.input),
            display: None,
            handoff: NativeHandoff::new(),
            phase: LifecyclePhase::Inactive,
        }
    }

    /// `None` until `on_create` has run.
    #[inline]
    pub fn display_class(&self) -> Option<DisplayClass> {
        self.display.map(|(class, _)| class)
    }

    #[inline]
    pub fn display_metrics(&self) -> Option<DisplayMetrics> {
        self.display.map(|(_, metrics)| metrics)
    }

    #[inline]
    pub fn is_large_screen(&self) -> bool {
        self.display_class().is_some_and(DisplayClass::is_large)
    }

    #[inline]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[inline]
    pub fn handoff(&self) -> &NativeHandoff {
        &self.handoff
    }

    #[inline]
    pub fn native(&self) -> &N {
        &self.native
    }

    fn classify_display(&mut self, host: &dyn HostPlatform) {
        if let Some((class, _)) = self.display {
            log::warn!("display already classified as {}, keeping it", class.as_str());
            return;
        }

        let (width_px, height_px) = host.default_display_size();
        let metrics = DisplayMetrics::new(width_px, height_px, host.display_density());
        let class = self.classifier.classify(&metrics);

        log::info!(
            "display {}x{} px @ {:.2} -> {:.0}x{:.0} dp, {} screen",
            metrics.width_px,
            metrics.height_px,
            metrics.density,
            metrics.width_dp(),
            metrics.height_dp(),
            class.as_str()
        );

        self.display = Some((class, metrics));
        self.handoff.record(class, &mut self.native);
    }

    fn enter(&mut self, phase: LifecyclePhase) {
        if self.phase == phase {
            log::debug!("lifecycle already {}", phase.as_str());
        }
        self.phase = phase;
    }
}

impl<N: NativeBridge> HostCallbacks for HostBridge<N> {
    fn on_create(&mut self, host: &mut dyn HostPlatform, saved_state: Option<&SavedState>) {
        host.base_create(saved_state);
        host.add_window_flags(WindowFlags::KEEP_SCREEN_ON);

        self.classify_display(host);
    }

    fn on_pause(&mut self, host: &mut dyn HostPlatform) {
        host.base_pause();
        self.enter(LifecyclePhase::Inactive);

        log::info!("application deactivated");
        self.native.notify_paused();
    }

    fn on_resume(&mut self, host: &mut dyn HostPlatform) {
        host.base_resume();
        self.enter(LifecyclePhase::Active);

        log::info!("application activated");
        self.native.notify_resumed();
    }

    fn on_key_down(&mut self, host: &mut dyn HostPlatform, event: &KeyEvent) -> bool {
        self.interceptor.on_key_down(host, event)
    }

    fn on_native_loaded(&mut self) {
        self.handoff.mark_loaded(&mut self.native);
    }
}
