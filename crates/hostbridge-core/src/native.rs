//! Boundary to the native engine.
//!
//! The bridge never calls the engine directly: it goes through an injected
//! [`NativeBridge`]. Large-screen classification is produced before the native
//! library is loaded, so it is parked in a [`NativeHandoff`] until the load
//! event arrives.

use crossbeam_channel::{Receiver, Sender};

use crate::display::DisplayClass;

/// One-way notifications into the native layer.
///
/// Calls are synchronous and fire-and-forget. Whether a call made before the
/// native layer is initialized is dropped or queued is up to the implementation.
pub trait NativeBridge {
    fn notify_paused(&mut self);
    fn notify_resumed(&mut self);
    fn notify_large_screen(&mut self);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NativeNotification {
    Paused,
    Resumed,
    LargeScreen,
}

/// Forwards notifications over a channel to an engine running elsewhere.
pub struct ChannelNativeBridge {
    tx: Sender<NativeNotification>,
}

impl ChannelNativeBridge {
    #[inline]
    pub fn new(tx: Sender<NativeNotification>) -> Self {
        Self { tx }
    }

    /// Unbounded pair; the receiver belongs to the engine side.
    pub fn channel() -> (Self, Receiver<NativeNotification>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    #[inline]
    fn post(&self, n: NativeNotification) {
        if self.tx.send(n).is_err() {
            log::warn!("native layer disconnected, dropped {n:?}");
        }
    }
}

impl NativeBridge for ChannelNativeBridge {
    #[inline]
    fn notify_paused(&mut self) {
        self.post(NativeNotification::Paused);
    }

    #[inline]
    fn notify_resumed(&mut self) {
        self.post(NativeNotification::Resumed);
    }

    #[inline]
    fn notify_large_screen(&mut self) {
        self.post(NativeNotification::LargeScreen);
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandoffState {
    /// Native library not loaded yet; holds the classification, if any.
    NotReady { pending: Option<DisplayClass> },
    Ready,
}

/// Two-phase delivery of the display classification.
///
/// `notify_large_screen` fires at most once, and only after `mark_loaded`.
#[derive(Debug, Clone)]
pub struct NativeHandoff {
    state: HandoffState,
    large_screen_sent: bool,
}

impl Default for NativeHandoff {
    fn default() -> Self {
        Self {
            state: HandoffState::NotReady { pending: None },
            large_screen_sent: false,
        }
    }
}

impl NativeHandoff {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> HandoffState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == HandoffState::Ready
    }

    /// Buffers `class` until the native side is loaded, or forwards it right away.
    pub fn record<N: NativeBridge + ?Sized>(&mut self, class: DisplayClass, native: &mut N) {
        if let HandoffState::NotReady { pending } = &mut self.state {
            log::debug!("native not loaded, holding {} display class", class.as_str());
            *pending = Some(class);
            return;
        }
        self.forward(class, native);
    }

    /// NotReady -> Ready, draining the held classification. Repeated calls do nothing.
    pub fn mark_loaded<N: NativeBridge + ?Sized>(&mut self, native: &mut N) {
        let pending = match self.state {
            HandoffState::NotReady { pending } => pending,
            HandoffState::Ready => {
                log::debug!("native already marked loaded");
                return;
            }
        };

        self.state = HandoffState::Ready;
        log::info!("native library loaded");

        if let Some(class) = pending {
            self.forward(class, native);
        }
    }

    fn forward<N: NativeBridge + ?Sized>(&mut self, class: DisplayClass, native: &mut N) {
        if !class.is_large() || self.large_screen_sent {
            return;
        }
        self.large_screen_sent = true;
        log::info!("forwarding large screen to native");
        native.notify_large_screen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<NativeNotification>,
    }

    impl NativeBridge for Recorder {
        fn notify_paused(&mut self) {
            self.calls.push(NativeNotification::Paused);
        }
        fn notify_resumed(&mut self) {
            self.calls.push(NativeNotification::Resumed);
        }
        fn notify_large_screen(&mut self) {
            self.calls.push(NativeNotification::LargeScreen);
        }
    }

    #[test]
    fn large_class_waits_for_load() {
        let mut native = Recorder::default();
        let mut handoff = NativeHandoff::new();

        handoff.record(DisplayClass::Large, &mut native);
        assert!(native.calls.is_empty());
        assert_eq!(
            handoff.state(),
            HandoffState::NotReady {
                pending: Some(DisplayClass::Large)
            }
        );

        handoff.mark_loaded(&mut native);
        assert!(handoff.is_ready());
        assert_eq!(native.calls, vec![NativeNotification::LargeScreen]);

        // second load and re-record do not repeat the notification
        handoff.mark_loaded(&mut native);
        handoff.record(DisplayClass::Large, &mut native);
        assert_eq!(native.calls, vec![NativeNotification::LargeScreen]);
    }

    #[test]
    fn small_class_is_never_forwarded() {
        let mut native = Recorder::default();
        let mut handoff = NativeHandoff::new();

        handoff.record(DisplayClass::Small, &mut native);
        handoff.mark_loaded(&mut native);
        assert!(native.calls.is_empty());
    }

    #[test]
    fn record_after_load_forwards_immediately() {
        let mut native = Recorder::default();
        let mut handoff = NativeHandoff::new();

        handoff.mark_loaded(&mut native);
        assert!(native.calls.is_empty());

        handoff.record(DisplayClass::Large, &mut native);
        assert_eq!(native.calls, vec![NativeNotification::LargeScreen]);
    }

    #[test]
    fn channel_bridge_posts_in_order() {
        let (mut bridge, rx) = ChannelNativeBridge::channel();
        bridge.notify_paused();
        bridge.notify_resumed();
        bridge.notify_large_screen();

        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![
                NativeNotification::Paused,
                NativeNotification::Resumed,
                NativeNotification::LargeScreen
            ]
        );
    }

    #[test]
    fn channel_bridge_survives_dropped_receiver() {
        let (mut bridge, rx) = ChannelNativeBridge::channel();
        drop(rx);
        bridge.notify_paused();
        bridge.notify_large_screen();
    }
}
