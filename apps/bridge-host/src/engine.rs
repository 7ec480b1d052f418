use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use hostbridge_core::NativeNotification;

/// Stand-in for the native game engine: consumes bridge notifications on its own thread.
#[derive(Debug, Default)]
pub struct NativeEngine {
    active: bool,
    large_screen: bool,
    notifications: u64,
}

impl NativeEngine {
    /// Runs until every sender is dropped, then hands back the final state.
    pub fn spawn(rx: Receiver<NativeNotification>) -> io::Result<JoinHandle<NativeEngine>> {
        thread::Builder::new()
            .name("native-engine".into())
            .spawn(move || {
                let mut engine = NativeEngine::default();
                for n in rx.iter() {
                    engine.apply(n);
                }
                engine
            })
    }

    pub fn apply(&mut self, n: NativeNotification) {
        self.notifications += 1;
        match n {
            NativeNotification::Paused => {
                self.active = false;
                log::info!("engine: deactivated");
            }
            NativeNotification::Resumed => {
                self.active = true;
                log::info!("engine: activated");
            }
            NativeNotification::LargeScreen => {
                self.large_screen = true;
                log::info!("engine: large screen layout");
            }
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_large_screen(&self) -> bool {
        self.large_screen
    }

    #[inline]
    pub fn notifications(&self) -> u64 {
        self.notifications
    }
}
