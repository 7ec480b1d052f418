use std::time::Duration;

use hostbridge_core::config::LifecycleConfig;
use hostbridge_core::{HostCallbacks, ShutdownToken};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use crate::error::PlatformError;
use crate::events::key_event;
use crate::host::WinitHost;

/// How often the loop wakes up to check the shutdown token.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// OS adapter: turns winit callbacks into bridge callbacks.
///
/// The first `resumed` creates the window and runs create, native-loaded and
/// resume in that order. Later `resumed`/`suspended` pairs (Android surface
/// loss) map to resume/pause. Only real transitions are forwarded.
struct App<B: HostCallbacks> {
    bridge: B,
    host: WinitHost,
    focus_drives_lifecycle: bool,
    shutdown: ShutdownToken,

    created: bool,
    active: bool,
}

impl<B: HostCallbacks> App<B> {
    fn new(bridge: B, host: WinitHost, lifecycle: &LifecycleConfig, shutdown: ShutdownToken) -> Self {
        Self {
            bridge,
            host,
            focus_drives_lifecycle: lifecycle.focus_drives_lifecycle,
            shutdown,
            created: false,
            active: false,
        }
    }

    fn start(&mut self) {
        if !self.created {
            self.bridge.on_create(&mut self.host, None);
            self.bridge.on_native_loaded();
            self.created = true;
        }
        self.activate();
    }

    fn activate(&mut self) {
        if !self.created || self.active {
            return;
        }
        self.active = true;
        self.bridge.on_resume(&mut self.host);
    }

    fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.bridge.on_pause(&mut self.host);
    }

    fn focus_changed(&mut self, focused: bool) {
        if !self.focus_drives_lifecycle {
            return;
        }
        if focused {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Key presses only; releases never reach the bridge.
    fn key_input(&mut self, key: PhysicalKey, state: ElementState, repeat: bool) -> bool {
        if state != ElementState::Pressed {
            return false;
        }
        let event = key_event(key, repeat);
        let consumed = self.bridge.on_key_down(&mut self.host, &event);
        log::trace!("key {:?} consumed={consumed}", event.code);
        consumed
    }

    #[inline]
    fn should_exit(&self) -> bool {
        self.shutdown.is_requested() || self.host.exit_requested()
    }
}

impl<B: HostCallbacks> ApplicationHandler for App<B> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.host.attach(event_loop) {
            log::error!("{e}");
            event_loop.exit();
            return;
        }
        self.start();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.deactivate();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if Some(id) != self.host.window_id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.host.request_exit(),
            WindowEvent::Focused(focused) => self.focus_changed(focused),
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(event.physical_key, event.state, event.repeat);
            }
            _ => {}
        }

        if self.should_exit() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::wait_duration(SHUTDOWN_POLL));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.deactivate();
        log::info!("shutdown");
    }
}

/// Runs the winit event loop until exit is requested.
pub fn run_winit_app<B: HostCallbacks>(
    bridge: B,
    host: WinitHost,
    lifecycle: &LifecycleConfig,
    shutdown: ShutdownToken,
) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(bridge, host, lifecycle, shutdown);
    event_loop.run_app(&mut app)?;
    Ok(())
}
