mod engine;

use std::sync::Arc;

use anyhow::Context;
use hostbridge_audio_api::SoftwareVolume;
use hostbridge_core::config::DEFAULT_CONFIG_PATH;
use hostbridge_core::{ChannelNativeBridge, HostBridge, HostConfig, ServiceRegistry, ShutdownToken};
use hostbridge_platform_winit::{run_winit_app, WinitHost};

use crate::engine::NativeEngine;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = HostConfig::load_or_default(&path)?;

    hostbridge_modules_logging::init(&cfg.logging);
    log::info!("config: {path}");

    let shutdown = ShutdownToken::new();
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || shutdown.request()).context("install ctrl-c handler")?;
    }

    let mut services = ServiceRegistry::default();
    services.insert_audio(Arc::new(SoftwareVolume::new(
        cfg.audio.max_steps,
        cfg.audio.initial_step,
    )));

    let (native, notifications) = ChannelNativeBridge::channel();
    let engine = NativeEngine::spawn(notifications)?;

    let bridge = HostBridge::new(native, &cfg);
    let host = WinitHost::new(cfg.window.clone(), services);
    run_winit_app(bridge, host, &cfg.lifecycle, shutdown)?;

    // The bridge (and its sender) is gone now, so the engine drains and stops.
    match engine.join() {
        Ok(state) => log::info!(
            "engine stopped after {} notifications (large screen: {})",
            state.notifications(),
            state.is_large_screen()
        ),
        Err(_) => log::error!("engine thread panicked"),
    }
    Ok(())
}
