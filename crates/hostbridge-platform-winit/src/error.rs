use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window create failed: {0}")]
    Window(#[from] winit::error::OsError),
}
