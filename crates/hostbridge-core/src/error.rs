use std::path::PathBuf;

use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// A system service the bridge tried to resolve is not registered.
    #[error("capability unavailable: {service}")]
    CapabilityUnavailable { service: &'static str },

    #[error("config error [{}]: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
