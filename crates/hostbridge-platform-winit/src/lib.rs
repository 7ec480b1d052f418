mod app;
mod error;
mod events;
mod host;

pub use app::run_winit_app;
pub use error::PlatformError;
pub use events::{key_event, translate_key};
pub use host::WinitHost;
