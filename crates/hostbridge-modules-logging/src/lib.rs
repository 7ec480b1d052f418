//! Process-wide logger for hostbridge binaries.
//!
//! Installs `env_logger` with a fixed line layout:
//! `[<unix-ms>] [<LEVEL>] [<target>] <message>`.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use env_logger::{Builder, Env};
use hostbridge_core::config::LoggingConfig;

/// Installs the global logger. `RUST_LOG` overrides `cfg.filter`.
///
/// Returns false if a logger was already installed.
pub fn init(cfg: &LoggingConfig) -> bool {
    let installed = builder(cfg).try_init().is_ok();
    if !installed {
        log::debug!("logger already installed");
    }
    installed
}

fn builder(cfg: &LoggingConfig) -> Builder {
    let mut b = Builder::from_env(Env::default().default_filter_or(cfg.filter.as_str()));
    b.format(|buf, record| {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        writeln!(
            buf,
            "[{}] [{}] [{}] {}",
            ms,
            record.level(),
            short_target(record.target()),
            record.args()
        )
    });
    b
}

/// `hostbridge_core::bridge` -> `bridge`.
#[inline]
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}
