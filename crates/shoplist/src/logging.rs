//! Logger bootstrap for native hosts.
//!
//! The library itself only talks to the [`log`] facade, with messages in the
//! `event=<name> key=value` shape. Hosts that have no logger of their own can
//! call [`init_logging`] once to get stderr output through `flexi_logger`.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Repeating the call with the same level is a no-op.
//! - Repeating the call with a different level is rejected.

use crate::error::{Result, ShoplistError};
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

const SUPPORTED_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Starts a stderr logger at `level`.
///
/// # Errors
/// - Unsupported level string.
/// - Logging already initialized with a different level.
/// - Backend startup failure.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == level {
            return Ok(());
        }
        return Err(ShoplistError::Config(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(&level)
            .map_err(|err| ShoplistError::Config(format!("invalid log level `{level}`: {err}")))?
            .log_to_stderr()
            .start()
            .map_err(|err| ShoplistError::Config(format!("failed to start logger: {err}")))?;

        info!(
            "event=logging_init module=shoplist level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: level.clone(),
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(ShoplistError::Config(format!(
            "logging already initialized with level `{}`",
            state.level
        )));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(ShoplistError::Config(format!(
            "unsupported log level `{}`",
            level
        )))
    }
}
