use std::backtrace::Backtrace;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt};

/// Target panic events are recorded under, e.g. `RUST_LOG=api_ok::panic=error`.
const PANIC_TARGET: &str = concat!(env!("CARGO_CRATE_NAME"), "::panic");

/// `RUST_LOG` wins when it is set and parses; otherwise `log_level` is used.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))
}

pub fn init_tracing(log_level: &str) -> Result<()> {
    let filter = env_filter(log_level).with_context(|| format!("invalid log filter {log_level:?}"))?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
    set_panic_hook();
    Ok(())
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };
        let thread = std::thread::current();
        let thread = thread.name().unwrap_or("<unnamed>");
        let backtrace = Backtrace::capture();

        match info.location() {
            Some(location) => tracing::error!(
                target: PANIC_TARGET,
                panic = %message,
                thread,
                location = %location,
                backtrace = %backtrace,
                "panic"
            ),
            None => tracing::error!(
                target: PANIC_TARGET,
                panic = %message,
                thread,
                backtrace = %backtrace,
                "panic"
            ),
        }
    }));
}
