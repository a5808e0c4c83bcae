//! Logger bootstrap for the binary.
//!
//! Logs go to stderr only; stdout carries nothing but operation output.
//! `RECSTORE_LOG` takes an env_logger filter and wins over `--verbose`.

use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "RECSTORE_LOG";

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Never fails the process: a logger that cannot be installed is skipped.
pub fn init(verbose: bool) {
    let env = Env::new().filter_or(LOG_ENV, default_filter(verbose));
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
