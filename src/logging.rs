//! Diagnostic logging to stderr.
//!
//! Level comes from `PWFORGE_LOG` (`error`, `warn`, `info`, `debug`,
//! `trace` or any env_logger filter string), default `warn`. Generated
//! passwords are never logged.

use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "PWFORGE_LOG";

pub fn init() {
    let env = Env::default().filter_or(LOG_ENV, "warn");
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .try_init();
}
