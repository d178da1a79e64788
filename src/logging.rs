// src/logging.rs

use log::LevelFilter;

/// Sets up `env_logger`. The level can be raised or lowered through `LOG`.
pub fn init() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_env("LOG")
        .format_module_path(false)
        .format_target(false)
        .init();
}

/// Logs a fatal error and terminates the process.
pub fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    log::error!("{}: {}", context, err);
    std::process::exit(1)
}
