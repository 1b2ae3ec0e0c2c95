// src/logging.rs
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Level from `LOG_LEVEL` (error/warn/info/debug/trace), `info` otherwise.
pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var("LOG_LEVEL").ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Sends log output to stderr so stdout stays free for reports.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Off)
        .build();

    let _ = TermLogger::init(
        level_from_env(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
