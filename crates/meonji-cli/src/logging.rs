use crate::types::LogLevel;
use env_logger::{Builder, Env};

/// Install the stderr logger. An explicit level wins; otherwise `RUST_LOG`
/// applies, defaulting to warnings.
pub fn init(level: Option<LogLevel>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}
