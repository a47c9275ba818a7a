use crate::config::{Config, resolve_config_path};
use crate::types::ColorChoice;
use anyhow::Result;
use once_cell::sync::OnceCell;

/// Per-invocation state shared by the handlers. The config is read on
/// first use so commands that never need it never touch the filesystem.
pub struct ExecutionContext {
    config_path: Option<String>,
    config: OnceCell<Config>,
    pub color: ColorChoice,
}

impl ExecutionContext {
    pub fn new(config_path: Option<String>, color: ColorChoice) -> Self {
        Self {
            config_path,
            config: OnceCell::new(),
            color,
        }
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.config_path.as_deref())?;
            Ok(Config::load_from(&path)?.with_env_overrides())
        })
    }
}
