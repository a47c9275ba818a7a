mod args;
mod commands;
mod handlers;
pub mod config;
pub mod context;
pub mod input;
pub mod logging;
pub mod output;
pub mod types;

pub use args::{Cli, Commands, RecordArgs};
pub use commands::run;
