use crate::context::ExecutionContext;
use anyhow::Result;
use meonji_engine::view::render_help;
use meonji_types::DISTRICTS;

pub fn handle(ctx: &ExecutionContext) -> Result<String> {
    let config = ctx.config()?;
    Ok(render_help(&config.url, &DISTRICTS[0]))
}
