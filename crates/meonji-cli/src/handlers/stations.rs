use crate::context::ExecutionContext;
use anyhow::Result;
use meonji_engine::view::render_station_list;
use meonji_types::DISTRICTS;

pub fn handle(ctx: &ExecutionContext) -> Result<String> {
    let config = ctx.config()?;
    Ok(render_station_list(&DISTRICTS, &config.url))
}
