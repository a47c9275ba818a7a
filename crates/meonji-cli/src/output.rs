use crate::types::ColorChoice;
use anyhow::Result;
use is_terminal::IsTerminal;
use meonji_engine::text::strip_ansi;
use std::io::Write;

pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}

/// The view as it should be written, colors removed if disabled.
pub fn prepare(view: &str, color: bool) -> String {
    if color {
        view.to_string()
    } else {
        strip_ansi(view).into_owned()
    }
}

pub fn emit(view: &str, choice: ColorChoice) -> Result<()> {
    let text = prepare(view, should_color(choice));
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
