//! One function per semantic color. Each wraps its input in the matching
//! ANSI foreground (or background) code and its reset.

use owo_colors::OwoColorize;
use std::fmt::Display;

pub fn blue(s: impl Display) -> String {
    s.blue().to_string()
}

pub fn green(s: impl Display) -> String {
    s.green().to_string()
}

pub fn yellow(s: impl Display) -> String {
    s.yellow().to_string()
}

pub fn red(s: impl Display) -> String {
    s.red().to_string()
}

pub fn cyan(s: impl Display) -> String {
    s.cyan().to_string()
}

pub fn on_yellow(s: impl Display) -> String {
    s.on_yellow().to_string()
}
