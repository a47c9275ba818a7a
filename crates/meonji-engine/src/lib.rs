//! Layout engine for meonji's terminal views.
//!
//! Everything is built from [`Chunk`]s: blocks of lines that share one
//! visible width. Icons, labels, table borders and data cells are each made
//! at their natural width and merged side by side into aligned columns.
//! Colors are ANSI escapes and never count toward width.

pub mod chunk;
pub mod classify;
pub mod face;
pub mod palette;
pub mod text;
pub mod view;

pub use chunk::{Align, Chunk};
pub use classify::{Band, Pollutant, Thresholds, classify, colorize, colorize_reading, grade_color};
pub use face::face;
