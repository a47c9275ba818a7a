//! Full views composed from chunks: current conditions, forecasts, the
//! district list and the usage page.

mod current;
mod forecast;
mod help;
mod page;
mod stations;

pub use current::{MAINTENANCE_PLACEHOLDER, UNKNOWN_PLACEHOLDER, render_current};
pub use forecast::{day_label, render_forecast, render_forecasts};
pub use help::render_help;
pub use page::{Dashboard, format_korean_time, render_body, render_footer, render_header};
pub use stations::render_station_list;

/// Left margin shared by every block.
pub(crate) const INDENT: &str = "     ";
