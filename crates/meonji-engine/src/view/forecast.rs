use super::INDENT;
use super::current::UNKNOWN_PLACEHOLDER;
use crate::classify::grade_color;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use meonji_types::Forecast;

const TODAY: &str = "오늘";
const TOMORROW: &str = "내일";

/// Hour from which a forecast is read as being about the next day.
const EVENING_CUTOFF: u32 = 17;

/// Which day a forecast issued for `applies_at` talks about, seen from
/// `today`.
pub fn day_label(applies_at: NaiveDateTime, today: NaiveDate) -> &'static str {
    // Evening forecasts describe tomorrow until that tomorrow has arrived.
    if applies_at.hour() < EVENING_CUTOFF || today > applies_at.date() {
        TODAY
    } else {
        TOMORROW
    }
}

/// One forecast as a level line plus an advisory line (blank when there is
/// no advisory).
pub fn render_forecast(forecast: Option<&Forecast>, title: &str, today: NaiveDate) -> String {
    let Some(forecast) = forecast else {
        return UNKNOWN_PLACEHOLDER.to_string();
    };

    let level = forecast
        .level()
        .map(grade_color)
        .unwrap_or_else(|| "-".to_string());

    let when = match forecast.applies_at() {
        Some(Ok(applies_at)) => day_label(applies_at, today),
        Some(Err(err)) => {
            log::warn!("{}; assuming the forecast is for today", err);
            TODAY
        }
        None => {
            log::warn!("forecast has no APPLC_DT; assuming it is for today");
            TODAY
        }
    };

    let advisory = forecast
        .instruction()
        .map(|text| format!("{}    {}", INDENT, text))
        .unwrap_or_default();

    format!("{}{} {} {}\n{}\n", INDENT, when, title, level, advisory)
}

/// Seoul-wide PM-10 and PM-2.5 forecasts under a section heading.
pub fn render_forecasts(
    pm10: Option<&Forecast>,
    pm25: Option<&Forecast>,
    today: NaiveDate,
) -> String {
    format!(
        "\n 서울시 예보:\n\n{}{}",
        render_forecast(pm10, "PM-10 ", today),
        render_forecast(pm25, "PM-2.5", today)
    )
}
