use super::current::render_current;
use super::forecast::render_forecasts;
use crate::palette::cyan;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use meonji_types::{Forecast, Measurement, parse_timestamp};
use std::fmt;

/// `03월 05일 오후 2시`
pub fn format_korean_time(time: NaiveDateTime) -> String {
    let meridiem = if time.hour() < 12 { "오전" } else { "오후" };
    format!("{} {} {}", time.format("%m월 %d일"), meridiem, time.format("%-I시"))
}

/// Title line for a dashboard. `measured_at` is `YYYYMMDDhhmm`; it is left
/// out when missing or malformed.
pub fn render_header(station: &str, measured_at: Option<&str>) -> String {
    let when = match measured_at.map(parse_timestamp) {
        Some(Ok(time)) => format!(" ({} 기준)", format_korean_time(time)),
        Some(Err(err)) => {
            log::warn!("{}; omitting measurement time from header", err);
            String::new()
        }
        None => String::new(),
    };

    format!(" {} 공기 상태{}:\n\n", cyan(station), when)
}

pub fn render_footer() -> String {
    " 자료 제공: Air Korea\n".to_string()
}

pub fn render_body(
    current: Option<&Measurement>,
    pm10: Option<&Forecast>,
    pm25: Option<&Forecast>,
    today: NaiveDate,
) -> String {
    render_current(current) + &render_forecasts(pm10, pm25, today)
}

/// Complete dashboard: header, current conditions, forecasts and footer.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    pub title: &'a str,
    pub measured_at: Option<&'a str>,
    pub current: Option<&'a Measurement>,
    pub pm10: Option<&'a Forecast>,
    pub pm25: Option<&'a Forecast>,
    pub today: NaiveDate,
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_header(self.title, self.measured_at))?;
        f.write_str(&render_body(self.current, self.pm10, self.pm25, self.today))?;
        f.write_str(&render_footer())
    }
}
