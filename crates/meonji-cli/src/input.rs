use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeDelta, Utc};
use meonji_types::decode_record;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Seoul is UTC+9 with no daylight saving.
const SEOUL_UTC_OFFSET_HOURS: i64 = 9;

/// Read one record from a JSON file. An envelope with no rows is treated
/// as absent data, the same as not passing a file at all.
pub fn load_record<T: DeserializeOwned>(path: Option<&Path>) -> Result<Option<T>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    let record = decode_record(value)
        .with_context(|| format!("Unexpected record shape in {}", path.display()))?;

    if record.is_none() {
        log::info!("{} holds no rows; treating as missing", path.display());
    } else {
        log::debug!("loaded record from {}", path.display());
    }
    Ok(record)
}

pub fn today_in_seoul() -> NaiveDate {
    (Utc::now().naive_utc() + TimeDelta::hours(SEOUL_UTC_OFFSET_HOURS)).date()
}
