use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Parse the compact timestamps used by the measurement and forecast feeds.
///
/// `YYYYMMDDhhmmss` and `YYYYMMDDhhmm` are read as-is; the shorter
/// `YYYYMMDDhh` and `YYYYMMDD` forms are taken as the top of the hour / day.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let digits = raw.trim();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidTimestamp(raw.to_string()));
    }

    let parsed = match digits.len() {
        14 => NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S"),
        12 => NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M"),
        10 => NaiveDateTime::parse_from_str(&format!("{}00", digits), "%Y%m%d%H%M"),
        8 => NaiveDateTime::parse_from_str(&format!("{}0000", digits), "%Y%m%d%H%M"),
        _ => return Err(Error::InvalidTimestamp(raw.to_string())),
    };

    parsed.map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_minute_precision() {
        let ts = parse_timestamp("201703051430").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour(), ts.minute()), (3, 5, 14, 30));
    }

    #[test]
    fn test_parse_second_precision() {
        let ts = parse_timestamp("20170305170000").unwrap();
        assert_eq!(ts.hour(), 17);
    }

    #[test]
    fn test_parse_hour_precision() {
        let ts = parse_timestamp("2017030520").unwrap();
        assert_eq!((ts.hour(), ts.minute()), (20, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2017-03-05").is_err());
        assert!(parse_timestamp("201713051430").is_err());
    }
}
