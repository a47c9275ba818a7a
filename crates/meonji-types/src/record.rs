use crate::grade::{AirGrade, Grade};
use crate::{Result, parse_timestamp};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current conditions reported for Seoul or for a single district.
///
/// Pollutant readings are kept as display text: the feed sends them as
/// numbers or strings and the views print them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "MSRSTENAME", default, deserialize_with = "scalar::optional_text")]
    pub station_name: Option<String>,

    /// `YYYYMMDDhhmm`
    #[serde(rename = "MSRDATE", default, deserialize_with = "scalar::optional_text")]
    pub measured_at: Option<String>,

    #[serde(rename = "GRADE", default, deserialize_with = "scalar::air_grade")]
    pub grade: AirGrade,

    #[serde(rename = "PM10", default, deserialize_with = "scalar::text")]
    pub pm10: String,

    #[serde(rename = "PM25", default, deserialize_with = "scalar::text")]
    pub pm25: String,

    #[serde(rename = "OZONE", default, deserialize_with = "scalar::text")]
    pub ozone: String,

    #[serde(rename = "NITROGEN", default, deserialize_with = "scalar::text")]
    pub nitrogen_dioxide: String,

    #[serde(rename = "CARBON", default, deserialize_with = "scalar::text")]
    pub carbon_monoxide: String,

    #[serde(rename = "SULFUROUS", default, deserialize_with = "scalar::text")]
    pub sulfur_dioxide: String,
}

/// Which of the two forecast feeds a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastKind {
    /// Regular forecast (`FA_ON = "f"`); `CAISTEP` is authoritative.
    Forecast,
    /// Advisory/alert; `ALERTSTEP` is authoritative and `CNDT1` may carry
    /// instructions.
    Alert,
}

const FORECAST_FLAG: &str = "f";

/// PM-10 or PM-2.5 forecast record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(rename = "FA_ON", default, deserialize_with = "scalar::optional_text")]
    pub flag: Option<String>,

    #[serde(rename = "CAISTEP", default, deserialize_with = "scalar::optional_text")]
    pub forecast_level: Option<String>,

    #[serde(rename = "ALERTSTEP", default, deserialize_with = "scalar::optional_text")]
    pub alert_level: Option<String>,

    #[serde(rename = "CNDT1", default, deserialize_with = "scalar::optional_text")]
    pub advisory: Option<String>,

    /// `YYYYMMDDhhmmss`
    #[serde(rename = "APPLC_DT", default, deserialize_with = "scalar::optional_text")]
    pub applies_at: Option<String>,
}

impl Forecast {
    pub fn kind(&self) -> ForecastKind {
        match self.flag.as_deref() {
            Some(FORECAST_FLAG) => ForecastKind::Forecast,
            _ => ForecastKind::Alert,
        }
    }

    /// Level from the field that is authoritative for this record's kind.
    /// `None` when the field is missing or is not a grade label.
    pub fn level(&self) -> Option<Grade> {
        let raw = match self.kind() {
            ForecastKind::Forecast => self.forecast_level.as_deref(),
            ForecastKind::Alert => self.alert_level.as_deref(),
        };
        raw.and_then(|label| label.parse().ok())
    }

    /// Advisory text; only alerts carry one.
    pub fn instruction(&self) -> Option<&str> {
        match self.kind() {
            ForecastKind::Forecast => None,
            ForecastKind::Alert => self
                .advisory
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty()),
        }
    }

    pub fn applies_at(&self) -> Option<Result<NaiveDateTime>> {
        self.applies_at.as_deref().map(parse_timestamp)
    }
}

/// Decode a record from either a bare object or the feed's envelope
/// `{"<Service>": {"row": [ ... ]}}`.
///
/// Returns `Ok(None)` when the envelope holds no rows.
pub fn decode_record<T: DeserializeOwned>(value: Value) -> Result<Option<T>> {
    match first_row(value) {
        Some(row) => Ok(Some(serde_json::from_value(row)?)),
        None => Ok(None),
    }
}

fn first_row(value: Value) -> Option<Value> {
    let Value::Object(map) = value else {
        return None;
    };

    let envelope = map.values().find_map(|inner| match inner {
        Value::Object(service) => service.get("row").cloned(),
        _ => None,
    });

    match envelope {
        Some(Value::Array(rows)) => rows.into_iter().next(),
        Some(_) => None,
        None => Some(Value::Object(map)),
    }
}

mod scalar {
    use crate::grade::AirGrade;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    impl Scalar {
        fn into_text(self) -> String {
            match self {
                Scalar::Text(text) => text,
                Scalar::Integer(n) => n.to_string(),
                Scalar::Float(n) => n.to_string(),
            }
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value.map(Scalar::into_text).unwrap_or_default())
    }

    pub fn air_grade<'de, D>(deserializer: D) -> Result<AirGrade, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value.map(|v| AirGrade::from(v.into_text())).unwrap_or_default())
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value.map(Scalar::into_text).filter(|text| !text.is_empty()))
    }
}
