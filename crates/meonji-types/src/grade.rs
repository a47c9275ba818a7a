use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Air quality grade, ordered from best to worst.
///
/// Upstream payloads carry the grade as its Korean label; `FromStr` and
/// `Display` convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// 좋음
    Good,
    /// 보통
    Moderate,
    /// 나쁨
    Unhealthy,
    /// 매우나쁨
    VeryUnhealthy,
}

impl Grade {
    pub const ALL: [Grade; 4] = [
        Grade::Good,
        Grade::Moderate,
        Grade::Unhealthy,
        Grade::VeryUnhealthy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::Good => "좋음",
            Grade::Moderate => "보통",
            Grade::Unhealthy => "나쁨",
            Grade::VeryUnhealthy => "매우나쁨",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "좋음" => Ok(Grade::Good),
            "보통" => Ok(Grade::Moderate),
            "나쁨" => Ok(Grade::Unhealthy),
            "매우나쁨" => Ok(Grade::VeryUnhealthy),
            other => Err(format!("unknown grade: {}", other)),
        }
    }
}

/// Label the measurement service uses while a station is offline.
pub const MAINTENANCE_LABEL: &str = "점검중";

/// Grade field of a measurement record.
///
/// The maintenance sentinel is its own variant so it is checked before any
/// grade-keyed rendering. Labels that are neither a grade nor the sentinel
/// are kept verbatim in `Unrated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AirGrade {
    Rated(Grade),
    UnderMaintenance,
    Unrated(String),
}

impl Default for AirGrade {
    fn default() -> Self {
        AirGrade::Unrated(String::new())
    }
}

impl From<String> for AirGrade {
    fn from(raw: String) -> Self {
        if raw.trim() == MAINTENANCE_LABEL {
            return AirGrade::UnderMaintenance;
        }
        match raw.parse::<Grade>() {
            Ok(grade) => AirGrade::Rated(grade),
            Err(_) => AirGrade::Unrated(raw),
        }
    }
}

impl From<&str> for AirGrade {
    fn from(raw: &str) -> Self {
        AirGrade::from(raw.to_string())
    }
}

impl From<AirGrade> for String {
    fn from(grade: AirGrade) -> Self {
        match grade {
            AirGrade::Rated(grade) => grade.label().to_string(),
            AirGrade::UnderMaintenance => MAINTENANCE_LABEL.to_string(),
            AirGrade::Unrated(raw) => raw,
        }
    }
}
