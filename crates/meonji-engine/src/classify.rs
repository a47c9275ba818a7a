use crate::palette::{blue, green, red, yellow};
use meonji_types::Grade;

/// Severity band a reading falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Moderate,
    High,
    VeryHigh,
    /// Outside every calibrated range; printed without color.
    Unclassified,
}

/// Calibrated breakpoints for one pollutant: three closed ranges and the
/// start of the open-ended top range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: (f64, f64),
    pub moderate: (f64, f64),
    pub high: (f64, f64),
    pub very_high: f64,
}

impl Thresholds {
    pub const fn new(
        low: (f64, f64),
        moderate: (f64, f64),
        high: (f64, f64),
        very_high: f64,
    ) -> Self {
        Self {
            low,
            moderate,
            high,
            very_high,
        }
    }
}

const PM10: Thresholds = Thresholds::new((0.0, 30.0), (31.0, 80.0), (81.0, 150.0), 151.0);
const PM25: Thresholds = Thresholds::new((0.0, 15.0), (16.0, 50.0), (51.0, 100.0), 101.0);
const OZONE: Thresholds = Thresholds::new((0.0, 0.03), (0.031, 0.09), (0.091, 0.15), 0.151);
const NITROGEN_DIOXIDE: Thresholds =
    Thresholds::new((0.0, 0.03), (0.031, 0.06), (0.061, 0.2), 0.201);
const CARBON_MONOXIDE: Thresholds = Thresholds::new((0.0, 2.0), (2.01, 9.0), (9.01, 15.0), 15.01);
const SULFUR_DIOXIDE: Thresholds =
    Thresholds::new((0.0, 0.02), (0.021, 0.05), (0.051, 0.15), 0.151);

/// Pollutants shown in the current-conditions table, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    Pm10,
    Pm25,
    Ozone,
    NitrogenDioxide,
    CarbonMonoxide,
    SulfurDioxide,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::Ozone,
        Pollutant::NitrogenDioxide,
        Pollutant::CarbonMonoxide,
        Pollutant::SulfurDioxide,
    ];

    pub fn thresholds(self) -> &'static Thresholds {
        match self {
            Pollutant::Pm10 => &PM10,
            Pollutant::Pm25 => &PM25,
            Pollutant::Ozone => &OZONE,
            Pollutant::NitrogenDioxide => &NITROGEN_DIOXIDE,
            Pollutant::CarbonMonoxide => &CARBON_MONOXIDE,
            Pollutant::SulfurDioxide => &SULFUR_DIOXIDE,
        }
    }

    /// Column heading, pre-indented to sit centered in an 11-wide cell.
    pub fn heading(self) -> &'static str {
        match self {
            Pollutant::Pm10 => "   PM-10",
            Pollutant::Pm25 => "  PM-2.5",
            Pollutant::Ozone => "    O3",
            Pollutant::NitrogenDioxide => "   NO2",
            Pollutant::CarbonMonoxide => "    CO",
            Pollutant::SulfurDioxide => "   SO2",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Pollutant::Pm10 | Pollutant::Pm25 => "µg/m³",
            _ => "ppm",
        }
    }
}

/// Band for `value`. Ranges are closed on both ends; values in the gaps
/// between them, below the lowest range, or NaN are unclassified.
pub fn classify(value: f64, thresholds: &Thresholds) -> Band {
    let within = |(lo, hi): (f64, f64)| lo <= value && value <= hi;

    if within(thresholds.low) {
        Band::Low
    } else if within(thresholds.moderate) {
        Band::Moderate
    } else if within(thresholds.high) {
        Band::High
    } else if thresholds.very_high <= value {
        Band::VeryHigh
    } else {
        Band::Unclassified
    }
}

pub fn colorize(text: &str, band: Band) -> String {
    match band {
        Band::Low => blue(text),
        Band::Moderate => green(text),
        Band::High => yellow(text),
        Band::VeryHigh => red(text),
        Band::Unclassified => text.to_string(),
    }
}

/// Color a reading as it came from the feed. Text that is not a number
/// passes through unchanged.
pub fn colorize_reading(text: &str, pollutant: Pollutant) -> String {
    let band = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| classify(value, pollutant.thresholds()))
        .unwrap_or(Band::Unclassified);
    colorize(text, band)
}

/// Grade label in its grade's color.
pub fn grade_color(grade: Grade) -> String {
    match grade {
        Grade::Good => blue(grade),
        Grade::Moderate => green(grade),
        Grade::Unhealthy => yellow(grade),
        Grade::VeryUnhealthy => red(grade),
    }
}
