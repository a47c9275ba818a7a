use super::INDENT;
use crate::chunk::Chunk;
use crate::classify::{Pollutant, colorize_reading};
use crate::face::face;
use meonji_types::{AirGrade, Measurement};

pub const UNKNOWN_PLACEHOLDER: &str = "     ?\n";
pub const MAINTENANCE_PLACEHOLDER: &str = "     점검 중\n";

const BORDER: &str = "───────────";

fn table_left() -> Chunk {
    Chunk::left(["┌", "│", "├", "│", "└"])
}

fn table_middle() -> Chunk {
    Chunk::left(["┬", "│", "┼", "│", "┴"])
}

fn table_right() -> Chunk {
    Chunk::left(["┐", "│", "┤", "│", "┘"])
}

fn table_column(heading: &str, data: &str) -> Chunk {
    Chunk::left([
        BORDER.to_string(),
        heading.to_string(),
        BORDER.to_string(),
        format!(" {}", data),
        BORDER.to_string(),
    ])
}

fn reading(measurement: &Measurement, pollutant: Pollutant) -> &str {
    match pollutant {
        Pollutant::Pm10 => &measurement.pm10,
        Pollutant::Pm25 => &measurement.pm25,
        Pollutant::Ozone => &measurement.ozone,
        Pollutant::NitrogenDioxide => &measurement.nitrogen_dioxide,
        Pollutant::CarbonMonoxide => &measurement.carbon_monoxide,
        Pollutant::SulfurDioxide => &measurement.sulfur_dioxide,
    }
}

fn pollutant_table(measurement: &Measurement) -> Chunk {
    let mut parts = vec![Chunk::line(INDENT), table_left()];

    for (i, pollutant) in Pollutant::ALL.into_iter().enumerate() {
        if i > 0 {
            parts.push(table_middle());
        }
        let value = colorize_reading(reading(measurement, pollutant), pollutant);
        parts.push(table_column(
            pollutant.heading(),
            &format!("{} {}", value, pollutant.unit()),
        ));
    }
    parts.push(table_right());

    Chunk::merge_all(parts)
}

/// Face, grade label and the six-pollutant table for one measurement.
///
/// Missing records and unrecognized grades render as `?`; stations under
/// maintenance render a fixed notice regardless of their readings.
pub fn render_current(measurement: Option<&Measurement>) -> String {
    let Some(measurement) = measurement else {
        return UNKNOWN_PLACEHOLDER.to_string();
    };

    let grade = match &measurement.grade {
        AirGrade::Rated(grade) => *grade,
        AirGrade::UnderMaintenance => return MAINTENANCE_PLACEHOLDER.to_string(),
        AirGrade::Unrated(raw) => {
            log::warn!("unrecognized grade {:?}; rendering as unknown", raw);
            return UNKNOWN_PLACEHOLDER.to_string();
        }
    };

    let icon = Chunk::line(INDENT).merge(&face(grade));
    format!("{}\n{}", icon, pollutant_table(measurement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{strip_ansi, visible_width};
    use meonji_types::Grade;

    fn sample() -> Measurement {
        Measurement {
            station_name: Some("종로구".to_string()),
            measured_at: Some("201703051400".to_string()),
            grade: AirGrade::Rated(Grade::Moderate),
            pm10: "45".to_string(),
            pm25: "23".to_string(),
            ozone: "0.031".to_string(),
            nitrogen_dioxide: "0.035".to_string(),
            carbon_monoxide: "0.5".to_string(),
            sulfur_dioxide: "0.005".to_string(),
        }
    }

    #[test]
    fn test_absent_measurement() {
        assert_eq!(render_current(None), "     ?\n");
    }

    #[test]
    fn test_maintenance_ignores_readings() {
        let measurement = Measurement {
            grade: AirGrade::UnderMaintenance,
            ..sample()
        };
        assert_eq!(render_current(Some(&measurement)), "     점검 중\n");
    }

    #[test]
    fn test_unrated_grade_is_unknown() {
        let measurement = Measurement {
            grade: AirGrade::Unrated("".to_string()),
            ..sample()
        };
        assert_eq!(render_current(Some(&measurement)), UNKNOWN_PLACEHOLDER);
    }

    #[test]
    fn test_table_rows_share_width() {
        let table = pollutant_table(&sample());
        assert_eq!(table.len(), 5);
        let width = table.width();
        assert!(table.lines().iter().all(|l| visible_width(l) == width));
    }

    #[test]
    fn test_current_view_layout() {
        let view = render_current(Some(&sample()));
        let plain = strip_ansi(&view);
        let lines: Vec<&str> = plain.lines().collect();
        insta::assert_debug_snapshot!(lines, @r#"
        [
            "     o o    보통",
            "     ---      ",
            "",
            "     ┌───────────┬───────────┬───────────┬───────────┬───────────┬───────────┐",
            "     │   PM-10   │  PM-2.5   │    O3     │   NO2     │    CO     │   SO2     │",
            "     ├───────────┼───────────┼───────────┼───────────┼───────────┼───────────┤",
            "     │ 45 µg/m³  │ 23 µg/m³  │ 0.031 ppm │ 0.035 ppm │ 0.5 ppm   │ 0.005 ppm │",
            "     └───────────┴───────────┴───────────┴───────────┴───────────┴───────────┘",
        ]
        "#);
    }

    #[test]
    fn test_readings_are_colored_by_band() {
        let view = render_current(Some(&sample()));
        assert!(view.contains(&format!(" {} µg/m³", crate::palette::green("45"))));
        assert!(view.contains(&format!(" {} µg/m³", crate::palette::green("23"))));
        assert!(view.contains(&format!(" {} ppm", crate::palette::blue("0.005"))));
    }
}
