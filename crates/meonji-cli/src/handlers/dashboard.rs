use crate::args::RecordArgs;
use crate::context::ExecutionContext;
use crate::input::{load_record, today_in_seoul};
use anyhow::Result;
use meonji_engine::view::Dashboard;
use meonji_types::{District, Forecast, Measurement};

const SEOUL: &str = "서울시";

struct Records {
    current: Option<Measurement>,
    pm10: Option<Forecast>,
    pm25: Option<Forecast>,
}

fn load(records: &RecordArgs) -> Result<Records> {
    Ok(Records {
        current: load_record(records.current.as_deref())?,
        pm10: load_record(records.pm10.as_deref())?,
        pm25: load_record(records.pm25.as_deref())?,
    })
}

/// Seoul-wide dashboard. The average feed carries no timestamp, so the
/// header has none either.
pub fn handle_seoul(records: &RecordArgs) -> Result<String> {
    let loaded = load(records)?;
    let page = Dashboard {
        title: SEOUL,
        measured_at: None,
        current: loaded.current.as_ref(),
        pm10: loaded.pm10.as_ref(),
        pm25: loaded.pm25.as_ref(),
        today: records.today.unwrap_or_else(today_in_seoul),
    };
    Ok(page.to_string())
}

/// Dashboard for one district. Unknown identifiers fall back to the usage
/// page.
pub fn handle_district(ctx: &ExecutionContext, id: &str, records: &RecordArgs) -> Result<String> {
    let Some(district) = District::lookup(id) else {
        log::warn!("unknown district {:?}; showing usage", id);
        return super::help::handle(ctx);
    };
    log::info!("district {:?} resolved to {} ({})", id, district.name, district.code);

    let loaded = load(records)?;
    let current = loaded.current.as_ref();
    let page = Dashboard {
        title: current
            .and_then(|m| m.station_name.as_deref())
            .unwrap_or(district.name),
        measured_at: current.and_then(|m| m.measured_at.as_deref()),
        current,
        pm10: loaded.pm10.as_ref(),
        pm25: loaded.pm25.as_ref(),
        today: records.today.unwrap_or_else(today_in_seoul),
    };
    Ok(page.to_string())
}
