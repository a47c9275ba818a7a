pub mod district;
pub mod error;
pub mod grade;
pub mod record;
mod time;

pub use district::{DISTRICTS, District};
pub use error::{Error, Result};
pub use grade::{AirGrade, Grade, MAINTENANCE_LABEL};
pub use record::{Forecast, ForecastKind, Measurement, decode_record};
pub use time::parse_timestamp;
