use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::worldclock::zones::display_name;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneReading {
    pub name: String,
    pub zone: String,
    pub time: String,
    pub date: String,
    pub offset_hours: f64,
    pub offset: String,
}

/// `+9`, `-4`, `+5.5`, `+0`
pub fn format_offset(offset_hours: f64) -> String {
    let sign = if offset_hours >= 0.0 { "+" } else { "-" };
    let abs = offset_hours.abs();
    if abs.fract() == 0.0 {
        format!("{}{}", sign, abs as i64)
    } else {
        format!("{}{}", sign, abs)
    }
}

pub fn read_zone(tz: Tz, now: DateTime<Utc>) -> ZoneReading {
    let local = now.with_timezone(&tz);
    let offset_hours = f64::from(local.offset().fix().local_minus_utc()) / 3600.0;

    ZoneReading {
        name: display_name(tz),
        zone: tz.name().to_string(),
        time: local.format("%I:%M:%S %p").to_string(),
        date: local.format("%A, %B %-d, %Y").to_string(),
        offset_hours,
        offset: format_offset(offset_hours),
    }
}
