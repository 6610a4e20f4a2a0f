use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, ToolError};

pub const KM_PER_MILE: f64 = 1.60934;
pub const MILES_PER_KM: f64 = 0.621371;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Miles,
}

impl FromStr for DistanceUnit {
    type Err = ToolError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Km),
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            other => Err(ToolError::malformed(format!("unknown distance unit '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceResult {
    pub total_seconds: u64,
    pub distance_km: f64,
    pub distance_miles: f64,
    pub pace_seconds_per_km: f64,
    pub pace_seconds_per_mile: f64,
    pub speed_kmh: f64,
    pub speed_mph: f64,
}

/// Display strings for a [`PaceResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaceReport {
    pub pace_per_km: String,
    pub pace_per_mile: String,
    pub speed_kmh: String,
    pub speed_mph: String,
    pub total_time: String,
    pub distance_km: String,
    pub distance_miles: String,
}

/// `m:ss`, flooring both fields.
pub fn format_pace(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

pub fn compute_pace(
    distance: f64,
    unit: DistanceUnit,
    hours: u64,
    minutes: u64,
    seconds: u64,
) -> Result<PaceResult> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(ToolError::out_of_range(format!(
            "distance must be positive, got {}",
            distance
        )));
    }

    let total_seconds = hours
        .checked_mul(3600)
        .zip(minutes.checked_mul(60))
        .and_then(|(h, m)| h.checked_add(m))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| {
            ToolError::out_of_range(format!(
                "duration {}h {}m {}s is too long",
                hours, minutes, seconds
            ))
        })?;
    if total_seconds == 0 {
        return Err(ToolError::out_of_range("duration must be non-zero"));
    }

    let (distance_km, distance_miles) = match unit {
        DistanceUnit::Km => (distance, distance * MILES_PER_KM),
        DistanceUnit::Miles => (distance * KM_PER_MILE, distance),
    };

    let secs = total_seconds as f64;
    let total_hours = secs / 3600.0;

    Ok(PaceResult {
        total_seconds,
        distance_km,
        distance_miles,
        pace_seconds_per_km: secs / distance_km,
        pace_seconds_per_mile: secs / distance_miles,
        speed_kmh: distance_km / total_hours,
        speed_mph: distance_miles / total_hours,
    })
}

impl PaceResult {
    pub fn report(&self) -> PaceReport {
        let h = self.total_seconds / 3600;
        let m = (self.total_seconds % 3600) / 60;
        let s = self.total_seconds % 60;

        PaceReport {
            pace_per_km: format_pace(self.pace_seconds_per_km),
            pace_per_mile: format_pace(self.pace_seconds_per_mile),
            speed_kmh: format!("{:.2}", self.speed_kmh),
            speed_mph: format!("{:.2}", self.speed_mph),
            total_time: format!("{}:{:02}:{:02}", h, m, s),
            distance_km: format!("{:.2}", self.distance_km),
            distance_miles: format!("{:.2}", self.distance_miles),
        }
    }
}
