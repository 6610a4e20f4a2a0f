use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{Result, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneEntry {
    pub name: &'static str,
    pub zone: &'static str,
}

pub const ZONES: &[ZoneEntry] = &[
    ZoneEntry { name: "New York", zone: "America/New_York" },
    ZoneEntry { name: "Los Angeles", zone: "America/Los_Angeles" },
    ZoneEntry { name: "London", zone: "Europe/London" },
    ZoneEntry { name: "Paris", zone: "Europe/Paris" },
    ZoneEntry { name: "Tokyo", zone: "Asia/Tokyo" },
    ZoneEntry { name: "Sydney", zone: "Australia/Sydney" },
    ZoneEntry { name: "Dubai", zone: "Asia/Dubai" },
    ZoneEntry { name: "Singapore", zone: "Asia/Singapore" },
    ZoneEntry { name: "Hong Kong", zone: "Asia/Hong_Kong" },
    ZoneEntry { name: "Mumbai", zone: "Asia/Kolkata" },
    ZoneEntry { name: "São Paulo", zone: "America/Sao_Paulo" },
    ZoneEntry { name: "Mexico City", zone: "America/Mexico_City" },
    ZoneEntry { name: "Toronto", zone: "America/Toronto" },
    ZoneEntry { name: "Berlin", zone: "Europe/Berlin" },
    ZoneEntry { name: "Moscow", zone: "Europe/Moscow" },
    ZoneEntry { name: "Cairo", zone: "Africa/Cairo" },
    ZoneEntry { name: "Seoul", zone: "Asia/Seoul" },
    ZoneEntry { name: "Bangkok", zone: "Asia/Bangkok" },
];

/// Accepts an IANA id ("Asia/Tokyo") or a city name from [`ZONES`]
/// ("tokyo").
pub fn parse_zone(input: &str) -> Result<Tz> {
    let input = input.trim();
    let id = ZONES
        .iter()
        .find(|z| z.name.eq_ignore_ascii_case(input))
        .map(|z| z.zone)
        .unwrap_or(input);
    id.parse::<Tz>()
        .map_err(|_| ToolError::malformed(format!("unknown time zone '{}'", input)))
}

/// City name for known zones, otherwise the IANA id.
pub fn display_name(tz: Tz) -> String {
    let id = tz.name();
    ZONES
        .iter()
        .find(|z| z.zone == id)
        .map(|z| z.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Ordered list of zones shown by the clock, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSelection {
    zones: Vec<Tz>,
}

impl ZoneSelection {
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let mut selection = Self::default();
        for id in ids {
            selection.add(id.as_ref())?;
        }
        Ok(selection)
    }

    /// Returns false when the zone was already selected.
    pub fn add(&mut self, zone: &str) -> Result<bool> {
        let tz = parse_zone(zone)?;
        if self.zones.contains(&tz) {
            return Ok(false);
        }
        self.zones.push(tz);
        Ok(true)
    }

    pub fn remove(&mut self, zone: &str) -> bool {
        let before = self.zones.len();
        if let Ok(tz) = parse_zone(zone) {
            self.zones.retain(|z| *z != tz);
        }
        self.zones.len() != before
    }

    pub fn zones(&self) -> &[Tz] {
        &self.zones
    }
}
