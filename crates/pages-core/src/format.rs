//! Timestamp rendering for list rows.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl FromStr for TimeFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12" | "12-hour" | "12h" => Ok(TimeFormat::TwelveHour),
            "24" | "24-hour" | "24h" => Ok(TimeFormat::TwentyFourHour),
            _ => Err(ConfigError::InvalidTimeFormat(s.to_string())),
        }
    }
}

/// Which clock timestamps are shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The viewer's system zone, looked up per timestamp so DST is honoured.
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    fn offset_at(self, at: &DateTime<Utc>) -> FixedOffset {
        match self {
            Zone::Local => at.with_timezone(&Local).offset().fix(),
            Zone::Fixed(offset) => offset,
        }
    }
}

/// Renders timestamps in the viewer's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormatter {
    pub time_format: TimeFormat,
    pub zone: Zone,
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::utc(TimeFormat::default())
    }
}

impl DateTimeFormatter {
    pub fn new(time_format: TimeFormat, offset: FixedOffset) -> Self {
        Self {
            time_format,
            zone: Zone::Fixed(offset),
        }
    }

    pub fn local(time_format: TimeFormat) -> Self {
        Self {
            time_format,
            zone: Zone::Local,
        }
    }

    pub fn utc(time_format: TimeFormat) -> Self {
        Self::new(time_format, Utc.fix())
    }

    /// `14:05` or `02:05 PM`.
    pub fn time(&self, at: &DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.zone.offset_at(at));
        match self.time_format {
            TimeFormat::TwelveHour => local.format("%I:%M %p").to_string(),
            TimeFormat::TwentyFourHour => local.format("%H:%M").to_string(),
        }
    }

    /// `Mar 01, 2024`.
    pub fn date(&self, at: &DateTime<Utc>) -> String {
        at.with_timezone(&self.zone.offset_at(at)).format("%b %d, %Y").to_string()
    }
}
