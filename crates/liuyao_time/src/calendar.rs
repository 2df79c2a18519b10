//! Calendar adapter: timestamp → four pillars, day markers and date text.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};
use liuyao_base::{DayMarkers, Stem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;
use crate::pillars::{FourPillars, PillarSource};

/// Default civil offset: the sexagenary day and hour are conventionally
/// counted in China Standard Time.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Configuration for interpreting timestamps without an explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Hours east of UTC, -14..=14.
    pub utc_offset_hours: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl CalendarConfig {
    pub fn new(utc_offset_hours: i32) -> Self {
        Self { utc_offset_hours }
    }

    pub fn offset(&self) -> Result<FixedOffset, CalendarError> {
        if !(-14..=14).contains(&self.utc_offset_hours) {
            return Err(CalendarError::InvalidOffset(self.utc_offset_hours));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or(CalendarError::InvalidOffset(self.utc_offset_hours))
    }

    /// The current instant in the configured offset.
    pub fn now(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(Local::now().with_timezone(&self.offset()?))
    }
}

/// Naive formats accepted after RFC 3339, interpreted in the configured offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp.
///
/// Accepts RFC 3339 (offset kept as given), a naive `YYYY-MM-DD HH:MM[:SS]`
/// (with a space or `T`), or a bare `YYYY-MM-DD` taken as local midnight.
/// Naive forms use `config`'s offset.
pub fn parse_timestamp(
    text: &str,
    config: &CalendarConfig,
) -> Result<DateTime<FixedOffset>, CalendarError> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    let offset = config.offset()?;
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| CalendarError::InvalidTimestamp(text.to_string()))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| CalendarError::InvalidTimestamp(text.to_string()))
}

/// Civil date text, e.g. "2025年11月29日 14時07分".
pub fn format_date_text(at: &DateTime<FixedOffset>) -> String {
    format!(
        "{}年{}月{}日 {}時{:02}分",
        at.year(),
        at.month(),
        at.day(),
        at.hour(),
        at.minute()
    )
}

/// Everything the calendar adapter derives from one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarReading {
    pub four_pillars: FourPillars,
    pub day_markers: DayMarkers,
    pub date_text: String,
    /// Day stem, which drives the six spirits.
    pub day_stem: Stem,
}

/// Four pillars and day markers for a timestamp, from an injected source.
pub fn calendar_pillars<S>(
    at: &DateTime<FixedOffset>,
    source: &S,
) -> Result<CalendarReading, CalendarError>
where
    S: PillarSource + ?Sized,
{
    let four_pillars = source.four_pillars(at)?;
    let day_markers = DayMarkers::for_day(four_pillars.day);
    debug!(%four_pillars, %day_markers, "calendar reading");
    Ok(CalendarReading {
        four_pillars,
        day_markers,
        date_text: format_date_text(at),
        day_stem: four_pillars.day.stem,
    })
}
