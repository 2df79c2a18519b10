//! Sexagenary calendar adapter for six-line divination.
//!
//! This crate provides:
//! - The `PillarSource` seam (timestamp → four pillars) and a built-in
//!   solar-term source
//! - Julian day helpers and a low-precision apparent solar longitude
//! - Timestamp parsing with a configurable civil UTC offset
//! - `calendar_pillars`: four pillars, the four day markers and date text

pub mod calendar;
pub mod error;
pub mod julian;
pub mod pillars;
pub mod solar;

pub use calendar::{
    CalendarConfig, CalendarReading, DEFAULT_UTC_OFFSET_HOURS, calendar_pillars,
    format_date_text, parse_timestamp,
};
pub use error::CalendarError;
pub use julian::{J2000_JD, jd_from_utc, julian_day_number};
pub use pillars::{
    FixedPillars, FourPillars, PillarSource, SolarTermPillars, day_pillar, hour_pillar,
    month_branch, month_pillar, year_pillar,
};
pub use solar::{solar_term_index, sun_apparent_longitude_deg};
