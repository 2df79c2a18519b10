//! Four pillars (四柱) and the injected pillar-source capability.
//!
//! The calendar adapter never hard-codes a lunisolar conversion: callers pass
//! any `PillarSource`. `SolarTermPillars` is the built-in source; tests can
//! use `FixedPillars` or a plain closure.
//!
//! Built-in rules (local civil time):
//! - Day: (JDN + 49) mod 60, 0 = 甲子.
//! - Hour: branch = ((hour + 1) / 2) mod 12; stem by 五鼠遁 from the day
//!   stem. 23:00–24:00 takes the next day's stem; the day pillar itself turns
//!   at midnight.
//! - Month: branch from the Sun's apparent longitude, 寅 month from 立春
//!   (315°), 30° per month; stem by 五虎遁 from the year stem.
//! - Year: (solar year − 4) mod 60, the solar year turning at 立春.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Timelike};
use liuyao_base::{Branch, Stem, StemBranch};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::julian::{jd_from_utc, julian_day_number};
use crate::solar::{solar_term_index, sun_apparent_longitude_deg};

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl FourPillars {
    /// Parse four two-glyph pillars, e.g. `["乙巳", "丁亥", "壬寅", "丁未"]`.
    pub fn from_glyphs(pillars: [&str; 4]) -> Result<Self, CalendarError> {
        let [year, month, day, hour] = pillars;
        Ok(Self {
            year: year.parse()?,
            month: month.parse()?,
            day: day.parse()?,
            hour: hour.parse()?,
        })
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年 {}月 {}日 {}時",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// Timestamp → four pillars.
pub trait PillarSource {
    fn four_pillars(&self, at: &DateTime<FixedOffset>) -> Result<FourPillars, CalendarError>;
}

impl<F> PillarSource for F
where
    F: Fn(&DateTime<FixedOffset>) -> Result<FourPillars, CalendarError>,
{
    fn four_pillars(&self, at: &DateTime<FixedOffset>) -> Result<FourPillars, CalendarError> {
        self(at)
    }
}

/// Returns the same pillars for every timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPillars(pub FourPillars);

impl PillarSource for FixedPillars {
    fn four_pillars(&self, _at: &DateTime<FixedOffset>) -> Result<FourPillars, CalendarError> {
        Ok(self.0)
    }
}

/// Built-in source using solar-term boundaries for year and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarTermPillars;

impl PillarSource for SolarTermPillars {
    fn four_pillars(&self, at: &DateTime<FixedOffset>) -> Result<FourPillars, CalendarError> {
        let local = at.naive_local();
        let sun = sun_apparent_longitude_deg(jd_from_utc(at.naive_utc()));
        let month_branch = month_branch(sun);

        let mut solar_year = local.year();
        if local.month() <= 2 && matches!(month_branch, Branch::Zi | Branch::Chou) {
            solar_year -= 1;
        }
        let year = year_pillar(solar_year);
        let month = month_pillar(year.stem, month_branch);
        let day = day_pillar(local.date());
        let hour = hour_pillar(local.date(), local.hour())?;
        debug!(sun_longitude = sun, %year, %month, %day, %hour, "solar-term pillars");
        Ok(FourPillars {
            year,
            month,
            day,
            hour,
        })
    }
}

/// Month branch for a solar longitude: 寅 covers [315°, 345°).
pub fn month_branch(sun_longitude_deg: f64) -> Branch {
    Branch::from_index((solar_term_index(sun_longitude_deg) / 2 + 2) % 12)
}

/// Year pillar for a solar year (甲子 = 4 CE).
pub fn year_pillar(solar_year: i32) -> StemBranch {
    StemBranch::from_cycle_index((solar_year - 4).rem_euclid(60) as u8)
}

/// Month pillar from the year stem (五虎遁: 甲己之年丙作首).
pub fn month_pillar(year_stem: Stem, month_branch: Branch) -> StemBranch {
    let first = (year_stem.index() % 5) * 2 + 2;
    let offset = (month_branch.index() + 10) % 12;
    StemBranch {
        stem: Stem::from_index(first + offset),
        branch: month_branch,
    }
}

/// Day pillar of a civil date.
pub fn day_pillar(date: NaiveDate) -> StemBranch {
    StemBranch::from_cycle_index((julian_day_number(date) + 49).rem_euclid(60) as u8)
}

/// Hour pillar (五鼠遁: 甲己還加甲). Hour 23 belongs to the next day's 子 hour.
pub fn hour_pillar(date: NaiveDate, hour: u32) -> Result<StemBranch, CalendarError> {
    if hour > 23 {
        return Err(CalendarError::InvalidTimestamp(format!("hour {hour} out of range")));
    }
    let branch = Branch::from_index((((hour + 1) / 2) % 12) as u8);
    let stem_day = if hour == 23 {
        date.checked_add_days(Days::new(1)).ok_or_else(|| {
            CalendarError::InvalidTimestamp(format!("{date} is at the end of the calendar"))
        })?
    } else {
        date
    };
    let day_stem = day_pillar(stem_day).stem;
    trace!(hour, %day_stem, "hour pillar");
    Ok(StemBranch {
        stem: Stem::from_index((day_stem.index() % 5) * 2 + branch.index()),
        branch,
    })
}
