//! Julian day numbers for civil dates and Julian dates for UTC instants.
//!
//! Proleptic Gregorian throughout. JDN 2451545 is 2000-01-01.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Offset between chrono's day count from 0001-01-01 (day 1) and the JDN.
const CE_TO_JDN: i64 = 1_721_425;

/// Julian day number of a civil date (the JD at noon of that date).
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_TO_JDN
}

/// Julian Date of a UTC instant.
pub fn jd_from_utc(utc: NaiveDateTime) -> f64 {
    let secs = f64::from(utc.num_seconds_from_midnight())
        + f64::from(utc.nanosecond()) * 1e-9;
    julian_day_number(utc.date()) as f64 - 0.5 + secs / SECONDS_PER_DAY
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
