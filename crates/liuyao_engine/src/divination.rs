//! A full reading: hexagram chart, calendar and six spirits for one cast.

use chrono::{DateTime, FixedOffset};
use liuyao_base::{LINE_COUNT, LineCode, SixSpirit, six_spirits};
use liuyao_time::{CalendarReading, PillarSource, calendar_pillars};
use serde::Serialize;
use tracing::info;

use crate::compute::{HexagramResult, compute_hexagram};
use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divination {
    pub hexagram: HexagramResult,
    pub calendar: CalendarReading,
    /// Lines 1..6, from the day stem.
    pub six_spirits: [SixSpirit; LINE_COUNT],
}

/// Compose the hexagram chart with the calendar reading for `at`.
///
/// The two halves are independent; the day stem from the calendar picks the
/// six spirits.
pub fn divine<S>(
    lines: &[LineCode],
    at: &DateTime<FixedOffset>,
    source: &S,
) -> Result<Divination, EngineError>
where
    S: PillarSource + ?Sized,
{
    let hexagram = compute_hexagram(lines)?;
    let calendar = calendar_pillars(at, source)?;
    let spirits = six_spirits(calendar.day_stem);
    info!(
        primary = hexagram.primary.name,
        transformed = hexagram.transformed.name,
        day = %calendar.four_pillars.day,
        "divination composed"
    );
    Ok(Divination {
        hexagram,
        calendar,
        six_spirits: spirits,
    })
}
