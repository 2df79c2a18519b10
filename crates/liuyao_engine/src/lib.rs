//! Six-line hexagram engine.
//!
//! Composes the static tables of `liuyao_base` with the calendar adapter of
//! `liuyao_time`:
//! - `compute_hexagram`: six line codes → primary/transformed hexagrams and
//!   six computed lines (najia, relation, self/response, hidden spirit)
//! - `divine`: the hexagram chart plus calendar reading and six spirits
//! - `render_chart`: a plain-text chart, top line first
//!
//! # Quick start
//!
//! ```rust
//! use liuyao_engine::*;
//!
//! let lines = line_codes_from_str("122121").unwrap();
//! let result = compute_hexagram(&lines).unwrap();
//! assert_eq!(result.primary.name, "水風井");
//! ```

pub mod chart;
pub mod compute;
pub mod divination;
pub mod error;

pub use chart::{line_glyph, render_chart, render_hexagram};
pub use compute::{ComputedLine, HexagramResult, TransformedLine, compute_hexagram};
pub use divination::{Divination, divine};
pub use error::EngineError;

// Re-export the input and vocabulary types so callers need only this crate.
pub use liuyao_base::{
    DayMarkers, GuaError, HexagramEntry, HiddenSpirit, KinshipRelation, LineCode, SixSpirit,
    Stem, Trigram, line_codes_from_numbers, line_codes_from_str,
};
pub use liuyao_time::{
    CalendarConfig, CalendarError, CalendarReading, FixedPillars, FourPillars, PillarSource,
    SolarTermPillars, parse_timestamp,
};
