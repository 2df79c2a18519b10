//! Static najia tables and pure resolvers for six-line (六爻) hexagram charts.
//!
//! This crate provides:
//! - Stems, branches, the five elements and the 60-term sexagenary cycle
//! - Line codes and the line-code parser (primary/transformed patterns)
//! - The 8-entry trigram/najia table and the 64-entry hexagram table
//! - Kinship relations (六親) and hidden spirits (伏神)
//! - Six spirits (六神) and the four day-based markers (神煞)
//! - Deterministic casting helpers (coins, numbers, time)
//!
//! Every function here is pure over static tables. Lookups that are
//! exhaustive by construction return `GuaError::InternalInvariant` rather
//! than a default when they miss.

pub mod casting;
pub mod day_markers;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod hexagram;
pub mod hidden;
pub mod line;
pub mod pattern;
pub mod relation;
pub mod six_spirits;
pub mod trigram;

pub use casting::{
    CastingMoment, line_from_coins, line_from_heads, lines_from_coin_tosses, lines_from_numbers,
    lines_from_time,
};
pub use day_markers::{
    DayMarkers, noble_branches, romance_branch, travel_branch, void_branches,
};
pub use element::{ALL_ELEMENTS, Element};
pub use error::GuaError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem, StemBranch};
pub use hexagram::{
    ALL_PALACE_STAGES, HEXAGRAM_TABLE, HexagramEntry, PalaceStage, hexagram_entry,
    hexagram_najia, home_hexagram, home_pattern, palace_hexagrams, response_line,
};
pub use hidden::{HiddenSpirit, HomeLine, hidden_spirits, home_lines, missing_relations};
pub use line::{
    ALL_LINE_CODES, LINE_COUNT, LineCode, LinePatterns, LineStatus, line_codes_from_numbers,
    line_codes_from_str, parse_line_codes,
};
pub use pattern::{HexagramPattern, Polarity, TrigramPattern};
pub use relation::{ALL_RELATIONS, KinshipRelation, relation_of};
pub use six_spirits::{ALL_SIX_SPIRITS, SixSpirit, six_spirits, six_spirits_for_glyph};
pub use trigram::{
    ALL_TRIGRAMS, NajiaAssignment, Placement, TRIGRAM_TABLE, Trigram, TrigramEntry, najia_triple,
    trigram_entry,
};
