//! Line codes and the line-code parser.
//!
//! Each cast line carries a polarity and a volatility. Old (moving) lines flip
//! polarity in the transformed hexagram; young (static) lines keep it.
//!
//! Numeric encoding: 0 = old yang, 1 = young yin, 2 = young yang, 3 = old yin.

use serde::Serialize;
use tracing::trace;

use crate::error::GuaError;
use crate::pattern::{HexagramPattern, Polarity};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// One cast line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineCode {
    /// Yang, moving (becomes yin).
    OldYang,
    /// Yin, static.
    YoungYin,
    /// Yang, static.
    YoungYang,
    /// Yin, moving (becomes yang).
    OldYin,
}

/// All 4 line codes in numeric order (0..=3).
pub const ALL_LINE_CODES: [LineCode; 4] = [
    LineCode::OldYang,
    LineCode::YoungYin,
    LineCode::YoungYang,
    LineCode::OldYin,
];

impl LineCode {
    /// Decode the numeric encoding 0..=3.
    pub fn from_code(code: u8) -> Result<Self, GuaError> {
        ALL_LINE_CODES
            .get(code as usize)
            .copied()
            .ok_or_else(|| GuaError::invalid(format!("line code must be 0-3, got {code}")))
    }

    /// Numeric encoding 0..=3.
    pub const fn code(self) -> u8 {
        match self {
            Self::OldYang => 0,
            Self::YoungYin => 1,
            Self::YoungYang => 2,
            Self::OldYin => 3,
        }
    }

    /// Polarity in the primary hexagram.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::OldYang | Self::YoungYang => Polarity::Yang,
            Self::YoungYin | Self::OldYin => Polarity::Yin,
        }
    }

    pub const fn is_moving(self) -> bool {
        matches!(self, Self::OldYang | Self::OldYin)
    }

    /// Polarity in the transformed hexagram.
    pub const fn transformed_polarity(self) -> Polarity {
        if self.is_moving() {
            self.polarity().flip()
        } else {
            self.polarity()
        }
    }

    pub const fn status(self) -> LineStatus {
        match self {
            Self::OldYang => LineStatus::MovingToYin,
            Self::OldYin => LineStatus::MovingToYang,
            Self::YoungYin | Self::YoungYang => LineStatus::Static,
        }
    }
}

/// Display status of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineStatus {
    Static,
    /// Old yang, drawn with a circle (○).
    MovingToYin,
    /// Old yin, drawn with a cross (×).
    MovingToYang,
}

impl LineStatus {
    /// Chart mark: "○" for old yang, "×" for old yin, empty for static lines.
    pub const fn mark(self) -> &'static str {
        match self {
            Self::Static => "",
            Self::MovingToYin => "○",
            Self::MovingToYang => "×",
        }
    }
}

/// Parser output: both hexagram patterns and the moving positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePatterns {
    /// Primary (cast) hexagram.
    pub primary: HexagramPattern,
    /// Transformed hexagram, moving lines flipped.
    pub transformed: HexagramPattern,
    /// 1-based moving positions, ascending.
    pub moving: Vec<u8>,
}

impl LinePatterns {
    pub fn has_moving_lines(&self) -> bool {
        !self.moving.is_empty()
    }

    pub fn is_moving(&self, position: u8) -> bool {
        self.moving.contains(&position)
    }
}

/// Decode exactly six line codes (bottom first) into primary and transformed patterns.
pub fn parse_line_codes(lines: &[LineCode]) -> Result<LinePatterns, GuaError> {
    let lines = six_lines(lines)?;
    let primary = HexagramPattern::from_polarities(lines.map(LineCode::polarity));
    let transformed = HexagramPattern::from_polarities(lines.map(LineCode::transformed_polarity));
    let moving = (1..=LINE_COUNT as u8)
        .zip(lines)
        .filter(|(_, l)| l.is_moving())
        .map(|(p, _)| p)
        .collect();
    trace!(%primary, %transformed, "parsed line codes");
    Ok(LinePatterns {
        primary,
        transformed,
        moving,
    })
}

/// Decode numeric codes 0..=3 (bottom first).
pub fn line_codes_from_numbers(codes: &[u8]) -> Result<[LineCode; LINE_COUNT], GuaError> {
    if codes.len() != LINE_COUNT {
        return Err(GuaError::invalid(format!(
            "expected {LINE_COUNT} line codes, got {}",
            codes.len()
        )));
    }
    let mut out = [LineCode::YoungYang; LINE_COUNT];
    for (slot, &code) in out.iter_mut().zip(codes) {
        *slot = LineCode::from_code(code)?;
    }
    Ok(out)
}

/// Decode a six-digit string such as "122121" (bottom first).
pub fn line_codes_from_str(s: &str) -> Result<[LineCode; LINE_COUNT], GuaError> {
    let digits = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '_'))
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| GuaError::invalid(format!("line code must be a digit, got {c:?}")))
        })
        .collect::<Result<Vec<u8>, GuaError>>()?;
    line_codes_from_numbers(&digits)
}

pub(crate) fn six_lines(lines: &[LineCode]) -> Result<[LineCode; LINE_COUNT], GuaError> {
    <[LineCode; LINE_COUNT]>::try_from(lines).map_err(|_| {
        GuaError::invalid(format!(
            "expected {LINE_COUNT} lines, got {}",
            lines.len()
        ))
    })
}
