//! The five elements (wu xing) and their generating and overcoming cycles.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Overcoming cycle: Wood → Earth → Water → Fire → Metal → Wood.

use serde::Serialize;

use crate::error::GuaError;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All 5 elements in traditional listing order (metal, wood, water, fire, earth).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Chinese glyph of the element.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// 0-based index into ALL_ELEMENTS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (controls).
    pub const fn overcomes(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Parse a single element glyph ("金", "木", ...) or English name.
    pub fn from_glyph(s: &str) -> Result<Self, GuaError> {
        let s = s.trim();
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.glyph() == s || e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuaError::invalid(format!("unknown element: {s:?}")))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
