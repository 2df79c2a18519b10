//! Six spirits (六神), assigned to lines 1..6 from the day stem.
//!
//! 甲乙起青龍，丙丁起朱雀，戊起勾陳，己起螣蛇，庚辛起白虎，壬癸起玄武.
//! Line 1 takes the starting spirit, the rest follow the base order cyclically.

use serde::Serialize;
use tracing::warn;

use crate::ganzhi::Stem;
use crate::line::LINE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SixSpirit {
    AzureDragon,
    VermilionBird,
    HookedChen,
    FlyingSerpent,
    WhiteTiger,
    BlackTortoise,
}

/// Base order, line 1 upward, for 甲/乙 days.
pub const ALL_SIX_SPIRITS: [SixSpirit; 6] = [
    SixSpirit::AzureDragon,
    SixSpirit::VermilionBird,
    SixSpirit::HookedChen,
    SixSpirit::FlyingSerpent,
    SixSpirit::WhiteTiger,
    SixSpirit::BlackTortoise,
];

impl SixSpirit {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龍",
            Self::VermilionBird => "朱雀",
            Self::HookedChen => "勾陳",
            Self::FlyingSerpent => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    /// 0-based index into ALL_SIX_SPIRITS.
    pub const fn index(self) -> u8 {
        match self {
            Self::AzureDragon => 0,
            Self::VermilionBird => 1,
            Self::HookedChen => 2,
            Self::FlyingSerpent => 3,
            Self::WhiteTiger => 4,
            Self::BlackTortoise => 5,
        }
    }
}

impl std::fmt::Display for SixSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Rotation offset for a day stem (0..=5).
pub const fn spirit_offset(stem: Stem) -> u8 {
    match stem {
        Stem::Jia | Stem::Yi => 0,
        Stem::Bing | Stem::Ding => 1,
        Stem::Wu => 2,
        Stem::Ji => 3,
        Stem::Geng | Stem::Xin => 4,
        Stem::Ren | Stem::Gui => 5,
    }
}

/// Base order rotated left by `offset`.
pub const fn rotated(offset: u8) -> [SixSpirit; LINE_COUNT] {
    let mut out = ALL_SIX_SPIRITS;
    let mut i = 0;
    while i < LINE_COUNT {
        out[i] = ALL_SIX_SPIRITS[(offset as usize + i) % 6];
        i += 1;
    }
    out
}

/// Six spirits for lines 1..6 on a day with the given stem.
pub const fn six_spirits(day_stem: Stem) -> [SixSpirit; LINE_COUNT] {
    rotated(spirit_offset(day_stem))
}

/// Six spirits from a stem glyph. An unrecognized glyph yields the unrotated
/// base order.
pub fn six_spirits_for_glyph(day_stem: &str) -> [SixSpirit; LINE_COUNT] {
    match Stem::from_glyph(day_stem.trim()) {
        Some(stem) => six_spirits(stem),
        None => {
            warn!(day_stem, "unknown day stem; six spirits fall back to base order");
            ALL_SIX_SPIRITS
        }
    }
}
