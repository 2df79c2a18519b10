//! Heavenly stems, earthly branches and the 60-term sexagenary cycle.
//!
//! The 10 stems and 12 branches advance together; a stem/branch pair is only
//! part of the cycle when both indices share parity, giving 60 valid pillars.
//! Index 0 of the cycle is 甲子 (Jia-Zi).

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::error::GuaError;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese glyph of the stem.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name of the stem.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem (pairs share an element: 甲乙 wood, 丙丁 fire, ...).
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Stem at a 0-based index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Stem {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Look up a stem by glyph or pinyin. Returns None when unrecognized.
    pub fn from_glyph(s: &str) -> Option<Stem> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.glyph() == s || st.pinyin().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Stem {
    type Err = GuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stem::from_glyph(s).ok_or_else(|| GuaError::invalid(format!("unknown stem: {s:?}")))
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese glyph of the branch.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name of the branch.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Element of the branch. The four "storehouse" branches are earth.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    /// Branch at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Branch {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Look up a branch by glyph or pinyin. Returns None when unrecognized.
    pub fn from_glyph(s: &str) -> Option<Branch> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.glyph() == s || b.pinyin().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Branch {
    type Err = GuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::from_glyph(s).ok_or_else(|| GuaError::invalid(format!("unknown branch: {s:?}")))
    }
}

/// A stem/branch pair from the 60-term cycle (one calendar pillar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Pair a stem and branch. Returns None for mixed-parity pairs (never in the cycle).
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at a 0-based position in the cycle (0 = 甲子), wrapping modulo 60.
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// 0-based position in the 60-term cycle.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

impl FromStr for StemBranch {
    type Err = GuaError;

    /// Parse a two-glyph pillar such as "甲子".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GuaError::invalid(format!("expected two glyphs, got {s:?}")));
        };
        let stem: Stem = sc.to_string().parse()?;
        let branch: Branch = bc.to_string().parse()?;
        StemBranch::new(stem, branch)
            .ok_or_else(|| GuaError::invalid(format!("{s:?} is not in the sexagenary cycle")))
    }
}

impl Serialize for StemBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
