//! The eight trigrams and the najia (納甲) stem/branch assignment.
//!
//! Each trigram carries two triples of (stem, branch, element): one used when
//! it is the lower (inner) half of a hexagram, one when it is the upper
//! (outer) half. Branches advance by two per line; yang trigrams run forward
//! through the branches and yin trigrams backward.
//!
//! Standard Jing Fang najia, as tabulated in 卜筮正宗 and 增刪卜易.

use serde::Serialize;

use crate::element::Element;
use crate::error::GuaError;
use crate::ganzhi::{Branch, Stem};
use crate::ganzhi::{Branch as B, Stem as S};
use crate::pattern::TrigramPattern;

/// The 8 trigrams (also the 8 palaces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All 8 trigrams in King Wen palace order (乾 兌 離 震 巽 坎 艮 坤).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

/// Which half of a hexagram a trigram occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Placement {
    /// Lines 1-3.
    Inner,
    /// Lines 4-6.
    Outer,
}

/// Stem, branch and element assigned to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NajiaAssignment {
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
}

impl NajiaAssignment {
    /// Element follows the branch.
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self {
            stem,
            branch,
            element: branch.element(),
        }
    }

    /// Stem and branch glyphs, e.g. "庚寅".
    pub fn stem_branch(&self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

/// Static najia entry for one trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramEntry {
    pub trigram: Trigram,
    pub pattern: TrigramPattern,
    /// Family element; the palace element when this trigram names a palace.
    pub element: Element,
    /// Lines 1-3 when this trigram is the lower half.
    pub inner: [NajiaAssignment; 3],
    /// Lines 4-6 when this trigram is the upper half.
    pub outer: [NajiaAssignment; 3],
}

impl TrigramEntry {
    pub const fn triple(&self, placement: Placement) -> &[NajiaAssignment; 3] {
        match placement {
            Placement::Inner => &self.inner,
            Placement::Outer => &self.outer,
        }
    }
}

const fn nj(stem: Stem, branch: Branch) -> NajiaAssignment {
    NajiaAssignment::new(stem, branch)
}

/// The najia table, in ALL_TRIGRAMS order.
pub const TRIGRAM_TABLE: &[TrigramEntry; 8] = &[
    TrigramEntry {
        trigram: Trigram::Qian,
        pattern: TrigramPattern::from_digits("111"),
        element: Element::Metal,
        inner: [nj(S::Jia, B::Zi), nj(S::Jia, B::Yin), nj(S::Jia, B::Chen)],
        outer: [nj(S::Ren, B::Wu), nj(S::Ren, B::Shen), nj(S::Ren, B::Xu)],
    },
    TrigramEntry {
        trigram: Trigram::Dui,
        pattern: TrigramPattern::from_digits("110"),
        element: Element::Metal,
        inner: [nj(S::Ding, B::Si), nj(S::Ding, B::Mao), nj(S::Ding, B::Chou)],
        outer: [nj(S::Ding, B::Hai), nj(S::Ding, B::You), nj(S::Ding, B::Wei)],
    },
    TrigramEntry {
        trigram: Trigram::Li,
        pattern: TrigramPattern::from_digits("101"),
        element: Element::Fire,
        inner: [nj(S::Ji, B::Mao), nj(S::Ji, B::Chou), nj(S::Ji, B::Hai)],
        outer: [nj(S::Ji, B::You), nj(S::Ji, B::Wei), nj(S::Ji, B::Si)],
    },
    TrigramEntry {
        trigram: Trigram::Zhen,
        pattern: TrigramPattern::from_digits("100"),
        element: Element::Wood,
        inner: [nj(S::Geng, B::Zi), nj(S::Geng, B::Yin), nj(S::Geng, B::Chen)],
        outer: [nj(S::Geng, B::Wu), nj(S::Geng, B::Shen), nj(S::Geng, B::Xu)],
    },
    TrigramEntry {
        trigram: Trigram::Xun,
        pattern: TrigramPattern::from_digits("011"),
        element: Element::Wood,
        inner: [nj(S::Xin, B::Chou), nj(S::Xin, B::Hai), nj(S::Xin, B::You)],
        outer: [nj(S::Xin, B::Wei), nj(S::Xin, B::Si), nj(S::Xin, B::Mao)],
    },
    TrigramEntry {
        trigram: Trigram::Kan,
        pattern: TrigramPattern::from_digits("010"),
        element: Element::Water,
        inner: [nj(S::Wu, B::Yin), nj(S::Wu, B::Chen), nj(S::Wu, B::Wu)],
        outer: [nj(S::Wu, B::Shen), nj(S::Wu, B::Xu), nj(S::Wu, B::Zi)],
    },
    TrigramEntry {
        trigram: Trigram::Gen,
        pattern: TrigramPattern::from_digits("001"),
        element: Element::Earth,
        inner: [nj(S::Bing, B::Chen), nj(S::Bing, B::Wu), nj(S::Bing, B::Shen)],
        outer: [nj(S::Bing, B::Xu), nj(S::Bing, B::Zi), nj(S::Bing, B::Yin)],
    },
    TrigramEntry {
        trigram: Trigram::Kun,
        pattern: TrigramPattern::from_digits("000"),
        element: Element::Earth,
        inner: [nj(S::Yi, B::Wei), nj(S::Yi, B::Si), nj(S::Yi, B::Mao)],
        outer: [nj(S::Gui, B::Chou), nj(S::Gui, B::Hai), nj(S::Gui, B::You)],
    },
];

/// Table slot per 3-bit pattern, built and checked at compile time.
const INDEX_BY_BITS: [u8; 8] = {
    let mut index = [u8::MAX; 8];
    let mut i = 0;
    while i < TRIGRAM_TABLE.len() {
        let bits = TRIGRAM_TABLE[i].pattern.bits() as usize;
        assert!(index[bits] == u8::MAX, "duplicate trigram pattern");
        index[bits] = i as u8;
        i += 1;
    }
    index
};

impl Trigram {
    /// Chinese glyph of the trigram.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Pinyin name of the trigram.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    /// 0-based index into ALL_TRIGRAMS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Qian => 0,
            Self::Dui => 1,
            Self::Li => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Kan => 5,
            Self::Gen => 6,
            Self::Kun => 7,
        }
    }

    /// Static table entry for this trigram.
    pub const fn entry(self) -> &'static TrigramEntry {
        &TRIGRAM_TABLE[self.index() as usize]
    }

    pub const fn pattern(self) -> TrigramPattern {
        self.entry().pattern
    }

    /// Family element (palace element).
    pub const fn element(self) -> Element {
        self.entry().element
    }

    /// Look up by glyph or pinyin.
    pub fn from_glyph(s: &str) -> Result<Self, GuaError> {
        let s = s.trim();
        ALL_TRIGRAMS
            .iter()
            .copied()
            .find(|t| t.glyph() == s || t.pinyin().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuaError::invalid(format!("unknown trigram or palace: {s:?}")))
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl std::str::FromStr for Trigram {
    type Err = GuaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trigram::from_glyph(s)
    }
}

/// Look up the trigram entry for a 3-line pattern.
///
/// Every 3-bit pattern is present; a miss is a table defect.
pub fn trigram_entry(pattern: TrigramPattern) -> Result<&'static TrigramEntry, GuaError> {
    INDEX_BY_BITS
        .get(pattern.bits() as usize)
        .and_then(|&i| TRIGRAM_TABLE.get(i as usize))
        .ok_or(GuaError::InternalInvariant("trigram table is missing a pattern"))
}

/// Najia triple for a 3-line pattern in the given placement.
pub fn najia_triple(
    pattern: TrigramPattern,
    placement: Placement,
) -> Result<[NajiaAssignment; 3], GuaError> {
    Ok(*trigram_entry(pattern)?.triple(placement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_patterns_resolve() {
        for bits in 0..8u8 {
            let entry = trigram_entry(TrigramPattern::from_bits(bits)).unwrap();
            assert_eq!(entry.pattern.bits(), bits);
        }
    }

    #[test]
    fn table_order_matches_enum() {
        for (i, t) in ALL_TRIGRAMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(TRIGRAM_TABLE[i].trigram, *t);
        }
    }

    #[test]
    fn assignment_element_follows_branch() {
        for entry in TRIGRAM_TABLE.iter() {
            for a in entry.inner.iter().chain(entry.outer.iter()) {
                assert_eq!(a.element, a.branch.element());
            }
        }
    }

    #[test]
    fn branches_step_by_two() {
        // Yang trigrams advance forward through the branches, yin trigrams backward.
        for entry in TRIGRAM_TABLE.iter() {
            let six: Vec<u8> = entry
                .inner
                .iter()
                .chain(entry.outer.iter())
                .map(|a| a.branch.index())
                .collect();
            let forward = matches!(
                entry.trigram,
                Trigram::Qian | Trigram::Zhen | Trigram::Kan | Trigram::Gen
            );
            for w in six.windows(2) {
                let step = (w[1] + 12 - w[0]) % 12;
                assert_eq!(step, if forward { 2 } else { 10 }, "{:?}", entry.trigram);
            }
        }
    }

    #[test]
    fn qian_and_kun_split_stems() {
        assert_eq!(Trigram::Qian.entry().inner[0].stem, Stem::Jia);
        assert_eq!(Trigram::Qian.entry().outer[0].stem, Stem::Ren);
        assert_eq!(Trigram::Kun.entry().inner[0].stem, Stem::Yi);
        assert_eq!(Trigram::Kun.entry().outer[0].stem, Stem::Gui);
    }

    #[test]
    fn zhen_najia_literal() {
        let inner = najia_triple(Trigram::Zhen.pattern(), Placement::Inner).unwrap();
        let outer = najia_triple(Trigram::Zhen.pattern(), Placement::Outer).unwrap();
        let text: Vec<String> = inner.iter().chain(outer.iter()).map(|a| a.stem_branch()).collect();
        assert_eq!(text, ["庚子", "庚寅", "庚辰", "庚午", "庚申", "庚戌"]);
    }

    #[test]
    fn palace_elements() {
        assert_eq!(Trigram::Qian.element(), Element::Metal);
        assert_eq!(Trigram::Dui.element(), Element::Metal);
        assert_eq!(Trigram::Li.element(), Element::Fire);
        assert_eq!(Trigram::Zhen.element(), Element::Wood);
        assert_eq!(Trigram::Xun.element(), Element::Wood);
        assert_eq!(Trigram::Kan.element(), Element::Water);
        assert_eq!(Trigram::Gen.element(), Element::Earth);
        assert_eq!(Trigram::Kun.element(), Element::Earth);
    }

    #[test]
    fn from_glyph() {
        assert_eq!(Trigram::from_glyph("震").unwrap(), Trigram::Zhen);
        assert_eq!(Trigram::from_glyph("kan").unwrap(), Trigram::Kan);
        assert!(Trigram::from_glyph("雷").is_err());
    }
}
