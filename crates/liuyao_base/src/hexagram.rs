//! The 64 hexagrams arranged in the eight palaces (八宮).
//!
//! Each palace opens with its pure hexagram (the palace trigram doubled),
//! followed by the first to fifth generation hexagrams, the wandering-soul
//! hexagram and the returning-soul hexagram. The stage fixes the self (世)
//! line; the response (應) line sits three positions away.
//!
//! Patterns are written bottom line first, 1 = yang.

use serde::Serialize;
use tracing::trace;

use crate::element::Element;
use crate::error::GuaError;
use crate::pattern::HexagramPattern;
use crate::trigram::{NajiaAssignment, Placement, Trigram, najia_triple};

/// Position of a hexagram within its palace sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceStage {
    /// 八純卦: the palace trigram doubled.
    Pure,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    /// 遊魂卦.
    WanderingSoul,
    /// 歸魂卦.
    ReturningSoul,
}

/// All 8 stages in palace order.
pub const ALL_PALACE_STAGES: [PalaceStage; 8] = [
    PalaceStage::Pure,
    PalaceStage::First,
    PalaceStage::Second,
    PalaceStage::Third,
    PalaceStage::Fourth,
    PalaceStage::Fifth,
    PalaceStage::WanderingSoul,
    PalaceStage::ReturningSoul,
];

impl PalaceStage {
    /// Position (1-6) of the self line for hexagrams at this stage.
    pub const fn self_line(self) -> u8 {
        match self {
            Self::Pure => 6,
            Self::First => 1,
            Self::Second => 2,
            Self::Third | Self::ReturningSoul => 3,
            Self::Fourth | Self::WanderingSoul => 4,
            Self::Fifth => 5,
        }
    }

    /// Chinese label (八純卦, 一世卦, ...).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pure => "八純卦",
            Self::First => "一世卦",
            Self::Second => "二世卦",
            Self::Third => "三世卦",
            Self::Fourth => "四世卦",
            Self::Fifth => "五世卦",
            Self::WanderingSoul => "遊魂卦",
            Self::ReturningSoul => "歸魂卦",
        }
    }
}

/// Response line for a given self line: three positions away within 1..=6.
pub const fn response_line(self_line: u8) -> u8 {
    if self_line > 3 { self_line - 3 } else { self_line + 3 }
}

/// Static entry for one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramEntry {
    pub pattern: HexagramPattern,
    pub name: &'static str,
    /// Owning palace.
    pub palace: Trigram,
    /// Palace element; frames the kinship relations.
    pub element: Element,
    /// Self (世) line position, 1-6.
    pub self_line: u8,
    pub stage: PalaceStage,
}

impl HexagramEntry {
    /// Response (應) line position, 1-6.
    pub const fn response_line(&self) -> u8 {
        response_line(self.self_line)
    }

    pub const fn is_home(&self) -> bool {
        matches!(self.stage, PalaceStage::Pure)
    }

    /// Palace, element and stage, e.g. "震宮木 五世卦".
    pub fn family_label(&self) -> String {
        format!(
            "{}宮{} {}",
            self.palace.glyph(),
            self.element.glyph(),
            self.stage.glyph()
        )
    }
}

const fn hx(digits: &str, name: &'static str, palace: Trigram, stage: PalaceStage) -> HexagramEntry {
    HexagramEntry {
        pattern: HexagramPattern::from_digits(digits),
        name,
        palace,
        element: palace.element(),
        self_line: stage.self_line(),
        stage,
    }
}

use self::PalaceStage::{
    Fifth, First, Fourth, Pure, ReturningSoul as Returning, Second, Third,
    WanderingSoul as Wandering,
};
use crate::trigram::Trigram::{Dui, Gen, Kan, Kun, Li, Qian, Xun, Zhen};

/// All 64 hexagrams in palace order (8 palaces × 8 stages).
pub const HEXAGRAM_TABLE: &[HexagramEntry; 64] = &[
    // 乾宮 (metal)
    hx("111111", "乾為天", Qian, Pure),
    hx("011111", "天風姤", Qian, First),
    hx("001111", "天山遯", Qian, Second),
    hx("000111", "天地否", Qian, Third),
    hx("000011", "風地觀", Qian, Fourth),
    hx("000001", "山地剝", Qian, Fifth),
    hx("000101", "火地晉", Qian, Wandering),
    hx("111101", "火天大有", Qian, Returning),
    // 兌宮 (metal)
    hx("110110", "兌為澤", Dui, Pure),
    hx("010110", "澤水困", Dui, First),
    hx("000110", "澤地萃", Dui, Second),
    hx("001110", "澤山咸", Dui, Third),
    hx("001010", "水山蹇", Dui, Fourth),
    hx("001000", "地山謙", Dui, Fifth),
    hx("001100", "雷山小過", Dui, Wandering),
    hx("110100", "雷澤歸妹", Dui, Returning),
    // 離宮 (fire)
    hx("101101", "離為火", Li, Pure),
    hx("001101", "火山旅", Li, First),
    hx("011101", "火風鼎", Li, Second),
    hx("010101", "火水未濟", Li, Third),
    hx("010001", "山水蒙", Li, Fourth),
    hx("010011", "風水渙", Li, Fifth),
    hx("010111", "天水訟", Li, Wandering),
    hx("101111", "天火同人", Li, Returning),
    // 震宮 (wood)
    hx("100100", "震為雷", Zhen, Pure),
    hx("000100", "雷地豫", Zhen, First),
    hx("010100", "雷水解", Zhen, Second),
    hx("011100", "雷風恆", Zhen, Third),
    hx("011000", "地風升", Zhen, Fourth),
    hx("011010", "水風井", Zhen, Fifth),
    hx("011110", "澤風大過", Zhen, Wandering),
    hx("100110", "澤雷隨", Zhen, Returning),
    // 巽宮 (wood)
    hx("011011", "巽為風", Xun, Pure),
    hx("111011", "風天小畜", Xun, First),
    hx("101011", "風火家人", Xun, Second),
    hx("100011", "風雷益", Xun, Third),
    hx("100111", "天雷無妄", Xun, Fourth),
    hx("100101", "火雷噬嗑", Xun, Fifth),
    hx("100001", "山雷頤", Xun, Wandering),
    hx("011001", "山風蠱", Xun, Returning),
    // 坎宮 (water)
    hx("010010", "坎為水", Kan, Pure),
    hx("110010", "水澤節", Kan, First),
    hx("100010", "水雷屯", Kan, Second),
    hx("101010", "水火既濟", Kan, Third),
    hx("101110", "澤火革", Kan, Fourth),
    hx("101100", "雷火豐", Kan, Fifth),
    hx("101000", "地火明夷", Kan, Wandering),
    hx("010000", "地水師", Kan, Returning),
    // 艮宮 (earth)
    hx("001001", "艮為山", Gen, Pure),
    hx("101001", "山火賁", Gen, First),
    hx("111001", "山天大畜", Gen, Second),
    hx("110001", "山澤損", Gen, Third),
    hx("110101", "火澤睽", Gen, Fourth),
    hx("110111", "天澤履", Gen, Fifth),
    hx("110011", "風澤中孚", Gen, Wandering),
    hx("001011", "風山漸", Gen, Returning),
    // 坤宮 (earth)
    hx("000000", "坤為地", Kun, Pure),
    hx("100000", "地雷復", Kun, First),
    hx("110000", "地澤臨", Kun, Second),
    hx("111000", "地天泰", Kun, Third),
    hx("111100", "雷天大壯", Kun, Fourth),
    hx("111110", "澤天夬", Kun, Fifth),
    hx("111010", "水天需", Kun, Wandering),
    hx("000010", "水地比", Kun, Returning),
];

/// Table slot per 6-bit pattern. Building it fails compilation on a
/// duplicate or a missing pattern.
const INDEX_BY_BITS: [u8; 64] = {
    let mut index = [u8::MAX; 64];
    let mut i = 0;
    while i < HEXAGRAM_TABLE.len() {
        let bits = HEXAGRAM_TABLE[i].pattern.bits() as usize;
        assert!(index[bits] == u8::MAX, "duplicate hexagram pattern");
        index[bits] = i as u8;
        i += 1;
    }
    let mut b = 0;
    while b < 64 {
        assert!(index[b] != u8::MAX, "hexagram table is missing a pattern");
        b += 1;
    }
    index
};

/// Look up the entry for a 6-line pattern.
///
/// The table covers all 64 patterns; a miss is a table defect, not bad input.
pub fn hexagram_entry(pattern: HexagramPattern) -> Result<&'static HexagramEntry, GuaError> {
    let entry = INDEX_BY_BITS
        .get(pattern.bits() as usize)
        .and_then(|&i| HEXAGRAM_TABLE.get(i as usize))
        .filter(|e| e.pattern == pattern)
        .ok_or(GuaError::InternalInvariant("hexagram table is missing a pattern"))?;
    trace!(%pattern, name = entry.name, "hexagram lookup");
    Ok(entry)
}

/// Pattern of a palace's home (pure) hexagram: its trigram doubled.
pub const fn home_pattern(palace: Trigram) -> HexagramPattern {
    HexagramPattern::from_trigrams(palace.pattern(), palace.pattern())
}

/// Entry of a palace's home (pure) hexagram.
pub fn home_hexagram(palace: Trigram) -> Result<&'static HexagramEntry, GuaError> {
    hexagram_entry(home_pattern(palace))
}

/// All 8 entries of one palace, in stage order.
pub fn palace_hexagrams(palace: Trigram) -> &'static [HexagramEntry] {
    let start = palace.index() as usize * 8;
    &HEXAGRAM_TABLE[start..start + 8]
}

/// Najia for all six lines: inner triple of the lower trigram, then outer
/// triple of the upper trigram.
pub fn hexagram_najia(pattern: HexagramPattern) -> Result<[NajiaAssignment; 6], GuaError> {
    let lower = najia_triple(pattern.lower(), Placement::Inner)?;
    let upper = najia_triple(pattern.upper(), Placement::Outer)?;
    Ok([lower[0], lower[1], lower[2], upper[0], upper[1], upper[2]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::ALL_TRIGRAMS;

    #[test]
    fn all_64_patterns_resolve() {
        for bits in 0..64u8 {
            let p = HexagramPattern::from_bits(bits);
            let entry = hexagram_entry(p).unwrap();
            assert_eq!(entry.pattern, p);
        }
    }

    #[test]
    fn names_unique() {
        let mut names: Vec<&str> = HEXAGRAM_TABLE.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn palace_blocks_in_order() {
        for palace in ALL_TRIGRAMS {
            let block = palace_hexagrams(palace);
            assert_eq!(block.len(), 8);
            for (entry, stage) in block.iter().zip(ALL_PALACE_STAGES) {
                assert_eq!(entry.palace, palace);
                assert_eq!(entry.stage, stage);
                assert_eq!(entry.element, palace.element());
            }
        }
    }

    #[test]
    fn home_hexagram_is_doubled_trigram() {
        for palace in ALL_TRIGRAMS {
            let home = home_hexagram(palace).unwrap();
            assert!(home.is_home());
            assert_eq!(home.palace, palace);
            assert_eq!(home.pattern.lower(), palace.pattern());
            assert_eq!(home.pattern.upper(), palace.pattern());
            assert_eq!(home.self_line, 6);
        }
    }

    #[test]
    fn generations_flip_from_the_bottom() {
        // Stages 1-5 flip lines 1..=n of the home hexagram; wandering soul
        // restores line 4 of the fifth; returning soul restores the lower trigram.
        for palace in ALL_TRIGRAMS {
            let block = palace_hexagrams(palace);
            let home = block[0].pattern.bits();
            for n in 1..=5u8 {
                let mask = (1u8 << n) - 1;
                assert_eq!(block[n as usize].pattern.bits(), home ^ mask, "{palace:?} stage {n}");
            }
            let wandering = block[5].pattern.bits() ^ 0b00_1000;
            assert_eq!(block[6].pattern.bits(), wandering);
            let returning = (wandering & 0b11_1000) | (home & 0b00_0111);
            assert_eq!(block[7].pattern.bits(), returning);
        }
    }

    #[test]
    fn response_is_three_away() {
        for entry in HEXAGRAM_TABLE.iter() {
            let r = entry.response_line();
            assert!((1..=6).contains(&r));
            assert_eq!(r.abs_diff(entry.self_line), 3);
        }
    }

    #[test]
    fn well_hexagram_literal() {
        let entry = hexagram_entry(HexagramPattern::from_digits("011010")).unwrap();
        assert_eq!(entry.name, "水風井");
        assert_eq!(entry.palace, Trigram::Zhen);
        assert_eq!(entry.element, Element::Wood);
        assert_eq!(entry.self_line, 5);
        assert_eq!(entry.response_line(), 2);
        assert_eq!(entry.family_label(), "震宮木 五世卦");
    }

    #[test]
    fn najia_of_well() {
        let najia = hexagram_najia(HexagramPattern::from_digits("011010")).unwrap();
        let text: Vec<String> = najia.iter().map(|a| a.stem_branch()).collect();
        assert_eq!(text, ["辛丑", "辛亥", "辛酉", "戊申", "戊戌", "戊子"]);
    }
}
