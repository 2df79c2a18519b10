//! Day-based markers (神煞) derived from the day pillar.
//!
//! | Marker           | Key        | Rule                                        |
//! |------------------|------------|---------------------------------------------|
//! | Void (空亡)      | stem+branch| (branch − stem) mod 12 picks the decade void |
//! | Travel (驛馬)    | branch     | 申子辰→寅 寅午戌→申 亥卯未→巳 巳酉丑→亥     |
//! | Romance (桃花)   | branch     | 申子辰→酉 寅午戌→卯 亥卯未→子 巳酉丑→午     |
//! | Noble (天乙貴人) | stem       | 甲戊庚→丑未 乙己→子申 丙丁→亥酉 壬癸→卯巳 辛→午寅 |
//!
//! Markers never fail: an input outside the vocabulary yields no marker,
//! rendered as an empty string.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::warn;

use crate::ganzhi::{Branch, Stem, StemBranch};

/// The two void branches of the decade (旬) containing the day.
///
/// Returns None for an odd offset, which no valid pillar produces.
pub const fn void_branches(stem: Stem, branch: Branch) -> Option<[Branch; 2]> {
    let diff = (branch.index() as i8 - stem.index() as i8).rem_euclid(12);
    match diff {
        0 => Some([Branch::Xu, Branch::Hai]),
        2 => Some([Branch::Zi, Branch::Chou]),
        4 => Some([Branch::Yin, Branch::Mao]),
        6 => Some([Branch::Chen, Branch::Si]),
        8 => Some([Branch::Wu, Branch::Wei]),
        10 => Some([Branch::Shen, Branch::You]),
        _ => None,
    }
}

/// Index of the day branch's three-harmony group: 申子辰, 寅午戌, 亥卯未, 巳酉丑.
const fn harmony_group(branch: Branch) -> u8 {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => 0,
        Branch::Yin | Branch::Wu | Branch::Xu => 1,
        Branch::Hai | Branch::Mao | Branch::Wei => 2,
        Branch::Si | Branch::You | Branch::Chou => 3,
    }
}

/// Travel horse (驛馬) for a day branch.
pub const fn travel_branch(branch: Branch) -> Branch {
    match harmony_group(branch) {
        0 => Branch::Yin,
        1 => Branch::Shen,
        2 => Branch::Si,
        _ => Branch::Hai,
    }
}

/// Peach blossom (桃花) for a day branch.
pub const fn romance_branch(branch: Branch) -> Branch {
    match harmony_group(branch) {
        0 => Branch::You,
        1 => Branch::Mao,
        2 => Branch::Zi,
        _ => Branch::Wu,
    }
}

/// Heavenly noble (天乙貴人) pair for a day stem.
pub const fn noble_branches(stem: Stem) -> [Branch; 2] {
    match stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
        Stem::Xin => [Branch::Wu, Branch::Yin],
    }
}

/// The four day-based markers. Absent markers render as "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMarkers {
    pub void: Option<[Branch; 2]>,
    pub travel: Option<Branch>,
    pub romance: Option<Branch>,
    pub noble: Option<[Branch; 2]>,
}

impl DayMarkers {
    /// Markers for a valid day pillar.
    pub const fn for_day(day: StemBranch) -> Self {
        Self::from_parts(Some(day.stem), Some(day.branch))
    }

    /// Markers from possibly-unknown stem and branch. Each marker depends only
    /// on the parts it needs.
    pub const fn from_parts(stem: Option<Stem>, branch: Option<Branch>) -> Self {
        let void = match (stem, branch) {
            (Some(s), Some(b)) => void_branches(s, b),
            _ => None,
        };
        let (travel, romance) = match branch {
            Some(b) => (Some(travel_branch(b)), Some(romance_branch(b))),
            None => (None, None),
        };
        let noble = match stem {
            Some(s) => Some(noble_branches(s)),
            None => None,
        };
        Self {
            void,
            travel,
            romance,
            noble,
        }
    }

    /// Lenient text entry point: unknown glyphs leave the affected markers empty.
    pub fn from_glyphs(stem: &str, branch: &str) -> Self {
        let s = Stem::from_glyph(stem);
        let b = Branch::from_glyph(branch);
        if s.is_none() || b.is_none() {
            warn!(stem, branch, "unrecognized day pillar text; markers left empty");
        }
        let markers = Self::from_parts(s, b);
        if s.is_some() && b.is_some() && markers.void.is_none() {
            warn!(stem, branch, "stem/branch parity mismatch; void marker left empty");
        }
        markers
    }

    /// e.g. "戌亥".
    pub fn void_label(&self) -> String {
        self.void
            .map(|[a, b]| format!("{}{}", a.glyph(), b.glyph()))
            .unwrap_or_default()
    }

    pub fn travel_label(&self) -> &'static str {
        self.travel.map_or("", Branch::glyph)
    }

    pub fn romance_label(&self) -> &'static str {
        self.romance.map_or("", Branch::glyph)
    }

    /// e.g. "丑/未".
    pub fn noble_label(&self) -> String {
        self.noble
            .map(|[a, b]| format!("{}/{}", a.glyph(), b.glyph()))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for DayMarkers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "空亡[{}] 驛馬[{}] 桃花[{}] 貴人[{}]",
            self.void_label(),
            self.travel_label(),
            self.romance_label(),
            self.noble_label()
        )
    }
}

/// Serialized as the rendered labels.
impl Serialize for DayMarkers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("DayMarkers", 4)?;
        st.serialize_field("void", &self.void_label())?;
        st.serialize_field("travel", self.travel_label())?;
        st.serialize_field("romance", self.romance_label())?;
        st.serialize_field("noble", &self.noble_label())?;
        st.end()
    }
}
