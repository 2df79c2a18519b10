//! Hexagram computation: six line codes → per-line chart data.
//!
//! Pipeline: parse the codes into primary and transformed patterns, look up
//! both hexagrams, assign najia per half, classify every line against the
//! primary palace element, then attach hidden spirits from the palace's home
//! hexagram. Transformed lines are classified against the primary palace too;
//! transformation never changes the palace frame.

use liuyao_base::{
    GuaError, HexagramEntry, HiddenSpirit, KinshipRelation, LINE_COUNT, LineCode, LineStatus,
    NajiaAssignment, Polarity, hexagram_entry, hexagram_najia, hidden_spirits, parse_line_codes,
    relation_of,
};
use serde::Serialize;
use tracing::debug;

/// The transformed hexagram's line at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformedLine {
    pub polarity: Polarity,
    pub najia: NajiaAssignment,
    /// Measured against the primary palace element.
    pub relation: KinshipRelation,
}

impl TransformedLine {
    /// e.g. "妻財辛丑土".
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.relation.glyph(),
            self.najia.stem_branch(),
            self.najia.element.glyph()
        )
    }
}

/// One line of the computed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedLine {
    /// 1 (bottom) to 6 (top).
    pub position: u8,
    pub code: LineCode,
    pub polarity: Polarity,
    pub moving: bool,
    pub status: LineStatus,
    pub najia: NajiaAssignment,
    pub relation: KinshipRelation,
    /// Self (世) line.
    pub is_self: bool,
    /// Response (應) line.
    pub is_response: bool,
    pub hidden: Option<HiddenSpirit>,
    /// Present for every line when the cast has at least one moving line.
    pub transformed: Option<TransformedLine>,
}

impl ComputedLine {
    /// e.g. "父母戊子水".
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.relation.glyph(),
            self.najia.stem_branch(),
            self.najia.element.glyph()
        )
    }

    /// "世", "應" or "".
    pub fn anchor_mark(&self) -> &'static str {
        if self.is_self {
            "世"
        } else if self.is_response {
            "應"
        } else {
            ""
        }
    }
}

/// Primary and transformed hexagrams plus the six computed lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramResult {
    pub primary: HexagramEntry,
    /// Identical to `primary` when no line moves.
    pub transformed: HexagramEntry,
    /// 1-based moving positions, ascending.
    pub moving: Vec<u8>,
    /// Bottom line first.
    pub lines: [ComputedLine; LINE_COUNT],
}

impl HexagramResult {
    pub fn has_moving_lines(&self) -> bool {
        !self.moving.is_empty()
    }

    /// Relations shown by the six cast lines, in position order.
    pub fn relations(&self) -> [KinshipRelation; LINE_COUNT] {
        self.lines.map(|l| l.relation)
    }

    /// Hidden spirits in position order.
    pub fn hidden_spirits(&self) -> Vec<HiddenSpirit> {
        self.lines.iter().filter_map(|l| l.hidden).collect()
    }

    pub fn self_line(&self) -> &ComputedLine {
        &self.lines[usize::from(self.primary.self_line) - 1]
    }
}

/// Compute the full chart for exactly six line codes, bottom first.
pub fn compute_hexagram(lines: &[LineCode]) -> Result<HexagramResult, GuaError> {
    let parsed = parse_line_codes(lines)?;
    let primary = *hexagram_entry(parsed.primary)?;
    let transformed = *hexagram_entry(parsed.transformed)?;
    let primary_najia = hexagram_najia(parsed.primary)?;
    let transformed_najia = hexagram_najia(parsed.transformed)?;
    let palace_element = primary.element;
    let self_line = primary.self_line;
    let response_line = primary.response_line();
    let has_moving = parsed.has_moving_lines();

    let mut computed: [ComputedLine; LINE_COUNT] = std::array::from_fn(|i| {
        let code = lines[i];
        let position = i as u8 + 1;
        let najia = primary_najia[i];
        ComputedLine {
            position,
            code,
            polarity: code.polarity(),
            moving: code.is_moving(),
            status: code.status(),
            najia,
            relation: relation_of(palace_element, najia.element),
            is_self: position == self_line,
            is_response: position == response_line,
            hidden: None,
            transformed: has_moving.then(|| TransformedLine {
                polarity: code.transformed_polarity(),
                najia: transformed_najia[i],
                relation: relation_of(palace_element, transformed_najia[i].element),
            }),
        }
    });

    let present = computed.map(|l| l.relation);
    for spirit in hidden_spirits(primary.palace, &present)? {
        computed[usize::from(spirit.position) - 1].hidden = Some(spirit);
    }

    debug!(
        primary = primary.name,
        transformed = transformed.name,
        moving = ?parsed.moving,
        "hexagram computed"
    );
    Ok(HexagramResult {
        primary,
        transformed,
        moving: parsed.moving,
        lines: computed,
    })
}
