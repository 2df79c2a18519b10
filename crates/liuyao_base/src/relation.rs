//! Kinship relations (六親): a line's element measured against the palace element.
//!
//! | Line element vs palace element  | Relation  |
//! |---------------------------------|-----------|
//! | generates the palace element    | Parent    |
//! | same as the palace element      | Sibling   |
//! | generated by the palace element | Offspring |
//! | overcome by the palace element  | Wealth    |
//! | overcomes the palace element    | Official  |

use std::str::FromStr;

use serde::Serialize;

use crate::element::Element;
use crate::error::GuaError;

/// One of the five kinship relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum KinshipRelation {
    Parent,
    Sibling,
    Offspring,
    Wealth,
    Official,
}

/// All 5 relations in traditional order (父母 兄弟 子孫 妻財 官鬼).
pub const ALL_RELATIONS: [KinshipRelation; 5] = [
    KinshipRelation::Parent,
    KinshipRelation::Sibling,
    KinshipRelation::Offspring,
    KinshipRelation::Wealth,
    KinshipRelation::Official,
];

impl KinshipRelation {
    /// Chinese label.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Parent => "父母",
            Self::Sibling => "兄弟",
            Self::Offspring => "子孫",
            Self::Wealth => "妻財",
            Self::Official => "官鬼",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Offspring => "Offspring",
            Self::Wealth => "Wealth",
            Self::Official => "Official",
        }
    }

    /// 0-based index into ALL_RELATIONS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Parent => 0,
            Self::Sibling => 1,
            Self::Offspring => 2,
            Self::Wealth => 3,
            Self::Official => 4,
        }
    }
}

impl std::fmt::Display for KinshipRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for KinshipRelation {
    type Err = GuaError;

    /// Accepts the Chinese label or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_RELATIONS
            .iter()
            .copied()
            .find(|r| r.glyph() == s || r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GuaError::invalid(format!("unknown kinship relation: {s:?}")))
    }
}

/// Classify a line element against the palace element.
///
/// Total over all 25 ordered pairs: identity, the generating cycle in either
/// direction, and the overcoming cycle in either direction partition them.
pub const fn relation_of(palace: Element, line: Element) -> KinshipRelation {
    if line.index() == palace.index() {
        KinshipRelation::Sibling
    } else if line.generates().index() == palace.index() {
        KinshipRelation::Parent
    } else if palace.generates().index() == line.index() {
        KinshipRelation::Offspring
    } else if palace.overcomes().index() == line.index() {
        KinshipRelation::Wealth
    } else {
        // Only remaining case: the line element overcomes the palace element.
        KinshipRelation::Official
    }
}
