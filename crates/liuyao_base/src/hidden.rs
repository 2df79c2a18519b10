//! Hidden spirits (伏神): relations absent from a cast hexagram, recovered
//! from the home hexagram of the same palace.
//!
//! Every home hexagram shows all five relations, one of them twice. A missing
//! relation is taken from the first home-hexagram line (scanning 1 → 6) that
//! carries it and hides beneath the cast line at that position.

use serde::Serialize;
use tracing::debug;

use crate::error::GuaError;
use crate::hexagram::{hexagram_najia, home_pattern};
use crate::relation::{ALL_RELATIONS, KinshipRelation, relation_of};
use crate::trigram::{NajiaAssignment, Trigram};

/// One line of a palace's home hexagram with its relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeLine {
    /// 1-based position.
    pub position: u8,
    pub najia: NajiaAssignment,
    pub relation: KinshipRelation,
}

/// A relation missing from the cast hexagram, located in the home hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenSpirit {
    /// 1-based position it hides beneath.
    pub position: u8,
    pub relation: KinshipRelation,
    pub najia: NajiaAssignment,
}

impl HiddenSpirit {
    /// e.g. "兄弟庚寅木".
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.relation.glyph(),
            self.najia.stem_branch(),
            self.najia.element.glyph()
        )
    }
}

/// Najia and relations of all six lines of a palace's home hexagram.
pub fn home_lines(palace: Trigram) -> Result<[HomeLine; 6], GuaError> {
    let najia = hexagram_najia(home_pattern(palace))?;
    let palace_element = palace.element();
    Ok(std::array::from_fn(|i| HomeLine {
        position: i as u8 + 1,
        najia: najia[i],
        relation: relation_of(palace_element, najia[i].element),
    }))
}

/// Relations from ALL_RELATIONS not present in `present`, in traditional order.
pub fn missing_relations(present: &[KinshipRelation]) -> Vec<KinshipRelation> {
    ALL_RELATIONS
        .iter()
        .copied()
        .filter(|r| !present.contains(r))
        .collect()
}

/// Locate every relation absent from `present` in the palace's home hexagram.
///
/// Returns an empty list when all five relations are present. Results are in
/// traditional relation order (父母 兄弟 子孫 妻財 官鬼).
pub fn hidden_spirits(
    palace: Trigram,
    present: &[KinshipRelation],
) -> Result<Vec<HiddenSpirit>, GuaError> {
    let missing = missing_relations(present);
    if missing.is_empty() {
        return Ok(Vec::new());
    }

    let home = home_lines(palace)?;
    let spirits = missing
        .into_iter()
        .map(|relation| {
            home.iter()
                .find(|line| line.relation == relation)
                .map(|line| HiddenSpirit {
                    position: line.position,
                    relation,
                    najia: line.najia,
                })
                .ok_or(GuaError::InternalInvariant(
                    "home hexagram does not cover all five relations",
                ))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(palace = palace.glyph(), count = spirits.len(), "hidden spirits resolved");
    Ok(spirits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::ALL_TRIGRAMS;
    use KinshipRelation::*;

    #[test]
    fn home_lines_cover_all_five_with_one_duplicate() {
        for palace in ALL_TRIGRAMS {
            let lines = home_lines(palace).unwrap();
            let mut counts = [0u8; 5];
            for l in &lines {
                counts[l.relation.index() as usize] += 1;
            }
            assert!(counts.iter().all(|&c| c >= 1), "{palace:?}: {counts:?}");
            assert_eq!(counts.iter().filter(|&&c| c == 2).count(), 1, "{palace:?}");
        }
    }

    #[test]
    fn zhen_home_relations_literal() {
        let lines = home_lines(Trigram::Zhen).unwrap();
        let rels: Vec<KinshipRelation> = lines.iter().map(|l| l.relation).collect();
        assert_eq!(rels, [Parent, Sibling, Wealth, Offspring, Official, Wealth]);
    }

    #[test]
    fn complete_set_yields_nothing() {
        for palace in ALL_TRIGRAMS {
            assert!(hidden_spirits(palace, &ALL_RELATIONS).unwrap().is_empty());
        }
    }

    #[test]
    fn count_matches_missing_for_every_subset() {
        for palace in ALL_TRIGRAMS {
            let home = home_lines(palace).unwrap();
            for mask in 0..32u8 {
                let present: Vec<KinshipRelation> = ALL_RELATIONS
                    .iter()
                    .copied()
                    .filter(|r| mask & (1 << r.index()) != 0)
                    .collect();
                let spirits = hidden_spirits(palace, &present).unwrap();
                assert_eq!(spirits.len(), 5 - present.len(), "{palace:?} {present:?}");
                for s in &spirits {
                    assert!(!present.contains(&s.relation));
                    let line = home[usize::from(s.position) - 1];
                    assert_eq!(line.relation, s.relation);
                    assert_eq!(line.najia, s.najia);
                }
            }
        }
    }

    #[test]
    fn duplicates_in_present_are_ignored() {
        let spirits = hidden_spirits(Trigram::Zhen, &[Wealth, Wealth, Parent, Parent]).unwrap();
        let rels: Vec<KinshipRelation> = spirits.iter().map(|s| s.relation).collect();
        assert_eq!(rels, [Sibling, Offspring, Official]);
    }

    #[test]
    fn well_hexagram_hidden_spirits() {
        // 水風井 (震宮) shows Parent, Wealth and Official only.
        let spirits = hidden_spirits(Trigram::Zhen, &[Wealth, Parent, Official]).unwrap();
        assert_eq!(spirits.len(), 2);
        assert_eq!(spirits[0].relation, Sibling);
        assert_eq!(spirits[0].position, 2);
        assert_eq!(spirits[0].label(), "兄弟庚寅木");
        assert_eq!(spirits[1].relation, Offspring);
        assert_eq!(spirits[1].position, 4);
        assert_eq!(spirits[1].label(), "子孫庚午火");
    }

    #[test]
    fn first_match_by_position_for_duplicated_relation() {
        // 震為雷 carries Wealth at lines 3 and 6; the scan takes line 3.
        let spirits = hidden_spirits(Trigram::Zhen, &[Parent, Sibling, Offspring, Official]).unwrap();
        assert_eq!(spirits.len(), 1);
        assert_eq!(spirits[0].relation, Wealth);
        assert_eq!(spirits[0].position, 3);
    }
}
