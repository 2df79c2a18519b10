//! Plain-text chart, top line first.
//!
//! Row layout: six spirit, hidden spirit, primary line label, line glyph,
//! self/response mark, moving mark, then the transformed line when any line
//! moves.

use liuyao_base::{LINE_COUNT, Polarity, SixSpirit};

use crate::compute::{ComputedLine, HexagramResult};
use crate::divination::Divination;

const YANG_GLYPH: &str = "━━━━━";
const YIN_GLYPH: &str = "━━ ━━";
/// Full-width blank of the same width as a five-glyph label.
const BLANK_LABEL: &str = "　　　　　";
const BLANK_GLYPH: &str = "　";

pub fn line_glyph(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Yang => YANG_GLYPH,
        Polarity::Yin => YIN_GLYPH,
    }
}

/// Full chart: date, pillars, markers, then the hexagram rows.
pub fn render_chart(divination: &Divination) -> String {
    let cal = &divination.calendar;
    let header = format!(
        "{}\n{}\n{}\n\n",
        cal.date_text, cal.four_pillars, cal.day_markers
    );
    header + &render_hexagram(&divination.hexagram, Some(&divination.six_spirits))
}

/// Hexagram rows only. Without spirits the spirit column is left blank.
pub fn render_hexagram(
    result: &HexagramResult,
    spirits: Option<&[SixSpirit; LINE_COUNT]>,
) -> String {
    let mut out = format!(
        "本卦：{}（{}）\n",
        result.primary.name,
        result.primary.family_label()
    );
    if result.has_moving_lines() {
        out.push_str(&format!(
            "變卦：{}（{}）\n",
            result.transformed.name,
            result.transformed.family_label()
        ));
    }
    for line in result.lines.iter().rev() {
        let spirit = spirits
            .map(|s| s[usize::from(line.position) - 1].glyph())
            .unwrap_or("　　");
        out.push_str(spirit);
        out.push(' ');
        out.push_str(render_row(line).trim_end());
        out.push('\n');
    }
    out
}

fn render_row(line: &ComputedLine) -> String {
    let hidden = line.hidden.map(|h| h.label());
    let anchor = match line.anchor_mark() {
        "" => BLANK_GLYPH,
        mark => mark,
    };
    let moving = match line.status.mark() {
        "" => " ",
        mark => mark,
    };
    let row = format!(
        "{} {} {} {} {}",
        hidden.as_deref().unwrap_or(BLANK_LABEL),
        line.label(),
        line_glyph(line.polarity),
        anchor,
        moving
    );
    match line.transformed {
        Some(t) => format!("{row}  {} {}", line_glyph(t.polarity), t.label()),
        None => row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::compute_hexagram;
    use liuyao_base::{Stem, line_codes_from_str, six_spirits};

    fn result(codes: &str) -> HexagramResult {
        compute_hexagram(&line_codes_from_str(codes).unwrap()).unwrap()
    }

    #[test]
    fn rows_run_top_down() {
        let text = render_hexagram(&result("122121"), Some(&six_spirits(Stem::Ren)));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "本卦：水風井（震宮木 五世卦）");
        assert_eq!(rows.len(), 7);
        assert!(rows[1].starts_with("白虎"), "{}", rows[1]);
        assert!(rows[1].contains("父母戊子水"));
        assert!(rows[6].starts_with("玄武"));
        assert!(rows[6].contains("妻財辛丑土"));
    }

    #[test]
    fn hidden_and_anchor_marks() {
        let text = render_hexagram(&result("122121"), None);
        let rows: Vec<&str> = text.lines().collect();
        // Line 5 (self) is row 2, line 2 (response, hides 兄弟) is row 5.
        assert!(rows[2].contains("世"));
        assert!(rows[5].contains("兄弟庚寅木"));
        assert!(rows[5].contains("應"));
        assert!(rows[3].contains("子孫庚午火"));
    }

    #[test]
    fn moving_chart_shows_transformed_column() {
        let text = render_hexagram(&result("222220"), None);
        assert!(text.contains("變卦：澤天夬（坤宮土 五世卦）"));
        let top = text.lines().nth(2).unwrap();
        assert!(top.contains("○"));
        assert!(top.contains("父母丁未土"));
        assert!(top.contains(YIN_GLYPH));
    }

    #[test]
    fn chart_header_precedes_rows() {
        use crate::divination::divine;
        use liuyao_time::{CalendarConfig, SolarTermPillars, parse_timestamp};

        let at = parse_timestamp("2025-11-29 14:07", &CalendarConfig::default()).unwrap();
        let lines = line_codes_from_str("122121").unwrap();
        let reading = divine(&lines, &at, &SolarTermPillars).unwrap();
        let chart = render_chart(&reading);
        let rows: Vec<&str> = chart.lines().collect();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[2], "空亡[辰巳] 驛馬[申] 桃花[卯] 貴人[卯/巳]");
        assert_eq!(rows[3], "");
        assert!(chart.ends_with('\n'));
    }

    #[test]
    fn static_chart_has_no_transformed_header() {
        let text = render_hexagram(&result("122121"), None);
        assert!(!text.contains("變卦"));
    }
}
