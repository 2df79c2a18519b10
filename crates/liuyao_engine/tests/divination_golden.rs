//! End-to-end golden tests: line codes and timestamp → full reading.

use liuyao_engine::{
    CalendarConfig, KinshipRelation, SixSpirit, SolarTermPillars, Trigram, divine,
    line_codes_from_numbers, parse_timestamp, render_chart,
};

fn well_reading() -> liuyao_engine::Divination {
    let lines = line_codes_from_numbers(&[1, 2, 2, 1, 2, 1]).unwrap();
    let at = parse_timestamp("2025-11-29 14:07", &CalendarConfig::default()).unwrap();
    divine(&lines, &at, &SolarTermPillars).unwrap()
}

#[test]
fn well_hexagram_reading() {
    let d = well_reading();
    let hx = &d.hexagram;
    assert_eq!(hx.primary.pattern.to_string(), "011010");
    assert_eq!(hx.primary.palace, Trigram::Zhen);
    assert_eq!(hx.primary.family_label(), "震宮木 五世卦");
    assert_eq!(hx.primary.self_line, 5);
    assert_eq!(hx.primary.response_line(), 2);
    assert!(hx.moving.is_empty());
    assert_eq!(hx.transformed, hx.primary);

    let hidden: Vec<(u8, KinshipRelation)> =
        hx.hidden_spirits().iter().map(|h| (h.position, h.relation)).collect();
    assert_eq!(
        hidden,
        [(2, KinshipRelation::Sibling), (4, KinshipRelation::Offspring)]
    );
}

#[test]
fn calendar_half() {
    let d = well_reading();
    assert_eq!(d.calendar.date_text, "2025年11月29日 14時07分");
    assert_eq!(d.calendar.four_pillars.to_string(), "乙巳年 丁亥月 壬寅日 丁未時");
    assert_eq!(d.calendar.day_markers.to_string(), "空亡[辰巳] 驛馬[申] 桃花[卯] 貴人[卯/巳]");
    assert_eq!(
        d.six_spirits,
        [
            SixSpirit::BlackTortoise,
            SixSpirit::AzureDragon,
            SixSpirit::VermilionBird,
            SixSpirit::HookedChen,
            SixSpirit::FlyingSerpent,
            SixSpirit::WhiteTiger,
        ]
    );
}

#[test]
fn chart_text() {
    let chart = render_chart(&well_reading());
    let rows: Vec<&str> = chart.lines().collect();
    assert_eq!(rows[0], "2025年11月29日 14時07分");
    assert_eq!(rows[1], "乙巳年 丁亥月 壬寅日 丁未時");
    assert_eq!(rows[4], "本卦：水風井（震宮木 五世卦）");
    assert!(rows[5].starts_with("白虎"));
    assert!(rows[10].starts_with("玄武"));
}

#[test]
fn json_shape() {
    let json = serde_json::to_value(well_reading()).unwrap();
    assert_eq!(json["hexagram"]["primary"]["name"], "水風井");
    assert_eq!(json["hexagram"]["primary"]["pattern"], "011010");
    assert_eq!(json["hexagram"]["lines"][0]["relation"], "Wealth");
    assert_eq!(json["hexagram"]["lines"][1]["hidden"]["relation"], "Sibling");
    assert_eq!(json["hexagram"]["lines"][4]["is_self"], true);
    assert_eq!(json["calendar"]["four_pillars"]["year"], "乙巳");
    assert_eq!(json["six_spirits"][0], "BlackTortoise");
}
