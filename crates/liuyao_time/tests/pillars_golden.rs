//! Golden-value tests for the built-in solar-term pillar source.
//!
//! All timestamps are China Standard Time (UTC+8). Expected pillars follow
//! the 節氣 convention: the year and month turn at the solar terms, the day
//! at local midnight.

use liuyao_time::{
    CalendarConfig, SolarTermPillars, calendar_pillars, jd_from_utc, parse_timestamp,
    sun_apparent_longitude_deg,
};

fn reading(text: &str) -> liuyao_time::CalendarReading {
    let at = parse_timestamp(text, &CalendarConfig::default()).unwrap();
    calendar_pillars(&at, &SolarTermPillars).unwrap()
}

#[test]
fn known_pillars() {
    let cases = [
        ("2000-01-01 12:00", "己卯年 丙子月 戊午日 戊午時"),
        ("2024-02-10 12:00", "甲辰年 丙寅月 甲辰日 庚午時"),
        ("2025-11-29 14:07", "乙巳年 丁亥月 壬寅日 丁未時"),
        ("2023-12-31 23:30", "癸卯年 甲子月 癸亥日 甲子時"),
        ("2024-06-15 08:00", "甲辰年 庚午月 庚戌日 庚辰時"),
    ];
    for (text, want) in cases {
        assert_eq!(reading(text).four_pillars.to_string(), want, "{text}");
    }
}

#[test]
fn lichun_2024_boundary() {
    let before = reading("2024-02-04 12:00");
    assert_eq!(before.four_pillars.year.to_string(), "癸卯");
    assert_eq!(before.four_pillars.month.to_string(), "乙丑");
    let after = reading("2024-02-04 20:00");
    assert_eq!(after.four_pillars.year.to_string(), "甲辰");
    assert_eq!(after.four_pillars.month.to_string(), "丙寅");
    // Same civil day on both sides.
    assert_eq!(before.four_pillars.day, after.four_pillars.day);
}

#[test]
fn sun_longitude_near_lichun() {
    let at = parse_timestamp("2024-02-04 16:00", &CalendarConfig::default()).unwrap();
    let lon = sun_apparent_longitude_deg(jd_from_utc(at.naive_utc()));
    assert!((lon - 314.985).abs() < 0.01, "λ = {lon}");
}

#[test]
fn explicit_offset_changes_the_civil_day() {
    // 2024-02-10 02:00 in UTC+8 is still 2024-02-09 in UTC.
    let cst = reading("2024-02-10T02:00:00+08:00");
    let utc = reading("2024-02-09T18:00:00+00:00");
    assert_eq!(cst.four_pillars.day.to_string(), "甲辰");
    assert_eq!(utc.four_pillars.day.to_string(), "癸卯");
}

#[test]
fn markers_follow_the_day_pillar() {
    let r = reading("2025-11-29 14:07");
    assert_eq!(r.day_markers.void_label(), "辰巳");
    assert_eq!(r.day_markers.travel_label(), "申");
    assert_eq!(r.day_markers.romance_label(), "卯");
    assert_eq!(r.day_markers.noble_label(), "卯/巳");
}
