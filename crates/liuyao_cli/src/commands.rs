//! Subcommand handlers. Each prints one result in the configured format.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use liuyao_base::{
    ALL_TRIGRAMS, CastingMoment, DayMarkers, HiddenSpirit, KinshipRelation, LineCode, Trigram,
    hidden_spirits, line_codes_from_str, lines_from_coin_tosses, lines_from_numbers,
    lines_from_time, palace_hexagrams, six_spirits_for_glyph,
};
use liuyao_engine::{divine, render_chart};
use liuyao_time::{SolarTermPillars, calendar_pillars, parse_timestamp};
use serde::Serialize;
use tracing::info;

use crate::cli::{Commands, OutputFormat};
use crate::config::CliConfig;

const LINE_NAMES: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

pub fn run(command: Commands, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::Cast { codes, date } => {
            let lines = line_codes_from_str(&codes)?;
            chart(config, &lines, date.as_deref())
        }
        Commands::Coins { heads, date } => {
            let lines = lines_from_coin_tosses(&heads)?;
            chart(config, &lines, date.as_deref())
        }
        Commands::Numbers { a, b, c, date } => {
            let lines = lines_from_numbers(a, b, c)?;
            chart(config, &lines, date.as_deref())
        }
        Commands::Time { date } => {
            let at = timestamp(config, date.as_deref())?;
            let lines = lines_from_time(CastingMoment {
                year: at.year(),
                month: at.month(),
                day: at.day(),
                hour: at.hour(),
            })?;
            chart_at(config, &lines, &at)
        }
        Commands::Pillars { date } => {
            let at = timestamp(config, date.as_deref())?;
            let reading = calendar_pillars(&at, &SolarTermPillars)?;
            emit(config.output.format, &reading, |r| {
                format!("{}\n{}\n{}", r.date_text, r.four_pillars, r.day_markers)
            })
        }
        Commands::Spirits { stem } => {
            let spirits = six_spirits_for_glyph(&stem);
            emit(config.output.format, &spirits, |s| {
                LINE_NAMES
                    .iter()
                    .zip(s)
                    .rev()
                    .map(|(name, spirit)| format!("{name} {spirit}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Commands::Markers { stem, branch } => {
            let markers = DayMarkers::from_glyphs(&stem, &branch);
            emit(config.output.format, &markers, DayMarkers::to_string)
        }
        Commands::Hidden { palace, relations } => hidden(config, palace, &relations),
        Commands::Table => table(config),
    }
}

fn timestamp(config: &CliConfig, date: Option<&str>) -> anyhow::Result<DateTime<FixedOffset>> {
    Ok(match date {
        Some(text) => parse_timestamp(text, &config.calendar)?,
        None => config.calendar.now()?,
    })
}

fn chart(config: &CliConfig, lines: &[LineCode], date: Option<&str>) -> anyhow::Result<()> {
    let at = timestamp(config, date)?;
    chart_at(config, lines, &at)
}

fn chart_at(
    config: &CliConfig,
    lines: &[LineCode],
    at: &DateTime<FixedOffset>,
) -> anyhow::Result<()> {
    let reading = divine(lines, at, &SolarTermPillars)?;
    info!(primary = reading.hexagram.primary.name, "chart ready");
    emit(config.output.format, &reading, render_chart)
}

fn hidden(
    config: &CliConfig,
    palace: Trigram,
    present: &[KinshipRelation],
) -> anyhow::Result<()> {
    let spirits = hidden_spirits(palace, present)?;
    emit(config.output.format, &spirits, |s: &Vec<HiddenSpirit>| {
        if s.is_empty() {
            return "(none)".to_string();
        }
        s.iter()
            .map(|h| format!("{} {}", LINE_NAMES[usize::from(h.position) - 1], h.label()))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn table(config: &CliConfig) -> anyhow::Result<()> {
    let entries = liuyao_base::HEXAGRAM_TABLE.as_slice();
    emit(config.output.format, &entries, |_| {
        let mut blocks = Vec::with_capacity(ALL_TRIGRAMS.len());
        for palace in ALL_TRIGRAMS {
            let mut block = format!("{}宮（{}）", palace.glyph(), palace.element().glyph());
            for e in palace_hexagrams(palace) {
                block.push_str(&format!(
                    "\n  {} {} {} 世{} 應{}",
                    e.pattern,
                    e.name,
                    e.stage.glyph(),
                    e.self_line,
                    e.response_line()
                ));
            }
            blocks.push(block);
        }
        blocks.join("\n")
    })
}

fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    let rendered = match format {
        OutputFormat::Text => text(value),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
