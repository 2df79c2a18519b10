//! Argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use liuyao_base::{KinshipRelation, Trigram};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(name = "liuyao", version, about = "Six-line (六爻) hexagram divination charts")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (default: ./liuyao.toml when present)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Hours east of UTC for timestamps without an offset (overrides the config file)
    #[arg(long = "utc-offset", value_name = "HOURS", global = true, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chart from six line codes, bottom first (0 old yang, 1 young yin, 2 young yang, 3 old yin)
    Cast {
        /// Six digits, e.g. 122121 or 1,2,2,1,2,1
        codes: String,
        /// Timestamp (RFC 3339, YYYY-MM-DD HH:MM[:SS] or YYYY-MM-DD); default now
        #[arg(long)]
        date: Option<String>,
    },
    /// Chart from six three-coin tosses, given as heads counts in casting order
    Coins {
        /// Heads per toss (0-3); the first toss is the bottom line
        #[arg(num_args = 6, required = true)]
        heads: Vec<u8>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Chart from three numbers (1-9)
    Numbers {
        a: u8,
        b: u8,
        c: u8,
        #[arg(long)]
        date: Option<String>,
    },
    /// Chart cast from the date and hour themselves
    Time {
        #[arg(long)]
        date: Option<String>,
    },
    /// Four pillars and day markers for a timestamp
    Pillars {
        #[arg(long)]
        date: Option<String>,
    },
    /// Six spirits for lines 1-6 on a day stem
    Spirits {
        /// Day stem glyph or pinyin, e.g. 甲 or jia
        stem: String,
    },
    /// Day markers (void, travel, romance, noble) for a day stem and branch
    Markers { stem: String, branch: String },
    /// Hidden spirits for a palace given the relations already present
    Hidden {
        /// Palace glyph or pinyin, e.g. 震 or zhen
        palace: Trigram,
        /// Relations present, e.g. 妻財 父母 官鬼 or Wealth Parent Official
        relations: Vec<KinshipRelation>,
    },
    /// The 64-hexagram table by palace
    Table,
}
