//! Command-line interface for text_explorer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use explorer_core::AnalysisKind;

use crate::platform::logging::LogDestination;

/// `FILE` value that reads the document from stdin.
pub const STDIN_ARG: &str = "-";

/// Load a text document, run one analysis on it and print the report.
///
/// Available analyses: relative frequency of word forms, transliteration
/// from Ukrainian to Latin, and a count of unique words.
#[derive(Parser, Debug)]
#[command(name = "text_explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document to open, or `-` for stdin (default: the last document, else stdin)
    pub file: Option<PathBuf>,

    /// Analysis to run (default: the last one used)
    #[arg(short, long, value_enum)]
    pub method: Option<MethodArg>,

    /// Save the loaded document as UTF-8 to this path after analysing
    #[arg(long, value_name = "PATH")]
    pub save_as: Option<PathBuf>,

    /// Where the audit log goes
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,

    /// Audit log file, appended to on every run
    #[arg(long, value_name = "PATH", default_value = "text_analysis_log.txt")]
    pub log_file: PathBuf,

    /// Settings file remembering the last document and analysis
    #[arg(long, value_name = "PATH", default_value = ".text_explorer.ron")]
    pub settings: PathBuf,

    /// Do not update the settings file
    #[arg(long)]
    pub no_remember: bool,

    /// Log debug details as well
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MethodArg {
    Frequency,
    Transliterate,
    Unique,
}

impl From<MethodArg> for AnalysisKind {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Frequency => AnalysisKind::RelativeFrequency,
            MethodArg::Transliterate => AnalysisKind::Transliteration,
            MethodArg::Unique => AnalysisKind::UniqueWords,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogArg {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogArg> for LogDestination {
    fn from(value: LogArg) -> Self {
        match value {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
            LogArg::Off => LogDestination::Off,
        }
    }
}
