use std::fmt;
use std::str::FromStr;

use crate::frequency::FrequencyTable;
use crate::token::tokenize;
use crate::translit::transliterate;

pub const RELATIVE_FREQUENCY_HEADER: &str = "Relative frequency of word forms in the text:";
pub const NO_WORDS_LINE: &str = "No words found.";
pub const TRANSLITERATION_HEADER: &str = "Transliterated text:";
pub const UNIQUE_TOTAL_LABEL: &str = "Total number of unique words:";
pub const UNIQUE_LIST_HEADER: &str = "Unique words and the number of times each is used:";

/// One analysis that turns a document into a report.
pub trait TextAnalysis: Send + Sync {
    /// Stable name used in audit records.
    fn name(&self) -> &'static str;

    fn analyze(&self, text: &str) -> String;
}

/// Share of every word form in the text, as a percentage of all tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordRelativeFrequency;

impl TextAnalysis for WordRelativeFrequency {
    fn name(&self) -> &'static str {
        "WordRelativeFrequency"
    }

    fn analyze(&self, text: &str) -> String {
        let table = FrequencyTable::from_tokens(tokenize(text));
        if table.total() == 0 {
            return format!("{RELATIVE_FREQUENCY_HEADER}\n{NO_WORDS_LINE}");
        }

        let total = table.total() as f64;
        let mut lines = Vec::with_capacity(table.distinct() + 1);
        lines.push(RELATIVE_FREQUENCY_HEADER.to_string());
        for (token, count) in table.iter() {
            let percent = count as f64 / total * 100.0;
            lines.push(format!("{token}: {percent:.2}%"));
        }
        lines.join("\n")
    }
}

/// Ukrainian-to-Latin transliteration of the whole text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transliteration;

impl TextAnalysis for Transliteration {
    fn name(&self) -> &'static str {
        "Transliteration"
    }

    fn analyze(&self, text: &str) -> String {
        format!("{TRANSLITERATION_HEADER}\n{}", transliterate(text))
    }
}

/// Number of distinct word forms and how often each one occurs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueWordCounter;

impl TextAnalysis for UniqueWordCounter {
    fn name(&self) -> &'static str {
        "UniqueWordCounter"
    }

    fn analyze(&self, text: &str) -> String {
        let table = FrequencyTable::from_tokens(tokenize(text));
        let mut lines = Vec::with_capacity(table.distinct() + 2);
        lines.push(format!("{UNIQUE_TOTAL_LABEL} {}", table.distinct()));
        lines.push(UNIQUE_LIST_HEADER.to_string());
        for (token, count) in table.iter() {
            lines.push(format!("{token}: {count}"));
        }
        lines.join("\n")
    }
}

/// The analyses the application offers, one variant per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    RelativeFrequency,
    Transliteration,
    UniqueWords,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [
        AnalysisKind::RelativeFrequency,
        AnalysisKind::Transliteration,
        AnalysisKind::UniqueWords,
    ];

    /// Short key used on the command line and in the settings file.
    pub fn key(self) -> &'static str {
        match self {
            AnalysisKind::RelativeFrequency => "frequency",
            AnalysisKind::Transliteration => "transliterate",
            AnalysisKind::UniqueWords => "unique",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisKind::RelativeFrequency => "Relative frequency of word forms",
            AnalysisKind::Transliteration => "Transliteration from Ukrainian to Latin",
            AnalysisKind::UniqueWords => "Count of unique words",
        }
    }

    pub fn strategy(self) -> Box<dyn TextAnalysis> {
        match self {
            AnalysisKind::RelativeFrequency => Box::new(WordRelativeFrequency),
            AnalysisKind::Transliteration => Box::new(Transliteration),
            AnalysisKind::UniqueWords => Box::new(UniqueWordCounter),
        }
    }
}

impl TextAnalysis for AnalysisKind {
    fn name(&self) -> &'static str {
        match self {
            AnalysisKind::RelativeFrequency => WordRelativeFrequency.name(),
            AnalysisKind::Transliteration => Transliteration.name(),
            AnalysisKind::UniqueWords => UniqueWordCounter.name(),
        }
    }

    fn analyze(&self, text: &str) -> String {
        match self {
            AnalysisKind::RelativeFrequency => WordRelativeFrequency.analyze(text),
            AnalysisKind::Transliteration => Transliteration.analyze(text),
            AnalysisKind::UniqueWords => UniqueWordCounter.analyze(text),
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown analysis method {0:?} (expected frequency, transliterate or unique)")]
pub struct UnknownAnalysis(pub String);

impl FromStr for AnalysisKind {
    type Err = UnknownAnalysis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AnalysisKind::ALL
            .into_iter()
            .find(|kind| {
                kind.key().eq_ignore_ascii_case(wanted) || kind.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownAnalysis(s.to_string()))
    }
}
