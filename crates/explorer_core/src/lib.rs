//! TextExplorer core: text analyses, the analyzer that dispatches to them,
//! and the pure session state machine behind the editor.
mod analysis;
mod analyzer;
mod effect;
mod frequency;
mod msg;
mod state;
mod token;
mod translit;
mod update;
mod view_model;

pub use analysis::{
    AnalysisKind, TextAnalysis, Transliteration, UniqueWordCounter, UnknownAnalysis,
    WordRelativeFrequency, NO_WORDS_LINE, RELATIVE_FREQUENCY_HEADER, TRANSLITERATION_HEADER,
    UNIQUE_LIST_HEADER, UNIQUE_TOTAL_LABEL,
};
pub use analyzer::TextAnalyzer;
pub use effect::{AuditEvent, Effect};
pub use frequency::FrequencyTable;
pub use msg::Msg;
pub use state::{AppState, Status};
pub use token::tokenize;
pub use translit::{latin_for, transliterate};
pub use update::update;
pub use view_model::AppViewModel;
