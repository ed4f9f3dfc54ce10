use std::path::PathBuf;

use crate::{AnalysisKind, Status};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub editor_text: String,
    /// Read-only output panel; replaced by every analysis.
    pub output_text: String,
    pub document_path: Option<PathBuf>,
    pub encoding: Option<String>,
    pub last_method: Option<AnalysisKind>,
    pub status: Status,
    /// Buffer differs from what was last opened or saved.
    pub modified: bool,
    pub dirty: bool,
}
