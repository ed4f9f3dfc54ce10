use std::path::{Path, PathBuf};

use crate::view_model::AppViewModel;
use crate::AnalysisKind;

/// What the status line should say about the last thing that happened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Opened(PathBuf),
    Saved(PathBuf),
    Analyzed(AnalysisKind),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    editor: String,
    output: String,
    document_path: Option<PathBuf>,
    encoding: Option<String>,
    last_method: Option<AnalysisKind>,
    status: Status,
    modified: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            editor_text: self.editor.clone(),
            output_text: self.output.clone(),
            document_path: self.document_path.clone(),
            encoding: self.encoding.clone(),
            last_method: self.last_method,
            status: self.status.clone(),
            modified: self.modified,
            dirty: self.dirty,
        }
    }

    pub fn editor_text(&self) -> &str {
        &self.editor
    }

    pub fn output_text(&self) -> &str {
        &self.output
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    pub fn last_method(&self) -> Option<AnalysisKind> {
        self.last_method
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_editor(&mut self, text: String) -> bool {
        if self.editor == text {
            return false;
        }
        self.editor = text;
        self.modified = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn load_document(&mut self, path: PathBuf, text: String, encoding: String) {
        self.editor = text;
        self.document_path = Some(path.clone());
        self.encoding = Some(encoding);
        self.modified = false;
        self.set_status(Status::Opened(path));
    }

    pub(crate) fn document_saved(&mut self, path: PathBuf) {
        self.document_path = Some(path.clone());
        self.modified = false;
        self.set_status(Status::Saved(path));
    }

    pub(crate) fn show_report(&mut self, kind: AnalysisKind, report: String) {
        self.output = report;
        self.last_method = Some(kind);
        self.set_status(Status::Analyzed(kind));
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
        self.mark_dirty();
    }
}
