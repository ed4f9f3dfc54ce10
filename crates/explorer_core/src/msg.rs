use std::path::PathBuf;

use crate::AnalysisKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The shell finished starting up.
    AppStarted,
    /// User replaced the editor buffer.
    EditorChanged(String),
    /// User picked a file to open.
    OpenRequested(PathBuf),
    /// A requested file was read and decoded.
    DocumentLoaded {
        path: PathBuf,
        text: String,
        encoding: String,
    },
    /// User asked to save the buffer, optionally under a new path.
    SaveRequested(Option<PathBuf>),
    /// The buffer was written to disk.
    DocumentSaved { path: PathBuf, bytes: u64 },
    /// Opening or saving a file failed.
    IoFailed { path: PathBuf, message: String },
    /// User picked an analysis from the menu.
    AnalysisRequested(AnalysisKind),
    /// User is closing the application.
    CloseRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
