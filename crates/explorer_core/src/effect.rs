use std::fmt;
use std::path::PathBuf;

/// Side effects requested by [`crate::update`] and carried out by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDocument { path: PathBuf },
    SaveDocument { path: PathBuf, contents: String },
    Audit(AuditEvent),
    Quit,
}

/// Something worth writing to the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    AppStarted,
    AppClosing,
    DocumentOpened { path: PathBuf },
    DocumentSaved { path: PathBuf },
    OperationPerformed { method: &'static str },
    ReportProduced { report: String },
    IoFailed { path: PathBuf, message: String },
}

impl AuditEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, AuditEvent::IoFailed { .. })
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::AppStarted => write!(f, "Application started."),
            AuditEvent::AppClosing => write!(f, "Application closing."),
            AuditEvent::DocumentOpened { path } => write!(f, "Opened file: {}", path.display()),
            AuditEvent::DocumentSaved { path } => write!(f, "Saved file: {}", path.display()),
            AuditEvent::OperationPerformed { method } => {
                write!(f, "Performed operation: {method}")
            }
            AuditEvent::ReportProduced { report } => {
                write!(f, "Text processing result: {report}")
            }
            AuditEvent::IoFailed { path, message } => {
                write!(f, "I/O failure on {}: {message}", path.display())
            }
        }
    }
}
