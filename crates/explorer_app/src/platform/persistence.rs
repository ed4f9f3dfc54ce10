use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use explorer_core::AnalysisKind;
use explorer_engine::{write_atomically, PersistError};
use explorer_logging::{explorer_info, explorer_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the app remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) struct Settings {
    #[serde(default)]
    pub last_document: Option<PathBuf>,
    #[serde(default)]
    pub last_method: Option<String>,
    #[serde(default)]
    pub last_run_utc: Option<String>,
}

impl Settings {
    pub(crate) fn last_method(&self) -> Option<AnalysisKind> {
        let raw = self.last_method.as_deref()?;
        match raw.parse() {
            Ok(kind) => Some(kind),
            Err(err) => {
                explorer_warn!("Ignoring remembered method: {}", err);
                None
            }
        }
    }

    pub(crate) fn remember(&mut self, document: Option<&Path>, method: AnalysisKind) {
        if let Some(path) = document {
            self.last_document = Some(path.to_path_buf());
        }
        self.last_method = Some(method.key().to_string());
        self.last_run_utc = Some(Utc::now().to_rfc3339());
    }
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write settings: {0}")]
    Persist(#[from] PersistError),
}

/// Loads settings, falling back to defaults when the file is missing or unreadable.
pub(crate) fn load_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            explorer_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            explorer_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            explorer_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

pub(crate) fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(settings, pretty)?;
    write_atomically(path, &content)?;
    Ok(())
}
