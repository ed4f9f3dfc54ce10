use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use explorer_logging::explorer_debug;
use thiserror::Error;

use crate::decode::{decode_text, DecodeError};
use crate::persist::{write_atomically, PersistError};

/// A document read from disk and decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub text: String,
    pub encoding_label: String,
    pub byte_len: u64,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Where the editor buffer is loaded from and saved to.
pub trait DocumentStore {
    fn load(&self, path: &Path) -> Result<LoadedDocument, DocumentError>;

    /// Saves `contents` as UTF-8 and returns the number of bytes written.
    fn save(&self, path: &Path, contents: &str) -> Result<u64, DocumentError>;
}

/// Documents on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn load(&self, path: &Path) -> Result<LoadedDocument, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = decode_text(&bytes)?;
        explorer_debug!(
            "Decoded {:?}: {} bytes as {}",
            path,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(LoadedDocument {
            path: path.to_path_buf(),
            text: decoded.text,
            encoding_label: decoded.encoding_label,
            byte_len: bytes.len() as u64,
        })
    }

    fn save(&self, path: &Path, contents: &str) -> Result<u64, DocumentError> {
        let written = write_atomically(path, contents)?;
        explorer_debug!("Wrote {} bytes to {:?}", written, path);
        Ok(written)
    }
}
