//! TextExplorer engine: document IO for the app shell.
mod decode;
mod document;
mod persist;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use document::{DocumentError, DocumentStore, FsDocumentStore, LoadedDocument};
pub use persist::{ensure_dir, write_atomically, AtomicFileWriter, PersistError};
