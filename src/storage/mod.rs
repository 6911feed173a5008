pub mod json_backend;

use std::path::PathBuf;

use crate::{domain::book::Book, errors::BookError};

pub type Result<T> = std::result::Result<T, BookError>;

/// Outcome of a load: the decoded snapshot plus any fallback warnings the
/// backend raised while decoding it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub book: Book,
    pub warnings: Vec<String>,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing the snapshot slot.
pub trait StorageBackend: Send + Sync {
    /// Rewrites the whole snapshot blob, returning the slot path.
    fn save(&self, book: &Book) -> Result<PathBuf>;

    /// Loads the slot. A missing file yields a fresh default book; a damaged
    /// blob falls back field by field. Only IO-level failures surface here.
    fn load_or_default(&self) -> Result<LoadReport>;

    /// Backup file names, newest first.
    fn list_backups(&self) -> Result<Vec<String>>;
}

pub use json_backend::JsonStorage;
