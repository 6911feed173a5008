use std::path::{Path, PathBuf};

use crate::domain::book::{Book, CURRENT_SCHEMA_VERSION};
use crate::errors::BookError;
use crate::storage::{LoadReport, StorageBackend};

/// Metadata describing the outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadMetadata {
    pub warnings: Vec<String>,
    pub path: PathBuf,
    pub schema_version: u8,
}

/// Facade that owns the live snapshot and coordinates persistence. The shell
/// holds exactly one of these, reads it once at startup, and recomputes the
/// derived views after every mutation it applies through `with_book_mut`.
pub struct BookManager {
    pub current: Option<Book>,
    current_path: Option<PathBuf>,
    storage: Box<dyn StorageBackend>,
}

impl BookManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: None,
            current_path: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Reads the snapshot slot. Field-level fallback happens inside the
    /// backend; a snapshot from a newer schema is refused.
    pub fn load(&mut self) -> Result<LoadMetadata, BookError> {
        let report = self.storage.load_or_default()?;
        self.ensure_schema_support(report.book.schema_version)?;
        let LoadReport {
            book,
            warnings,
            path,
        } = report;
        let schema_version = book.schema_version;
        self.current = Some(book);
        self.current_path = Some(path.clone());
        Ok(LoadMetadata {
            warnings,
            path,
            schema_version,
        })
    }

    /// Rewrites the whole blob from the current snapshot.
    pub fn save(&mut self) -> Result<PathBuf, BookError> {
        let book = self
            .current
            .as_ref()
            .ok_or_else(|| BookError::Persistence("no book loaded".into()))?;
        let path = self.storage.save(book)?;
        self.current_path = Some(path.clone());
        Ok(path)
    }

    /// Applies a mutation and immediately persists the result, so the stored
    /// blob never lags the in-memory snapshot.
    pub fn with_book_mut<T>(&mut self, op: impl FnOnce(&mut Book) -> T) -> Result<T, BookError> {
        let book = self
            .current
            .as_mut()
            .ok_or_else(|| BookError::Persistence("no book loaded".into()))?;
        let out = op(book);
        let path = self.storage.save(book)?;
        self.current_path = Some(path);
        Ok(out)
    }

    pub fn set_current(&mut self, book: Book) {
        self.current = Some(book);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.current_path = None;
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    fn ensure_schema_support(&self, schema_version: u8) -> Result<(), BookError> {
        if schema_version > CURRENT_SCHEMA_VERSION {
            return Err(BookError::Persistence(format!(
                "book schema v{} is newer than supported v{}",
                schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}
