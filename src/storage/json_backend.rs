use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{
    core::utils::{app_data_dir, backups_dir_in, book_file_in, ensure_dir},
    domain::book::Book,
};

use super::{LoadReport, Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Stores the whole snapshot in one JSON slot file, staging every write
/// through a temp file and keeping timestamped backups of the previous blob.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    slot: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let backups_dir = backups_dir_in(&root);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            slot: book_file_in(&root),
            backups_dir,
            root,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn backup_path(&self, backup_name: &str) -> PathBuf {
        self.backups_dir.join(backup_name)
    }

    fn backup_existing_slot(&self) -> Result<()> {
        if !self.slot.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!("book_{}.{}", timestamp, BACKUP_EXTENSION);
        fs::copy(&self.slot, self.backups_dir.join(backup_name))?;
        self.prune_backups()?;
        Ok(())
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        for name in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backups_dir.join(name));
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, book: &Book) -> Result<PathBuf> {
        self.backup_existing_slot()?;
        let json = serde_json::to_string_pretty(book)?;
        let tmp = tmp_path(&self.slot);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.slot)?;
        debug!("snapshot saved to {}", self.slot.display());
        Ok(self.slot.clone())
    }

    fn load_or_default(&self) -> Result<LoadReport> {
        if !self.slot.exists() {
            debug!("no snapshot slot yet, starting with a fresh book");
            return Ok(LoadReport {
                book: Book::default(),
                warnings: Vec::new(),
                path: self.slot.clone(),
            });
        }
        let data = fs::read_to_string(&self.slot)?;
        let (book, warnings) = decode_with_fallback(&data);
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(LoadReport {
            book,
            warnings,
            path: self.slot.clone(),
        })
    }

    fn list_backups(&self) -> Result<Vec<String>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }
}

/// Decodes a snapshot blob, substituting defaults field by field so one
/// damaged collection never takes the whole book down with it.
fn decode_with_fallback(data: &str) -> (Book, Vec<String>) {
    let mut warnings = Vec::new();
    let value: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        Err(err) => {
            warnings.push(format!("snapshot blob unreadable, starting fresh: {err}"));
            return (Book::default(), warnings);
        }
    };
    if let Ok(book) = serde_json::from_value::<Book>(value.clone()) {
        return (book, warnings);
    }
    let mut book = Book::default();
    if let Some(name) = value.get("name").and_then(Value::as_str) {
        book.name = name.to_string();
    }
    book.transactions = decode_field(&value, "transactions", &mut warnings);
    book.debts = decode_field(&value, "debts", &mut warnings);
    book.shopping_items = decode_field(&value, "shopping_items", &mut warnings);
    book.profile = decode_field(&value, "profile", &mut warnings);
    (book, warnings)
}

fn decode_field<T>(value: &Value, field: &str, warnings: &mut Vec<String>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match value.get(field) {
        Some(raw) => match serde_json::from_value(raw.clone()) {
            Ok(decoded) => decoded,
            Err(err) => {
                warnings.push(format!(
                    "snapshot field `{field}` malformed, using default: {err}"
                ));
                T::default()
            }
        },
        None => T::default(),
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let raw = trimmed.strip_prefix("book_")?;
    NaiveDateTime::parse_from_str(raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
