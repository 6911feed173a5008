use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::core::utils::{app_data_dir, config_file_in, ensure_dir};
use crate::errors::BookError;

const TMP_SUFFIX: &str = "tmp";

/// Application-level settings the shells read at startup. Distinct from the
/// profile, which lives inside the snapshot itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_endpoint: Option<String>,
    #[serde(default = "Config::default_timeout_secs")]
    pub insight_timeout_secs: u64,
}

impl Config {
    pub fn default_timeout_secs() -> u64 {
        15
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "BDT".into(),
            insight_endpoint: None,
            insight_timeout_secs: Self::default_timeout_secs(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BookError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BookError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, BookError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unreadable. Never an error state for the caller.
    pub fn load(&self) -> Result<Config, BookError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&data) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("configuration malformed, using defaults: {err}");
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BookError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
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

fn write_atomic(path: &Path, data: &str) -> Result<(), BookError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
