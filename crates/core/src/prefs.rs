use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const KEY_THEME: &str = "theme";
pub const KEY_COLOR_VARIANT: &str = "colorVariant";

/// Write-through string key-value store backed by a small JSON file. Every
/// `set` persists immediately; there is no batching. A missing or unreadable
/// file degrades to an empty store so the app falls back to defaults.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preference directory {}", parent.display())
            })?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}
