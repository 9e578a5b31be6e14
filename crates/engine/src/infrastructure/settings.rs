//! JSON-backed settings storage.
//!
//! Settings live in one JSON document. Keys are dotted paths, so
//! `"Towny.HideTowns"` reads `{"Towny": {"HideTowns": [...]}}`. A literal
//! top-level `"Towny.HideTowns"` key is accepted as well.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::infrastructure::ports::{SettingsError, SettingsRepo};

pub struct JsonSettingsRepo {
    path: Option<PathBuf>,
    document: RwLock<Value>,
}

impl JsonSettingsRepo {
    /// Settings with no keys set.
    pub fn empty() -> Self {
        Self::from_value(Value::Object(Default::default()))
    }

    pub fn from_value(document: Value) -> Self {
        Self {
            path: None,
            document: RwLock::new(document),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let document = read_document(&path)?;
        Ok(Self {
            path: Some(path),
            document: RwLock::new(document),
        })
    }

    /// Re-reads the backing file. A repo built from a value is left as is.
    pub fn reload(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let document = read_document(path)?;
        *self.document.write().unwrap_or_else(|e| e.into_inner()) = document;
        tracing::info!(path = %path.display(), "Reloaded settings");
        Ok(())
    }

    /// Replaces the whole document.
    pub fn replace(&self, document: Value) {
        *self.document.write().unwrap_or_else(|e| e.into_inner()) = document;
    }
}

impl SettingsRepo for JsonSettingsRepo {
    fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        let document = self.document.read().unwrap_or_else(|e| e.into_inner());
        let value = lookup(&document, key)?;

        let Some(items) = value.as_array() else {
            tracing::warn!(key = %key, "Setting is not a list; treating it as unset");
            return None;
        };

        let list = items
            .iter()
            .filter_map(|item| match item.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    tracing::warn!(key = %key, entry = %item, "Skipping non-string list entry");
                    None
                }
            })
            .collect();
        Some(list)
    }
}

fn read_document(path: &Path) -> Result<Value, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn lookup<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    let nested = key
        .split('.')
        .try_fold(document, |node, segment| node.get(segment));

    nested.or_else(|| document.get(key)).filter(|v| !v.is_null())
}
