//! Persisted key-value settings
//!
//! The shell reads and writes a handful of string entries, most notably the
//! left panel size. [`FileStore`] keeps them in
//! `~/.config/chatshell/settings.json` and rewrites the file on every set.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Key of the persisted left panel size
pub const LHS_SIZE_KEY: &str = "mx_lhs_size";

/// Left panel size used when nothing usable is persisted
pub const DEFAULT_LEFT_PANEL_SIZE: f32 = 350.0;

/// Initial compact timeline preference, before account data arrives
pub const COMPACT_LAYOUT_KEY: &str = "useCompactLayout";

/// String-keyed settings storage
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Errors loading or saving a [`FileStore`]
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "settings I/O error at {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings file {}: {}", path.display(), source)
            }
            SettingsError::Serialize(e) => write!(f, "failed to serialize settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
            SettingsError::Serialize(e) => Some(e),
        }
    }
}

/// In-memory settings, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// JSON file backed settings
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                SettingsError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        tracing::debug!("Opened settings at {}", path.display());
        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Open the default settings file, falling back to an empty store
    pub fn open_default() -> Option<Self> {
        let path = crate::config_paths::settings_file()?;
        match Self::open(&path) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("{}, starting with empty settings", e);
                Some(Self {
                    path,
                    entries: RefCell::default(),
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents =
            serde_json::to_string_pretty(&*self.entries.borrow()).map_err(SettingsError::Serialize)?;
        std::fs::write(&self.path, contents).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist setting {}: {}", key, e);
        }
    }
}

/// Integer prefix of a persisted number: optional sign, then leading digits
///
/// `"500px"` reads as 500; `"abc"` and `""` read as nothing.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let number: i64 = digits[..end].parse().ok()?;
    Some(if negative { -number } else { number })
}

/// The persisted left panel size, or `fallback` when absent or malformed
pub fn read_left_panel_size(store: &dyn SettingsStore, fallback: f32) -> f32 {
    let Some(raw) = store.get(LHS_SIZE_KEY) else {
        return fallback;
    };
    match parse_int_prefix(&raw) {
        Some(size) => size as f32,
        None => {
            tracing::debug!(value = %raw, "ignoring malformed persisted panel size");
            fallback
        }
    }
}

/// A boolean entry; anything but `"true"` reads as false
pub fn read_flag(store: &dyn SettingsStore, key: &str) -> bool {
    store.get(key).is_some_and(|v| v == "true")
}

pub fn write_left_panel_size(store: &dyn SettingsStore, size: f32) {
    store.set(LHS_SIZE_KEY, &format!("{}", size.round() as i64));
}
