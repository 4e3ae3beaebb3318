//! # Preference Store
//!
//! Tiny key-value persistence for visitor preferences, currently just the
//! dark-mode flag. Backed by `~/.folio/prefs.json`.
//!
//! The store is a capability trait so the TUI never touches the filesystem
//! directly: `FsPrefStore` for real runs, `MemoryPrefStore` for tests and
//! for graceful degradation when the home directory is unavailable.

use log::warn;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Preference key for the color scheme. The value is `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value storage for visitor preferences.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

// ============================================================================
// Filesystem store
// ============================================================================

/// Preferences persisted as a JSON object in `~/.folio/prefs.json`.
///
/// The file is read once at open; every `set` writes the whole map back
/// atomically (temp file + rename), so a crash can't leave a half-written
/// file behind.
pub struct FsPrefStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FsPrefStore {
    /// Opens the store at `~/.folio/prefs.json`.
    pub fn open_default() -> io::Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        let dir = home.join(".folio");
        fs::create_dir_all(&dir)?;
        Self::open(dir.join("prefs.json"))
    }

    /// Opens the store at an explicit path. A missing file is an empty
    /// store; a corrupt file is logged and treated as empty rather than
    /// losing the session to a bad byte.
    pub fn open(path: PathBuf) -> io::Result<Self> {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Corrupt preference file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, values })
    }

    fn persist(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PrefStore for FsPrefStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Non-persistent store, used in tests and when the real one can't open.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: HashMap<String, String>,
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Dark-mode helpers
// ============================================================================

/// True only when the stored value is exactly `"true"`. Absent or mangled
/// values mean light mode.
pub fn load_dark_mode(store: &dyn PrefStore) -> bool {
    store.get(DARK_MODE_KEY) == Some("true")
}

/// Persist the dark-mode flag. A write failure is logged and otherwise
/// ignored; losing a preference must never take the session down.
pub fn store_dark_mode(store: &mut dyn PrefStore, enabled: bool) {
    let value = if enabled { "true" } else { "false" };
    if let Err(e) = store.set(DARK_MODE_KEY, value) {
        warn!("Failed to persist dark mode preference: {}", e);
    }
}
