//! Persisted editor state and the storage collaborators hosts use to keep it
//! between sessions.
//!
//! The persisted shape is flat camelCase JSON:
//!
//! ```json
//! { "gridState": { ... }, "codeFormat": "embedded",
//!   "withStyledBorders": true, "withTailwind": false }
//! ```
//!
//! Missing or malformed data is never an error for callers: [`StateStorage::load`]
//! logs the problem and reports "no persisted state".

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::{transition, GridAction, GridState};

/// Errors that can occur while saving state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The internal lock was poisoned by a panicking thread.
    #[error("Lock poisoned")]
    LockPoisoned,
    /// An I/O error occurred during persistence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Output format for technologies that can emit a standalone document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeFormat {
    /// A component snippet (JSX).
    #[default]
    #[serde(alias = "jsx")]
    Embedded,
    /// A complete HTML document.
    #[serde(alias = "html")]
    Standalone,
}

impl CodeFormat {
    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Standalone => "standalone",
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "embedded" | "jsx" => Ok(Self::Embedded),
            "standalone" | "html" => Ok(Self::Standalone),
            other => Err(format!("unknown code format: {other}")),
        }
    }
}

/// Everything the editor remembers between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// The layout.
    pub grid_state: GridState,
    /// Preferred output format.
    pub code_format: CodeFormat,
    /// Whether generated items carry a visible border.
    pub with_styled_borders: bool,
    /// Whether generated code prefers utility classes where supported.
    pub with_tailwind: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            grid_state: GridState::default(),
            code_format: CodeFormat::Embedded,
            with_styled_borders: true,
            with_tailwind: false,
        }
    }
}

impl PersistedState {
    /// Wrap a grid state with default output preferences.
    #[must_use]
    pub fn new(grid_state: GridState) -> Self {
        Self {
            grid_state,
            ..Self::default()
        }
    }

    /// Re-fit stored items into the stored config, dropping any that are
    /// invalid or overlapping. Data written by other hosts is not trusted.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let config = self.grid_state.config;
        let fitted = transition(&self.grid_state, &GridAction::SetConfig(config));
        if fitted != self.grid_state {
            tracing::warn!(
                "Persisted grid was inconsistent; kept {} of {} items",
                fitted.item_count(),
                self.grid_state.item_count()
            );
        }
        self.grid_state = fitted;
        self
    }

    /// Parse persisted JSON, sanitizing the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the persisted shape.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let state: Self = serde_json::from_str(json)?;
        Ok(state.sanitized())
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Somewhere persisted state can be loaded from and saved to.
pub trait StateStorage {
    /// Load the persisted state, or `None` if there is none or it is unreadable.
    fn load(&self) -> Option<PersistedState>;

    /// Save the state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state could not be written.
    fn save(&self, state: &PersistedState) -> Result<(), StoreError>;

    /// Load the persisted state, falling back to defaults.
    fn load_or_default(&self) -> PersistedState {
        self.load().unwrap_or_default()
    }
}

/// State kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a storage backed by the file at `path`. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStorage for FileStorage {
    fn load(&self) -> Option<PersistedState> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No persisted state at {}", self.path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read persisted state {}: {e}", self.path.display());
                return None;
            }
        };
        match PersistedState::from_json(&contents) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted state {}: {e}", self.path.display());
                None
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, state.to_json()?)?;
        tracing::debug!("Persisted state to {}", self.path.display());
        Ok(())
    }
}

/// State kept in memory as serialized JSON, for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    json: RwLock<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-loaded with raw JSON, which may be malformed.
    #[must_use]
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: RwLock::new(Some(json.into())),
        }
    }

    /// Raw JSON last saved, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.json.read().ok().and_then(|json| json.clone())
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Option<PersistedState> {
        let json = self.raw()?;
        match PersistedState::from_json(&json) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted state: {e}");
                None
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        let json = state.to_json()?;
        let mut slot = self.json.write().map_err(|_| StoreError::LockPoisoned)?;
        *slot = Some(json);
        Ok(())
    }
}
