//! Entry metadata: the lookup seam between helpers and whatever stores games
//!
//! Helpers only ever ask for a title, a body, or a named string field of one
//! entry. [`Catalog`] is the in-memory implementation used by the CLI.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArcadeError, Result};

/// Thumbnail URL field
pub const THUMBNAIL_URL: &str = "mabp_thumbnail_url";
/// Short description field
pub const DESCRIPTION: &str = "mabp_description";
/// Gameplay video URL field
pub const VIDEO_URL: &str = "mabp_video_url";
/// Number of screenshot slots per entry
pub const SCREENSHOT_SLOTS: u8 = 4;

/// Field name for screenshot `number` (1-based)
pub fn screenshot_field(number: u8) -> String {
    format!("mabp_screen{}_url", number)
}

/// Identifier of a game entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Read access to entry titles, bodies and metadata fields.
///
/// `None` means the entry or field is absent.
pub trait MetaSource {
    fn title(&self, id: EntryId) -> Option<String>;

    fn content(&self, id: EntryId) -> Option<String>;

    fn field(&self, id: EntryId, name: &str) -> Option<String>;

    fn contains(&self, id: EntryId) -> bool {
        self.title(id).is_some()
    }
}

/// One game as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "game")]
    games: Vec<CatalogEntry>,
}

/// In-memory [`MetaSource`] keyed by entry id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<EntryId, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a catalog from TOML text with `[[game]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::from_entries(file.games))
    }

    /// Parse a catalog from a JSON object with a `game` array
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(Self::from_entries(file.games))
    }

    /// Load a catalog file; `.json` files are JSON, anything else is TOML
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ArcadeError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        let catalog = parsed.map_err(|e| ArcadeError::InvalidCatalog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            if catalog.entries.contains_key(&entry.id) {
                tracing::warn!(id = %entry.id, "duplicate catalog entry, keeping the last one");
            }
            catalog.insert(entry);
        }
        catalog
    }
}

impl MetaSource for Catalog {
    fn title(&self, id: EntryId) -> Option<String> {
        self.entries.get(&id).map(|e| e.title.clone())
    }

    fn content(&self, id: EntryId) -> Option<String> {
        self.entries.get(&id).map(|e| e.content.clone())
    }

    fn field(&self, id: EntryId, name: &str) -> Option<String> {
        self.entries.get(&id)?.meta.get(name).cloned()
    }

    fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }
}
