//! The mutable registry of agent definitions: a fixed built-in catalog, a
//! persisted custom catalog, and a persisted favorites set.
//!
//! The registry is the only stateful part of the engine. It is initialized
//! from a [`CatalogStore`] when opened and writes back through the store
//! synchronously after every mutation; everything else in the crate is a
//! pure function over passed-in data.

mod builtin;
mod store;

pub use store::{CUSTOM_CATALOG_KEY, CatalogStore, FAVORITES_KEY, FileStore, MemoryStore};

use crate::error::StoreError;
use builtin::builtin_catalog;
use serde::{Deserialize, Serialize};

/// Whether a definition originates from the immutable built-in catalog or
/// the user-maintained custom catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provenance {
    Builtin,
    #[default]
    Custom,
}

/// The reusable, named template that an invocation references by id.
///
/// Provenance is not serialized: persisted records and document-embedded
/// records are custom by construction, and built-ins only exist in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    /// Unique, stable key.
    pub id: String,
    pub label: String,
    /// Display glyph shown on the node.
    pub icon: String,
    /// Six-hex-digit color string, e.g. `#3B82F6`.
    pub color: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub default_prompt_template: String,
    #[serde(skip)]
    pub provenance: Provenance,
}

impl AgentDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            color: color.into(),
            category: String::new(),
            default_prompt_template: String::new(),
            provenance: Provenance::Custom,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.default_prompt_template = template.into();
        self
    }

    /// Checks the definition against the catalog schema: `id`, `label` and
    /// `icon` must be non-empty, `color` must be a `#RRGGBB` hex string.
    pub fn schema_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.label.is_empty()
            && !self.icon.is_empty()
            && is_hex_color(&self.color)
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Which catalogs a [`DefinitionRegistry::search`] runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Builtin,
    Custom,
}

/// Process-wide agent definition state, backed by an injected store.
///
/// Built-in definitions are loaded once at open and never change. Custom
/// definitions and the favorites set are read from the store at open and
/// written back immediately after every mutating call.
pub struct DefinitionRegistry<S: CatalogStore> {
    store: S,
    builtin: Vec<AgentDefinition>,
    custom: Vec<AgentDefinition>,
    favorites: Vec<String>,
}

impl<S: CatalogStore> DefinitionRegistry<S> {
    /// Opens a registry over the given store, loading the built-in catalog
    /// and any persisted custom definitions and favorites.
    ///
    /// Persisted custom records that fail to deserialize or that violate the
    /// schema are silently dropped: a corrupted record must not break
    /// startup. An unparseable payload as a whole yields an empty catalog
    /// for the same reason. Store-level read failures do propagate.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let custom = match store.read(CUSTOM_CATALOG_KEY)? {
            Some(text) => load_custom_records(&text),
            None => Vec::new(),
        };
        let favorites = match store.read(FAVORITES_KEY)? {
            Some(text) => serde_json::from_str::<Vec<String>>(&text).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(Self {
            store,
            builtin: builtin_catalog(),
            custom,
            favorites,
        })
    }

    pub fn list_builtin(&self) -> &[AgentDefinition] {
        &self.builtin
    }

    pub fn list_custom(&self) -> &[AgentDefinition] {
        &self.custom
    }

    /// The built-in catalog followed by the custom catalog.
    pub fn list_all(&self) -> Vec<&AgentDefinition> {
        self.builtin.iter().chain(self.custom.iter()).collect()
    }

    /// Adds or replaces a custom definition and persists the catalog.
    ///
    /// Returns `Ok(false)` without side effect if the definition violates
    /// the schema. An existing custom entry with the same id is replaced;
    /// an explicit user edit is allowed to overwrite.
    pub fn add(&mut self, mut def: AgentDefinition) -> Result<bool, StoreError> {
        if !def.schema_valid() {
            return Ok(false);
        }
        def.provenance = Provenance::Custom;
        if let Some(existing) = self.custom.iter_mut().find(|d| d.id == def.id) {
            *existing = def;
        } else {
            self.custom.push(def);
        }
        self.persist_custom()?;
        Ok(true)
    }

    /// Removes a custom definition by id and persists the catalog.
    ///
    /// Built-in ids are never removable; deleting one is a no-op returning
    /// `Ok(false)`.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(pos) = self.custom.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        self.custom.remove(pos);
        self.persist_custom()?;
        Ok(true)
    }

    /// Looks up a definition by id, built-in catalog first.
    pub fn find_by_id(&self, id: &str) -> Option<&AgentDefinition> {
        self.builtin
            .iter()
            .find(|d| d.id == id)
            .or_else(|| self.custom.iter().find(|d| d.id == id))
    }

    /// Case-insensitive substring search over label, id, category, and the
    /// default prompt template. An empty query returns the whole scope;
    /// there is no minimum query length.
    pub fn search(&self, query: &str, scope: SearchScope) -> Vec<&AgentDefinition> {
        let needle = query.to_lowercase();
        let defs: Vec<&AgentDefinition> = match scope {
            SearchScope::All => self.list_all(),
            SearchScope::Builtin => self.builtin.iter().collect(),
            SearchScope::Custom => self.custom.iter().collect(),
        };
        if needle.is_empty() {
            return defs;
        }
        defs.into_iter()
            .filter(|d| {
                d.label.to_lowercase().contains(&needle)
                    || d.id.to_lowercase().contains(&needle)
                    || d.category.to_lowercase().contains(&needle)
                    || d.default_prompt_template.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Toggles an id in the favorites set, persists it, and returns the new
    /// membership state. The set only stores ids, so favoriting an id with
    /// no catalog entry is permitted.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let now_favorite = match self.favorites.iter().position(|f| f == id) {
            Some(pos) => {
                self.favorites.remove(pos);
                false
            }
            None => {
                self.favorites.push(id.to_string());
                true
            }
        };
        self.persist_favorites()?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Resolves the favorites set against the catalogs. Ids with no catalog
    /// entry stay in the set but are not listed.
    pub fn list_favorites(&self) -> Vec<&AgentDefinition> {
        self.favorites
            .iter()
            .filter_map(|id| self.find_by_id(id))
            .collect()
    }

    fn persist_custom(&mut self) -> Result<(), StoreError> {
        let text = serde_json::to_string(&self.custom).map_err(|e| StoreError::Write {
            key: CUSTOM_CATALOG_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.write(CUSTOM_CATALOG_KEY, &text)
    }

    fn persist_favorites(&mut self) -> Result<(), StoreError> {
        let text = serde_json::to_string(&self.favorites).map_err(|e| StoreError::Write {
            key: FAVORITES_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.write(FAVORITES_KEY, &text)
    }
}

/// Deserializes the persisted custom catalog, dropping records that fail to
/// parse or violate the schema.
fn load_custom_records(text: &str) -> Vec<AgentDefinition> {
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(text) else {
        return Vec::new();
    };
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<AgentDefinition>(value).ok())
        .filter(|def| def.schema_valid())
        .map(|mut def| {
            def.provenance = Provenance::Custom;
            def
        })
        .collect()
}
