//! The portable pipeline document and its codec: exporting a workflow plus
//! registry context into a compact, self-describing JSON document, and
//! importing such a document back into a workflow (with registry side
//! effects for embedded custom definitions).
//!
//! The document format is intentionally lossy: it stores the *linearized*
//! sequence of agent types, not the original edge topology, and it keys
//! overrides by agent type rather than by node. Both behaviors are part of
//! the format contract and are asserted as such in the tests.

mod export;
mod import;

pub use export::to_document;
pub use import::{ImportOutcome, ImportWarning, from_document};

use crate::error::DocumentError;
use crate::registry::AgentDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The model identifier meaning "no explicit choice". Overrides equal to it
/// are not worth exporting.
pub const DEFAULT_MODEL: &str = "default";

/// Grid geometry for imported invocations. Documents carry no layout, so
/// import lays the chain out on a fixed three-column grid.
pub(crate) const GRID_COLUMNS: usize = 3;
pub(crate) const GRID_ORIGIN_X: f64 = 120.0;
pub(crate) const GRID_ORIGIN_Y: f64 = 120.0;
pub(crate) const COLUMN_SPACING: f64 = 300.0;
pub(crate) const ROW_SPACING: f64 = 180.0;

/// The portable pipeline document: a named, ordered list of agent-type
/// references plus per-type overrides and any embedded custom definitions.
///
/// Sections with no entries are omitted from the JSON entirely rather than
/// emitted as empty collections; override maps use `BTreeMap` so exported
/// key order is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDocument {
    pub name: String,
    /// Agent-type references in execution order.
    pub agents: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prompt_overrides: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub model_overrides: BTreeMap<String, String>,
    /// Full records for every custom definition the sequence references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_agents: Vec<AgentDefinition>,
}

impl PipelineDocument {
    /// Parses a document from JSON text. This is the codec's only hard
    /// failure: a payload that is not the expected structure has nothing to
    /// salvage.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(text).map_err(|e| DocumentError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}
