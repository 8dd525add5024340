//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the rensa
//! crate. Import this module to get the whole editor-facing surface without
//! importing each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use rensa::prelude::*;
//! use rensa::registry::FileStore;
//!
//! # fn run_example() -> Result<()> {
//! let mut registry = DefinitionRegistry::open(FileStore::new("data/registry"))?;
//!
//! let text = std::fs::read_to_string("data/pipeline.json")?;
//! let doc = PipelineDocument::from_json(&text)?;
//! let outcome = from_document(&doc, &mut registry)?;
//!
//! let report = validate(&outcome.workflow, &registry);
//! println!("valid: {}", report.valid);
//! println!("order: {:?}", execution_order(&outcome.workflow));
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::workflow::{Dependency, Invocation, LayoutPoint, Workflow};

// Registry
pub use crate::registry::{AgentDefinition, DefinitionRegistry, Provenance, SearchScope};

// Validation
pub use crate::validator::{
    Finding, FindingKind, Severity, ValidationReport, WorkflowStats, validate,
};

// Linearization
pub use crate::linearizer::execution_order;

// Document codec
pub use crate::document::{
    DEFAULT_MODEL, ImportOutcome, ImportWarning, PipelineDocument, from_document, to_document,
};

// Error types
pub use crate::error::{DocumentError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
