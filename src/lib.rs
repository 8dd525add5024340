//! # Rensa - Agent Pipeline Graph Engine
//!
//! **Rensa** is the graph engine behind a visual agent-pipeline editor. It models a
//! pipeline as a directed graph of named agent steps, validates the graph's structure
//! (cycles, disconnected steps, bad references), deterministically linearizes it into
//! an execution order, and converts it to and from a compact, portable pipeline
//! document that can be saved, shared, and reloaded.
//!
//! ## Core Workflow
//!
//! The engine is a pure planning/validation library. It never executes agents and
//! never moves data between steps; edges encode ordering only. The primary workflow is:
//!
//! 1.  **Open a registry**: load the built-in agent catalog and any persisted custom
//!     definitions through a [`CatalogStore`](registry::CatalogStore) implementation.
//! 2.  **Build a workflow**: the editor creates [`Invocation`](workflow::Invocation)
//!     nodes and [`Dependency`](workflow::Dependency) edges at will. Invalid graphs
//!     are tolerated, not forbidden.
//! 3.  **Validate**: run [`validate`](validator::validate) after every mutation to get
//!     a live [`ValidationReport`](validator::ValidationReport) of errors, warnings,
//!     and stats.
//! 4.  **Linearize**: [`execution_order`](linearizer::execution_order) turns any graph
//!     into a total, deterministic step order; even cyclic graphs never fail.
//! 5.  **Export / import**: [`to_document`](document::to_document) and
//!     [`from_document`](document::from_document) round-trip a workflow through the
//!     portable [`PipelineDocument`](document::PipelineDocument) format.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rensa::prelude::*;
//! use rensa::registry::MemoryStore;
//!
//! fn main() -> Result<()> {
//!     let registry = DefinitionRegistry::open(MemoryStore::default())?;
//!
//!     let mut workflow = Workflow::new("Release pipeline");
//!     workflow.add_invocation(Invocation::new("plan", "planner"));
//!     workflow.add_invocation(Invocation::new("build", "coder"));
//!     workflow.add_invocation(Invocation::new("check", "qa"));
//!     workflow.add_dependency(Dependency::new("e1", "plan", "build"));
//!     workflow.add_dependency(Dependency::new("e2", "build", "check"));
//!
//!     let report = validate(&workflow, &registry);
//!     if !report.valid {
//!         for finding in &report.errors {
//!             eprintln!("error: {}", finding.message);
//!         }
//!         return Ok(());
//!     }
//!
//!     let order = execution_order(&workflow);
//!     println!("execution order: {:?}", order);
//!
//!     let doc = to_document(&workflow, &registry);
//!     println!("{}", doc.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod linearizer;
pub mod prelude;
pub mod registry;
pub mod validator;
pub mod workflow;
