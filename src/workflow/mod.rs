//! The plain workflow graph data model: invocations (nodes), dependencies
//! (edges), and the named workflow that owns them.
//!
//! The model is deliberately permissive. Nothing here enforces that an edge
//! references existing invocations or that the graph is acyclic; the editor
//! mutates these structures at will and the validator reports violations as
//! data. Insertion order of `invocations` and `dependencies` is creation
//! order and is load-bearing: the linearizer uses it to break ties
//! deterministically.

use serde::{Deserialize, Serialize};

/// Canvas position of an invocation. Presentation-only, no semantic effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One configured agent step in a workflow graph.
///
/// `agent_type` references an [`AgentDefinition`](crate::registry::AgentDefinition)
/// by id; the reference is resolved lazily (by the validator for stats, by the
/// codec on export/import) and may dangle on a malformed graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    /// Opaque id, unique within the owning workflow.
    pub id: String,
    /// Id of the agent definition this step instantiates.
    pub agent_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_override: Option<String>,
    #[serde(default)]
    pub layout: LayoutPoint,
}

impl Invocation {
    pub fn new(id: impl Into<String>, agent_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            agent_type: agent_type.into(),
            prompt_override: None,
            model_override: None,
            layout: LayoutPoint::default(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_override = Some(prompt.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_override = Some(model.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.layout = LayoutPoint::new(x, y);
        self
    }
}

/// A directed ordering edge: `source` should run before `target`.
///
/// This is not a data channel; no payload flows along it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Dependency {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A named graph of invocations and the dependencies between them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub invocations: Vec<Invocation>,
    pub dependencies: Vec<Dependency>,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invocations: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn add_invocation(&mut self, invocation: Invocation) {
        self.invocations.push(invocation);
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    /// Looks up an invocation by id.
    pub fn invocation(&self, id: &str) -> Option<&Invocation> {
        self.invocations.iter().find(|inv| inv.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}
