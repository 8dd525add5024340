//! Common test utilities for building workflows and registries.
use rensa::prelude::*;
use rensa::registry::MemoryStore;

/// Opens a registry over an in-memory store (built-in catalog only).
#[allow(dead_code)]
pub fn open_registry() -> DefinitionRegistry<MemoryStore> {
    DefinitionRegistry::open(MemoryStore::default()).expect("Failed to open in-memory registry")
}

/// A minimal custom definition that passes schema validation.
#[allow(dead_code)]
pub fn custom_def(id: &str, label: &str) -> AgentDefinition {
    AgentDefinition::new(id, label, "🤖", "#336699")
        .with_category("Custom")
        .with_prompt_template("Do the thing.")
}

/// `A -> B -> C`, three built-in agent types.
#[allow(dead_code)]
pub fn linear_workflow() -> Workflow {
    let mut workflow = Workflow::new("Linear");
    workflow.add_invocation(Invocation::new("A", "planner"));
    workflow.add_invocation(Invocation::new("B", "coder"));
    workflow.add_invocation(Invocation::new("C", "qa"));
    workflow.add_dependency(Dependency::new("e1", "A", "B"));
    workflow.add_dependency(Dependency::new("e2", "B", "C"));
    workflow
}

/// `A -> B -> C -> A`: a single three-node cycle.
#[allow(dead_code)]
pub fn cyclic_workflow() -> Workflow {
    let mut workflow = linear_workflow();
    workflow.add_dependency(Dependency::new("e3", "C", "A"));
    workflow
}

/// Two parallel branches feeding a shared successor:
/// `A -> B`, `A -> C`, `B -> D`, `C -> D`.
#[allow(dead_code)]
pub fn diamond_workflow() -> Workflow {
    let mut workflow = Workflow::new("Diamond");
    workflow.add_invocation(Invocation::new("A", "planner"));
    workflow.add_invocation(Invocation::new("B", "coder"));
    workflow.add_invocation(Invocation::new("C", "security"));
    workflow.add_invocation(Invocation::new("D", "qa"));
    workflow.add_dependency(Dependency::new("e1", "A", "B"));
    workflow.add_dependency(Dependency::new("e2", "A", "C"));
    workflow.add_dependency(Dependency::new("e3", "B", "D"));
    workflow.add_dependency(Dependency::new("e4", "C", "D"));
    workflow
}
