use super::{DEFAULT_MODEL, PipelineDocument};
use crate::linearizer::execution_order;
use crate::registry::{AgentDefinition, CatalogStore, DefinitionRegistry, Provenance};
use crate::workflow::Workflow;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Exports a workflow into a portable pipeline document.
///
/// The document's step list is the *linearized* agent-type sequence, not
/// the edge topology: the graph is first run through the linearizer and the
/// branch/merge shape is discarded. Overrides are keyed by agent type with
/// a first-seen-wins rule: when a workflow invokes the same agent type
/// twice with different overrides, only the first survives export.
pub fn to_document<S: CatalogStore>(
    workflow: &Workflow,
    registry: &DefinitionRegistry<S>,
) -> PipelineDocument {
    let order = execution_order(workflow);
    let ordered: Vec<_> = order
        .iter()
        .filter_map(|id| workflow.invocation(id))
        .collect();

    let agents: Vec<String> = ordered.iter().map(|inv| inv.agent_type.clone()).collect();

    let mut prompt_overrides: BTreeMap<String, String> = BTreeMap::new();
    let mut model_overrides: BTreeMap<String, String> = BTreeMap::new();
    for invocation in &ordered {
        if let Some(prompt) = invocation
            .prompt_override
            .as_deref()
            .filter(|p| !p.is_empty())
            && !prompt_overrides.contains_key(&invocation.agent_type)
        {
            prompt_overrides.insert(invocation.agent_type.clone(), prompt.to_string());
        }
        if let Some(model) = invocation
            .model_override
            .as_deref()
            .filter(|m| !m.is_empty() && *m != DEFAULT_MODEL)
            && !model_overrides.contains_key(&invocation.agent_type)
        {
            model_overrides.insert(invocation.agent_type.clone(), model.to_string());
        }
    }

    let custom_agents: Vec<AgentDefinition> = agents
        .iter()
        .unique()
        .filter_map(|agent_type| registry.find_by_id(agent_type))
        .filter(|def| def.provenance == Provenance::Custom)
        .cloned()
        .collect();

    PipelineDocument {
        name: workflow.name.clone(),
        agents,
        prompt_overrides,
        model_overrides,
        custom_agents,
    }
}
