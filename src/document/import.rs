use super::{
    COLUMN_SPACING, GRID_COLUMNS, GRID_ORIGIN_X, GRID_ORIGIN_Y, PipelineDocument, ROW_SPACING,
};
use crate::error::StoreError;
use crate::registry::{CatalogStore, DefinitionRegistry};
use crate::workflow::{Dependency, Invocation, Workflow};

/// A non-fatal problem encountered while importing a document.
#[derive(Debug, Clone)]
pub struct ImportWarning {
    /// The agent-type reference that could not be resolved.
    pub agent_type: String,
    pub message: String,
}

/// The result of a successful import: the reconstructed workflow plus any
/// per-entry warnings collected along the way.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub workflow: Workflow,
    pub warnings: Vec<ImportWarning>,
}

/// Imports a pipeline document into a workflow, registering any embedded
/// custom definitions as a side effect.
///
/// Embedded definitions are added (and persisted) only when their id is not
/// already known; an imported definition never overwrites a pre-existing
/// local one of the same id. Agent-type references that still resolve to
/// nothing are skipped with a warning each; the import as a whole only
/// fails on a store error while persisting newly imported definitions.
///
/// The reconstructed workflow is a plain chain: one invocation per resolved
/// reference in document order, each depending on its predecessor, laid out
/// on a fixed grid. The original branch/merge topology is not recoverable
/// from the document format.
pub fn from_document<S: CatalogStore>(
    doc: &PipelineDocument,
    registry: &mut DefinitionRegistry<S>,
) -> Result<ImportOutcome, StoreError> {
    for embedded in &doc.custom_agents {
        if registry.find_by_id(&embedded.id).is_none() {
            // Schema-invalid embedded records are rejected by `add`; their
            // references then simply fail to resolve below.
            registry.add(embedded.clone())?;
        }
    }

    let mut workflow = Workflow::new(doc.name.clone());
    let mut warnings = Vec::new();

    for agent_type in &doc.agents {
        if registry.find_by_id(agent_type).is_none() {
            warnings.push(ImportWarning {
                agent_type: agent_type.clone(),
                message: format!("Unknown agent type '{}'; step skipped", agent_type),
            });
            continue;
        }

        let index = workflow.invocations.len();
        let column = index % GRID_COLUMNS;
        let row = index / GRID_COLUMNS;

        let mut invocation = Invocation::new(format!("inv-{}", index), agent_type.clone()).at(
            GRID_ORIGIN_X + column as f64 * COLUMN_SPACING,
            GRID_ORIGIN_Y + row as f64 * ROW_SPACING,
        );
        invocation.prompt_override = doc.prompt_overrides.get(agent_type).cloned();
        invocation.model_override = doc.model_overrides.get(agent_type).cloned();
        workflow.add_invocation(invocation);
    }

    for i in 1..workflow.invocations.len() {
        let dependency = Dependency::new(
            format!("dep-{}", i - 1),
            workflow.invocations[i - 1].id.clone(),
            workflow.invocations[i].id.clone(),
        );
        workflow.add_dependency(dependency);
    }

    Ok(ImportOutcome { workflow, warnings })
}
