//! The structural validator: runs a fixed series of independent checks over
//! a workflow and returns every finding as data in a [`ValidationReport`].
//!
//! Nothing here is ever thrown. The editor calls [`validate`] after every
//! mutation and decides for itself whether to block on the findings; an
//! invalid graph is a reportable state, not a failure.

mod report;

pub use report::{Finding, FindingKind, Severity, ValidationReport, WorkflowStats};

use crate::registry::{CatalogStore, DefinitionRegistry, Provenance};
use crate::workflow::Workflow;
use ahash::{AHashMap, AHashSet};

/// Validates a workflow's structure and returns the full report.
///
/// Checks run in a fixed order and accumulate findings without
/// short-circuiting, except that an empty workflow returns immediately:
/// unknown edge endpoints, cycles, disconnected invocations, missing agent
/// types, duplicate dependencies, and finally summary stats. The registry
/// is only consulted for the stats (built-in vs custom resolution).
pub fn validate<S: CatalogStore>(
    workflow: &Workflow,
    registry: &DefinitionRegistry<S>,
) -> ValidationReport {
    if workflow.invocations.is_empty() {
        let finding = Finding::error(
            FindingKind::EmptyWorkflow,
            "Workflow contains no invocations",
            Vec::new(),
        );
        return ValidationReport::from_findings(vec![finding], WorkflowStats::default());
    }

    let mut findings = Vec::new();
    let index = GraphIndex::build(workflow);

    check_unknown_endpoints(workflow, &index, &mut findings);
    check_cycles(workflow, &index, &mut findings);
    check_disconnected(workflow, &mut findings);
    check_agent_types(workflow, &mut findings);
    check_duplicate_dependencies(workflow, &mut findings);

    let stats = compute_stats(workflow, registry);
    findings.push(
        Finding::info(
            FindingKind::Stats,
            format!(
                "{} invocations, {} dependencies, {} distinct agent types",
                stats.invocation_count, stats.dependency_count, stats.distinct_agent_types
            ),
        )
        .with_details(format!(
            "builtin: {}, custom: {}, average out-degree: {:.2}",
            stats.builtin_invocations, stats.custom_invocations, stats.average_out_degree
        )),
    );

    ValidationReport::from_findings(findings, stats)
}

/// Arena view of the graph: invocation ids mapped to indices, edges resolved
/// to an adjacency list. Edges with unknown endpoints are left out of the
/// adjacency (they get their own findings) so traversal runs over a closed
/// id space instead of chasing live references.
struct GraphIndex {
    ids: AHashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl GraphIndex {
    fn build(workflow: &Workflow) -> Self {
        let mut ids = AHashMap::with_capacity(workflow.invocations.len());
        for (idx, invocation) in workflow.invocations.iter().enumerate() {
            ids.entry(invocation.id.clone()).or_insert(idx);
        }

        let mut adjacency = vec![Vec::new(); workflow.invocations.len()];
        for dep in &workflow.dependencies {
            if let (Some(&from), Some(&to)) = (ids.get(&dep.source), ids.get(&dep.target)) {
                adjacency[from].push(to);
            }
        }

        Self { ids, adjacency }
    }
}

fn check_unknown_endpoints(workflow: &Workflow, index: &GraphIndex, findings: &mut Vec<Finding>) {
    for dep in &workflow.dependencies {
        let mut missing = Vec::new();
        if !index.ids.contains_key(&dep.source) {
            missing.push(dep.source.clone());
        }
        if !index.ids.contains_key(&dep.target) {
            missing.push(dep.target.clone());
        }
        if !missing.is_empty() {
            findings.push(
                Finding::error(
                    FindingKind::UnknownInvocation,
                    format!(
                        "Dependency '{}' references an invocation that does not exist: {}",
                        dep.id,
                        missing.join(", ")
                    ),
                    missing,
                )
                .with_details(format!("{} -> {}", dep.source, dep.target)),
            );
        }
    }
}

/// Node state during the iterative cycle search.
#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    OnPath,
    Done,
}

/// Depth-first cycle search with an explicit stack (no recursion, so deep
/// graphs cannot overflow). Every back-edge into the current path records
/// one finding whose affected ids are the cycle path with the entry node
/// repeated at the end; the traversal then continues, so multiple
/// independent cycles are all reported.
fn check_cycles(workflow: &Workflow, index: &GraphIndex, findings: &mut Vec<Finding>) {
    let node_count = workflow.invocations.len();
    let mut state = vec![VisitState::Unvisited; node_count];

    for root in 0..node_count {
        if state[root] != VisitState::Unvisited {
            continue;
        }

        // Each stack frame is (node, cursor into its adjacency list); `path`
        // mirrors the stack to make back-edge paths cheap to extract.
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        let mut path: Vec<usize> = vec![root];
        state[root] = VisitState::OnPath;

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            if frame.1 < index.adjacency[node].len() {
                let next = index.adjacency[node][frame.1];
                frame.1 += 1;
                match state[next] {
                    VisitState::Unvisited => {
                        state[next] = VisitState::OnPath;
                        path.push(next);
                        stack.push((next, 0));
                    }
                    VisitState::OnPath => {
                        let entry = path.iter().position(|&p| p == next).unwrap_or(0);
                        let mut cycle: Vec<String> = path[entry..]
                            .iter()
                            .map(|&i| workflow.invocations[i].id.clone())
                            .collect();
                        cycle.push(workflow.invocations[next].id.clone());
                        findings.push(Finding::error(
                            FindingKind::CircularDependency,
                            format!("Circular dependency: {}", cycle.join(" -> ")),
                            cycle,
                        ));
                    }
                    VisitState::Done => {}
                }
            } else {
                state[node] = VisitState::Done;
                stack.pop();
                path.pop();
            }
        }
    }
}

/// An invocation that is neither source nor target of any dependency is
/// valid but likely an oversight, so it warns instead of erroring.
fn check_disconnected(workflow: &Workflow, findings: &mut Vec<Finding>) {
    let mut connected: AHashSet<&str> = AHashSet::new();
    for dep in &workflow.dependencies {
        connected.insert(dep.source.as_str());
        connected.insert(dep.target.as_str());
    }
    for invocation in &workflow.invocations {
        if !connected.contains(invocation.id.as_str()) {
            findings.push(Finding::warning(
                FindingKind::Disconnected,
                format!(
                    "Invocation '{}' is not connected to any other step",
                    invocation.id
                ),
                vec![invocation.id.clone()],
            ));
        }
    }
}

fn check_agent_types(workflow: &Workflow, findings: &mut Vec<Finding>) {
    for invocation in &workflow.invocations {
        if invocation.agent_type.is_empty() {
            findings.push(Finding::error(
                FindingKind::MissingAgentType,
                format!("Invocation '{}' has no agent type", invocation.id),
                vec![invocation.id.clone()],
            ));
        }
    }
}

/// One warning per extra occurrence of a `(source, target)` pair beyond the
/// first, in dependency creation order.
fn check_duplicate_dependencies(workflow: &Workflow, findings: &mut Vec<Finding>) {
    let mut seen: AHashMap<(&str, &str), usize> = AHashMap::new();
    for dep in &workflow.dependencies {
        let count = seen
            .entry((dep.source.as_str(), dep.target.as_str()))
            .or_insert(0);
        *count += 1;
        if *count > 1 {
            findings.push(Finding::warning(
                FindingKind::DuplicateDependency,
                format!(
                    "Duplicate dependency '{}' repeats {} -> {}",
                    dep.id, dep.source, dep.target
                ),
                vec![dep.source.clone(), dep.target.clone()],
            ));
        }
    }
}

fn compute_stats<S: CatalogStore>(
    workflow: &Workflow,
    registry: &DefinitionRegistry<S>,
) -> WorkflowStats {
    let invocation_count = workflow.invocations.len();
    let dependency_count = workflow.dependencies.len();

    let distinct_agent_types = workflow
        .invocations
        .iter()
        .map(|inv| inv.agent_type.as_str())
        .collect::<AHashSet<_>>()
        .len();

    let mut builtin_invocations = 0;
    let mut custom_invocations = 0;
    for invocation in &workflow.invocations {
        match registry
            .find_by_id(&invocation.agent_type)
            .map(|def| def.provenance)
        {
            Some(Provenance::Builtin) => builtin_invocations += 1,
            Some(Provenance::Custom) => custom_invocations += 1,
            None => {}
        }
    }

    let average_out_degree = if invocation_count == 0 {
        0.0
    } else {
        dependency_count as f64 / invocation_count as f64
    };

    WorkflowStats {
        invocation_count,
        dependency_count,
        distinct_agent_types,
        builtin_invocations,
        custom_invocations,
        average_out_degree,
    }
}
