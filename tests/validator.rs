//! Tests for the structural validator: every check, finding shape, and the
//! validity rule.
mod common;
use common::*;
use rensa::prelude::*;

#[test]
fn empty_workflow_is_a_single_error() {
    let registry = open_registry();
    let report = validate(&Workflow::new("Empty"), &registry);

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, FindingKind::EmptyWorkflow);
    assert!(report.warnings.is_empty());
    assert_eq!(report.stats.invocation_count, 0);
    assert_eq!(report.stats.average_out_degree, 0.0);
}

#[test]
fn linear_workflow_is_valid() {
    let registry = open_registry();
    let report = validate(&linear_workflow(), &registry);

    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn cycle_reports_closed_path() {
    let registry = open_registry();
    let report = validate(&cyclic_workflow(), &registry);

    assert!(!report.valid);
    let cycles: Vec<_> = report
        .errors
        .iter()
        .filter(|f| f.kind == FindingKind::CircularDependency)
        .collect();
    assert_eq!(cycles.len(), 1);

    // The affected path closes on its entry node: [A, B, C, A].
    let path = &cycles[0].affected_invocations;
    assert_eq!(path.len(), 4);
    assert_eq!(path.first(), path.last());
    assert_eq!(path, &vec!["A", "B", "C", "A"]);
}

#[test]
fn independent_cycles_are_all_reported() {
    let registry = open_registry();
    let mut workflow = Workflow::new("Two cycles");
    workflow.add_invocation(Invocation::new("A", "planner"));
    workflow.add_invocation(Invocation::new("B", "coder"));
    workflow.add_invocation(Invocation::new("C", "qa"));
    workflow.add_invocation(Invocation::new("D", "security"));
    workflow.add_dependency(Dependency::new("e1", "A", "B"));
    workflow.add_dependency(Dependency::new("e2", "B", "A"));
    workflow.add_dependency(Dependency::new("e3", "C", "D"));
    workflow.add_dependency(Dependency::new("e4", "D", "C"));

    let report = validate(&workflow, &registry);
    let cycles: Vec<_> = report
        .errors
        .iter()
        .filter(|f| f.kind == FindingKind::CircularDependency)
        .collect();
    assert_eq!(cycles.len(), 2);
    assert_eq!(cycles[0].affected_invocations, vec!["A", "B", "A"]);
    assert_eq!(cycles[1].affected_invocations, vec!["C", "D", "C"]);
}

#[test]
fn self_loop_is_a_cycle() {
    let registry = open_registry();
    let mut workflow = linear_workflow();
    workflow.add_dependency(Dependency::new("loop", "B", "B"));

    let report = validate(&workflow, &registry);
    let cycle = report
        .errors
        .iter()
        .find(|f| f.kind == FindingKind::CircularDependency)
        .expect("self loop should be reported as a cycle");
    assert_eq!(cycle.affected_invocations, vec!["B", "B"]);
}

#[test]
fn disconnected_invocation_warns_but_stays_valid() {
    let registry = open_registry();
    let mut workflow = linear_workflow();
    workflow.add_invocation(Invocation::new("D", "docs"));

    let report = validate(&workflow, &registry);
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, FindingKind::Disconnected);
    assert_eq!(report.warnings[0].affected_invocations, vec!["D"]);
}

#[test]
fn missing_agent_type_is_an_error() {
    let registry = open_registry();
    let mut workflow = linear_workflow();
    workflow.add_invocation(Invocation::new("X", ""));
    workflow.add_dependency(Dependency::new("e3", "C", "X"));

    let report = validate(&workflow, &registry);
    assert!(!report.valid);
    let missing = report
        .errors
        .iter()
        .find(|f| f.kind == FindingKind::MissingAgentType)
        .expect("missing agent type should be reported");
    assert_eq!(missing.affected_invocations, vec!["X"]);
}

#[test]
fn duplicate_dependency_warns_per_extra_occurrence() {
    let registry = open_registry();
    let mut workflow = linear_workflow();
    workflow.add_dependency(Dependency::new("dup1", "A", "B"));
    workflow.add_dependency(Dependency::new("dup2", "A", "B"));

    let report = validate(&workflow, &registry);
    assert!(report.valid); // duplicates are warnings, not errors
    let dups: Vec<_> = report
        .warnings
        .iter()
        .filter(|f| f.kind == FindingKind::DuplicateDependency)
        .collect();
    assert_eq!(dups.len(), 2);
}

#[test]
fn dangling_edge_endpoint_is_an_error() {
    let registry = open_registry();
    let mut workflow = linear_workflow();
    workflow.add_dependency(Dependency::new("bad", "C", "ghost"));

    let report = validate(&workflow, &registry);
    assert!(!report.valid);
    let unknown = report
        .errors
        .iter()
        .find(|f| f.kind == FindingKind::UnknownInvocation)
        .expect("dangling endpoint should be reported");
    assert_eq!(unknown.affected_invocations, vec!["ghost"]);
}

#[test]
fn stats_are_always_computed() {
    let mut registry = open_registry();
    registry
        .add(custom_def("translator", "Translator"))
        .expect("add should succeed");

    let mut workflow = linear_workflow();
    workflow.add_invocation(Invocation::new("T", "translator"));
    workflow.add_dependency(Dependency::new("e3", "C", "T"));

    let report = validate(&workflow, &registry);
    assert!(report.valid);
    assert_eq!(report.stats.invocation_count, 4);
    assert_eq!(report.stats.dependency_count, 3);
    assert_eq!(report.stats.distinct_agent_types, 4);
    assert_eq!(report.stats.builtin_invocations, 3);
    assert_eq!(report.stats.custom_invocations, 1);
    assert!((report.stats.average_out_degree - 0.75).abs() < 1e-9);

    // Stats are reported as info and never affect validity.
    assert!(report.info.iter().any(|f| f.kind == FindingKind::Stats));
}

#[test]
fn findings_accumulate_across_checks() {
    let registry = open_registry();
    let mut workflow = cyclic_workflow();
    workflow.add_invocation(Invocation::new("island", ""));
    workflow.add_dependency(Dependency::new("dup", "A", "B"));
    workflow.add_dependency(Dependency::new("bad", "nowhere", "A"));

    let report = validate(&workflow, &registry);
    assert!(!report.valid);

    let kinds: Vec<FindingKind> = report
        .errors
        .iter()
        .chain(&report.warnings)
        .map(|f| f.kind)
        .collect();
    assert!(kinds.contains(&FindingKind::CircularDependency));
    assert!(kinds.contains(&FindingKind::Disconnected));
    assert!(kinds.contains(&FindingKind::MissingAgentType));
    assert!(kinds.contains(&FindingKind::DuplicateDependency));
    assert!(kinds.contains(&FindingKind::UnknownInvocation));
}
