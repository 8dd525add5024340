//! Deterministic linearization of a workflow graph into an execution order.
//!
//! The ordering uses Kahn's algorithm with a FIFO ready queue so that nodes
//! which become ready at the same time keep their creation order. Repeated
//! calls on the same graph always yield the same sequence; ordering
//! differences are attributable only to graph changes, never to iteration
//! artifacts of a hash map.

use crate::workflow::Workflow;
use ahash::AHashMap;
use std::collections::VecDeque;

/// Computes a total execution order over every invocation in the workflow.
///
/// This function never fails and always returns a permutation of the
/// invocation ids, even for graphs that are not valid DAGs: when a cycle
/// stalls Kahn's algorithm, the unreached invocations are appended in their
/// creation order after the successfully ordered prefix. Whether the graph
/// is actually valid is the validator's concern; callers that need a real
/// DAG order must check [`validate`](crate::validator::validate) first.
///
/// Edges referencing unknown invocation ids are skipped here; they are
/// reported as validation errors, not ordering concerns.
pub fn execution_order(workflow: &Workflow) -> Vec<String> {
    let node_count = workflow.invocations.len();

    let mut ids: AHashMap<&str, usize> = AHashMap::with_capacity(node_count);
    for (idx, invocation) in workflow.invocations.iter().enumerate() {
        ids.entry(invocation.id.as_str()).or_insert(idx);
    }

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut in_degree: Vec<usize> = vec![0; node_count];
    for dep in &workflow.dependencies {
        if let (Some(&from), Some(&to)) = (
            ids.get(dep.source.as_str()),
            ids.get(dep.target.as_str()),
        ) {
            adjacency[from].push(to);
            in_degree[to] += 1;
        }
    }

    // Seed with zero-in-degree nodes in creation order; the FIFO queue keeps
    // that relative order among simultaneously-ready nodes.
    let mut ready: VecDeque<usize> = (0..node_count).filter(|&i| in_degree[i] == 0).collect();
    let mut order: Vec<usize> = Vec::with_capacity(node_count);
    let mut placed = vec![false; node_count];

    let mut newly_ready: Vec<usize> = Vec::new();
    while let Some(node) = ready.pop_front() {
        order.push(node);
        placed[node] = true;
        newly_ready.clear();
        for &next in &adjacency[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                newly_ready.push(next);
            }
        }
        // Nodes becoming ready together are enqueued in creation order, not
        // in edge insertion order.
        newly_ready.sort_unstable();
        for &next in &newly_ready {
            ready.push_back(next);
        }
    }

    // Cycle members (and anything downstream of them) never reach zero
    // in-degree; append them in creation order to keep the result total.
    if order.len() < node_count {
        for idx in 0..node_count {
            if !placed[idx] {
                order.push(idx);
            }
        }
    }

    order
        .into_iter()
        .map(|idx| workflow.invocations[idx].id.clone())
        .collect()
}
