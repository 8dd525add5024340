use super::{AgentDefinition, Provenance};

fn builtin(
    id: &str,
    label: &str,
    icon: &str,
    color: &str,
    category: &str,
    template: &str,
) -> AgentDefinition {
    AgentDefinition {
        id: id.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        category: category.to_string(),
        default_prompt_template: template.to_string(),
        provenance: Provenance::Builtin,
    }
}

/// The fixed built-in agent catalog, loaded once when a registry is opened
/// and immutable for its lifetime.
pub(super) fn builtin_catalog() -> Vec<AgentDefinition> {
    vec![
        builtin(
            "planner",
            "Planner",
            "🗺️",
            "#6366F1",
            "Planning",
            "Break the task into a concrete, ordered plan of sub-tasks with clear acceptance criteria.",
        ),
        builtin(
            "researcher",
            "Researcher",
            "🔍",
            "#0EA5E9",
            "Planning",
            "Gather and summarize the background material, prior art, and constraints relevant to the task.",
        ),
        builtin(
            "architect",
            "Architect",
            "📐",
            "#8B5CF6",
            "Engineering",
            "Design the technical approach: components, interfaces, and the trade-offs behind each choice.",
        ),
        builtin(
            "coder",
            "Coder",
            "💻",
            "#22C55E",
            "Engineering",
            "Implement the agreed design. Prefer small, reviewable changes and explain non-obvious decisions.",
        ),
        builtin(
            "reviewer",
            "Reviewer",
            "🧐",
            "#F59E0B",
            "Engineering",
            "Review the produced changes for correctness, clarity, and consistency with the design.",
        ),
        builtin(
            "qa",
            "Quality Assurance",
            "✅",
            "#10B981",
            "Verification",
            "Write and run tests covering the happy path, edge cases, and regressions for the change.",
        ),
        builtin(
            "security",
            "Security Analyst",
            "🛡️",
            "#EF4444",
            "Verification",
            "Audit the change for security issues: injection, unsafe deserialization, secrets, permissions.",
        ),
        builtin(
            "docs",
            "Technical Writer",
            "📝",
            "#64748B",
            "Delivery",
            "Document the change: user-facing docs, upgrade notes, and examples.",
        ),
        builtin(
            "devops",
            "DevOps",
            "🚀",
            "#F97316",
            "Delivery",
            "Prepare the change for release: CI, packaging, rollout and rollback steps.",
        ),
        builtin(
            "pm",
            "Project Manager",
            "📋",
            "#EC4899",
            "Planning",
            "Track progress against the plan, surface blockers, and keep the scope honest.",
        ),
    ]
}
