use serde::Serialize;

/// How severe a finding is. Only errors affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// What kind of structural problem (or informational note) a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FindingKind {
    EmptyWorkflow,
    UnknownInvocation,
    CircularDependency,
    Disconnected,
    MissingAgentType,
    DuplicateDependency,
    Stats,
}

/// A single validation finding: one problem (or note) tied to the
/// invocations it affects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
    /// Ids of the invocations involved. For a cycle this is the cycle path
    /// with the entry node repeated at the end to show closure.
    pub affected_invocations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Finding {
    pub fn error(kind: FindingKind, message: impl Into<String>, affected: Vec<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            affected_invocations: affected,
            details: None,
        }
    }

    pub fn warning(kind: FindingKind, message: impl Into<String>, affected: Vec<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            affected_invocations: affected,
            details: None,
        }
    }

    pub fn info(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Info,
            message: message.into(),
            affected_invocations: Vec::new(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Summary statistics over a workflow. Always computed, never blocks validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub invocation_count: usize,
    pub dependency_count: usize,
    /// Number of distinct agent types referenced by invocations.
    pub distinct_agent_types: usize,
    /// Invocations whose agent type resolves to a built-in definition.
    pub builtin_invocations: usize,
    /// Invocations whose agent type resolves to a custom definition.
    pub custom_invocations: usize,
    /// Dependency count divided by invocation count; 0 for an empty workflow.
    pub average_out_degree: f64,
}

/// The full result of validating a workflow: findings bucketed by severity
/// plus summary stats. `valid` is true exactly when there are no errors;
/// warnings and info never affect it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub info: Vec<Finding>,
    pub stats: WorkflowStats,
}

impl ValidationReport {
    pub(super) fn from_findings(findings: Vec<Finding>, stats: WorkflowStats) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut info = Vec::new();
        for finding in findings {
            match finding.severity {
                Severity::Error => errors.push(finding),
                Severity::Warning => warnings.push(finding),
                Severity::Info => info.push(finding),
            }
        }
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            info,
            stats,
        }
    }
}
