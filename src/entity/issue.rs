use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Error => write!(f, "error"),
            IssueKind::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// A validation finding. Issues are rebuilt on every validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Name of the collection the finding came from.
    pub module: String,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    /// Errors are always high severity.
    pub fn error(module: &str, message: String) -> Self {
        Self {
            kind: IssueKind::Error,
            module: module.to_string(),
            message,
            severity: Severity::High,
        }
    }

    pub fn warning(module: &str, message: String, severity: Severity) -> Self {
        Self {
            kind: IssueKind::Warning,
            module: module.to_string(),
            message,
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }
}
