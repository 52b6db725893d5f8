use std::fmt;

/// Workflow status value that means the workflow succeeded
pub const WORKFLOW_SUCCESS: &str = "0";

/// Pipeline status values that count as a successful pipeline
pub const PIPELINE_SUCCESS_STATES: [&str; 2] = ["succeeded", "succeeded_with_abort"];

/// Raw status signals of the build that triggered the notification.
///
/// Read once at process start and passed in explicitly. The two signals are
/// not symmetric: a missing workflow status counts as failure, while a missing
/// pipeline status counts as success because the step may run outside a
/// pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSignals {
    pub workflow_status: Option<String>,
    pub pipeline_status: Option<String>,
}

impl BuildSignals {
    pub fn new(workflow_status: Option<String>, pipeline_status: Option<String>) -> Self {
        Self {
            workflow_status,
            pipeline_status,
        }
    }

    pub fn workflow_succeeded(&self) -> bool {
        self.workflow_status.as_deref() == Some(WORKFLOW_SUCCESS)
    }

    pub fn pipeline_succeeded(&self) -> bool {
        match self.pipeline_status.as_deref() {
            None | Some("") => true,
            Some(status) => PIPELINE_SUCCESS_STATES.contains(&status),
        }
    }
}

/// Resolved verdict for the build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Succeeded
        } else {
            Outcome::Failed
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    /// Pick the value configured for this outcome.
    ///
    /// The success value is used on success, and on failure when no failure
    /// value was configured.
    pub fn select<'a>(&self, on_success: &'a str, on_error: &'a str) -> &'a str {
        if self.is_success() || on_error.is_empty() {
            on_success
        } else {
            on_error
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Failed => "failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine the workflow and pipeline signals into a single outcome
pub fn resolve_outcome(signals: &BuildSignals) -> Outcome {
    Outcome::from_success(signals.workflow_succeeded() && signals.pipeline_succeeded())
}
