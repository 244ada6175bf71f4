use crate::issue_tracking::domain::NotificationStatistics;

/// How a notification run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Pull request or short-lived branch: nothing was done
    SkippedBranch,
    /// Nobody subscribed to any notification kind of the project
    NoSubscribers,
    /// Issues were streamed and notifications dispatched
    Completed,
}

impl RunOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunOutcome::SkippedBranch => "skipped-branch",
            RunOutcome::NoSubscribers => "no-subscribers",
            RunOutcome::Completed => "completed",
        }
    }
}

/// NotificationResponse - Output of the issue notification use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResponse {
    pub outcome: RunOutcome,
    pub statistics: NotificationStatistics,
}

impl NotificationResponse {
    pub fn new(outcome: RunOutcome, statistics: NotificationStatistics) -> Self {
        Self {
            outcome,
            statistics,
        }
    }
}
