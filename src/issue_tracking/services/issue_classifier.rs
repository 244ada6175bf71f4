use crate::issue_tracking::domain::Issue;
use crate::issue_tracking::policies::LeakPeriod;

/// Number of changed issues sent in one change notification dispatch
pub const CHANGE_BATCH_SIZE: usize = 1000;

/// Route of one issue through the notification pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not notified (security hotspot, or neither new nor notifiable change)
    Ignored,
    /// New unresolved issue, feeds the statistics
    NewIssue { on_leak: bool },
    /// Changed issue requiring a change notification
    Changed,
}

/// IssueClassifier service deciding where each cached issue goes
pub struct IssueClassifier {
    leak_period: LeakPeriod,
}

impl IssueClassifier {
    pub fn new(leak_period: LeakPeriod) -> Self {
        Self { leak_period }
    }

    pub fn leak_period(&self) -> &LeakPeriod {
        &self.leak_period
    }

    pub fn classify(&self, issue: &Issue) -> Classification {
        if issue.is_security_hotspot() {
            return Classification::Ignored;
        }
        if issue.is_new() && issue.resolution().is_none() {
            return Classification::NewIssue {
                on_leak: self.leak_period.contains(issue.creation_date()),
            };
        }
        if issue.is_changed() && issue.must_send_notifications() {
            return Classification::Changed;
        }
        Classification::Ignored
    }
}

/// Bounded buffer of changed issues waiting to be dispatched
#[derive(Debug)]
pub struct ChangeBatch {
    issues: Vec<Issue>,
    capacity: usize,
}

impl Default for ChangeBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeBatch {
    pub fn new() -> Self {
        Self::with_capacity(CHANGE_BATCH_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            issues: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an issue and returns true when the batch is now full
    pub fn push(&mut self, issue: Issue) -> bool {
        self.issues.push(issue);
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.issues.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Empties the batch, handing its issues to the caller
    pub fn take(&mut self) -> Vec<Issue> {
        std::mem::replace(&mut self.issues, Vec::with_capacity(self.capacity))
    }
}
