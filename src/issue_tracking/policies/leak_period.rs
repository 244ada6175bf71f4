use crate::issue_tracking::domain::Issue;
use chrono::{DateTime, SubsecRound, Utc};

/// Truncates a timestamp to whole seconds
///
/// Issue creation dates are stored with second precision, so the analysis
/// date must be truncated the same way before the two are compared.
pub fn truncate_to_seconds(date: DateTime<Utc>) -> DateTime<Utc> {
    date.trunc_subsecs(0)
}

/// LeakPeriod policy deciding which new issues belong to the new-code window
///
/// An issue is on the leak period when it is new, unresolved and was created
/// at or after the second-truncated analysis date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeakPeriod {
    start: DateTime<Utc>,
}

impl LeakPeriod {
    pub fn from_analysis_date(analysis_date: DateTime<Utc>) -> Self {
        Self {
            start: truncate_to_seconds(analysis_date),
        }
    }

    /// Inclusive lower bound of the period
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn contains(&self, creation_date: DateTime<Utc>) -> bool {
        creation_date >= self.start
    }

    pub fn is_on_leak(&self, issue: &Issue) -> bool {
        issue.is_new() && issue.resolution().is_none() && self.contains(issue.creation_date())
    }
}
