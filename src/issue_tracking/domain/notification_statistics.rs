use crate::issue_tracking::domain::NotificationKind;

/// Run-scoped dispatch counters, one pair per notification kind
///
/// `notifications` counts logical notifications (a change batch counts once),
/// `deliveries` sums the recipients reported by both delivery paths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStatistics {
    issue_changes: usize,
    issue_changes_deliveries: usize,
    new_issues: usize,
    new_issues_deliveries: usize,
    my_new_issues: usize,
    my_new_issues_deliveries: usize,
}

impl NotificationStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_notifications(&mut self, kind: NotificationKind, count: usize) {
        match kind {
            NotificationKind::IssueChanges => self.issue_changes += count,
            NotificationKind::NewIssues => self.new_issues += count,
            NotificationKind::MyNewIssues => self.my_new_issues += count,
        }
    }

    pub fn add_deliveries(&mut self, kind: NotificationKind, count: usize) {
        match kind {
            NotificationKind::IssueChanges => self.issue_changes_deliveries += count,
            NotificationKind::NewIssues => self.new_issues_deliveries += count,
            NotificationKind::MyNewIssues => self.my_new_issues_deliveries += count,
        }
    }

    pub fn notifications(&self, kind: NotificationKind) -> usize {
        match kind {
            NotificationKind::IssueChanges => self.issue_changes,
            NotificationKind::NewIssues => self.new_issues,
            NotificationKind::MyNewIssues => self.my_new_issues,
        }
    }

    pub fn deliveries(&self, kind: NotificationKind) -> usize {
        match kind {
            NotificationKind::IssueChanges => self.issue_changes_deliveries,
            NotificationKind::NewIssues => self.new_issues_deliveries,
            NotificationKind::MyNewIssues => self.my_new_issues_deliveries,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Named counters in the order they are reported to the statistics sink
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            ("newIssuesNotifs", self.new_issues),
            ("newIssuesDeliveries", self.new_issues_deliveries),
            ("myNewIssuesNotifs", self.my_new_issues),
            ("myNewIssuesDeliveries", self.my_new_issues_deliveries),
            ("changesNotifs", self.issue_changes),
            ("changesDeliveries", self.issue_changes_deliveries),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_are_empty() {
        let stats = NotificationStatistics::new();
        assert!(stats.is_empty());
        assert!(stats.entries().iter().all(|(_, value)| *value == 0));
    }

    #[test]
    fn test_counters_are_tracked_per_kind() {
        let mut stats = NotificationStatistics::new();
        stats.add_notifications(NotificationKind::IssueChanges, 1);
        stats.add_deliveries(NotificationKind::IssueChanges, 3);
        stats.add_deliveries(NotificationKind::IssueChanges, 2);
        stats.add_notifications(NotificationKind::MyNewIssues, 4);

        assert_eq!(stats.notifications(NotificationKind::IssueChanges), 1);
        assert_eq!(stats.deliveries(NotificationKind::IssueChanges), 5);
        assert_eq!(stats.notifications(NotificationKind::MyNewIssues), 4);
        assert_eq!(stats.deliveries(NotificationKind::NewIssues), 0);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_entries_names_and_order() {
        let mut stats = NotificationStatistics::new();
        stats.add_notifications(NotificationKind::NewIssues, 1);
        stats.add_deliveries(NotificationKind::NewIssues, 7);

        let names: Vec<&str> = stats.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "newIssuesNotifs",
                "newIssuesDeliveries",
                "myNewIssuesNotifs",
                "myNewIssuesDeliveries",
                "changesNotifs",
                "changesDeliveries",
            ]
        );
        assert_eq!(stats.entries()[1], ("newIssuesDeliveries", 7));
    }
}
