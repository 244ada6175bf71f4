use crate::issue_tracking::domain::{Stats, User};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// The three notification kinds sent after an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NotificationKind {
    NewIssues,
    MyNewIssues,
    IssueChanges,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::NewIssues,
        NotificationKind::MyNewIssues,
        NotificationKind::IssueChanges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::NewIssues => "new-issues",
            NotificationKind::MyNewIssues => "my-new-issues",
            NotificationKind::IssueChanges => "issue-changes",
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new-issues" => Ok(NotificationKind::NewIssues),
            "my-new-issues" => Ok(NotificationKind::MyNewIssues),
            "issue-changes" => Ok(NotificationKind::IssueChanges),
            _ => Err(format!(
                "Unknown notification kind: {}. Expected 'new-issues', 'my-new-issues' or 'issue-changes'",
                s
            )),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Project, branch and pull request a notification is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub project_key: String,
    pub project_name: String,
    pub branch: Option<String>,
    pub pull_request: Option<String>,
}

/// File an issue was raised on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    pub key: String,
    pub name: String,
}

/// One changed issue, decorated for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct IssueChangeNotification {
    pub project: ProjectContext,
    pub issue_key: String,
    pub rule_key: String,
    pub rule_name: String,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    pub assignee: Option<User>,
    pub component: Option<ComponentRef>,
}

/// Summary of every issue on the leak period of a project
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssuesNotification {
    pub project: ProjectContext,
    pub project_version: Option<String>,
    pub analysis_date: DateTime<Utc>,
    pub statistics: Stats,
    /// Effort of the issues on the leak period, in minutes
    pub debt_minutes: u64,
    /// Display names of the assignees found in the statistics, by uuid
    pub assignee_names: BTreeMap<String, String>,
}

/// Summary of the issues on the leak period assigned to one user
#[derive(Debug, Clone, PartialEq)]
pub struct MyNewIssuesNotification {
    pub project: ProjectContext,
    pub project_version: Option<String>,
    pub analysis_date: DateTime<Utc>,
    pub assignee_uuid: String,
    pub assignee: Option<User>,
    pub statistics: Stats,
    pub debt_minutes: u64,
}

/// Any notification produced by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    IssueChanges(IssueChangeNotification),
    NewIssues(NewIssuesNotification),
    MyNewIssues(MyNewIssuesNotification),
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::IssueChanges(_) => NotificationKind::IssueChanges,
            Notification::NewIssues(_) => NotificationKind::NewIssues,
            Notification::MyNewIssues(_) => NotificationKind::MyNewIssues,
        }
    }

    pub fn project(&self) -> &ProjectContext {
        match self {
            Notification::IssueChanges(n) => &n.project,
            Notification::NewIssues(n) => &n.project,
            Notification::MyNewIssues(n) => &n.project,
        }
    }
}
