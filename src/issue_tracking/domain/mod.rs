pub mod analysis;
pub mod component_tree;
pub mod issue;
pub mod new_issues_statistics;
pub mod notification;
pub mod notification_statistics;
pub mod rule;
pub mod user;

pub use analysis::{AnalysisMetadata, Branch, BranchType};
pub use component_tree::{Component, ComponentId, ComponentTree, ComponentType};
pub use issue::{Issue, RuleType};
pub use new_issues_statistics::{
    DistributedMetricStats, Metric, MetricStat, NewIssuesStatistics, Stats,
};
pub use notification::{
    ComponentRef, IssueChangeNotification, MyNewIssuesNotification, NewIssuesNotification,
    Notification, NotificationKind, ProjectContext,
};
pub use notification_statistics::NotificationStatistics;
pub use rule::Rule;
pub use user::User;
