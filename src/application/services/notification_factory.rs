use crate::issue_tracking::domain::{
    AnalysisMetadata, Component, ComponentRef, ComponentTree, Issue, IssueChangeNotification,
    Metric, MyNewIssuesNotification, NewIssuesNotification, ProjectContext, Stats, User,
};
use crate::ports::outbound::RuleRepository;
use crate::shared::error::NotifierError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashMap};

/// NotificationFactory builds the three notification payloads of a run
///
/// All payloads share the same project context: the project is the root of
/// the component tree, and branch / pull request are derived from the
/// analysis metadata.
pub struct NotificationFactory<'a, RR> {
    rules: &'a RR,
    analysis: &'a AnalysisMetadata,
    project: &'a Component,
}

impl<'a, RR: RuleRepository> NotificationFactory<'a, RR> {
    pub fn new(rules: &'a RR, analysis: &'a AnalysisMetadata, tree: &'a ComponentTree) -> Self {
        Self {
            rules,
            analysis,
            project: tree.root(),
        }
    }

    fn project_context(&self) -> ProjectContext {
        ProjectContext {
            project_key: self.project.key().to_string(),
            project_name: self.project.name().to_string(),
            branch: self.analysis.notification_branch_name().map(String::from),
            pull_request: self.analysis.notification_pull_request().map(String::from),
        }
    }

    /// Builds the change notification of one issue
    ///
    /// # Errors
    /// Returns [`NotifierError::RuleNotFound`] if the issue's rule is unknown,
    /// or the rule repository's own error
    pub fn new_issue_change(
        &self,
        issue: &Issue,
        assignee: Option<&User>,
        component: Option<&Component>,
    ) -> Result<IssueChangeNotification> {
        let rule = self
            .rules
            .find_by_key(issue.rule_key())?
            .ok_or_else(|| NotifierError::RuleNotFound {
                rule_key: issue.rule_key().to_string(),
            })?;

        Ok(IssueChangeNotification {
            project: self.project_context(),
            issue_key: issue.key().to_string(),
            rule_key: issue.rule_key().to_string(),
            rule_name: rule.name().to_string(),
            message: issue.message().map(String::from),
            severity: issue.severity().map(String::from),
            status: issue.status().map(String::from),
            resolution: issue.resolution().map(String::from),
            assignee: assignee.cloned(),
            component: component.map(|c| ComponentRef {
                key: c.key().to_string(),
                name: c.name().to_string(),
            }),
        })
    }

    /// Builds the project-wide new issues notification
    ///
    /// `assignees_by_uuid` provides display names for the assignees found in
    /// the statistics; unresolved assignees are left out.
    pub fn new_new_issues(
        &self,
        statistics: &Stats,
        assignees_by_uuid: &HashMap<String, User>,
    ) -> NewIssuesNotification {
        let assignee_names: BTreeMap<String, String> = statistics
            .distribution(Metric::Assignee)
            .iter()
            .filter_map(|(uuid, _)| {
                assignees_by_uuid
                    .get(uuid)
                    .map(|user| (uuid.to_string(), user.display_name().to_string()))
            })
            .collect();

        NewIssuesNotification {
            project: self.project_context(),
            project_version: self.project.project_version().map(String::from),
            analysis_date: self.analysis.analysis_date(),
            statistics: statistics.clone(),
            debt_minutes: statistics.effort().on_leak(),
            assignee_names,
        }
    }

    /// Builds the new issues notification of one assignee
    pub fn new_my_new_issues(
        &self,
        assignee_uuid: &str,
        statistics: &Stats,
        assignee: Option<&User>,
    ) -> MyNewIssuesNotification {
        MyNewIssuesNotification {
            project: self.project_context(),
            project_version: self.project.project_version().map(String::from),
            analysis_date: self.analysis.analysis_date(),
            assignee_uuid: assignee_uuid.to_string(),
            assignee: assignee.cloned(),
            statistics: statistics.clone(),
            debt_minutes: statistics.effort().on_leak(),
        }
    }
}
