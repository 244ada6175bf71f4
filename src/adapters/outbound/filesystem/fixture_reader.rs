use crate::application::dto::{AnalysisFixture, NotificationRequest, SubscriberSpec};
use crate::issue_tracking::domain::{
    AnalysisMetadata, Branch, BranchType, Component, ComponentId, ComponentTree, ComponentType,
    Issue, NotificationKind, Rule, RuleType, User,
};
use crate::ports::outbound::{DeliveryChannel, FixtureReader};
use crate::shared::error::NotifierError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixture {
    analysis: RawAnalysis,
    project: RawComponent,
    #[serde(default)]
    rules: Vec<RawRule>,
    #[serde(default)]
    users: Vec<RawUser>,
    #[serde(default)]
    subscribers: Vec<RawSubscriber>,
    #[serde(default)]
    issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    project_uuid: String,
    analysis_date: DateTime<Utc>,
    branch: RawBranch,
    pull_request: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBranch {
    name: String,
    #[serde(rename = "type", default = "default_branch_type")]
    branch_type: String,
    #[serde(default)]
    main: bool,
}

fn default_branch_type() -> String {
    "long".to_string()
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    key: String,
    uuid: String,
    name: String,
    #[serde(rename = "type")]
    component_type: String,
    version: Option<String>,
    #[serde(default)]
    children: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    key: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    uuid: String,
    login: String,
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSubscriber {
    login: String,
    #[serde(default = "default_channel")]
    channel: String,
    kinds: Vec<String>,
}

fn default_channel() -> String {
    "email".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIssue {
    key: String,
    rule_key: String,
    #[serde(rename = "type")]
    rule_type: String,
    component_key: String,
    creation_date: DateTime<Utc>,
    message: Option<String>,
    severity: Option<String>,
    status: Option<String>,
    resolution: Option<String>,
    assignee: Option<String>,
    effort_minutes: Option<u64>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, rename = "new")]
    is_new: bool,
    #[serde(default, rename = "changed")]
    is_changed: bool,
    #[serde(default)]
    send_notifications: bool,
}

/// FileSystemReader adapter for reading analysis fixtures from disk
///
/// The file goes through the same safety checks as any input file
/// (no symlinks, regular file, size cap) before being parsed as JSON.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        NotifierError::FixtureParseError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    fn convert(path: &Path, raw: RawFixture) -> Result<AnalysisFixture> {
        let tree = Self::build_tree(path, raw.project)?;
        let analysis = Self::build_analysis(path, raw.analysis)?;

        let rules = raw
            .rules
            .into_iter()
            .map(|r| Rule::new(r.key, r.name))
            .collect();

        let users = raw
            .users
            .into_iter()
            .map(|u| {
                let mut user = User::new(u.uuid, u.login);
                if let Some(name) = u.name {
                    user = user.with_name(name);
                }
                if let Some(email) = u.email {
                    user = user.with_email(email);
                }
                user
            })
            .collect();

        let subscribers = raw
            .subscribers
            .into_iter()
            .map(|s| Self::build_subscriber(path, s))
            .collect::<Result<Vec<_>>>()?;

        let issues = raw
            .issues
            .into_iter()
            .map(|i| Self::build_issue(path, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(AnalysisFixture {
            request: NotificationRequest::new(analysis, tree),
            rules,
            users,
            subscribers,
            issues,
        })
    }

    fn build_analysis(path: &Path, raw: RawAnalysis) -> Result<AnalysisMetadata> {
        let branch_type: BranchType = raw
            .branch
            .branch_type
            .parse()
            .map_err(|e: String| Self::parse_error(path, e))?;
        let branch = Branch::new(raw.branch.name, branch_type, raw.branch.main);
        let mut analysis = AnalysisMetadata::new(raw.project_uuid, raw.analysis_date, branch);
        if let Some(pr) = raw.pull_request {
            analysis = analysis.with_pull_request_key(pr);
        }
        Ok(analysis)
    }

    fn build_component(path: &Path, raw: &RawComponent) -> Result<Component> {
        let component_type: ComponentType = raw
            .component_type
            .parse()
            .map_err(|e: String| Self::parse_error(path, e))?;
        let mut component = Component::new(&raw.key, &raw.uuid, &raw.name, component_type);
        if let Some(version) = &raw.version {
            component = component.with_project_version(version);
        }
        Ok(component)
    }

    /// Flattens the nested project description into the arena tree
    fn build_tree(path: &Path, root: RawComponent) -> Result<ComponentTree> {
        let mut tree = ComponentTree::new(Self::build_component(path, &root)?);
        let mut pending: Vec<(ComponentId, &RawComponent)> = root
            .children
            .iter()
            .rev()
            .map(|child| (tree.root_id(), child))
            .collect();

        while let Some((parent, raw)) = pending.pop() {
            let id = tree.add_child(parent, Self::build_component(path, raw)?);
            pending.extend(raw.children.iter().rev().map(|child| (id, child)));
        }
        Ok(tree)
    }

    fn build_subscriber(path: &Path, raw: RawSubscriber) -> Result<SubscriberSpec> {
        let channel: DeliveryChannel = raw
            .channel
            .parse()
            .map_err(|e: String| Self::parse_error(path, e))?;
        let kinds = raw
            .kinds
            .iter()
            .map(|k| k.parse::<NotificationKind>())
            .collect::<std::result::Result<Vec<_>, String>>()
            .map_err(|e| Self::parse_error(path, e))?;
        Ok(SubscriberSpec::new(raw.login, channel, kinds))
    }

    fn build_issue(path: &Path, raw: RawIssue) -> Result<Issue> {
        let rule_type: RuleType = raw
            .rule_type
            .parse()
            .map_err(|e: String| Self::parse_error(path, e))?;
        let mut issue = Issue::new(
            raw.key,
            raw.rule_key,
            rule_type,
            raw.component_key,
            raw.creation_date,
        )
        .with_tags(raw.tags);

        if let Some(message) = raw.message {
            issue = issue.with_message(message);
        }
        if let Some(severity) = raw.severity {
            issue = issue.with_severity(severity);
        }
        if let Some(status) = raw.status {
            issue = issue.with_status(status);
        }
        if let Some(resolution) = raw.resolution {
            issue = issue.with_resolution(resolution);
        }
        if let Some(assignee) = raw.assignee {
            issue = issue.with_assignee(assignee);
        }
        if let Some(effort) = raw.effort_minutes {
            issue = issue.with_effort_minutes(effort);
        }
        if raw.is_new {
            issue = issue.mark_new();
        }
        if raw.is_changed {
            issue = issue.mark_changed(raw.send_notifications);
        }
        Ok(issue)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureReader for FileSystemReader {
    fn read_fixture(&self, path: &Path) -> Result<AnalysisFixture> {
        // symlink_metadata based: a dangling link is rejected, not reported missing
        validate_input_file(path, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path)
            .map_err(|e| Self::parse_error(path, format!("Failed to read fixture: {}", e)))?;
        let raw: RawFixture =
            serde_json::from_str(&content).map_err(|e| Self::parse_error(path, e.to_string()))?;

        Self::convert(path, raw)
    }
}
