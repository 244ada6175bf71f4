use chrono::{DateTime, Utc};

/// Kind of branch an analysis ran on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchType {
    /// Long-lived branch (the main branch is a long-lived branch flagged as main)
    Long,
    /// Short-lived branch
    Short,
    PullRequest,
}

impl std::str::FromStr for BranchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" | "branch" => Ok(BranchType::Long),
            "short" => Ok(BranchType::Short),
            "pull_request" | "pull-request" | "pr" => Ok(BranchType::PullRequest),
            _ => Err(format!(
                "Invalid branch type: {}. Please specify 'long', 'short' or 'pull_request'",
                s
            )),
        }
    }
}

/// Branch an analysis ran on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
    branch_type: BranchType,
    is_main: bool,
}

impl Branch {
    pub fn new(name: impl Into<String>, branch_type: BranchType, is_main: bool) -> Self {
        Self {
            name: name.into(),
            branch_type,
            is_main,
        }
    }

    /// The main branch of a project
    pub fn main(name: impl Into<String>) -> Self {
        Self::new(name, BranchType::Long, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch_type(&self) -> BranchType {
        self.branch_type
    }

    pub fn is_main(&self) -> bool {
        self.is_main
    }

    /// Pull requests and short-lived branches never send issue notifications
    pub fn disables_notifications(&self) -> bool {
        matches!(
            self.branch_type,
            BranchType::PullRequest | BranchType::Short
        )
    }
}

/// Metadata of the analysis whose issues are being notified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisMetadata {
    project_uuid: String,
    analysis_date: DateTime<Utc>,
    branch: Branch,
    pull_request_key: Option<String>,
}

impl AnalysisMetadata {
    pub fn new(project_uuid: impl Into<String>, analysis_date: DateTime<Utc>, branch: Branch) -> Self {
        Self {
            project_uuid: project_uuid.into(),
            analysis_date,
            branch,
            pull_request_key: None,
        }
    }

    pub fn with_pull_request_key(mut self, key: impl Into<String>) -> Self {
        self.pull_request_key = Some(key.into());
        self
    }

    pub fn project_uuid(&self) -> &str {
        &self.project_uuid
    }

    pub fn analysis_date(&self) -> DateTime<Utc> {
        self.analysis_date
    }

    pub fn branch(&self) -> &Branch {
        &self.branch
    }

    pub fn pull_request_key(&self) -> Option<&str> {
        self.pull_request_key.as_deref()
    }

    /// Branch name carried by notifications: omitted for the main branch and pull requests
    pub fn notification_branch_name(&self) -> Option<&str> {
        if self.branch.is_main() || self.branch.branch_type() == BranchType::PullRequest {
            None
        } else {
            Some(self.branch.name())
        }
    }

    /// Pull request key carried by notifications: only set for pull requests
    pub fn notification_pull_request(&self) -> Option<&str> {
        if self.branch.branch_type() == BranchType::PullRequest {
            self.pull_request_key.as_deref()
        } else {
            None
        }
    }
}
