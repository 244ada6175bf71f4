use chrono::{DateTime, Utc};

/// Type of the rule that raised an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleType {
    CodeSmell,
    Bug,
    Vulnerability,
    SecurityHotspot,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::CodeSmell => "CODE_SMELL",
            RuleType::Bug => "BUG",
            RuleType::Vulnerability => "VULNERABILITY",
            RuleType::SecurityHotspot => "SECURITY_HOTSPOT",
        }
    }
}

impl std::str::FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CODE_SMELL" => Ok(RuleType::CodeSmell),
            "BUG" => Ok(RuleType::Bug),
            "VULNERABILITY" => Ok(RuleType::Vulnerability),
            "SECURITY_HOTSPOT" => Ok(RuleType::SecurityHotspot),
            _ => Err(format!("Unknown rule type: {}", s)),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue value object as read back from the analysis issue cache
///
/// Issues are immutable once built. The `with_*` / `mark_*` methods are
/// consuming builders used by cache adapters and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    key: String,
    rule_key: String,
    rule_type: RuleType,
    component_key: String,
    creation_date: DateTime<Utc>,
    message: Option<String>,
    severity: Option<String>,
    status: Option<String>,
    resolution: Option<String>,
    assignee: Option<String>,
    effort_minutes: Option<u64>,
    tags: Vec<String>,
    is_new: bool,
    is_changed: bool,
    must_send_notifications: bool,
}

impl Issue {
    pub fn new(
        key: impl Into<String>,
        rule_key: impl Into<String>,
        rule_type: RuleType,
        component_key: impl Into<String>,
        creation_date: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.into(),
            rule_key: rule_key.into(),
            rule_type,
            component_key: component_key.into(),
            creation_date,
            message: None,
            severity: None,
            status: None,
            resolution: None,
            assignee: None,
            effort_minutes: None,
            tags: Vec::new(),
            is_new: false,
            is_changed: false,
            must_send_notifications: false,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn with_assignee(mut self, assignee_uuid: impl Into<String>) -> Self {
        self.assignee = Some(assignee_uuid.into());
        self
    }

    pub fn with_effort_minutes(mut self, minutes: u64) -> Self {
        self.effort_minutes = Some(minutes);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Flags the issue as introduced by the current analysis
    pub fn mark_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Flags the issue as changed since the previous analysis
    pub fn mark_changed(mut self, must_send_notifications: bool) -> Self {
        self.is_changed = true;
        self.must_send_notifications = must_send_notifications;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rule_key(&self) -> &str {
        &self.rule_key
    }

    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    pub fn component_key(&self) -> &str {
        &self.component_key
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn resolution(&self) -> Option<&str> {
        self.resolution.as_deref()
    }

    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    pub fn effort_minutes(&self) -> Option<u64> {
        self.effort_minutes
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn is_changed(&self) -> bool {
        self.is_changed
    }

    pub fn must_send_notifications(&self) -> bool {
        self.must_send_notifications
    }

    pub fn is_security_hotspot(&self) -> bool {
        self.rule_type == RuleType::SecurityHotspot
    }
}
