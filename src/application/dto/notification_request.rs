use crate::issue_tracking::domain::{AnalysisMetadata, ComponentTree};

/// NotificationRequest - Input of the issue notification use case
///
/// Carries the analysis being notified and its project tree. Both are
/// read-only for the duration of the run.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub analysis: AnalysisMetadata,
    pub tree: ComponentTree,
}

impl NotificationRequest {
    pub fn new(analysis: AnalysisMetadata, tree: ComponentTree) -> Self {
        Self { analysis, tree }
    }
}
