use crate::application::dto::{NotificationRequest, NotificationResponse};
use crate::ports::outbound::StatisticsSink;
use crate::shared::Result;

/// IssueNotificationPort - Inbound port triggering the notification step of an analysis
pub trait IssueNotificationPort {
    /// Sends the notifications for the analysis described by `request`
    ///
    /// Run counters are reported to `statistics` unless the branch kind
    /// disables notifications.
    ///
    /// # Errors
    /// Returns an error if a collaborator fails or a rule referenced by a
    /// changed issue is unknown
    fn send_issue_notifications(
        &self,
        request: &NotificationRequest,
        statistics: &mut dyn StatisticsSink,
    ) -> Result<NotificationResponse>;
}
