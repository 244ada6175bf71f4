use crate::application::dto::SubscriberSpec;
use crate::issue_tracking::domain::{Notification, NotificationKind};
use crate::ports::outbound::{DeliveryChannel, DeliveryRecord, NotificationService};
use crate::shared::Result;
use std::cell::RefCell;

/// SubscriberNotificationService adapter
///
/// Matches every notification against the subscribers of one project and
/// records the recipients in an outbox. Email subscribers are reached by
/// the bulk path, legacy subscribers by the single-notification path.
pub struct SubscriberNotificationService {
    project_uuid: String,
    subscribers: Vec<SubscriberSpec>,
    outbox: RefCell<Vec<DeliveryRecord>>,
}

impl SubscriberNotificationService {
    pub fn new(project_uuid: impl Into<String>, subscribers: Vec<SubscriberSpec>) -> Self {
        Self {
            project_uuid: project_uuid.into(),
            subscribers,
            outbox: RefCell::new(Vec::new()),
        }
    }

    /// Deliveries recorded so far, in order
    pub fn deliveries(&self) -> Vec<DeliveryRecord> {
        self.outbox.borrow().clone()
    }

    fn recipients(&self, channel: DeliveryChannel, notification: &Notification) -> Vec<String> {
        let kind = notification.kind();
        self.subscribers
            .iter()
            .filter(|s| s.channel == channel && s.wants(kind))
            .filter(|s| match notification {
                Notification::MyNewIssues(n) => n
                    .assignee
                    .as_ref()
                    .is_some_and(|user| user.login() == s.login),
                _ => true,
            })
            .map(|s| s.login.clone())
            .collect()
    }

    fn subject(notification: &Notification) -> String {
        let project = &notification.project().project_name;
        match notification {
            Notification::IssueChanges(n) => {
                format!("{}: issue {} changed ({})", project, n.issue_key, n.rule_name)
            }
            Notification::NewIssues(n) => format!(
                "{}: {} new issue(s) (new debt: {}min)",
                project,
                n.statistics.issue_count_on_leak(),
                n.debt_minutes
            ),
            Notification::MyNewIssues(n) => format!(
                "{}: {} new issue(s) assigned to {}",
                project,
                n.statistics.issue_count_on_leak(),
                n.assignee
                    .as_ref()
                    .map(|u| u.display_name())
                    .unwrap_or(n.assignee_uuid.as_str())
            ),
        }
    }

    fn dispatch(&self, channel: DeliveryChannel, notification: &Notification) -> usize {
        let recipients = self.recipients(channel, notification);
        let reached = recipients.len();
        self.outbox.borrow_mut().push(DeliveryRecord {
            channel,
            kind: notification.kind(),
            subject: Self::subject(notification),
            recipients,
        });
        reached
    }
}

impl NotificationService for SubscriberNotificationService {
    fn has_project_subscribers_for_types(
        &self,
        project_uuid: &str,
        kinds: &[NotificationKind],
    ) -> Result<bool> {
        Ok(project_uuid == self.project_uuid
            && self
                .subscribers
                .iter()
                .any(|s| kinds.iter().any(|kind| s.wants(*kind))))
    }

    fn deliver_emails(&self, notifications: &[Notification]) -> Result<usize> {
        Ok(notifications
            .iter()
            .map(|n| self.dispatch(DeliveryChannel::Email, n))
            .sum())
    }

    fn deliver(&self, notification: &Notification) -> Result<usize> {
        Ok(self.dispatch(DeliveryChannel::Legacy, notification))
    }
}
