use issue_notifier::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock NotificationService recording every call
///
/// Each delivery path reports a fixed number of recipients per notification.
#[derive(Clone)]
pub struct MockNotificationService {
    pub has_subscribers: bool,
    pub recipients_per_email: usize,
    pub recipients_per_legacy: usize,
    pub bulk_calls: Arc<Mutex<Vec<Vec<NotificationKind>>>>,
    pub legacy_calls: Arc<Mutex<Vec<NotificationKind>>>,
}

impl MockNotificationService {
    pub fn new(has_subscribers: bool) -> Self {
        Self {
            has_subscribers,
            recipients_per_email: 1,
            recipients_per_legacy: 1,
            bulk_calls: Arc::new(Mutex::new(Vec::new())),
            legacy_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn bulk_calls(&self) -> Vec<Vec<NotificationKind>> {
        self.bulk_calls.lock().unwrap().clone()
    }

    pub fn legacy_calls(&self) -> Vec<NotificationKind> {
        self.legacy_calls.lock().unwrap().clone()
    }
}

impl NotificationService for MockNotificationService {
    fn has_project_subscribers_for_types(
        &self,
        _project_uuid: &str,
        _kinds: &[NotificationKind],
    ) -> Result<bool> {
        Ok(self.has_subscribers)
    }

    fn deliver_emails(&self, notifications: &[Notification]) -> Result<usize> {
        self.bulk_calls
            .lock()
            .unwrap()
            .push(notifications.iter().map(Notification::kind).collect());
        Ok(notifications.len() * self.recipients_per_email)
    }

    fn deliver(&self, notification: &Notification) -> Result<usize> {
        self.legacy_calls.lock().unwrap().push(notification.kind());
        Ok(self.recipients_per_legacy)
    }
}
