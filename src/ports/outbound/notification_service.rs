use crate::issue_tracking::domain::{Notification, NotificationKind};
use crate::shared::Result;

/// NotificationService port abstracting subscriber matching and delivery
///
/// Every notification is handed to both delivery paths; each returns the
/// number of recipients it reached.
pub trait NotificationService {
    /// Whether any subscriber of the project wants at least one of `kinds`
    fn has_project_subscribers_for_types(
        &self,
        project_uuid: &str,
        kinds: &[NotificationKind],
    ) -> Result<bool>;

    /// Bulk delivery path
    fn deliver_emails(&self, notifications: &[Notification]) -> Result<usize>;

    /// Legacy single-notification delivery path
    fn deliver(&self, notification: &Notification) -> Result<usize>;
}

/// Delivery path a recipient is reached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryChannel {
    /// Bulk path (`deliver_emails`)
    Email,
    /// Single-notification path (`deliver`)
    Legacy,
}

impl DeliveryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::Legacy => "legacy",
        }
    }
}

impl std::str::FromStr for DeliveryChannel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(DeliveryChannel::Email),
            "legacy" => Ok(DeliveryChannel::Legacy),
            _ => Err(format!(
                "Invalid delivery channel: {}. Valid values are: email, legacy",
                s
            )),
        }
    }
}

/// One notification handed to one channel, with the recipients it reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub channel: DeliveryChannel,
    pub kind: NotificationKind,
    pub subject: String,
    pub recipients: Vec<String>,
}
