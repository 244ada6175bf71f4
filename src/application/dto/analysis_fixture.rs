use super::NotificationRequest;
use crate::issue_tracking::domain::{Issue, NotificationKind, Rule, User};
use crate::ports::outbound::DeliveryChannel;

/// A recorded analysis run, replayable through the notification use case
#[derive(Debug, Clone)]
pub struct AnalysisFixture {
    pub request: NotificationRequest,
    pub rules: Vec<Rule>,
    pub users: Vec<User>,
    pub subscribers: Vec<SubscriberSpec>,
    pub issues: Vec<Issue>,
}

/// Subscription of one user to some notification kinds of the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberSpec {
    pub login: String,
    pub channel: DeliveryChannel,
    pub kinds: Vec<NotificationKind>,
}

impl SubscriberSpec {
    pub fn new(login: impl Into<String>, channel: DeliveryChannel, kinds: Vec<NotificationKind>) -> Self {
        Self {
            login: login.into(),
            channel,
            kinds,
        }
    }

    pub fn wants(&self, kind: NotificationKind) -> bool {
        self.kinds.contains(&kind)
    }
}
