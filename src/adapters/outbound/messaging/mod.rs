/// Messaging adapters matching notifications against project subscribers
mod subscriber_notification_service;

pub use subscriber_notification_service::SubscriberNotificationService;
