/// Use cases module containing application business logic orchestration
mod send_issue_notifications;

pub use send_issue_notifications::SendIssueNotificationsUseCase;
