/// Mock implementations for testing
mod mock_issue_cache;
mod mock_notification_service;
mod mock_progress_reporter;
mod mock_user_repository;

pub use mock_issue_cache::FailingIssueCache;
pub use mock_notification_service::MockNotificationService;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_user_repository::FailingUserRepository;
