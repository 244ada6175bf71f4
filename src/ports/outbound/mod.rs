/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the collaborators the notification pipeline relies on:
/// issue cache, storage, rule metadata, messaging and observability.
pub mod fixture_reader;
pub mod issue_cache;
pub mod notification_service;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod rule_repository;
pub mod statistics_sink;
pub mod user_repository;

pub use fixture_reader::FixtureReader;
pub use issue_cache::{IssueCache, IssueStream};
pub use notification_service::{DeliveryChannel, DeliveryRecord, NotificationService};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use rule_repository::RuleRepository;
pub use statistics_sink::StatisticsSink;
pub use user_repository::{UserRepository, UserSession};
