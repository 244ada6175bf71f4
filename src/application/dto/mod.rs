/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_fixture;
mod notification_request;
mod notification_response;
mod output_format;

pub use analysis_fixture::{AnalysisFixture, SubscriberSpec};
pub use notification_request::NotificationRequest;
pub use notification_response::{NotificationResponse, RunOutcome};
pub use output_format::OutputFormat;
