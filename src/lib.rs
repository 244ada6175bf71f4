//! issue-notifier - Post-analysis issue notification step
//!
//! This library streams the issues of a finished analysis, computes the
//! new-issue statistics of the leak period and dispatches three kinds of
//! notifications (issue changes, new issues, my new issues), following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`issue_tracking`): Issues, component tree, leak period,
//!   statistics and notification records
//! - **Application Layer** (`application`): The notification use case, DTOs,
//!   application services and read models
//! - **Ports** (`ports`): Interface definitions for the pipeline collaborators
//! - **Adapters** (`adapters`): In-memory backends, subscriber messaging,
//!   console progress, report formatters and file I/O
//! - **Shared** (`shared`): Error types, result alias and input file checks
//!
//! # Example
//!
//! ```no_run
//! use issue_notifier::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let fixture = FileSystemReader::new().read_fixture(Path::new("analysis.json"))?;
//! let project_uuid = fixture.request.analysis.project_uuid().to_string();
//!
//! let use_case = SendIssueNotificationsUseCase::new(
//!     InMemoryIssueCache::new(fixture.issues),
//!     InMemoryRuleRepository::new(fixture.rules),
//!     InMemoryUserRepository::new(fixture.users),
//!     SubscriberNotificationService::new(project_uuid, fixture.subscribers),
//!     StderrProgressReporter::new(),
//! );
//!
//! let mut statistics = RecordingStatisticsSink::new();
//! let response = use_case.execute(&fixture.request, &mut statistics)?;
//! println!("{}", response.outcome.as_str());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod issue_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::in_memory::{
        InMemoryIssueCache, InMemoryRuleRepository, InMemoryUserRepository,
        RecordingStatisticsSink,
    };
    pub use crate::adapters::outbound::messaging::SubscriberNotificationService;
    pub use crate::application::dto::{
        AnalysisFixture, NotificationRequest, NotificationResponse, OutputFormat, RunOutcome,
        SubscriberSpec,
    };
    pub use crate::application::read_models::{RunReport, RunReportBuilder};
    pub use crate::application::use_cases::SendIssueNotificationsUseCase;
    pub use crate::issue_tracking::domain::{
        AnalysisMetadata, Branch, BranchType, Component, ComponentTree, ComponentType, Issue,
        Notification, NotificationKind, NotificationStatistics, Rule, RuleType, User,
    };
    pub use crate::ports::inbound::IssueNotificationPort;
    pub use crate::ports::outbound::{
        DeliveryChannel, DeliveryRecord, FixtureReader, IssueCache, NotificationService,
        OutputPresenter, ProgressReporter, ReportFormatter, RuleRepository, StatisticsSink,
        UserRepository, UserSession,
    };
    pub use crate::shared::Result;
}
