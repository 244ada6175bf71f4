/// In-memory adapters backing a replayed analysis run
mod issue_cache;
mod rule_repository;
mod statistics_sink;
mod user_repository;

pub use issue_cache::InMemoryIssueCache;
pub use rule_repository::InMemoryRuleRepository;
pub use statistics_sink::RecordingStatisticsSink;
pub use user_repository::InMemoryUserRepository;
