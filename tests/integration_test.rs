/// Integration tests for the application layer
mod test_utilities;

use chrono::{DateTime, Duration, TimeZone, Utc};
use issue_notifier::prelude::*;
use issue_notifier::shared::error::NotifierError;
use test_utilities::mocks::*;

fn analysis_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn request(branch: Branch) -> NotificationRequest {
    let mut tree = ComponentTree::new(
        Component::new("shop", "shop-uuid", "Shop", ComponentType::Project)
            .with_project_version("3.2"),
    );
    let src = tree.add_child(
        tree.root_id(),
        Component::new("shop:src", "src-uuid", "src", ComponentType::Directory),
    );
    tree.add_child(
        src,
        Component::new("shop:src/cart.rs", "cart-uuid", "cart.rs", ComponentType::File),
    );
    tree.add_child(
        src,
        Component::new("shop:src/pay.rs", "pay-uuid", "pay.rs", ComponentType::File),
    );
    NotificationRequest::new(
        AnalysisMetadata::new("shop-uuid", analysis_date(), branch),
        tree,
    )
}

fn rules() -> InMemoryRuleRepository {
    InMemoryRuleRepository::new(vec![
        Rule::new("rust:unwrap", "Avoid unwrap in library code"),
        Rule::new("rust:clone", "Redundant clone"),
    ])
}

fn users() -> InMemoryUserRepository {
    InMemoryUserRepository::new(vec![
        User::new("u-alice", "alice").with_name("Alice Martin"),
        User::new("u-bob", "bob"),
    ])
}

fn sample_issues() -> Vec<Issue> {
    vec![
        Issue::new(
            "new-1",
            "rust:unwrap",
            RuleType::Bug,
            "shop:src/cart.rs",
            analysis_date(),
        )
        .with_assignee("u-alice")
        .with_effort_minutes(15)
        .with_tags(["panic"])
        .mark_new(),
        Issue::new(
            "new-2",
            "rust:clone",
            RuleType::CodeSmell,
            "shop:src/pay.rs",
            analysis_date() + Duration::minutes(5),
        )
        .with_assignee("u-bob")
        .with_effort_minutes(5)
        .mark_new(),
        Issue::new(
            "old-1",
            "rust:clone",
            RuleType::CodeSmell,
            "shop:src/pay.rs",
            analysis_date() - Duration::days(3),
        )
        .with_assignee("u-bob")
        .mark_new(),
        Issue::new(
            "changed-1",
            "rust:unwrap",
            RuleType::Bug,
            "shop:src/pay.rs",
            analysis_date() - Duration::days(30),
        )
        .with_status("RESOLVED")
        .with_resolution("FIXED")
        .with_assignee("u-alice")
        .mark_changed(true),
        Issue::new(
            "changed-silent",
            "rust:unwrap",
            RuleType::Bug,
            "shop:src/pay.rs",
            analysis_date() - Duration::days(30),
        )
        .mark_changed(false),
    ]
}

fn subscribers() -> Vec<SubscriberSpec> {
    vec![
        SubscriberSpec::new(
            "alice",
            DeliveryChannel::Email,
            vec![NotificationKind::MyNewIssues, NotificationKind::IssueChanges],
        ),
        SubscriberSpec::new("lead", DeliveryChannel::Email, vec![NotificationKind::NewIssues]),
        SubscriberSpec::new(
            "bob",
            DeliveryChannel::Legacy,
            vec![NotificationKind::MyNewIssues],
        ),
    ]
}

#[test]
fn test_full_run_with_in_memory_adapters() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        SubscriberNotificationService::new("shop-uuid", subscribers()),
        MockProgressReporter::new(),
    );
    let request = request(Branch::main("main"));
    let mut sink = RecordingStatisticsSink::new();

    let response = use_case.execute(&request, &mut sink).unwrap();

    assert_eq!(response.outcome, RunOutcome::Completed);
    // one change batch reaching alice by email
    assert_eq!(sink.get("changesNotifs"), Some(1));
    assert_eq!(sink.get("changesDeliveries"), Some(1));
    // global notification reaching the lead
    assert_eq!(sink.get("newIssuesNotifs"), Some(1));
    assert_eq!(sink.get("newIssuesDeliveries"), Some(1));
    // alice by email, bob through the legacy path
    assert_eq!(sink.get("myNewIssuesNotifs"), Some(2));
    assert_eq!(sink.get("myNewIssuesDeliveries"), Some(2));

    let deliveries = use_case.notification_service().deliveries();
    let new_issues = deliveries
        .iter()
        .find(|d| d.kind == NotificationKind::NewIssues && d.channel == DeliveryChannel::Email)
        .unwrap();
    assert_eq!(new_issues.recipients, vec!["lead"]);
    assert!(new_issues.subject.contains("2 new issue(s)"));
    assert!(new_issues.subject.contains("new debt: 20min"));
}

#[test]
fn test_run_releases_every_resource() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        SubscriberNotificationService::new("shop-uuid", subscribers()),
        MockProgressReporter::new(),
    );
    let mut sink = RecordingStatisticsSink::new();

    use_case
        .execute(&request(Branch::main("main")), &mut sink)
        .unwrap();

    assert_eq!(use_case.issue_cache().traversals(), 2);
    assert_eq!(use_case.issue_cache().open_streams(), 0);
    assert_eq!(use_case.user_repository().sessions_opened(), 2);
    assert_eq!(use_case.user_repository().sessions_open(), 0);
}

#[test]
fn test_report_built_from_run() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        SubscriberNotificationService::new("shop-uuid", subscribers()),
        MockProgressReporter::new(),
    );
    let request = request(Branch::new("release-3", BranchType::Long, false));
    let mut sink = RecordingStatisticsSink::new();
    let response = use_case.execute(&request, &mut sink).unwrap();

    let report = RunReportBuilder::build(
        &request,
        &response,
        &use_case.notification_service().deliveries(),
    );
    let json = JsonFormatter::new().format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["outcome"], "completed");
    assert_eq!(value["project"]["branch"], "release-3");
    assert_eq!(value["project"]["version"], "3.2");
    assert_eq!(value["counters"]["myNewIssuesNotifs"], 2);
    assert_eq!(report.total_deliveries(), 4);
    assert!(report.deliveries.iter().all(|d| !d.recipients.is_empty()));

    let markdown = MarkdownFormatter::new().format(&report).unwrap();
    assert!(markdown.contains("| changesNotifs | 1 |"));
}

#[test]
fn test_skipped_pull_request_reports_progress() {
    let reporter = MockProgressReporter::new();
    let service = MockNotificationService::new(true);
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        service.clone(),
        reporter.clone(),
    );
    let mut request = request(Branch::new("feature/x", BranchType::PullRequest, false));
    request.analysis = request.analysis.clone().with_pull_request_key("17");
    let mut sink = RecordingStatisticsSink::new();

    let response = use_case.execute(&request, &mut sink).unwrap();

    assert_eq!(response.outcome, RunOutcome::SkippedBranch);
    assert!(sink.entries().is_empty());
    assert!(service.bulk_calls().is_empty());
    assert_eq!(use_case.issue_cache().traversals(), 0);
    assert!(reporter.contains("Skipping issue notifications"));
}

#[test]
fn test_dual_delivery_paths_are_both_used() {
    let service = MockNotificationService::new(true);
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        service.clone(),
        MockProgressReporter::new(),
    );
    let mut sink = RecordingStatisticsSink::new();

    use_case
        .execute(&request(Branch::main("main")), &mut sink)
        .unwrap();

    assert_eq!(
        service.bulk_calls(),
        vec![
            vec![NotificationKind::IssueChanges],
            vec![NotificationKind::NewIssues],
            vec![NotificationKind::MyNewIssues, NotificationKind::MyNewIssues],
        ]
    );
    assert_eq!(service.legacy_calls().len(), 4);
    assert_eq!(sink.get("myNewIssuesDeliveries"), Some(4));
}

#[test]
fn test_stream_failure_propagates_and_releases_cache() {
    let use_case = SendIssueNotificationsUseCase::new(
        FailingIssueCache::new(sample_issues(), 2),
        rules(),
        users(),
        MockNotificationService::new(true),
        MockProgressReporter::new(),
    );
    let mut sink = RecordingStatisticsSink::new();

    let err = use_case
        .execute(&request(Branch::main("main")), &mut sink)
        .unwrap_err();

    assert!(err.to_string().contains("issue cache is corrupted"));
    assert_eq!(use_case.issue_cache().open_streams.get(), 0);
    assert!(sink.entries().is_empty());
}

#[test]
fn test_user_storage_failure_propagates_and_closes_session() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        FailingUserRepository::default(),
        MockNotificationService::new(true),
        MockProgressReporter::new(),
    );
    let mut sink = RecordingStatisticsSink::new();

    let err = use_case
        .execute(&request(Branch::main("main")), &mut sink)
        .unwrap_err();

    assert!(err.to_string().contains("user storage unavailable"));
    assert_eq!(use_case.user_repository().open_sessions.get(), 0);
}

#[test]
fn test_unknown_rule_is_a_hard_failure() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        InMemoryRuleRepository::new(vec![Rule::new("rust:clone", "Redundant clone")]),
        users(),
        MockNotificationService::new(true),
        MockProgressReporter::new(),
    );
    let mut sink = RecordingStatisticsSink::new();

    let err = use_case
        .execute(&request(Branch::main("main")), &mut sink)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NotifierError>(),
        Some(NotifierError::RuleNotFound { .. })
    ));
    assert_eq!(use_case.issue_cache().open_streams(), 0);
}

#[test]
fn test_no_subscribers_through_port() {
    let use_case = SendIssueNotificationsUseCase::new(
        InMemoryIssueCache::new(sample_issues()),
        rules(),
        users(),
        SubscriberNotificationService::new("another-project", subscribers()),
        MockProgressReporter::new(),
    );
    let port: &dyn IssueNotificationPort = &use_case;
    let mut sink = RecordingStatisticsSink::new();

    let response = port
        .send_issue_notifications(&request(Branch::main("main")), &mut sink)
        .unwrap();

    assert_eq!(response.outcome, RunOutcome::NoSubscribers);
    assert_eq!(sink.entries().len(), 6);
    assert!(sink.entries().iter().all(|(_, value)| *value == 0));
    assert_eq!(use_case.user_repository().sessions_opened(), 0);
}
