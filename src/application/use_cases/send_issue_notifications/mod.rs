use crate::application::dto::{NotificationRequest, NotificationResponse, RunOutcome};
use crate::application::services::{NotificationFactory, UserResolver};
use crate::issue_tracking::domain::{
    Issue, NewIssuesStatistics, Notification, NotificationKind, NotificationStatistics, User,
};
use crate::issue_tracking::policies::LeakPeriod;
use crate::issue_tracking::services::{ChangeBatch, Classification, IssueClassifier, LeafIndex};
use crate::ports::inbound::IssueNotificationPort;
use crate::ports::outbound::{
    IssueCache, IssueStream, NotificationService, ProgressReporter, RuleRepository,
    StatisticsSink, UserRepository,
};
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};


/// State owned by one notification run and dropped with it
struct RunState<'a, RR> {
    factory: NotificationFactory<'a, RR>,
    leaf_index: LeafIndex<'a>,
    assignees_by_uuid: HashMap<String, User>,
    new_issues: NewIssuesStatistics,
    counters: NotificationStatistics,
    changed_issues_sent: usize,
}

/// SendIssueNotificationsUseCase - Sends the issue notifications of an analysis
///
/// Walks the cached issues once, feeding new issues into the leak-period
/// statistics and dispatching changed issues in batches, then sends the
/// project-wide and per-assignee new issues notifications.
///
/// # Type Parameters
/// * `IC` - IssueCache implementation
/// * `RR` - RuleRepository implementation
/// * `UR` - UserRepository implementation
/// * `NS` - NotificationService implementation
/// * `PR` - ProgressReporter implementation
pub struct SendIssueNotificationsUseCase<IC, RR, UR, NS, PR> {
    issue_cache: IC,
    rule_repository: RR,
    user_repository: UR,
    notification_service: NS,
    progress_reporter: PR,
}

impl<IC, RR, UR, NS, PR> SendIssueNotificationsUseCase<IC, RR, UR, NS, PR>
where
    IC: IssueCache,
    RR: RuleRepository,
    UR: UserRepository,
    NS: NotificationService,
    PR: ProgressReporter,
{
    /// Creates a new SendIssueNotificationsUseCase with injected dependencies
    pub fn new(
        issue_cache: IC,
        rule_repository: RR,
        user_repository: UR,
        notification_service: NS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            issue_cache,
            rule_repository,
            user_repository,
            notification_service,
            progress_reporter,
        }
    }

    pub fn notification_service(&self) -> &NS {
        &self.notification_service
    }

    pub fn issue_cache(&self) -> &IC {
        &self.issue_cache
    }

    pub fn user_repository(&self) -> &UR {
        &self.user_repository
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the notification step
    ///
    /// # Arguments
    /// * `request` - Analysis metadata and project tree
    /// * `statistics` - Sink receiving the six run counters
    ///
    /// # Returns
    /// The run outcome and its counters
    pub fn execute(
        &self,
        request: &NotificationRequest,
        statistics: &mut dyn StatisticsSink,
    ) -> Result<NotificationResponse> {
        let analysis = &request.analysis;

        // Step 1: branch kind gate, no side effect at all
        if analysis.branch().disables_notifications() {
            self.progress_reporter.report(&format!(
                "⏭️  Skipping issue notifications on branch '{}'",
                analysis.branch().name()
            ));
            return Ok(NotificationResponse::new(
                RunOutcome::SkippedBranch,
                NotificationStatistics::new(),
            ));
        }

        // Step 2: subscriber gate, then the notifications themselves
        let (outcome, counters) = match self.run_if_subscribed(request) {
            Ok(result) => result,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Issue notifications failed: {}", e));
                return Err(e);
            }
        };

        // Step 3: report run counters
        Self::dump_statistics(&counters, statistics);
        self.progress_reporter.report_completion(&format!(
            "✅ Issue notifications: {} change batch(es), {} new issues, {} personal",
            counters.notifications(NotificationKind::IssueChanges),
            counters.notifications(NotificationKind::NewIssues),
            counters.notifications(NotificationKind::MyNewIssues),
        ));

        Ok(NotificationResponse::new(outcome, counters))
    }

    fn run_if_subscribed(
        &self,
        request: &NotificationRequest,
    ) -> Result<(RunOutcome, NotificationStatistics)> {
        let subscribed = self.notification_service.has_project_subscribers_for_types(
            request.analysis.project_uuid(),
            &NotificationKind::ALL,
        )?;
        if !subscribed {
            self.progress_reporter
                .report("🔕 No subscriber for issue notifications on this project");
            return Ok((RunOutcome::NoSubscribers, NotificationStatistics::new()));
        }

        let counters = self.send_notifications(request)?;
        Ok((RunOutcome::Completed, counters))
    }

    fn send_notifications(&self, request: &NotificationRequest) -> Result<NotificationStatistics> {
        let analysis = &request.analysis;
        let resolver = UserResolver::new(&self.user_repository);

        // Resolve every assignee up front; the session is closed before streaming
        let assignees_by_uuid = resolver.resolve(&self.collect_assignee_uuids()?)?;
        self.progress_reporter.report(&format!(
            "👤 Resolved {} assignee(s)",
            assignees_by_uuid.len()
        ));

        let mut state = RunState {
            factory: NotificationFactory::new(&self.rule_repository, analysis, &request.tree),
            leaf_index: LeafIndex::new(&request.tree),
            assignees_by_uuid,
            new_issues: NewIssuesStatistics::new(),
            counters: NotificationStatistics::new(),
            changed_issues_sent: 0,
        };

        let classifier = IssueClassifier::new(LeakPeriod::from_analysis_date(
            analysis.analysis_date(),
        ));
        let issues = self.issue_cache.traverse()?;
        self.process_issues(issues, &classifier, &mut state)?;

        if state.new_issues.has_issues_on_leak() {
            self.send_new_issues_notification(&mut state)?;
            self.send_my_new_issues_notifications(&resolver, &mut state)?;
        }

        Ok(state.counters)
    }

    /// Collects the assignee of every cached issue with a dedicated traversal
    fn collect_assignee_uuids(&self) -> Result<BTreeSet<String>> {
        let mut uuids = BTreeSet::new();
        for issue in self.issue_cache.traverse()? {
            if let Some(assignee) = issue?.assignee() {
                uuids.insert(assignee.to_string());
            }
        }
        Ok(uuids)
    }

    /// Single forward pass over the cached issues
    ///
    /// Consumes the stream, so the cache is released on every exit path.
    fn process_issues(
        &self,
        issues: IssueStream<'_>,
        classifier: &IssueClassifier,
        state: &mut RunState<'_, RR>,
    ) -> Result<()> {
        let mut batch = ChangeBatch::new();
        for issue in issues {
            let issue = issue?;
            match classifier.classify(&issue) {
                Classification::NewIssue { on_leak } => state.new_issues.add(&issue, on_leak),
                Classification::Changed => {
                    if batch.push(issue) {
                        self.send_issue_change_notifications(batch.take(), state)?;
                    }
                }
                Classification::Ignored => {}
            }
        }

        if !batch.is_empty() {
            self.send_issue_change_notifications(batch.take(), state)?;
        }
        Ok(())
    }

    fn send_issue_change_notifications(
        &self,
        issues: Vec<Issue>,
        state: &mut RunState<'_, RR>,
    ) -> Result<()> {
        let mut notifications = Vec::with_capacity(issues.len());
        for issue in &issues {
            let assignee = issue
                .assignee()
                .and_then(|uuid| state.assignees_by_uuid.get(uuid));
            let component = state.leaf_index.resolve(issue.component_key());
            let notification = state.factory.new_issue_change(issue, assignee, component)?;
            notifications.push(Notification::IssueChanges(notification));
        }

        let kind = NotificationKind::IssueChanges;
        let deliveries = self.notification_service.deliver_emails(&notifications)?;
        state.counters.add_deliveries(kind, deliveries);
        state.counters.add_notifications(kind, 1);

        // legacy delivery path
        for notification in &notifications {
            let deliveries = self.notification_service.deliver(notification)?;
            state.counters.add_deliveries(kind, deliveries);
        }

        state.changed_issues_sent += issues.len();
        self.progress_reporter.report_progress(
            state.changed_issues_sent,
            Some("changed issues notified"),
        );
        Ok(())
    }

    fn send_new_issues_notification(&self, state: &mut RunState<'_, RR>) -> Result<()> {
        let global = state.new_issues.global_statistics();
        let notification = Notification::NewIssues(
            state
                .factory
                .new_new_issues(global, &state.assignees_by_uuid),
        );
        self.progress_reporter.report(&format!(
            "📣 Sending new issues notification ({} issue(s) on leak period)",
            global.issue_count_on_leak()
        ));

        let kind = NotificationKind::NewIssues;
        let deliveries = self
            .notification_service
            .deliver_emails(std::slice::from_ref(&notification))?;
        state.counters.add_deliveries(kind, deliveries);
        state.counters.add_notifications(kind, 1);

        let deliveries = self.notification_service.deliver(&notification)?;
        state.counters.add_deliveries(kind, deliveries);
        Ok(())
    }

    fn send_my_new_issues_notifications(
        &self,
        resolver: &UserResolver<'_, UR>,
        state: &mut RunState<'_, RR>,
    ) -> Result<()> {
        let assignee_uuids: BTreeSet<String> = state
            .new_issues
            .assignees_with_issues_on_leak()
            .map(|(uuid, _)| uuid.to_string())
            .collect();
        let users_by_uuid = resolver.resolve(&assignee_uuids)?;

        let notifications: Vec<Notification> = state
            .new_issues
            .assignees_with_issues_on_leak()
            .map(|(uuid, stats)| {
                Notification::MyNewIssues(state.factory.new_my_new_issues(
                    uuid,
                    stats,
                    users_by_uuid.get(uuid),
                ))
            })
            .collect();
        if notifications.is_empty() {
            return Ok(());
        }
        self.progress_reporter.report(&format!(
            "📣 Sending {} personal new issues notification(s)",
            notifications.len()
        ));

        let kind = NotificationKind::MyNewIssues;
        let deliveries = self.notification_service.deliver_emails(&notifications)?;
        state.counters.add_deliveries(kind, deliveries);
        state.counters.add_notifications(kind, notifications.len());

        for notification in &notifications {
            let deliveries = self.notification_service.deliver(notification)?;
            state.counters.add_deliveries(kind, deliveries);
        }
        Ok(())
    }

    fn dump_statistics(counters: &NotificationStatistics, statistics: &mut dyn StatisticsSink) {
        for (name, value) in counters.entries() {
            statistics.add(name, value);
        }
    }
}

impl<IC, RR, UR, NS, PR> IssueNotificationPort for SendIssueNotificationsUseCase<IC, RR, UR, NS, PR>
where
    IC: IssueCache,
    RR: RuleRepository,
    UR: UserRepository,
    NS: NotificationService,
    PR: ProgressReporter,
{
    fn send_issue_notifications(
        &self,
        request: &NotificationRequest,
        statistics: &mut dyn StatisticsSink,
    ) -> Result<NotificationResponse> {
        self.execute(request, statistics)
    }
}
