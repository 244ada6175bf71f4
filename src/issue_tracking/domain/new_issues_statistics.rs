use crate::issue_tracking::domain::Issue;
use std::collections::BTreeMap;

/// Distribution tracked for every issue added to a [`Stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    RuleType,
    Tag,
    Component,
    Assignee,
    Rule,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::RuleType,
        Metric::Tag,
        Metric::Component,
        Metric::Assignee,
        Metric::Rule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::RuleType => "ruleType",
            Metric::Tag => "tag",
            Metric::Component => "component",
            Metric::Assignee => "assignee",
            Metric::Rule => "rule",
        }
    }
}

/// Counter split between issues on the leak period and the others
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricStat {
    on_leak: u64,
    off_leak: u64,
}

impl MetricStat {
    fn add(&mut self, on_leak: bool, value: u64) {
        if on_leak {
            self.on_leak += value;
        } else {
            self.off_leak += value;
        }
    }

    pub fn on_leak(&self) -> u64 {
        self.on_leak
    }

    pub fn off_leak(&self) -> u64 {
        self.off_leak
    }

    pub fn total(&self) -> u64 {
        self.on_leak + self.off_leak
    }
}

/// Per-value counters of one [`Metric`], plus their sum
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DistributedMetricStats {
    total: MetricStat,
    by_value: BTreeMap<String, MetricStat>,
}

impl DistributedMetricStats {
    fn increment(&mut self, value: &str, on_leak: bool) {
        self.total.add(on_leak, 1);
        self.by_value
            .entry(value.to_string())
            .or_default()
            .add(on_leak, 1);
    }

    pub fn total(&self) -> MetricStat {
        self.total
    }

    pub fn get(&self, value: &str) -> Option<MetricStat> {
        self.by_value.get(value).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricStat)> {
        self.by_value.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Values with the most on-leak issues, highest first; ties keep key order
    pub fn top_on_leak(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .by_value
            .iter()
            .filter(|(_, stat)| stat.on_leak > 0)
            .map(|(k, stat)| (k.as_str(), stat.on_leak))
            .collect();
        // stable sort: equal counts stay in key order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

/// Rollup of the issues of a project, or of one assignee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    distributions: BTreeMap<Metric, DistributedMetricStats>,
    effort: MetricStat,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            distributions: Metric::ALL
                .iter()
                .map(|metric| (*metric, DistributedMetricStats::default()))
                .collect(),
            effort: MetricStat::default(),
        }
    }

    pub fn add(&mut self, issue: &Issue, on_leak: bool) {
        self.increment(Metric::RuleType, issue.rule_type().as_str(), on_leak);
        if let Some(assignee) = issue.assignee() {
            self.increment(Metric::Assignee, assignee, on_leak);
        }
        for tag in issue.tags() {
            self.increment(Metric::Tag, tag, on_leak);
        }
        self.increment(Metric::Component, issue.component_key(), on_leak);
        self.increment(Metric::Rule, issue.rule_key(), on_leak);
        self.effort
            .add(on_leak, issue.effort_minutes().unwrap_or_default());
    }

    fn increment(&mut self, metric: Metric, value: &str, on_leak: bool) {
        self.distributions
            .entry(metric)
            .or_default()
            .increment(value, on_leak);
    }

    pub fn distribution(&self, metric: Metric) -> &DistributedMetricStats {
        // every metric is inserted by `new`
        &self.distributions[&metric]
    }

    pub fn effort(&self) -> MetricStat {
        self.effort
    }

    /// Number of issues on the leak period
    pub fn issue_count_on_leak(&self) -> u64 {
        self.distribution(Metric::RuleType).total().on_leak()
    }

    pub fn has_issues_on_leak(&self) -> bool {
        self.issue_count_on_leak() > 0
    }
}

/// Global and per-assignee statistics over the new issues of an analysis
#[derive(Debug, Default, Clone)]
pub struct NewIssuesStatistics {
    global: Stats,
    assignees: BTreeMap<String, Stats>,
}

impl NewIssuesStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the global rollup and, when assigned, to its assignee's rollup
    pub fn add(&mut self, issue: &Issue, on_leak: bool) {
        self.global.add(issue, on_leak);
        if let Some(assignee) = issue.assignee() {
            self.assignees
                .entry(assignee.to_string())
                .or_default()
                .add(issue, on_leak);
        }
    }

    pub fn has_issues_on_leak(&self) -> bool {
        self.global.has_issues_on_leak()
    }

    pub fn global_statistics(&self) -> &Stats {
        &self.global
    }

    pub fn assignees_statistics(&self) -> &BTreeMap<String, Stats> {
        &self.assignees
    }

    /// Assignees owning at least one issue on the leak period, in uuid order
    pub fn assignees_with_issues_on_leak(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.assignees
            .iter()
            .filter(|(_, stats)| stats.has_issues_on_leak())
            .map(|(uuid, stats)| (uuid.as_str(), stats))
    }
}
