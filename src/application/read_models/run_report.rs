//! Run report read model
//!
//! Denormalized view of one notification run: project context, outcome,
//! the six counters and every delivery made.

use crate::application::dto::RunOutcome;
use chrono::{DateTime, Utc};

/// Main read model for a notification run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Unique id of this run
    pub run_id: String,
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    pub project: ProjectView,
    pub outcome: RunOutcome,
    /// Counters in dump order
    pub counters: Vec<CounterView>,
    pub deliveries: Vec<DeliveryView>,
}

impl RunReport {
    /// Sum of the counters whose name ends with `Deliveries`
    pub fn total_deliveries(&self) -> usize {
        self.counters
            .iter()
            .filter(|c| c.name.ends_with("Deliveries"))
            .map(|c| c.value)
            .sum()
    }
}

/// View representation of the analysed project
#[derive(Debug, Clone)]
pub struct ProjectView {
    pub key: String,
    pub name: String,
    pub version: Option<String>,
    pub branch: String,
    pub pull_request: Option<String>,
    pub analysis_date: DateTime<Utc>,
}

/// One named run counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub name: String,
    pub value: usize,
}

/// One notification delivered through one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryView {
    pub channel: String,
    pub kind: String,
    pub subject: String,
    pub recipients: Vec<String>,
}
