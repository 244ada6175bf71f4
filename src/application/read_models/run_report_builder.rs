//! Builder for constructing RunReport from a finished run

use super::run_report::{CounterView, DeliveryView, ProjectView, RunReport};
use crate::application::dto::{NotificationRequest, NotificationResponse};
use crate::ports::outbound::DeliveryRecord;
use chrono::{SubsecRound, Utc};
use uuid::Uuid;

/// Builder for constructing RunReport from the request, the response
/// and the deliveries recorded by the notification service
pub struct RunReportBuilder;

impl RunReportBuilder {
    /// Builds a RunReport
    ///
    /// # Arguments
    /// * `request` - The request the run was executed with
    /// * `response` - Outcome and counters of the run
    /// * `deliveries` - Deliveries in the order they were made
    pub fn build(
        request: &NotificationRequest,
        response: &NotificationResponse,
        deliveries: &[DeliveryRecord],
    ) -> RunReport {
        RunReport {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().trunc_subsecs(0),
            project: Self::build_project(request),
            outcome: response.outcome,
            counters: Self::build_counters(response),
            deliveries: Self::build_deliveries(deliveries),
        }
    }

    fn build_project(request: &NotificationRequest) -> ProjectView {
        let root = request.tree.root();
        let analysis = &request.analysis;
        ProjectView {
            key: root.key().to_string(),
            name: root.name().to_string(),
            version: root.project_version().map(str::to_string),
            branch: analysis.branch().name().to_string(),
            pull_request: analysis.pull_request_key().map(str::to_string),
            analysis_date: analysis.analysis_date(),
        }
    }

    fn build_counters(response: &NotificationResponse) -> Vec<CounterView> {
        response
            .statistics
            .entries()
            .iter()
            .map(|(name, value)| CounterView {
                name: name.to_string(),
                value: *value,
            })
            .collect()
    }

    /// Deliveries that reached nobody are left out
    fn build_deliveries(deliveries: &[DeliveryRecord]) -> Vec<DeliveryView> {
        deliveries
            .iter()
            .filter(|d| !d.recipients.is_empty())
            .map(|d| DeliveryView {
                channel: d.channel.as_str().to_string(),
                kind: d.kind.as_str().to_string(),
                subject: d.subject.clone(),
                recipients: d.recipients.clone(),
            })
            .collect()
    }
}
