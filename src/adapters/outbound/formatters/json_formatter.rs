use crate::application::read_models::RunReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    run_id: &'a str,
    generated_at: String,
    project: JsonProject<'a>,
    outcome: &'static str,
    counters: BTreeMap<&'a str, usize>,
    deliveries: Vec<JsonDelivery<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonProject<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request: Option<&'a str>,
    analysis_date: String,
}

#[derive(Debug, Serialize)]
struct JsonDelivery<'a> {
    channel: &'a str,
    kind: &'a str,
    subject: &'a str,
    recipients: &'a [String],
}

/// JsonFormatter adapter rendering a machine-readable run report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let json = JsonReport {
            run_id: &report.run_id,
            generated_at: report.generated_at.to_rfc3339(),
            project: JsonProject {
                key: &report.project.key,
                name: &report.project.name,
                version: report.project.version.as_deref(),
                branch: &report.project.branch,
                pull_request: report.project.pull_request.as_deref(),
                analysis_date: report.project.analysis_date.to_rfc3339(),
            },
            outcome: report.outcome.as_str(),
            counters: report
                .counters
                .iter()
                .map(|c| (c.name.as_str(), c.value))
                .collect(),
            deliveries: report
                .deliveries
                .iter()
                .map(|d| JsonDelivery {
                    channel: &d.channel,
                    kind: &d.kind,
                    subject: &d.subject,
                    recipients: &d.recipients,
                })
                .collect(),
        };

        let mut output = serde_json::to_string_pretty(&json)?;
        output.push('\n');
        Ok(output)
    }
}
