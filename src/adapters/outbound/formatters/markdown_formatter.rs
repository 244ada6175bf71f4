use crate::application::read_models::{CounterView, DeliveryView, RunReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const COUNTER_TABLE_HEADER: &str = "| Counter | Value |\n";
const COUNTER_TABLE_SEPARATOR: &str = "|---------|-------|\n";

const DELIVERY_TABLE_HEADER: &str = "| Channel | Kind | Subject | Recipients |\n";
const DELIVERY_TABLE_SEPARATOR: &str = "|---------|------|---------|------------|\n";

/// MarkdownFormatter adapter rendering a human-readable run report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &RunReport) {
        let project = &report.project;
        output.push_str("# Issue Notification Report\n\n");
        output.push_str(&format!(
            "- **Project**: {} (`{}`)\n",
            project.name, project.key
        ));
        if let Some(version) = &project.version {
            output.push_str(&format!("- **Version**: {}\n", version));
        }
        output.push_str(&format!("- **Branch**: {}\n", project.branch));
        if let Some(pr) = &project.pull_request {
            output.push_str(&format!("- **Pull request**: {}\n", pr));
        }
        output.push_str(&format!(
            "- **Analysis date**: {}\n",
            project.analysis_date.to_rfc3339()
        ));
        output.push_str(&format!("- **Outcome**: {}\n", report.outcome.as_str()));
        output.push_str(&format!("- **Run id**: {}\n\n", report.run_id));
    }

    fn render_counters(&self, output: &mut String, counters: &[CounterView]) {
        output.push_str("## Counters\n\n");
        if counters.is_empty() {
            output.push_str("No counters were recorded for this run.\n\n");
            return;
        }
        output.push_str(COUNTER_TABLE_HEADER);
        output.push_str(COUNTER_TABLE_SEPARATOR);
        for counter in counters {
            output.push_str(&format!("| {} | {} |\n", counter.name, counter.value));
        }
        output.push('\n');
    }

    fn render_deliveries(&self, output: &mut String, deliveries: &[DeliveryView]) {
        output.push_str("## Deliveries\n\n");
        if deliveries.is_empty() {
            output.push_str("No notification reached a subscriber.\n");
            return;
        }
        output.push_str(DELIVERY_TABLE_HEADER);
        output.push_str(DELIVERY_TABLE_SEPARATOR);
        for delivery in deliveries {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                delivery.channel,
                delivery.kind,
                Self::escape_markdown_table_cell(&delivery.subject),
                Self::escape_markdown_table_cell(&delivery.recipients.join(", "))
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_counters(&mut output, &report.counters);
        self.render_deliveries(&mut output, &report.deliveries);
        Ok(output)
    }
}
