use crate::application::read_models::RunReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the report of a notification run
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &RunReport) -> Result<String>;
}
