/// ProgressReporter port for operational messages during a run
///
/// Adapters decide where messages go (stderr, nowhere, a test buffer).
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress of a streaming step whose total is unknown
    ///
    /// # Arguments
    /// * `processed` - Items processed so far
    /// * `message` - Optional message to include
    fn report_progress(&self, processed: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
