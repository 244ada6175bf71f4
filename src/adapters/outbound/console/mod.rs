/// Console adapters for user interaction
mod progress_reporter;

pub use progress_reporter::{QuietProgressReporter, StderrProgressReporter};
