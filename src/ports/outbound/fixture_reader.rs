use crate::application::dto::AnalysisFixture;
use crate::shared::Result;
use std::path::Path;

/// FixtureReader port for loading a recorded analysis run
pub trait FixtureReader {
    /// Reads and parses the fixture at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read, or malformed
    fn read_fixture(&self, path: &Path) -> Result<AnalysisFixture>;
}
