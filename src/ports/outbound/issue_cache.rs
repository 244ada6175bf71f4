use crate::issue_tracking::domain::Issue;
use crate::shared::Result;

/// Forward-only sequence of cached issues
///
/// The underlying cache resource is released when the stream is dropped.
pub type IssueStream<'a> = Box<dyn Iterator<Item = Result<Issue>> + 'a>;

/// IssueCache port giving access to the issues computed by the analysis
pub trait IssueCache {
    /// Opens a new traversal of every cached issue
    ///
    /// Each call starts a fresh, non-restartable sequence. Reading an item
    /// may fail when the cache storage is unreadable.
    ///
    /// # Errors
    /// Returns an error if the cache cannot be opened
    fn traverse(&self) -> Result<IssueStream<'_>>;
}
