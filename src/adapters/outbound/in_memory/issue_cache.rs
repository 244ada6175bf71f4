use crate::issue_tracking::domain::Issue;
use crate::ports::outbound::{IssueCache, IssueStream};
use crate::shared::Result;
use std::cell::Cell;

/// InMemoryIssueCache adapter holding the issues of one analysis
///
/// Keeps track of open streams so callers can check every traversal
/// was released.
pub struct InMemoryIssueCache {
    issues: Vec<Issue>,
    traversals: Cell<usize>,
    open_streams: Cell<usize>,
}

impl InMemoryIssueCache {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            traversals: Cell::new(0),
            open_streams: Cell::new(0),
        }
    }

    /// Number of traversals started so far
    pub fn traversals(&self) -> usize {
        self.traversals.get()
    }

    /// Number of streams not yet dropped
    pub fn open_streams(&self) -> usize {
        self.open_streams.get()
    }
}

struct CacheStream<'a> {
    issues: std::slice::Iter<'a, Issue>,
    open_streams: &'a Cell<usize>,
}

impl Iterator for CacheStream<'_> {
    type Item = Result<Issue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.issues.next().cloned().map(Ok)
    }
}

impl Drop for CacheStream<'_> {
    fn drop(&mut self) {
        self.open_streams.set(self.open_streams.get() - 1);
    }
}

impl IssueCache for InMemoryIssueCache {
    fn traverse(&self) -> Result<IssueStream<'_>> {
        self.traversals.set(self.traversals.get() + 1);
        self.open_streams.set(self.open_streams.get() + 1);
        Ok(Box::new(CacheStream {
            issues: self.issues.iter(),
            open_streams: &self.open_streams,
        }))
    }
}
