use issue_notifier::prelude::*;
use std::cell::Cell;

/// IssueCache whose streams fail after yielding `fail_after` issues
pub struct FailingIssueCache {
    pub issues: Vec<Issue>,
    pub fail_after: usize,
    pub open_streams: Cell<usize>,
}

impl FailingIssueCache {
    pub fn new(issues: Vec<Issue>, fail_after: usize) -> Self {
        Self {
            issues,
            fail_after,
            open_streams: Cell::new(0),
        }
    }
}

struct FailingStream<'a> {
    cache: &'a FailingIssueCache,
    position: usize,
}

impl Iterator for FailingStream<'_> {
    type Item = Result<Issue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.cache.fail_after {
            self.position += 1;
            return Some(Err(anyhow::anyhow!("issue cache is corrupted")));
        }
        let issue = self.cache.issues.get(self.position).cloned();
        self.position += 1;
        issue.map(Ok)
    }
}

impl Drop for FailingStream<'_> {
    fn drop(&mut self) {
        self.cache.open_streams.set(self.cache.open_streams.get() - 1);
    }
}

impl IssueCache for FailingIssueCache {
    fn traverse(&self) -> Result<Box<dyn Iterator<Item = Result<Issue>> + '_>> {
        self.open_streams.set(self.open_streams.get() + 1);
        Ok(Box::new(FailingStream {
            cache: self,
            position: 0,
        }))
    }
}
