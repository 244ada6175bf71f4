use issue_notifier::prelude::*;
use std::cell::Cell;
use std::collections::BTreeSet;

/// UserRepository whose sessions always fail to query
#[derive(Default)]
pub struct FailingUserRepository {
    pub open_sessions: Cell<usize>,
}

struct FailingSession<'a> {
    open_sessions: &'a Cell<usize>,
}

impl UserSession for FailingSession<'_> {
    fn select_by_uuids(&mut self, _uuids: &BTreeSet<String>) -> Result<Vec<User>> {
        anyhow::bail!("user storage unavailable")
    }
}

impl Drop for FailingSession<'_> {
    fn drop(&mut self) {
        self.open_sessions.set(self.open_sessions.get() - 1);
    }
}

impl UserRepository for FailingUserRepository {
    fn open_session(&self) -> Result<Box<dyn UserSession + '_>> {
        self.open_sessions.set(self.open_sessions.get() + 1);
        Ok(Box::new(FailingSession {
            open_sessions: &self.open_sessions,
        }))
    }
}
