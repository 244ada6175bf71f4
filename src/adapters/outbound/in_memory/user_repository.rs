use crate::issue_tracking::domain::User;
use crate::ports::outbound::{UserRepository, UserSession};
use crate::shared::Result;
use std::cell::Cell;
use std::collections::{BTreeSet, HashMap};

/// InMemoryUserRepository adapter
///
/// Sessions borrow the repository and are counted open until dropped.
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
    sessions_opened: Cell<usize>,
    sessions_open: Cell<usize>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.uuid().to_string(), user))
                .collect(),
            sessions_opened: Cell::new(0),
            sessions_open: Cell::new(0),
        }
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.get()
    }

    pub fn sessions_open(&self) -> usize {
        self.sessions_open.get()
    }
}

struct InMemorySession<'a> {
    repository: &'a InMemoryUserRepository,
}

impl UserSession for InMemorySession<'_> {
    fn select_by_uuids(&mut self, uuids: &BTreeSet<String>) -> Result<Vec<User>> {
        Ok(uuids
            .iter()
            .filter_map(|uuid| self.repository.users.get(uuid))
            .cloned()
            .collect())
    }
}

impl Drop for InMemorySession<'_> {
    fn drop(&mut self) {
        let open = &self.repository.sessions_open;
        open.set(open.get() - 1);
    }
}

impl UserRepository for InMemoryUserRepository {
    fn open_session(&self) -> Result<Box<dyn UserSession + '_>> {
        self.sessions_opened.set(self.sessions_opened.get() + 1);
        self.sessions_open.set(self.sessions_open.get() + 1);
        Ok(Box::new(InMemorySession { repository: self }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_skips_unknown_uuids() {
        let repository = InMemoryUserRepository::new(vec![User::new("u1", "alice")]);
        let uuids: BTreeSet<String> = ["u1", "ghost"].iter().map(|s| s.to_string()).collect();

        let users = {
            let mut session = repository.open_session().unwrap();
            assert_eq!(repository.sessions_open(), 1);
            session.select_by_uuids(&uuids).unwrap()
        };

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].login(), "alice");
        assert_eq!(repository.sessions_opened(), 1);
        assert_eq!(repository.sessions_open(), 0);
    }
}
