use crate::issue_tracking::domain::User;
use crate::ports::outbound::UserRepository;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};

/// UserResolver service batch-loading users by uuid
///
/// Each call opens one storage session and releases it before returning,
/// including when the lookup fails.
pub struct UserResolver<'r, UR> {
    repository: &'r UR,
}

impl<'r, UR: UserRepository> UserResolver<'r, UR> {
    pub fn new(repository: &'r UR) -> Self {
        Self { repository }
    }

    /// Returns the users found for `uuids`, keyed by uuid
    ///
    /// Uuids without a user are skipped. An empty set returns an empty map
    /// without touching storage.
    pub fn resolve(&self, uuids: &BTreeSet<String>) -> Result<HashMap<String, User>> {
        if uuids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut session = self.repository.open_session()?;
        let users = session.select_by_uuids(uuids)?;
        Ok(users
            .into_iter()
            .map(|user| (user.uuid().to_string(), user))
            .collect())
    }
}
