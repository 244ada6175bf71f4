use crate::issue_tracking::domain::User;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Storage session scoped to one lookup; dropping it releases the session
pub trait UserSession {
    /// Loads the users with the given uuids
    ///
    /// Unknown uuids are silently left out of the result.
    fn select_by_uuids(&mut self, uuids: &BTreeSet<String>) -> Result<Vec<User>>;
}

/// UserRepository port for reading user records from storage
pub trait UserRepository {
    /// Opens a storage session
    ///
    /// # Errors
    /// Returns an error if storage is unavailable
    fn open_session(&self) -> Result<Box<dyn UserSession + '_>>;
}
