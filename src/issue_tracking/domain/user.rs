/// User record resolved from storage by uuid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    uuid: String,
    login: String,
    name: Option<String>,
    email: Option<String>,
}

impl User {
    pub fn new(uuid: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            login: login.into(),
            name: None,
            email: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Name shown in notifications, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = User::new("u1", "jdoe").with_name("John Doe");
        assert_eq!(user.display_name(), "John Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let user = User::new("u1", "jdoe").with_email("jdoe@example.com");
        assert_eq!(user.display_name(), "jdoe");
        assert_eq!(user.email(), Some("jdoe@example.com"));
    }
}
