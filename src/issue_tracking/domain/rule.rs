/// Rule metadata needed to decorate change notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    key: String,
    name: String,
}

impl Rule {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
