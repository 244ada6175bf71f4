use crate::issue_tracking::domain::Rule;
use crate::ports::outbound::RuleRepository;
use crate::shared::Result;
use std::collections::HashMap;

/// InMemoryRuleRepository adapter keyed by rule key
pub struct InMemoryRuleRepository {
    rules: HashMap<String, Rule>,
}

impl InMemoryRuleRepository {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.key().to_string(), rule))
                .collect(),
        }
    }
}

impl RuleRepository for InMemoryRuleRepository {
    fn find_by_key(&self, rule_key: &str) -> Result<Option<Rule>> {
        Ok(self.rules.get(rule_key).cloned())
    }
}
