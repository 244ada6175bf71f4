use crate::issue_tracking::domain::Rule;
use crate::shared::Result;

/// RuleRepository port for rule metadata lookups
pub trait RuleRepository {
    /// Finds a rule by key, `Ok(None)` when the rule is unknown
    fn find_by_key(&self, rule_key: &str) -> Result<Option<Rule>>;
}
