use super::{Rule, State};
use crate::error::ValidationError;
use crate::validation::normalize::normalize_email;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeRule;

#[async_trait]
impl Rule for NormalizeRule {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn description(&self) -> &'static str {
        "Email should be normalized"
    }

    async fn validate(&self, value: String, _state: &State) -> Result<String, ValidationError> {
        Ok(normalize_email(&value))
    }
}
