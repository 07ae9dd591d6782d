use super::{Rule, State};
use crate::error::{ErrorKind, Result, ValidationError};
use crate::models::DomainsParams;
use crate::validation::patterns::{Mode, Pattern, PatternSet};
use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DomainsRule {
    patterns: PatternSet,
}

impl DomainsRule {
    /// Compiles `patterns` up front so that a configured rule never fails
    /// for a pattern reason while validating.
    pub fn new(patterns: &[Pattern], mode: Mode) -> Result<Self> {
        Ok(Self {
            patterns: PatternSet::compile(patterns, mode)?,
        })
    }

    pub fn from_params(params: &DomainsParams) -> Result<Self> {
        Self::new(&params.patterns, params.options.mode)
    }
}

#[async_trait]
impl Rule for DomainsRule {
    fn name(&self) -> &'static str {
        "domains"
    }

    fn description(&self) -> &'static str {
        "Email should match one of given domain patterns"
    }

    async fn validate(&self, value: String, state: &State) -> std::result::Result<String, ValidationError> {
        if self.patterns.matches_email(&value) {
            return Ok(value);
        }

        debug!(value = %value, "domain matched no pattern");
        Err(ValidationError::new(ErrorKind::DomainPatterns, value, &state.label))
    }
}
