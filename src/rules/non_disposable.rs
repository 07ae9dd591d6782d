use super::{Rule, State};
use crate::error::{ErrorKind, ValidationError};
use crate::validation::disposable::DisposableDomains;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NonDisposableRule {
    domains: Arc<DisposableDomains>,
}

impl NonDisposableRule {
    pub fn new(domains: Arc<DisposableDomains>) -> Self {
        Self { domains }
    }
}

#[async_trait]
impl Rule for NonDisposableRule {
    fn name(&self) -> &'static str {
        "nonDisposable"
    }

    fn description(&self) -> &'static str {
        "Email should not be from a disposable email provider"
    }

    async fn validate(&self, value: String, state: &State) -> Result<String, ValidationError> {
        if self.domains.is_disposable_email(&value) {
            debug!(value = %value, "disposable email provider");
            return Err(ValidationError::new(ErrorKind::NonDisposable, value, &state.label));
        }

        Ok(value)
    }
}
