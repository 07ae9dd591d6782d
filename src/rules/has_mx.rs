use super::{Rule, State};
use crate::error::{ErrorKind, ValidationError};
use crate::validation::dnsmx::MxChecker;
use async_trait::async_trait;

#[derive(Clone)]
pub struct HasMxRule {
    checker: MxChecker,
}

impl HasMxRule {
    pub fn new(checker: MxChecker) -> Self {
        Self { checker }
    }
}

#[async_trait]
impl Rule for HasMxRule {
    fn name(&self) -> &'static str {
        "hasMx"
    }

    fn description(&self) -> &'static str {
        "Email domain should have MX records"
    }

    async fn validate(&self, value: String, state: &State) -> Result<String, ValidationError> {
        if !self.checker.email_has_mx_records(&value).await {
            return Err(ValidationError::new(ErrorKind::NoMx, value, &state.label));
        }

        Ok(value)
    }
}
