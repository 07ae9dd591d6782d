use crate::error::{Error, ErrorKind, Result, ValidationError};
use crate::models::{DomainsParams, NoParams};
use crate::rules::{DomainsRule, HasMxRule, NonDisposableRule, NormalizeRule, Rule, State};
use crate::validation::disposable::DisposableDomains;
use crate::validation::dnsmx::MxChecker;
use crate::validation::patterns::{Mode, Pattern};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Email rules packaged as an extension of the base string type.
///
/// Holds the collaborators the rules need (disposable list, MX checker) and
/// builds rules by name from JSON parameters.
#[derive(Clone)]
pub struct Extension {
    disposable: Arc<DisposableDomains>,
    mx: MxChecker,
}

impl Extension {
    /// Type the rules extend.
    pub const NAME: &'static str = "string";

    const RULES: [&'static str; 4] = ["domains", "nonDisposable", "normalize", "hasMx"];

    pub fn new(disposable: Arc<DisposableDomains>, mx: MxChecker) -> Self {
        Self { disposable, mx }
    }

    /// Names accepted by [`Extension::rule`].
    pub fn rule_names() -> &'static [&'static str] {
        &Self::RULES
    }

    /// Message templates keyed by failure kind.
    pub fn language() -> Vec<(ErrorKind, &'static str)> {
        ErrorKind::ALL.iter().map(|kind| (*kind, kind.message())).collect()
    }

    /// Builds the rule called `name` from its JSON parameters.
    ///
    /// `null` is read as "no parameters".
    ///
    /// # Errors
    /// - [`Error::UnknownRule`] for a name not in [`Extension::rule_names`]
    /// - [`Error::InvalidParams`] when `params` does not fit the rule's schema
    /// - pattern compile errors from the `domains` rule
    pub fn rule(&self, name: &str, params: Value) -> Result<Box<dyn Rule>> {
        let rule: Box<dyn Rule> = match name {
            "domains" => {
                let params: DomainsParams = parse_params("domains", params)?;
                Box::new(DomainsRule::from_params(&params)?)
            }
            "nonDisposable" => {
                parse_params::<NoParams>("nonDisposable", params)?;
                Box::new(NonDisposableRule::new(Arc::clone(&self.disposable)))
            }
            "normalize" => {
                parse_params::<NoParams>("normalize", params)?;
                Box::new(NormalizeRule)
            }
            "hasMx" => {
                parse_params::<NoParams>("hasMx", params)?;
                Box::new(HasMxRule::new(self.mx.clone()))
            }
            other => return Err(Error::UnknownRule(other.to_string())),
        };

        Ok(rule)
    }

    /// Empty schema bound to this extension.
    pub fn string(&self) -> StringSchema {
        StringSchema::new(self.clone())
    }
}

fn parse_params<T: DeserializeOwned>(rule: &'static str, params: Value) -> Result<T> {
    let params = match params {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(params).map_err(|source| Error::InvalidParams { rule, source })
}

/// Ordered pipeline of rules applied to one string value.
///
/// Rules run in the order they were added. Each receives the value returned
/// by the previous one; the first failure stops the pipeline.
pub struct StringSchema {
    extension: Extension,
    rules: Vec<Box<dyn Rule>>,
    label: String,
}

impl StringSchema {
    pub fn new(extension: Extension) -> Self {
        Self {
            extension,
            rules: Vec::new(),
            label: State::default().label,
        }
    }

    /// Name used for the value in failure messages.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn domains(self, patterns: &[Pattern], mode: Mode) -> Result<Self> {
        Ok(self.rule(Box::new(DomainsRule::new(patterns, mode)?)))
    }

    pub fn non_disposable(self) -> Self {
        let rule = NonDisposableRule::new(Arc::clone(&self.extension.disposable));
        self.rule(Box::new(rule))
    }

    pub fn normalize(self) -> Self {
        self.rule(Box::new(NormalizeRule))
    }

    pub fn has_mx(self) -> Self {
        let rule = HasMxRule::new(self.extension.mx.clone());
        self.rule(Box::new(rule))
    }

    pub async fn validate(&self, value: impl Into<String>) -> std::result::Result<String, ValidationError> {
        let state = State::new(self.label.clone());
        let mut value = value.into();

        for rule in &self.rules {
            value = rule.validate(value, &state).await.inspect_err(|err| {
                debug!(rule = rule.name(), code = err.code(), "validation failed");
            })?;
        }

        Ok(value)
    }

    /// Runs [`validate`](Self::validate) to completion on the calling thread.
    ///
    /// Builds a current-thread runtime per call and blocks until every rule,
    /// including DNS lookups bounded by the MX timeout, has finished. Panics
    /// if called from inside a tokio runtime.
    pub fn validate_blocking(&self, value: impl Into<String>) -> Result<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(self.validate(value))?)
    }
}
