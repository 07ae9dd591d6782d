use crate::error::ValidationError;
use async_trait::async_trait;

/// Rejects emails whose domain matches none of the configured patterns.
pub mod domains;

/// Rejects emails whose domain publishes no MX records.
pub mod has_mx;

/// Rejects emails from disposable email providers.
pub mod non_disposable;

/// Replaces the value with its canonical form. Never fails.
pub mod normalize;

pub use domains::DomainsRule;
pub use has_mx::HasMxRule;
pub use non_disposable::NonDisposableRule;
pub use normalize::NormalizeRule;

/// Per-call context handed to every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Name of the value in failure messages.
    pub label: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            label: "value".to_string(),
        }
    }
}

impl State {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// A single validation or transformation step of a string schema.
///
/// `validate` returns the value to hand to the next rule, which may differ
/// from the input, or the failure that stops the pipeline.
#[async_trait]
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn validate(&self, value: String, state: &State) -> Result<String, ValidationError>;
}
