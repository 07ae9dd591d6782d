use crate::error::Result;
use crate::validation::domain::extract_domain;
use std::collections::HashSet;

/// Set of known disposable email provider domains.
///
/// The list is supplied by the caller, typically from the JSON array
/// published by the disposable-email-domains project. Lookups are exact and
/// case-sensitive, so callers wanting case-insensitive checks should run the
/// normalize rule first.
#[derive(Debug, Clone, Default)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a JSON array of domain strings.
    ///
    /// # Errors
    /// [`Error::InvalidDomainList`](crate::Error::InvalidDomainList) if the
    /// input is not an array of strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let domains: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(domains))
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// Checks the domain part of `email` against the list.
    pub fn is_disposable_email(&self, email: &str) -> bool {
        self.contains(extract_domain(email))
    }
}
