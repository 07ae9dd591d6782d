use crate::error::{Error, Result};
use crate::validation::domain::extract_domain;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver, TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
};

fn default_timeout_ms() -> u64 {
    2_000
}

fn default_attempts() -> usize {
    2
}

/// DNS settings for MX lookups.
///
/// Defaults to a 2 second timeout per request and 2 attempts. The overall
/// deadline enforced by [`MxChecker`] is `timeout * attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MxConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_attempts")]
    pub attempts: usize,
}

impl Default for MxConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            attempts: default_attempts(),
        }
    }
}

impl MxConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Saturates instead of overflowing for out-of-range configs.
    pub fn deadline(&self) -> Duration {
        let attempts = u32::try_from(self.attempts.max(1)).unwrap_or(u32::MAX);
        self.timeout().saturating_mul(attempts)
    }

    fn resolver_opts(&self) -> ResolverOpts {
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout();
        opts.attempts = self.attempts;
        opts
    }
}

/// Source of MX records for a domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MxLookup: Send + Sync {
    /// Number of MX records published for `domain`.
    async fn mx_record_count(&self, domain: &str) -> Result<usize>;
}

/// [`MxLookup`] backed by the trust-dns async resolver.
pub struct DnsMxLookup {
    resolver: TokioAsyncResolver,
}

impl DnsMxLookup {
    pub fn new(config: &MxConfig) -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), config.resolver_opts()),
        }
    }
}

#[async_trait]
impl MxLookup for DnsMxLookup {
    async fn mx_record_count(&self, domain: &str) -> Result<usize> {
        let records = self.resolver.mx_lookup(domain).await?;
        Ok(records.iter().count())
    }
}

/// Answers "does this domain accept mail" with a plain boolean.
///
/// Lookup errors, timeouts and empty answers all read as `false`.
#[derive(Clone)]
pub struct MxChecker {
    lookup: Arc<dyn MxLookup>,
    deadline: Duration,
}

impl MxChecker {
    pub fn new(lookup: Arc<dyn MxLookup>, config: &MxConfig) -> Self {
        Self {
            lookup,
            deadline: config.deadline(),
        }
    }

    /// Checker using the trust-dns resolver with `config`.
    pub fn with_dns(config: &MxConfig) -> Self {
        Self::new(Arc::new(DnsMxLookup::new(config)), config)
    }

    pub async fn has_mx_records(&self, domain: &str) -> bool {
        let outcome = tokio::time::timeout(self.deadline, self.lookup.mx_record_count(domain))
            .await
            .unwrap_or_else(|_| Err(Error::DnsTimeout(domain.to_owned())));

        match outcome {
            Ok(count) => {
                debug!(domain, count, "MX lookup finished");
                count > 0
            }
            Err(err) => {
                debug!(domain, error = %err, "MX lookup failed");
                false
            }
        }
    }

    /// Extracts the domain of `email` and checks it.
    pub async fn email_has_mx_records(&self, email: &str) -> bool {
        self.has_mx_records(extract_domain(email)).await
    }
}

/// Blocking MX check for callers without an async runtime.
///
/// Runs the lookup on the blocking trust-dns resolver, which drives its own
/// runtime, so the calling thread is parked until the lookup completes or
/// `config`'s timeouts expire. Panics if called from inside a tokio runtime;
/// use [`MxChecker`] there.
pub fn has_mx_records_blocking(domain: &str, config: &MxConfig) -> bool {
    let resolver = match Resolver::new(ResolverConfig::default(), config.resolver_opts()) {
        Ok(r) => r,
        Err(err) => {
            warn!(error = %err, "failed to create blocking resolver");
            return false;
        }
    };

    match resolver.mx_lookup(domain) {
        Ok(records) => records.iter().next().is_some(),
        Err(err) => {
            debug!(domain, error = %err, "MX lookup failed");
            false
        }
    }
}
