use serde::Serialize;
use thiserror::Error;

/// The three ways a rule can reject a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    DomainPatterns,
    NonDisposable,
    NoMx,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 3] = [
        ErrorKind::DomainPatterns,
        ErrorKind::NonDisposable,
        ErrorKind::NoMx,
    ];

    /// Error code as exposed to callers, e.g. `string.noMx`.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::DomainPatterns => "string.domainPatterns",
            ErrorKind::NonDisposable => "string.nonDisposable",
            ErrorKind::NoMx => "string.noMx",
        }
    }

    /// Human-readable message template, rendered after the value label.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::DomainPatterns => "must match one of the patterns",
            ErrorKind::NonDisposable => "must be from a non-disposable email provider",
            ErrorKind::NoMx => "must be from a domain that is configured to receive emails",
        }
    }
}

/// A value rejected by a rule. Carries the offending value for interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{label}\" {}", .kind.message())]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub value: String,
    pub label: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

/// Configuration and infrastructure errors.
///
/// Expected negative outcomes (no match, disposable, no MX) are never reported
/// through this type; they are [`ValidationError`]s.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid regular expression pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("Invalid parameters for rule '{rule}': {source}")]
    InvalidParams {
        rule: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
    #[error("Invalid disposable domain list: {0}")]
    InvalidDomainList(#[from] serde_json::Error),
    #[error("DNS resolution failed: {0}")]
    Dns(#[from] trust_dns_resolver::error::ResolveError),
    #[error("DNS lookup for {0} timed out")]
    DnsTimeout(String),
    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorKind::DomainPatterns.code(), "string.domainPatterns");
        assert_eq!(ErrorKind::NonDisposable.code(), "string.nonDisposable");
        assert_eq!(ErrorKind::NoMx.code(), "string.noMx");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorKind::NoMx, "a@b.c", "email");
        assert_eq!(
            err.to_string(),
            "\"email\" must be from a domain that is configured to receive emails"
        );
        assert_eq!(err.value, "a@b.c");
    }

    #[test]
    fn test_error_kind_serializes_camel_case() {
        let json = serde_json::to_string(&ErrorKind::NonDisposable).unwrap();
        assert_eq!(json, "\"nonDisposable\"");
    }

    #[test]
    fn test_validation_error_converts_into_error() {
        let err: Error = ValidationError::new(ErrorKind::DomainPatterns, "x", "value").into();
        assert_eq!(err.to_string(), "\"value\" must match one of the patterns");
    }
}
