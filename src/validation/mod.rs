/// Extracts the domain part of an email address.
///
/// Returns everything after the last `@`, or the whole input when there is
/// no `@` at all.
pub mod domain;

/// Matches an email's domain against exact, glob or regular expression
/// patterns.
///
/// # Examples
/// ```
/// use email_rules::validation::patterns::{match_domain, Mode, Pattern};
///
/// let patterns = vec![Pattern::from("*.domain.com")];
/// assert!(match_domain("john@sub.domain.com", &patterns, Mode::Glob).unwrap());
/// assert!(!match_domain("john@sub.domain.com", &patterns, Mode::Exact).unwrap());
/// ```
pub mod patterns;

/// Checks whether a domain publishes MX records.
///
/// Every failure (NXDOMAIN, timeout, network error, malformed name) collapses
/// to `false`. The async [`dnsmx::MxChecker`] is the primary entry point;
/// [`dnsmx::has_mx_records_blocking`] parks the calling thread instead.
pub mod dnsmx;

/// Disposable email provider lookup against a caller-supplied domain list.
///
/// # Example
/// ```
/// use email_rules::validation::disposable::DisposableDomains;
///
/// let list = DisposableDomains::from_json_str(r#"["mailinator.org"]"#).unwrap();
/// assert!(list.is_disposable_email("john.doe@mailinator.org"));
/// assert!(!list.is_disposable_email("john.doe@google.com"));
/// ```
pub mod disposable;

/// Email canonicalization: lowercasing plus provider-specific alias stripping.
pub mod normalize;
