/// # Rule Parameters
///
/// Serde models for the parameter schemas of the extension rules.
///
/// ## Example JSON (`domains`)
/// ```json
/// {
///   "patterns": ["*.example.com", "example.org"],
///   "options": { "mode": "glob" }
/// }
/// ```
///
/// `options.mode` is one of `""`, `"exact"`, `"glob"` or `"regexp"` and
/// defaults to `"exact"`.
pub mod params;

pub use params::{DomainsOptions, DomainsParams, NoParams};
