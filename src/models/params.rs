use crate::validation::patterns::{Mode, Pattern};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainsOptions {
    #[serde(default)]
    pub mode: Mode,
}

/// Parameters of the `domains` rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainsParams {
    pub patterns: Vec<Pattern>,
    #[serde(default)]
    pub options: DomainsOptions,
}

/// Parameters of rules that take none.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_domains_params_default_mode() {
        let params: DomainsParams = serde_json::from_value(json!({ "patterns": ["a.com"] })).unwrap();
        assert_eq!(params.options.mode, Mode::Exact);
        assert_eq!(params.patterns.len(), 1);
    }

    #[test]
    fn test_domains_params_explicit_mode() {
        let params: DomainsParams = serde_json::from_value(json!({
            "patterns": ["*.a.com"],
            "options": { "mode": "glob" }
        }))
        .unwrap();
        assert_eq!(params.options.mode, Mode::Glob);
    }

    #[test]
    fn test_domains_params_empty_mode_is_exact() {
        let params: DomainsParams = serde_json::from_value(json!({
            "patterns": [],
            "options": { "mode": "" }
        }))
        .unwrap();
        assert_eq!(params.options.mode, Mode::Exact);
    }

    #[test]
    fn test_domains_params_rejects_unknown_mode() {
        let result = serde_json::from_value::<DomainsParams>(json!({
            "patterns": ["a.com"],
            "options": { "mode": "wildcard" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_domains_params_requires_array() {
        assert!(serde_json::from_value::<DomainsParams>(json!({ "patterns": "a.com" })).is_err());
        assert!(serde_json::from_value::<DomainsParams>(json!({})).is_err());
        assert!(serde_json::from_value::<DomainsParams>(json!({ "patterns": [1, 2] })).is_err());
    }

    #[test]
    fn test_domains_params_rejects_extra_fields() {
        let result = serde_json::from_value::<DomainsParams>(json!({
            "patterns": ["a.com"],
            "extra": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        assert!(serde_json::from_value::<NoParams>(json!({})).is_ok());
        assert!(serde_json::from_value::<NoParams>(json!({ "x": 1 })).is_err());
    }
}
