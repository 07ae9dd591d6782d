use crate::error::{Error, Result};
use crate::validation::domain::extract_domain;
use globset::{GlobBuilder, GlobMatcher};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::warn;

/// Largest `{a..b}` range expanded in a glob; bigger ranges stay literal.
const MAX_RANGE: i64 = 1024;

static BRACE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(-?\d+|[a-zA-Z])\.\.(-?\d+|[a-zA-Z])\}").expect("brace range regex")
});

static EXTGLOB_ONE_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\(([^()]*)\)").expect("extglob regex"));

/// How a list of patterns is compared against a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Byte-for-byte membership. An empty mode string also selects this.
    #[default]
    #[serde(alias = "")]
    Exact,
    /// Shell-style wildcards; `*` never crosses a `/`. A leading `!` negates
    /// the pattern, `{1..3}` ranges and `@(a|b)` alternatives are expanded.
    Glob,
    /// Unanchored regular expressions, tested in order.
    Regexp,
}

/// A single domain pattern.
///
/// `Text` is read as a literal, a glob or a regular expression source
/// depending on the [`Mode`]. `Regex` is an already-built expression and only
/// takes part in [`Mode::Regexp`] matching.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "String")]
pub enum Pattern {
    Text(String),
    Regex(Regex),
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Text(text)
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Text(text.to_owned())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

#[derive(Debug, Clone)]
struct GlobPattern {
    matcher: GlobMatcher,
    negated: bool,
    source: String,
}

impl GlobPattern {
    fn compile(source: &str) -> Result<Self> {
        let body = source.trim_start_matches('!');
        let negated = (source.len() - body.len()) % 2 == 1;
        let glob = GlobBuilder::new(&rewrite_glob(body))
            .literal_separator(true)
            .build()
            .map_err(|err| Error::InvalidGlob {
                pattern: source.to_owned(),
                source: err,
            })?;

        Ok(Self {
            matcher: glob.compile_matcher(),
            negated,
            source: source.to_owned(),
        })
    }

    fn is_match(&self, domain: &str) -> bool {
        self.matcher.is_match(domain) != self.negated
    }
}

/// Rewrites the forms globset lacks into alternations it understands:
/// `{1..3}` becomes `{1,2,3}` and `@(a|b)` becomes `{a,b}`.
fn rewrite_glob(glob: &str) -> String {
    let ranged = BRACE_RANGE.replace_all(glob, |caps: &Captures| {
        expand_range(&caps[1], &caps[2])
            .map(|items| format!("{{{items}}}"))
            .unwrap_or_else(|| caps[0].to_owned())
    });
    EXTGLOB_ONE_OF
        .replace_all(&ranged, |caps: &Captures| format!("{{{}}}", caps[1].replace('|', ",")))
        .into_owned()
}

fn expand_range(start: &str, end: &str) -> Option<String> {
    if let (Ok(a), Ok(b)) = (start.parse::<i64>(), end.parse::<i64>()) {
        let (lo, hi) = (a.min(b), a.max(b));
        if hi.checked_sub(lo).is_none_or(|span| span > MAX_RANGE) {
            return None;
        }
        let items: Vec<String> = (lo..=hi).map(|n| n.to_string()).collect();
        return Some(items.join(","));
    }

    let (a, b) = (single_char(start)?, single_char(end)?);
    let items: String = (a.min(b)..=a.max(b))
        .filter(char::is_ascii_alphanumeric)
        .flat_map(|c| [c, ','])
        .collect();
    Some(items.trim_end_matches(',').to_owned())
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Exact(Vec<String>),
    Glob(Vec<GlobPattern>),
    Regexp(Vec<Regex>),
}

/// Patterns compiled once for a given mode.
#[derive(Debug, Clone)]
pub struct PatternSet {
    matcher: Matcher,
}

impl PatternSet {
    /// Compiles `patterns` for `mode`.
    ///
    /// # Errors
    /// [`Error::InvalidRegex`] or [`Error::InvalidGlob`] when a text pattern
    /// does not compile. Nothing is skipped silently.
    pub fn compile(patterns: &[Pattern], mode: Mode) -> Result<Self> {
        let matcher = match mode {
            Mode::Exact => Matcher::Exact(text_patterns(patterns, mode).map(str::to_owned).collect()),
            Mode::Glob => Matcher::Glob(
                text_patterns(patterns, mode)
                    .map(GlobPattern::compile)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Mode::Regexp => {
                let regexes = patterns
                    .iter()
                    .map(|pattern| match pattern {
                        Pattern::Regex(re) => Ok(re.clone()),
                        Pattern::Text(text) => Regex::new(text).map_err(|source| Error::InvalidRegex {
                            pattern: text.clone(),
                            source,
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Matcher::Regexp(regexes)
            }
        };

        Ok(Self { matcher })
    }

    /// Whether any pattern matches `domain`.
    pub fn matches(&self, domain: &str) -> bool {
        match &self.matcher {
            Matcher::Exact(list) => list.iter().any(|item| item == domain),
            Matcher::Glob(globs) => globs.iter().any(|glob| glob.is_match(domain)),
            Matcher::Regexp(regexes) => regexes.iter().any(|re| re.is_match(domain)),
        }
    }

    /// Source text of the first pattern matching `domain`, for diagnostics.
    pub fn find_match(&self, domain: &str) -> Option<&str> {
        match &self.matcher {
            Matcher::Exact(list) => list.iter().find(|item| *item == domain).map(String::as_str),
            Matcher::Glob(globs) => globs
                .iter()
                .find(|glob| glob.is_match(domain))
                .map(|glob| glob.source.as_str()),
            Matcher::Regexp(regexes) => regexes
                .iter()
                .find(|re| re.is_match(domain))
                .map(Regex::as_str),
        }
    }

    /// Extracts the domain of `email` and matches it.
    pub fn matches_email(&self, email: &str) -> bool {
        self.matches(extract_domain(email))
    }
}

fn text_patterns(patterns: &[Pattern], mode: Mode) -> impl Iterator<Item = &str> {
    patterns.iter().filter_map(move |pattern| match pattern {
        Pattern::Text(text) => Some(text.as_str()),
        Pattern::Regex(re) => {
            warn!(pattern = re.as_str(), ?mode, "regular expression pattern ignored outside regexp mode");
            None
        }
    })
}

/// One-shot form of [`PatternSet`]: compiles `patterns` and matches the
/// domain of `email` against them.
pub fn match_domain(email: &str, patterns: &[Pattern], mode: Mode) -> Result<bool> {
    Ok(PatternSet::compile(patterns, mode)?.matches_email(email))
}
