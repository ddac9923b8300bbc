//! Pattern-mode substitution with a single spanning regular expression.

use regex::{Regex, RegexBuilder};
use std::ops::Range;
use tracing::debug;

use crate::error::{AnchorRole, Error, Result};

/// A compiled spanning pattern. `.` always matches newlines, so a
/// non-greedy `.*?` can bridge from an opening marker to a closing one.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with dot-matches-newline enabled.
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if the expression does not compile.
    pub fn new(source: &str) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn role(&self) -> AnchorRole {
        AnchorRole::Pattern {
            source: self.as_str().to_string(),
        }
    }
}

/// Options for [`substitute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstituteOptions {
    /// Replace at most this many matches. `None` or `Some(0)` replaces all.
    pub limit: Option<usize>,
    /// Expand `$name` / `${1}` capture references in the replacement.
    pub expand: bool,
}

/// The outcome of a pattern substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The edited document
    pub text: String,
    /// Number of matches replaced
    pub count: usize,
    /// Byte spans of the replaced matches in the original document
    pub spans: Vec<Range<usize>>,
    pattern: String,
}

impl Substitution {
    /// Treat a substitution that changed nothing as a failed search.
    ///
    /// # Errors
    /// Returns `Error::NotFound` for the pattern when `count == 0`.
    pub fn require_match(self) -> Result<Self> {
        if self.count == 0 {
            return Err(Error::NotFound(AnchorRole::Pattern {
                source: self.pattern,
            }));
        }
        Ok(self)
    }
}

/// Replace non-overlapping matches of `pattern` with `replacement`.
///
/// Zero matches is not an error here; see [`Substitution::require_match`].
///
/// # Example
/// ```
/// use excise_core::{Pattern, SubstituteOptions, substitute};
///
/// let pattern = Pattern::new(r"<aside>.*?</aside>\n").unwrap();
/// let doc = "a\n<aside>\nx\n</aside>\nb\n";
/// let result = substitute(doc, &pattern, "", SubstituteOptions::default());
/// assert_eq!(result.text, "a\nb\n");
/// assert_eq!(result.count, 1);
/// ```
pub fn substitute(
    document: &str,
    pattern: &Pattern,
    replacement: &str,
    options: SubstituteOptions,
) -> Substitution {
    let limit = match options.limit {
        None | Some(0) => usize::MAX,
        Some(n) => n,
    };

    let mut text = String::with_capacity(document.len());
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in pattern.regex.captures_iter(document).take(limit) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        text.push_str(&document[last..whole.start()]);
        if options.expand {
            caps.expand(replacement, &mut text);
        } else {
            text.push_str(replacement);
        }
        spans.push(whole.range());
        last = whole.end();
    }
    text.push_str(&document[last..]);

    debug!(pattern = pattern.as_str(), count = spans.len(), "pattern substituted");

    Substitution {
        count: spans.len(),
        text,
        spans,
        pattern: pattern.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_spans_lines() {
        let pattern = Pattern::new("<a>.*?</a>").unwrap();
        let result = substitute("<a>\n\n</a>", &pattern, "-", SubstituteOptions::default());
        assert_eq!(result.text, "-");
    }

    #[test]
    fn replacement_is_literal_by_default() {
        let pattern = Pattern::new("(x)").unwrap();
        let result = substitute("x", &pattern, "$1$1", SubstituteOptions::default());
        assert_eq!(result.text, "$1$1");
    }

    #[test]
    fn expand_substitutes_captures() {
        let pattern = Pattern::new("(x)").unwrap();
        let options = SubstituteOptions {
            expand: true,
            ..Default::default()
        };
        let result = substitute("x", &pattern, "${1}${1}", options);
        assert_eq!(result.text, "xx");
    }

    #[test]
    fn zero_matches_is_not_an_error_until_required() {
        let pattern = Pattern::new("absent").unwrap();
        let result = substitute("text", &pattern, "", SubstituteOptions::default());
        assert_eq!(result.count, 0);
        assert_eq!(result.text, "text");
        let err = result.require_match().unwrap_err();
        assert!(matches!(err, Error::NotFound(AnchorRole::Pattern { .. })));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(matches!(Pattern::new("(unclosed"), Err(Error::InvalidPattern(_))));
    }
}
