//! Whitespace-delimited keyword sets used by every name-based filter.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// A normalized set of keywords together with its case-sensitivity flag.
///
/// Keywords are lower-cased once at parse time when the set is case-insensitive.
/// Candidates tested against the set are normalized with the same rule, so a
/// set never needs to be re-normalized after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
    case_sensitive: bool,
}

impl KeywordSet {
    /// Parse free-form text into a keyword set.
    ///
    /// Tokens are split on runs of whitespace; empty tokens are dropped and
    /// duplicates collapse. An empty input yields an empty set, which callers
    /// treat as "no restriction".
    ///
    /// # Example
    ///
    /// ```
    /// use folder_scan::KeywordSet;
    ///
    /// let set = KeywordSet::parse("  .TMP .log\t.tmp ", false);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains(".TMP"));
    /// assert!(set.matches_substring("server.LOG.1"));
    /// ```
    pub fn parse(text: &str, case_sensitive: bool) -> Self {
        let keywords = text
            .split_whitespace()
            .filter(|token| !token.is_empty())
            .map(|token| {
                if case_sensitive {
                    token.to_string()
                } else {
                    token.to_lowercase()
                }
            })
            .collect();

        Self {
            keywords,
            case_sensitive,
        }
    }

    /// An empty set with the given case rule.
    pub fn empty(case_sensitive: bool) -> Self {
        Self {
            keywords: BTreeSet::new(),
            case_sensitive,
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Iterate over the normalized keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Apply this set's case rule to a candidate string.
    pub fn normalize<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(candidate)
        } else {
            Cow::Owned(candidate.to_lowercase())
        }
    }

    /// Exact membership of the normalized candidate.
    pub fn contains(&self, candidate: &str) -> bool {
        self.keywords.contains(self.normalize(candidate).as_ref())
    }

    /// Return the first keyword that occurs as a substring of the normalized candidate.
    pub fn find_in(&self, candidate: &str) -> Option<&str> {
        let candidate = self.normalize(candidate);
        self.iter().find(|keyword| candidate.contains(keyword))
    }

    /// Whether any keyword occurs as a substring of the normalized candidate.
    pub fn matches_substring(&self, candidate: &str) -> bool {
        self.find_in(candidate).is_some()
    }
}

/// Joins keywords with a single space, which parses back into the same set.
impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for keyword in &self.keywords {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(keyword)?;
            first = false;
        }
        Ok(())
    }
}
