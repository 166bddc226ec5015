//! Fuzzy name matching.
//!
//! Scores how well a query matches a hero name using four tiers, from an
//! exact (case-insensitive) match down to an in-order character match.
//! Only literal character and substring comparisons are used: the query is
//! never interpreted as a pattern, so any text is safe to pass in.

/// Match quality between a query and a target string.
///
/// Tiers are checked best-first and the first that holds wins. Each
/// higher tier implies the conditions of the lower ones.
///
/// | Tier          | Condition                              | Score |
/// |---------------|----------------------------------------|-------|
/// | `Exact`       | target equals query                    | 3     |
/// | `Prefix`      | target starts with query               | 2     |
/// | `Substring`   | target contains query                  | 1     |
/// | `Subsequence` | query chars appear in order in target  | 0.5   |
/// | `NoMatch`     | none of the above                      | -1    |
///
/// # Examples
///
/// ```rust
/// use herodex::fuzzy::{match_tier, MatchTier};
///
/// assert_eq!(match_tier("a-bomb", "A-Bomb"), MatchTier::Exact);
/// assert_eq!(match_tier("ant", "Ant-Man"), MatchTier::Prefix);
/// assert_eq!(match_tier("man", "Ant-Man"), MatchTier::Substring);
/// assert_eq!(match_tier("atmn", "Ant-Man"), MatchTier::Subsequence);
/// assert_eq!(match_tier("xyz", "Ant-Man"), MatchTier::NoMatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Subsequence,
    NoMatch,
}

impl MatchTier {
    /// Numeric score of this tier. Negative means no match.
    pub fn score(self) -> f64 {
        match self {
            MatchTier::Exact => 3.0,
            MatchTier::Prefix => 2.0,
            MatchTier::Substring => 1.0,
            MatchTier::Subsequence => 0.5,
            MatchTier::NoMatch => -1.0,
        }
    }

    /// Whether this tier counts as a match.
    pub fn is_match(self) -> bool {
        self != MatchTier::NoMatch
    }
}

/// Classify how `query` matches `target`, ignoring case.
pub fn match_tier(query: &str, target: &str) -> MatchTier {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if target == query {
        MatchTier::Exact
    } else if target.starts_with(query.as_str()) {
        MatchTier::Prefix
    } else if target.contains(query.as_str()) {
        MatchTier::Substring
    } else if is_subsequence(&query, &target) {
        MatchTier::Subsequence
    } else {
        MatchTier::NoMatch
    }
}

/// Score `query` against `target`. See [`MatchTier`] for the scale.
///
/// # Examples
///
/// ```rust
/// use herodex::fuzzy_score;
///
/// assert_eq!(fuzzy_score("bat", "Batman"), 2.0);
/// assert_eq!(fuzzy_score("(.*", "Batman"), -1.0);
/// ```
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    match_tier(query, target).score()
}

/// True when every char of `query` occurs in `target` in the same order.
///
/// Single pass over `target`; the query cursor advances on each hit.
fn is_subsequence(query: &str, target: &str) -> bool {
    let mut needle = query.chars().peekable();
    for c in target.chars() {
        match needle.peek() {
            Some(&q) if q == c => {
                needle.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    needle.peek().is_none()
}
