//! Search ranking.
//!
//! Turns a free-text query into an ordered list of heroes: score every
//! name with [`crate::fuzzy`], drop non-matches, then sort so that the
//! result is fully deterministic for a given query and collection.

use crate::fuzzy::{match_tier, MatchTier};
use crate::hero::Hero;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A hero paired with its match tier for the duration of one search.
struct Match<'a> {
    hero: &'a Hero,
    tier: MatchTier,
}

/// Rank `heroes` against `query`.
///
/// - A query that is empty after trimming returns every hero in input
///   order.
/// - Otherwise heroes whose names do not match are dropped and the rest
///   are ordered by score (best first), then by name, then by numeric id.
///   Heroes still tied keep their input order.
///
/// The query is literal text; no character in it has special meaning.
///
/// # Examples
///
/// ```rust
/// use herodex::{rank, Hero, Powerstats};
///
/// let heroes = vec![
///     Hero::new(2, "Ant-Man", "", Powerstats::uniform(30)),
///     Hero::new(1, "A-Bomb", "", Powerstats::uniform(60)),
/// ];
///
/// let found = rank("a-bomb", &heroes);
/// assert_eq!(found[0].name(), "A-Bomb");
///
/// assert!(rank("zzzznotahero", &heroes).is_empty());
/// assert_eq!(rank("   ", &heroes), heroes);
/// ```
pub fn rank(query: &str, heroes: &[Hero]) -> Vec<Hero> {
    let query = query.trim();
    if query.is_empty() {
        return heroes.to_vec();
    }

    let mut matches: Vec<Match<'_>> = heroes
        .iter()
        .map(|hero| Match {
            hero,
            tier: match_tier(query, hero.name()),
        })
        .filter(|m| m.tier.is_match())
        .collect();

    // Stable sort: insertion order survives as the final tie-break.
    matches.sort_by(|a, b| {
        b.tier
            .score()
            .total_cmp(&a.tier.score())
            .then_with(|| collate(a.hero.name(), b.hero.name()))
            .then_with(|| compare_ids(a.hero, b.hero))
    });

    tracing::debug!(query, matched = matches.len(), total = heroes.len(), "ranked heroes");

    matches.into_iter().map(|m| m.hero.clone()).collect()
}

/// Locale-style name ordering.
///
/// Names are compared with accents and case folded away first; remaining
/// ties are broken by accents, then with lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_order(a, b))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Ascending numeric id order, numeric ids before non-numeric ones.
///
/// Non-numeric ids compare equal among themselves.
fn compare_ids(a: &Hero, b: &Hero) -> Ordering {
    match (a.id().as_number(), b.id().as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::powerstats::Powerstats;

    fn hero(id: &str, name: &str) -> Hero {
        Hero::new(id, name, "", Powerstats::uniform(50))
    }

    fn names(heroes: &[Hero]) -> Vec<&str> {
        heroes.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_empty_query_keeps_order() {
        let heroes = vec![hero("3", "Zoom"), hero("1", "Abe"), hero("2", "Bane")];
        assert_eq!(rank("", &heroes), heroes);
        assert_eq!(rank(" \t\n", &heroes), heroes);
    }

    #[test]
    fn test_score_then_name() {
        let heroes = vec![
            hero("1", "Batgirl"),
            hero("2", "Man-Bat"),
            hero("3", "Bat"),
            hero("4", "Batman"),
            hero("5", "Bane"),
        ];
        let found = rank("bat", &heroes);
        assert_eq!(names(&found), ["Bat", "Batgirl", "Batman", "Man-Bat"]);
    }

    #[test]
    fn test_same_name_sorted_by_id() {
        let heroes = vec![hero("10", "Robin"), hero("2", "Robin"), hero("7", "Robin")];
        let found = rank("robin", &heroes);
        let ids: Vec<_> = found.iter().map(|h| h.id().as_str()).collect();
        assert_eq!(ids, ["2", "7", "10"]);
    }

    #[test]
    fn test_non_numeric_ids_keep_input_order() {
        let heroes = vec![hero("b", "Robin"), hero("a", "Robin")];
        let found = rank("robin", &heroes);
        let ids: Vec<_> = found.iter().map(|h| h.id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_mixed_ids_in_large_tie_group() {
        // Every third id is non-numeric; numeric ids arrive descending.
        let heroes: Vec<Hero> = (0..50)
            .map(|i| {
                if i % 3 == 0 {
                    hero(&format!("x{i}"), "Robin")
                } else {
                    hero(&(100 - i).to_string(), "Robin")
                }
            })
            .collect();

        let found = rank("robin", &heroes);
        assert_eq!(found.len(), heroes.len());

        let numeric: Vec<f64> = found.iter().filter_map(|h| h.id().as_number()).collect();
        let first_text = found
            .iter()
            .position(|h| h.id().as_number().is_none())
            .unwrap();
        assert_eq!(first_text, numeric.len());
        assert!(numeric.windows(2).all(|w| w[0] < w[1]), "{numeric:?}");

        let text_ids: Vec<&str> = found[first_text..].iter().map(|h| h.id().as_str()).collect();
        let expected: Vec<String> = (0..50).filter(|i| i % 3 == 0).map(|i| format!("x{i}")).collect();
        assert_eq!(text_ids, expected);
    }

    #[test]
    fn test_query_is_trimmed() {
        let heroes = vec![hero("1", "Storm")];
        assert_eq!(names(&rank("  storm  ", &heroes)), ["Storm"]);
    }

    #[test]
    fn test_collate_folds_case_and_accents() {
        assert_eq!(collate("abe", "Abe"), Ordering::Less);
        assert_eq!(collate("Éclair", "Ecstasy"), Ordering::Less);
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Echo", "Écho"), Ordering::Less);
        assert_eq!(collate("Storm", "Storm"), Ordering::Equal);
    }
}
