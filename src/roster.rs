//! Hero roster module.
//!
//! Provides the `Roster` type, the loaded hero collection and the main
//! entry point for lookups, search and battles. A roster is built once
//! and never modified; clones share the same underlying slice, so it can
//! be handed to any number of concurrent readers.

use crate::config::DatasetConfig;
use crate::error::{DatasetError, LookupError};
use crate::hero::Hero;
use crate::hero_id::HeroId;
use crate::narrator::{battle, BattleReport};
use crate::powerstats::Powerstats;
use crate::search::rank;
use crate::source::HeroSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Tool-style lookup: by name, by id, or either.
///
/// A hero matches when its name equals `name` ignoring case, or its id
/// equals `id`. Fields left as `None` never match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl HeroQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            name: None,
            id: Some(id.into()),
        }
    }

    fn matches(&self, hero: &Hero) -> bool {
        let name_hit = self
            .name
            .as_deref()
            .is_some_and(|name| hero.name().to_lowercase() == name.to_lowercase());
        let id_hit = self
            .id
            .as_deref()
            .is_some_and(|id| hero.id().as_str() == id);
        name_hit || id_hit
    }
}

/// The loaded, read-only hero collection.
///
/// Dataset order is preserved everywhere: `all()` returns heroes in load
/// order, lookups return the first match, and search uses load order as
/// its last tie-break.
///
/// # Examples
///
/// ```rust
/// use herodex::{Hero, Powerstats, Roster};
///
/// let roster = Roster::new(vec![
///     Hero::new(1, "A-Bomb", "", Powerstats::new(38, 100, 17, 80, 24, 64)),
///     Hero::new(2, "Ant-Man", "", Powerstats::new(100, 18, 23, 28, 32, 32)),
/// ]);
///
/// assert_eq!(roster.get("2").unwrap().name(), "Ant-Man");
/// assert_eq!(roster.search("bomb")[0].name(), "A-Bomb");
///
/// let report = roster.compare_by_name_or_id("a-bomb", "2").unwrap();
/// assert_eq!(report.winner, "A-Bomb");
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    heroes: Arc<[Hero]>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Roster {
    /// Build a roster from heroes already in memory.
    ///
    /// Duplicate ids are kept (lookups return the first) but logged.
    pub fn new(heroes: Vec<Hero>) -> Self {
        let mut seen = HashSet::with_capacity(heroes.len());
        for hero in &heroes {
            if !seen.insert(hero.id()) {
                tracing::warn!(id = %hero.id(), name = hero.name(), "duplicate hero id in dataset");
            }
        }
        Self {
            heroes: heroes.into(),
        }
    }

    /// Load the roster from a source.
    pub fn load(source: &dyn HeroSource) -> Result<Self, DatasetError> {
        let heroes = match source.load() {
            Ok(heroes) => heroes,
            Err(err) => {
                tracing::error!(source = %source.describe(), error = %err, "failed to load heroes");
                return Err(err);
            }
        };
        tracing::info!(source = %source.describe(), count = heroes.len(), "loaded heroes");
        Ok(Self::new(heroes))
    }

    /// Load the roster from the configured dataset file.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, DatasetError> {
        Self::load(&config.source())
    }

    /// Every hero, in dataset order.
    pub fn all(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Look a hero up by id.
    ///
    /// Ids compare by their string form, so `"1"` and `1` find the same
    /// hero.
    pub fn get(&self, id: impl Into<HeroId>) -> Result<&Hero, LookupError> {
        let id = id.into();
        self.heroes.iter().find(|h| h.id() == &id).ok_or_else(|| {
            tracing::debug!(%id, "no hero with id");
            LookupError::NotFound
        })
    }

    /// A hero's powerstats, by id.
    pub fn powerstats(&self, id: impl Into<HeroId>) -> Result<&Powerstats, LookupError> {
        self.get(id).map(Hero::powerstats)
    }

    /// First hero matching a name/id query.
    pub fn find(&self, query: &HeroQuery) -> Result<&Hero, LookupError> {
        self.heroes
            .iter()
            .find(|h| query.matches(h))
            .ok_or(LookupError::NotFound)
    }

    /// First hero whose name equals `key` ignoring case, or whose id is
    /// `key`.
    pub fn find_by_name_or_id(&self, key: &str) -> Result<&Hero, LookupError> {
        let query = HeroQuery {
            name: Some(key.to_string()),
            id: Some(key.to_string()),
        };
        self.find(&query).map_err(|_| {
            tracing::debug!(key, "no hero with name or id");
            LookupError::NotFoundByName(key.to_string())
        })
    }

    /// Fuzzy search by name. See [`rank`] for ordering rules.
    pub fn search(&self, query: &str) -> Vec<Hero> {
        rank(query, &self.heroes)
    }

    /// Resolve two heroes by name or id and fight them.
    pub fn compare_by_name_or_id(
        &self,
        hero1: &str,
        hero2: &str,
    ) -> Result<BattleReport, LookupError> {
        let first = self.find_by_name_or_id(hero1)?;
        let second = self.find_by_name_or_id(hero2)?;
        Ok(battle(first, second))
    }
}

impl From<Vec<Hero>> for Roster {
    fn from(heroes: Vec<Hero>) -> Self {
        Self::new(heroes)
    }
}
