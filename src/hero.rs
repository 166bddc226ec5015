//! Hero records.
//!
//! A `Hero` is immutable once built: fields are private and exposed
//! through accessors, so a loaded roster can be shared freely between
//! readers.

use crate::hero_id::HeroId;
use crate::powerstats::Powerstats;
use serde::{Deserialize, Serialize};

/// Anything that can step into a battle: a name and a stat block.
///
/// Implemented by [`Hero`] and by [`Contender`], so stories can be told
/// both for roster entries and for ad-hoc stat blocks posted by a client.
pub trait Fighter {
    /// Display name, embedded verbatim in stories.
    fn name(&self) -> &str;

    /// The fighter's powerstats.
    fn powerstats(&self) -> &Powerstats;
}

/// An immutable superhero record.
///
/// # Examples
///
/// ```rust
/// use herodex::{Hero, Powerstats};
///
/// let hero = Hero::new(1, "A-Bomb", "a-bomb.jpg", Powerstats::new(38, 100, 17, 80, 24, 64));
/// assert_eq!(hero.id().as_str(), "1");
/// assert_eq!(hero.name(), "A-Bomb");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    id: HeroId,
    name: String,
    image: String,
    powerstats: Powerstats,
}

impl Hero {
    /// Build a hero record.
    pub fn new(
        id: impl Into<HeroId>,
        name: impl Into<String>,
        image: impl Into<String>,
        powerstats: Powerstats,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            powerstats,
        }
    }

    pub fn id(&self) -> &HeroId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image reference; opaque to this crate.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn powerstats(&self) -> &Powerstats {
        &self.powerstats
    }
}

impl Fighter for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn powerstats(&self) -> &Powerstats {
        &self.powerstats
    }
}

/// A name and stat block without an id or image.
///
/// This is the shape a compare request carries for each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contender {
    pub name: String,
    pub powerstats: Powerstats,
}

impl Contender {
    pub fn new(name: impl Into<String>, powerstats: Powerstats) -> Self {
        Self {
            name: name.into(),
            powerstats,
        }
    }
}

impl Fighter for Contender {
    fn name(&self) -> &str {
        &self.name
    }

    fn powerstats(&self) -> &Powerstats {
        &self.powerstats
    }
}

impl From<&Hero> for Contender {
    fn from(hero: &Hero) -> Self {
        Self::new(hero.name(), *hero.powerstats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_hero() {
        let json = r#"{
            "id": 2,
            "name": "Ant-Man",
            "image": "https://example.org/ant-man.jpg",
            "powerstats": {"intelligence":100,"strength":18,"speed":23,"durability":28,"power":32,"combat":32}
        }"#;
        let hero: Hero = serde_json::from_str(json).unwrap();
        assert_eq!(hero.id(), &HeroId::new("2"));
        assert_eq!(hero.powerstats().total(), 233);
    }

    #[test]
    fn test_hero_without_powerstats_is_rejected() {
        let json = r#"{"id": 3, "name": "Nobody", "image": ""}"#;
        assert!(serde_json::from_str::<Hero>(json).is_err());
    }

    #[test]
    fn test_contender_from_hero() {
        let hero = Hero::new(5, "Bane", "", Powerstats::uniform(40));
        let contender = Contender::from(&hero);
        assert_eq!(Fighter::name(&contender), "Bane");
        assert_eq!(contender.powerstats.total(), 240);
    }
}
