//! Compare requests.
//!
//! A compare request carries two fighters as name + stat block, the way a
//! client posts them. Both sides must be present with a non-empty name and
//! a complete stat block before a story is told.

use crate::error::CompareError;
use crate::hero::Contender;
use crate::narrator::narrate;
use crate::powerstats::Powerstats;
use serde::{Deserialize, Serialize};

/// One side of a compare request, as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContenderSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub powerstats: Option<Powerstats>,
}

impl ContenderSpec {
    fn validate(self, side: &str) -> Result<Contender, CompareError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| missing(side, "name"))?;
        let powerstats = self.powerstats.ok_or_else(|| missing(side, "powerstats"))?;
        Ok(Contender::new(name, powerstats))
    }
}

impl From<Contender> for ContenderSpec {
    fn from(contender: Contender) -> Self {
        Self {
            name: Some(contender.name),
            powerstats: Some(contender.powerstats),
        }
    }
}

/// Request body: two fighters to compare.
///
/// # Examples
///
/// ```rust
/// use herodex::compare::{compare, CompareRequest};
///
/// let request = CompareRequest::from_json(r#"{
///     "hero1": {"name": "A-Bomb", "powerstats": {"intelligence":38,"strength":100,"speed":17,"durability":80,"power":24,"combat":64}},
///     "hero2": {"name": "Ant-Man", "powerstats": {"intelligence":100,"strength":18,"speed":23,"durability":28,"power":32,"combat":32}}
/// }"#).unwrap();
///
/// let response = compare(request).unwrap();
/// assert!(response.story.len() <= 800);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub hero1: Option<ContenderSpec>,
    #[serde(default)]
    pub hero2: Option<ContenderSpec>,
}

impl CompareRequest {
    pub fn new(hero1: Contender, hero2: Contender) -> Self {
        Self {
            hero1: Some(hero1.into()),
            hero2: Some(hero2.into()),
        }
    }

    /// Parse a request body.
    ///
    /// A stat block missing one of its six fields fails here as
    /// [`CompareError::Malformed`].
    pub fn from_json(body: &str) -> Result<Self, CompareError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check both sides are complete and return them in order.
    pub fn validate(self) -> Result<(Contender, Contender), CompareError> {
        let hero1 = self.hero1.ok_or_else(|| missing("hero1", ""))?;
        let hero2 = self.hero2.ok_or_else(|| missing("hero2", ""))?;
        Ok((hero1.validate("hero1")?, hero2.validate("hero2")?))
    }
}

/// Response body: the battle story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub story: String,
}

/// Validate a request and tell the story of its two fighters.
pub fn compare(request: CompareRequest) -> Result<CompareResponse, CompareError> {
    let (hero1, hero2) = request.validate()?;
    Ok(CompareResponse {
        story: narrate(&hero1, &hero2),
    })
}

fn missing(side: &str, field: &str) -> CompareError {
    let what = if field.is_empty() {
        side.to_string()
    } else {
        format!("{side}.{field}")
    };
    CompareError::InvalidRequest(format!(
        "both hero1 and hero2 with name and powerstats are required (missing {what})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ant_man() -> Contender {
        Contender::new("Ant-Man", Powerstats::new(100, 18, 23, 28, 32, 32))
    }

    fn a_bomb() -> Contender {
        Contender::new("A-Bomb", Powerstats::new(38, 100, 17, 80, 24, 64))
    }

    #[test]
    fn test_valid_request() {
        let response = compare(CompareRequest::new(a_bomb(), ant_man())).unwrap();
        assert!(response.story.contains("A-Bomb"));
        assert!(response.story.contains("Ant-Man"));
    }

    #[test]
    fn test_missing_hero1() {
        let request = CompareRequest {
            hero1: None,
            hero2: Some(ant_man().into()),
        };
        let err = compare(request).unwrap_err();
        assert!(err.to_string().starts_with("Invalid request"));
        assert!(err.to_string().contains("missing hero1"));
    }

    #[test]
    fn test_missing_powerstats() {
        let request = CompareRequest::from_json(
            r#"{"hero1": {"name": "A-Bomb", "powerstats": {"intelligence":38,"strength":100,"speed":17,"durability":80,"power":24,"combat":64}},
                "hero2": {"name": "Ant-Man"}}"#,
        )
        .unwrap();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CompareError::InvalidRequest(ref m) if m.contains("hero2.powerstats")));
    }

    #[test]
    fn test_empty_name_is_missing() {
        let request = CompareRequest {
            hero1: Some(ContenderSpec {
                name: Some(String::new()),
                powerstats: Some(Powerstats::uniform(1)),
            }),
            hero2: Some(ant_man().into()),
        };
        assert!(matches!(
            request.validate(),
            Err(CompareError::InvalidRequest(ref m)) if m.contains("hero1.name")
        ));
    }

    #[test]
    fn test_partial_stat_block_is_malformed() {
        let err = CompareRequest::from_json(
            r#"{"hero1": {"name": "A", "powerstats": {"strength": 1}}, "hero2": null}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CompareError::Malformed(_)));
        assert!(err.to_string().starts_with("Invalid request"));
    }

    #[test]
    fn test_empty_body() {
        let request = CompareRequest::from_json("{}").unwrap();
        assert!(request.validate().is_err());
    }
}
