//! Powerstat blocks and stat aggregation.
//!
//! Every hero carries exactly six integer stats. This module owns the
//! fixed scan order of those stats and the helpers the narrator builds on:
//! total power and the highest single stat.

use serde::{Deserialize, Serialize};

/// One of the six powerstats.
///
/// Variants are declared in the fixed scan order used wherever stats are
/// walked one by one (breaking ties between equal values, rendering).
///
/// # Examples
///
/// ```rust
/// use herodex::StatKind;
///
/// assert_eq!(StatKind::ALL[0], StatKind::Intelligence);
/// assert_eq!(StatKind::Combat.name(), "combat");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Intelligence,
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
}

impl StatKind {
    /// All six stats in scan order.
    pub const ALL: [StatKind; 6] = [
        StatKind::Intelligence,
        StatKind::Strength,
        StatKind::Speed,
        StatKind::Durability,
        StatKind::Power,
        StatKind::Combat,
    ];

    /// Lowercase name, as used in dataset keys and battle stories.
    pub fn name(self) -> &'static str {
        match self {
            StatKind::Intelligence => "intelligence",
            StatKind::Strength => "strength",
            StatKind::Speed => "speed",
            StatKind::Durability => "durability",
            StatKind::Power => "power",
            StatKind::Combat => "combat",
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Intelligence => "Intelligence",
            StatKind::Strength => "Strength",
            StatKind::Speed => "Speed",
            StatKind::Durability => "Durability",
            StatKind::Power => "Power",
            StatKind::Combat => "Combat",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A hero's six powerstats.
///
/// All six fields are required when deserializing; a record missing one
/// is rejected at load time. Values are typically 0-100 but are neither
/// validated nor clamped.
///
/// # Examples
///
/// ```rust
/// use herodex::{Powerstats, StatKind};
///
/// let stats = Powerstats::new(38, 100, 17, 80, 24, 64);
/// assert_eq!(stats.total(), 323);
/// assert_eq!(stats.top_stat(), (StatKind::Strength, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Powerstats {
    pub intelligence: i64,
    pub strength: i64,
    pub speed: i64,
    pub durability: i64,
    pub power: i64,
    pub combat: i64,
}

impl Powerstats {
    /// Create a stat block. Arguments follow the scan order.
    pub fn new(
        intelligence: i64,
        strength: i64,
        speed: i64,
        durability: i64,
        power: i64,
        combat: i64,
    ) -> Self {
        Self {
            intelligence,
            strength,
            speed,
            durability,
            power,
            combat,
        }
    }

    /// Create a stat block with every field set to `value`.
    pub fn uniform(value: i64) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Get the value of a single stat.
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Intelligence => self.intelligence,
            StatKind::Strength => self.strength,
            StatKind::Speed => self.speed,
            StatKind::Durability => self.durability,
            StatKind::Power => self.power,
            StatKind::Combat => self.combat,
        }
    }

    /// Iterate `(stat, value)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i64)> + '_ {
        StatKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }

    /// Total power: the sum of all six stats.
    ///
    /// Saturates instead of overflowing on absurd inputs.
    pub fn total(&self) -> i64 {
        self.iter().fold(0i64, |acc, (_, v)| acc.saturating_add(v))
    }

    /// The highest stat and its value.
    ///
    /// When several stats share the maximum, the first one in scan order
    /// wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use herodex::{Powerstats, StatKind};
    ///
    /// let flat = Powerstats::uniform(50);
    /// assert_eq!(flat.top_stat(), (StatKind::Intelligence, 50));
    /// ```
    pub fn top_stat(&self) -> (StatKind, i64) {
        let mut best = (StatKind::Intelligence, self.intelligence);
        for (kind, value) in self.iter().skip(1) {
            if value > best.1 {
                best = (kind, value);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let ant_man = Powerstats::new(100, 18, 23, 28, 32, 32);
        assert_eq!(ant_man.total(), 233);
    }

    #[test]
    fn test_total_with_negative_values() {
        let odd = Powerstats::new(-10, 10, 0, 0, 0, 5);
        assert_eq!(odd.total(), 5);
    }

    #[test]
    fn test_top_stat_prefers_scan_order_on_ties() {
        let stats = Powerstats::new(10, 90, 90, 20, 90, 5);
        assert_eq!(stats.top_stat(), (StatKind::Strength, 90));

        let combat_only = Powerstats::new(1, 1, 1, 1, 1, 2);
        assert_eq!(combat_only.top_stat(), (StatKind::Combat, 2));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"intelligence":1,"strength":2,"speed":3,"durability":4,"power":5}"#;
        assert!(serde_json::from_str::<Powerstats>(json).is_err());
    }

    #[test]
    fn test_iter_order() {
        let stats = Powerstats::new(1, 2, 3, 4, 5, 6);
        let names: Vec<_> = stats.iter().map(|(k, _)| k.name()).collect();
        assert_eq!(
            names,
            ["intelligence", "strength", "speed", "durability", "power", "combat"]
        );
    }
}
