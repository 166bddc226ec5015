//! Battle narration.
//!
//! Produces a short, deterministic battle story from two fighters' stat
//! blocks. The story style is picked from the gap between the fighters'
//! total power; the same pair always yields the same text.
//!
//! ```text
//! power gap   tier       story focus
//! < 20        Even       both totals, narrowest of margins
//! 20..50      Clear      winner's best stat and total
//! >= 50       Dominant   stats where the winner leads by more than 20
//! ```

use crate::hero::Fighter;
use crate::powerstats::StatKind;
use serde::{Deserialize, Serialize};

/// Maximum story length, counted in Unicode scalar values (`char`s).
///
/// Not bytes and not UTF-16 code units: a name outside the Basic
/// Multilingual Plane counts one per symbol.
pub const MAX_STORY_CHARS: usize = 800;

const ELLIPSIS: &str = "...";

/// Power gaps below this are an even match.
const CLEAR_GAP: i64 = 20;

/// Power gaps at or above this are a rout.
const DOMINANT_GAP: i64 = 50;

/// A stat is called out in a rout when the winner leads it by more than this.
const STANDOUT_MARGIN: i64 = 20;

/// Stats considered for the dominant-tier callout, in story order.
const STANDOUT_STATS: [StatKind; 3] = [StatKind::Strength, StatKind::Speed, StatKind::Combat];

/// Story style, chosen by the total power gap.
///
/// # Examples
///
/// ```rust
/// use herodex::BattleTier;
///
/// assert_eq!(BattleTier::from_gap(0), BattleTier::Even);
/// assert_eq!(BattleTier::from_gap(20), BattleTier::Clear);
/// assert_eq!(BattleTier::from_gap(49), BattleTier::Clear);
/// assert_eq!(BattleTier::from_gap(50), BattleTier::Dominant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleTier {
    /// Gap under 20.
    Even,
    /// Gap of 20 up to 49.
    Clear,
    /// Gap of 50 or more.
    Dominant,
}

impl BattleTier {
    pub fn from_gap(gap: i64) -> Self {
        if gap < CLEAR_GAP {
            BattleTier::Even
        } else if gap < DOMINANT_GAP {
            BattleTier::Clear
        } else {
            BattleTier::Dominant
        }
    }
}

/// Structured outcome of a battle, including the story text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub tier: BattleTier,
    pub winner: String,
    pub loser: String,
    pub winner_power: i64,
    pub loser_power: i64,
    pub power_diff: i64,
    pub story: String,
}

/// Fight `hero1` against `hero2` and report the outcome.
///
/// The fighter with the greater or equal total power wins, so `hero1`
/// takes an exact tie.
pub fn battle<A, B>(hero1: &A, hero2: &B) -> BattleReport
where
    A: Fighter,
    B: Fighter,
{
    let power1 = hero1.powerstats().total();
    let power2 = hero2.powerstats().total();
    let power_diff = power1.abs_diff(power2).min(i64::MAX as u64) as i64;
    let tier = BattleTier::from_gap(power_diff);

    let first_wins = power1 >= power2;
    let winner: &dyn Fighter = if first_wins { hero1 } else { hero2 };
    let loser: &dyn Fighter = if first_wins { hero2 } else { hero1 };
    let (winner_power, loser_power) = if first_wins {
        (power1, power2)
    } else {
        (power2, power1)
    };

    let mut story = format!(
        "In an epic battle between {} and {}, ",
        hero1.name(),
        hero2.name()
    );

    match tier {
        BattleTier::Even => {
            story.push_str(
                "the two heroes were nearly evenly matched! Both fighters displayed incredible prowess. ",
            );
            story.push_str(&format!(
                "{} (power: {}) traded fierce blows with {} (power: {}). ",
                hero1.name(),
                power1,
                hero2.name(),
                power2
            ));
            story.push_str(&format!(
                "After an intense struggle, {} emerged victorious by the narrowest of margins, ",
                winner.name()
            ));
            story.push_str("earning the respect of their worthy opponent.");
        }
        BattleTier::Clear => {
            let (top, value) = winner.powerstats().top_stat();
            story.push_str(&format!(
                "{} held a clear advantage with superior abilities. ",
                winner.name()
            ));
            story.push_str(&format!(
                "Despite {}'s valiant effort, {}'s combination of ",
                loser.name(),
                winner.name()
            ));
            story.push_str(&format!(
                "{} ({}) and overall power ({}) ",
                top, value, winner_power
            ));
            story.push_str(&format!(
                "proved decisive. {} fought bravely but was ultimately overwhelmed.",
                loser.name()
            ));
        }
        BattleTier::Dominant => {
            story.push_str(&format!("{} completely dominated the fight! ", winner.name()));
            story.push_str(&format!(
                "With overwhelming power ({} vs {}), ",
                winner_power, loser_power
            ));
            story.push_str(&format!("{} showcased superior ", winner.name()));

            let standouts: Vec<&str> = STANDOUT_STATS
                .iter()
                .filter(|&&kind| {
                    winner.powerstats().get(kind)
                        > loser.powerstats().get(kind).saturating_add(STANDOUT_MARGIN)
                })
                .map(|kind| kind.name())
                .collect();
            if standouts.is_empty() {
                story.push_str("abilities across the board. ");
            } else {
                story.push_str(&standouts.join(", "));
                story.push_str(". ");
            }

            story.push_str(&format!(
                "{} never stood a chance against such overwhelming might.",
                loser.name()
            ));
        }
    }

    BattleReport {
        tier,
        winner: winner.name().to_string(),
        loser: loser.name().to_string(),
        winner_power,
        loser_power,
        power_diff,
        story: truncate_story(story),
    }
}

/// Tell the story of `hero1` against `hero2`.
///
/// Never longer than [`MAX_STORY_CHARS`] characters.
///
/// # Examples
///
/// ```rust
/// use herodex::{narrate, Contender, Powerstats};
///
/// let a_bomb = Contender::new("A-Bomb", Powerstats::new(38, 100, 17, 80, 24, 64));
/// let ant_man = Contender::new("Ant-Man", Powerstats::new(100, 18, 23, 28, 32, 32));
///
/// let story = narrate(&a_bomb, &ant_man);
/// assert!(story.contains("A-Bomb completely dominated the fight!"));
/// assert!(story.contains("strength"));
/// ```
pub fn narrate<A, B>(hero1: &A, hero2: &B) -> String
where
    A: Fighter,
    B: Fighter,
{
    battle(hero1, hero2).story
}

/// Cut `story` to 797 characters plus an ellipsis when it runs long.
fn truncate_story(story: String) -> String {
    if story.chars().count() <= MAX_STORY_CHARS {
        return story;
    }
    let keep = MAX_STORY_CHARS - ELLIPSIS.len();
    let mut cut: String = story.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
