//! # herodex - Deterministic Superhero Roster
//!
//! A read-only superhero dataset with two pieces of real logic on top:
//! - **Fuzzy search** that ranks heroes by how well their names match a
//!   query, with a fully deterministic order
//! - **Battle stories** generated from two heroes' powerstats, always the
//!   same text for the same pair and never longer than 800 characters
//!
//! ## Core Concepts
//!
//! ```text
//! [HeroSource] → [Roster] → search / lookup / battle
//! ```
//!
//! 1. **Sources** load the dataset once and reject malformed records
//! 2. **Roster** is the immutable, shareable hero collection
//! 3. **Search** and **narration** are pure functions over heroes
//!
//! Searching and narrating never fail and never panic, whatever the query
//! text. Errors only come from loading data, failed lookups and invalid
//! compare requests.
//!
//! ## Example
//!
//! ```rust
//! use herodex::*;
//! use herodex::source::JsonStrSource;
//!
//! let source = JsonStrSource::new(r#"[
//!   {"id": 1, "name": "A-Bomb", "image": "",
//!    "powerstats": {"intelligence":38,"strength":100,"speed":17,"durability":80,"power":24,"combat":64}},
//!   {"id": 2, "name": "Ant-Man", "image": "",
//!    "powerstats": {"intelligence":100,"strength":18,"speed":23,"durability":28,"power":32,"combat":32}}
//! ]"#);
//!
//! let roster = Roster::load(&source)?;
//! assert_eq!(roster.search("ant")[0].name(), "Ant-Man");
//!
//! let story = narrate(roster.get(1)?, roster.get(2)?);
//! assert!(story.contains("A-Bomb completely dominated the fight!"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`hero_id`] - Normalized hero identifiers
//! - [`powerstats`] - Stat blocks and aggregation
//! - [`hero`] - Hero records and the `Fighter` trait
//! - [`fuzzy`] - Tiered fuzzy name matching
//! - [`search`] - Search ranking
//! - [`narrator`] - Battle stories
//! - [`source`] - Dataset loading
//! - [`config`] - Dataset location
//! - [`roster`] - The loaded hero collection
//! - [`compare`] - Compare requests
//! - [`format`] - Markdown hero cards
//! - [`error`] - Error types

pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod fuzzy;
pub mod hero;
pub mod hero_id;
pub mod narrator;
pub mod powerstats;
pub mod roster;
pub mod search;
pub mod source;

// Re-export main types for convenience
pub use config::DatasetConfig;
pub use error::{CompareError, DatasetError, LookupError};
pub use hero::{Contender, Fighter, Hero};
pub use hero_id::HeroId;
pub use powerstats::{Powerstats, StatKind};
pub use roster::{HeroQuery, Roster};

// Re-export the core algorithms
pub use format::hero_markdown;
pub use fuzzy::{fuzzy_score, MatchTier};
pub use narrator::{battle, narrate, BattleReport, BattleTier, MAX_STORY_CHARS};
pub use search::rank;

// Re-export loading and request types
pub use compare::{compare, CompareRequest, CompareResponse, ContenderSpec};
pub use source::{HeroSource, JsonFileSource, JsonStrSource};
