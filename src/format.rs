//! Markdown rendering for tool-style responses.

use crate::hero::Hero;

/// Render a hero as a markdown card: name, image tag and powerstats.
///
/// # Examples
///
/// ```rust
/// use herodex::{hero_markdown, Hero, Powerstats};
///
/// let hero = Hero::new(1, "A-Bomb", "a.jpg", Powerstats::new(38, 100, 17, 80, 24, 64));
/// let card = hero_markdown(&hero);
/// assert!(card.contains("• Name: A-Bomb"));
/// assert!(card.contains("  • Strength: 100"));
/// ```
pub fn hero_markdown(hero: &Hero) -> String {
    let name = hero.name();
    let mut out = format!(
        "Here is the data for {name} retrieved using the superheroes MCP:\n\n\
         • Name: {name}\n\
         • Image: <img src=\"{image}\" alt=\"{name}\"/>\n\
         • Powerstats:",
        image = hero.image(),
    );
    for (kind, value) in hero.powerstats().iter() {
        out.push_str(&format!("\n  • {}: {}", kind.label(), value));
    }
    out
}
