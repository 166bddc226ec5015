//! Search example: fuzzy name search over the bundled dataset
//!
//! This example demonstrates:
//! - Loading the roster from the configured dataset path
//! - Ranking heroes against a query
//!
//! Run with `cargo run --example search -- bat`. Set `RUST_LOG=debug` to
//! see loader and ranking logs.

use herodex::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DatasetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let roster = Roster::from_config(&DatasetConfig::from_env())?;
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    println!("Query: {:?}", query);
    let found = roster.search(&query);
    if found.is_empty() {
        println!("No superheroes matching the search query");
        return Ok(());
    }

    println!("\n=== Results ({}) ===", found.len());
    for hero in &found {
        println!(
            "  {:>4}  {:<20} score {:>4}  total power {}",
            hero.id(),
            hero.name(),
            fuzzy_score(query.trim(), hero.name()),
            hero.powerstats().total()
        );
    }

    Ok(())
}
