//! Battle example: tell the story of two heroes
//!
//! This example demonstrates:
//! - Resolving heroes by name or id
//! - The structured battle report
//! - Rendering a hero card
//!
//! Run with `cargo run --example battle -- A-Bomb 2`.

use herodex::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let roster = Roster::from_config(&DatasetConfig::from_env())?;

    let mut args = std::env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "A-Bomb".to_string());
    let second = args.next().unwrap_or_else(|| "Ant-Man".to_string());

    for key in [&first, &second] {
        println!("{}\n", hero_markdown(roster.find_by_name_or_id(key)?));
    }

    let report = roster.compare_by_name_or_id(&first, &second)?;

    println!("=== Battle ===");
    println!("Tier: {:?}", report.tier);
    println!(
        "Winner: {} ({} vs {}, gap {})",
        report.winner, report.winner_power, report.loser_power, report.power_diff
    );
    println!("\n{}", report.story);

    Ok(())
}
