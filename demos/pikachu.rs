//! Renders a scrolling screen with a single Pikachu card and prints the tree as JSON.
//!
//! Run with `RUST_LOG=pokemon_card=debug` to see render events.

use pokemon_card::cards::{CardProperties, ImageSource};
use pokemon_card::core::{Platform, RenderConfig};
use pokemon_card::render::render_card_list;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let platform = match std::env::args().nth(1).as_deref() {
        Some("android") => Platform::Android,
        Some("other") => Platform::Other,
        _ => Platform::Ios,
    };
    let config = RenderConfig::new().with_platform(platform);

    let pikachu = CardProperties::new("Pikachu", ImageSource::asset("./assets/pikachu.png"), 100)
        .with_type("electric")
        .with_moves(["Thunderbolt", "Quick Attack"])
        .with_weaknesses(["Ground"]);

    let screen = render_card_list(&[pikachu], &config);
    let json = serde_json::to_string_pretty(&screen)?;
    println!("{json}");
    Ok(())
}
