//! Card rendering integration tests.
//!
//! These tests render complete cards and check the visible text and the
//! styles the host receives, including platform-specific surfaces and the
//! JSON boundary.

use pokemon_card::cards::{CardProperties, ImageSource};
use pokemon_card::core::{CardError, Platform, RenderConfig};
use pokemon_card::render::{
    render_card, render_card_list, Dimension, Node, ResizeMode, StyleName,
};

fn pikachu() -> CardProperties {
    CardProperties::new("Pikachu", ImageSource::asset("assets/pikachu.png"), 100)
        .with_type("electric")
        .with_moves(["Thunderbolt", "Quick Attack"])
        .with_weaknesses(["Ground"])
}

fn missingno() -> CardProperties {
    CardProperties::new("MissingNo", ImageSource::asset("assets/missingno.png"), 0)
}

fn badge_border(tree: &Node) -> Option<&str> {
    tree.find(StyleName::Badge)
        .and_then(Node::style)
        .and_then(|s| s.border_color.as_ref())
        .map(|c| c.as_str())
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Test the fully populated Pikachu card.
#[test]
fn test_pikachu_card() {
    let tree = render_card(&pikachu(), &RenderConfig::default());

    assert_eq!(tree.find_text(StyleName::Name), Some("Pikachu"));
    assert_eq!(tree.find_text(StyleName::Hp), Some("❤️HP: 100"));
    assert_eq!(tree.find_text(StyleName::TypeEmoji), Some("⚡️"));
    assert_eq!(tree.find_text(StyleName::TypeText), Some("electric"));
    assert_eq!(badge_border(&tree), Some("#FFD700"));
    assert_eq!(
        tree.find_text(StyleName::MovesText),
        Some("Moves: Thunderbolt, Quick Attack")
    );
    assert_eq!(tree.find_text(StyleName::WeaknessText), Some("Weakness: Ground"));
}

/// Test the bare card with no type, moves or weaknesses.
#[test]
fn test_missingno_card() {
    let tree = render_card(&missingno(), &RenderConfig::default());

    assert_eq!(tree.find_text(StyleName::Name), Some("MissingNo"));
    assert_eq!(tree.find_text(StyleName::Hp), Some("❤️HP: 0"));
    assert_eq!(tree.find_text(StyleName::TypeEmoji), Some("❓"));
    assert_eq!(tree.find_text(StyleName::TypeText), Some("Unknown"));
    assert_eq!(badge_border(&tree), Some("#A0A0A0"));
    assert_eq!(tree.find_text(StyleName::MovesText), Some("Moves: "));
    assert_eq!(tree.find_text(StyleName::WeaknessText), Some("Weakness: "));
}

/// Test that badge text keeps the caller's casing.
#[test]
fn test_type_casing_preserved() {
    let props = missingno().with_type("Electric");
    let tree = render_card(&props, &RenderConfig::default());

    assert_eq!(tree.find_text(StyleName::TypeText), Some("Electric"));
    assert_eq!(tree.find_text(StyleName::TypeEmoji), Some("⚡️"));
    assert_eq!(badge_border(&tree), Some("#FFD700"));
}

/// Test that an unrecognized type is shown verbatim with the default badge.
#[test]
fn test_unrecognized_type_shown_verbatim() {
    let props = missingno().with_type("Psychic");
    let tree = render_card(&props, &RenderConfig::default());

    assert_eq!(tree.find_text(StyleName::TypeText), Some("Psychic"));
    assert_eq!(tree.find_text(StyleName::TypeEmoji), Some("❓"));
    assert_eq!(badge_border(&tree), Some("#A0A0A0"));
}

/// Test that an empty type is shown as-is (not "Unknown") with the default badge.
#[test]
fn test_empty_type_shown_blank() {
    let props = missingno().with_type("");
    let tree = render_card(&props, &RenderConfig::default());

    assert_eq!(tree.find_text(StyleName::TypeText), Some(""));
    assert_eq!(tree.find_text(StyleName::TypeEmoji), Some("❓"));
    assert_eq!(badge_border(&tree), Some("#A0A0A0"));
}

/// Test that absent and empty move lists render the same line.
#[test]
fn test_absent_and_empty_moves_match() {
    let absent = CardProperties::from_json(r#"{"name": "Ditto", "image": "132.png", "hp": 48}"#)
        .expect("valid properties");
    let empty = CardProperties::from_json(
        r#"{"name": "Ditto", "image": "132.png", "hp": 48, "moves": [], "weaknesses": []}"#,
    )
    .expect("valid properties");

    let config = RenderConfig::default();
    let absent_tree = render_card(&absent, &config);
    let empty_tree = render_card(&empty, &config);

    assert_eq!(absent_tree.find_text(StyleName::MovesText), Some("Moves: "));
    assert_eq!(absent_tree, empty_tree);
}

/// Test that identical inputs give identical trees.
#[test]
fn test_render_is_idempotent() {
    let config = RenderConfig::new().with_platform(Platform::Android);
    assert_eq!(render_card(&pikachu(), &config), render_card(&pikachu(), &config));
}

// =============================================================================
// Layout and Style Tests
// =============================================================================

/// Test the image region: contained, fixed height, labelled.
#[test]
fn test_image_region() {
    let tree = render_card(&pikachu(), &RenderConfig::default());

    match tree.find(StyleName::Image) {
        Some(Node::Image {
            source,
            resize_mode,
            accessibility_label,
            style,
            ..
        }) => {
            assert_eq!(source, &ImageSource::asset("assets/pikachu.png"));
            assert_eq!(*resize_mode, ResizeMode::Contain);
            assert_eq!(accessibility_label, "Pikachu Pokemon");
            assert_eq!(style.height, Some(Dimension::Points(200.0)));
            assert_eq!(style.width, Some(Dimension::Percent(100.0)));
        }
        other => panic!("expected image node, got {other:?}"),
    }
}

/// Test platform-conditional card surfaces.
#[test]
fn test_platform_surfaces() {
    let ios = render_card(&pikachu(), &RenderConfig::new().with_platform(Platform::Ios));
    let android = render_card(&pikachu(), &RenderConfig::new().with_platform(Platform::Android));
    let other = render_card(&pikachu(), &RenderConfig::new().with_platform(Platform::Other));

    let ios_card = ios.style().expect("card style");
    assert!(ios_card.shadow_offset.is_some());
    assert_eq!(ios_card.elevation, None);

    let android_card = android.style().expect("card style");
    assert_eq!(android_card.elevation, Some(5.0));
    assert!(android_card.shadow_offset.is_none());

    let other_card = other.style().expect("card style");
    assert!(other_card.shadow_offset.is_none());
    assert_eq!(other_card.elevation, None);

    // Only the surface differs; the text is the same everywhere.
    assert_eq!(ios.text_content(), android.text_content());
    assert_eq!(ios.text_content(), other.text_content());
}

/// Test that the card list renders every card in order.
#[test]
fn test_card_list() {
    let cards = [pikachu(), missingno()];
    let tree = render_card_list(&cards, &RenderConfig::default());

    assert!(matches!(tree, Node::ScrollView { .. }));
    let names: Vec<_> = tree
        .children()
        .iter()
        .filter_map(|card| card.find_text(StyleName::Name))
        .collect();
    assert_eq!(names, vec!["Pikachu", "MissingNo"]);
}

// =============================================================================
// Boundary Tests
// =============================================================================

/// Test that a numeric type is rejected at the JSON boundary.
#[test]
fn test_non_string_type_rejected() {
    let result =
        CardProperties::from_json(r#"{"name": "Glitch", "image": "x.png", "hp": 1, "type": 12}"#);
    assert!(matches!(result, Err(CardError::InvalidProperties(_))));
}

/// Test that a rendered tree serializes for the host.
#[test]
fn test_tree_serializes() {
    let tree = render_card(&pikachu(), &RenderConfig::new().with_platform(Platform::Android));
    let json = serde_json::to_value(&tree).expect("serializable tree");

    assert_eq!(json["kind"], "view");
    assert_eq!(json["style"]["elevation"], 5.0);
    assert_eq!(json["style"]["backgroundColor"], "white");

    let badge = &json["children"][2]["children"][0];
    assert_eq!(badge["name"], "badge");
    assert_eq!(badge["style"]["borderColor"], "#FFD700");
    assert_eq!(badge["style"]["borderWidth"], 4.0);
}
