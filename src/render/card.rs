//! Card renderer: card properties to view tree.
//!
//! Layout, top to bottom:
//!
//! ```text
//! card
//! ├── nameContainer   name ............ ❤️HP: {hp}
//! ├── image           contained in a fixed-height box
//! ├── typeContainer
//! │   └── badge       {emoji} {type or "Unknown"}, bordered in the type color
//! ├── movesContainer  Moves: {moves joined with ", "}
//! └── weaknessContainer  Weakness: {weaknesses joined with ", "}
//! ```
//!
//! Rendering is pure: the same properties and config always give an equal tree.

use super::node::Node;
use super::style::{ResizeMode, Style};
use super::stylesheet::{StyleName, StyleSheet};
use crate::cards::{resolve_type_display, CardProperties};
use crate::core::RenderConfig;

/// Badge text shown when the card has no type.
pub const UNKNOWN_TYPE_LABEL: &str = "Unknown";

/// Header hit point text, e.g. `❤️HP: 100`.
#[must_use]
pub fn hp_label(hp: i64) -> String {
    format!("❤️HP: {hp}")
}

/// Moves line, e.g. `Moves: Thunderbolt, Quick Attack`. Empty lists give `Moves: `.
#[must_use]
pub fn moves_line(moves: &[String]) -> String {
    format!("Moves: {}", moves.join(", "))
}

/// Weakness line, e.g. `Weakness: Ground`. Empty lists give `Weakness: `.
#[must_use]
pub fn weakness_line(weaknesses: &[String]) -> String {
    format!("Weakness: {}", weaknesses.join(", "))
}

/// Accessibility label for the card image.
#[must_use]
pub fn image_label(name: &str) -> String {
    format!("{name} Pokemon")
}

/// Render one card.
///
/// ## Example
///
/// ```
/// use pokemon_card::cards::{CardProperties, ImageSource};
/// use pokemon_card::core::RenderConfig;
/// use pokemon_card::render::{render_card, StyleName};
///
/// let props = CardProperties::new("MissingNo", ImageSource::asset("missingno.png"), 0);
/// let tree = render_card(&props, &RenderConfig::default());
///
/// assert_eq!(tree.find_text(StyleName::TypeText), Some("Unknown"));
/// assert_eq!(tree.find_text(StyleName::MovesText), Some("Moves: "));
/// ```
#[must_use]
pub fn render_card(props: &CardProperties, config: &RenderConfig) -> Node {
    render_with_sheet(props, &config.stylesheet())
}

/// Render several cards inside a vertically scrolling container, in order.
#[must_use]
pub fn render_card_list(cards: &[CardProperties], config: &RenderConfig) -> Node {
    let sheet = config.stylesheet();
    Node::ScrollView {
        children: cards
            .iter()
            .map(|props| render_with_sheet(props, &sheet))
            .collect(),
    }
}

fn render_with_sheet(props: &CardProperties, sheet: &StyleSheet) -> Node {
    let type_display = resolve_type_display(props.type_label());
    tracing::debug!(
        name = %props.name,
        element_type = props.type_label().unwrap_or(UNKNOWN_TYPE_LABEL),
        emoji = type_display.emoji,
        "rendering card"
    );

    let style = |name: StyleName| sheet.style(name);

    let header = Node::view(
        StyleName::NameContainer,
        style(StyleName::NameContainer),
        vec![
            Node::text(StyleName::Name, style(StyleName::Name), props.name.as_str()),
            Node::text(StyleName::Hp, style(StyleName::Hp), hp_label(props.hp)),
        ],
    );

    let image = Node::Image {
        name: StyleName::Image,
        style: style(StyleName::Image),
        source: props.image.clone(),
        resize_mode: ResizeMode::Contain,
        accessibility_label: image_label(&props.name),
    };

    let badge = Node::view(
        StyleName::Badge,
        style(StyleName::Badge).merge(&Style::border(type_display.border_color.clone())),
        vec![
            Node::text(StyleName::TypeEmoji, style(StyleName::TypeEmoji), type_display.emoji),
            Node::text(
                StyleName::TypeText,
                style(StyleName::TypeText),
                props.type_label().unwrap_or(UNKNOWN_TYPE_LABEL),
            ),
        ],
    );
    let type_row = Node::view(StyleName::TypeContainer, style(StyleName::TypeContainer), vec![badge]);

    let moves = Node::view(
        StyleName::MovesContainer,
        style(StyleName::MovesContainer),
        vec![Node::text(StyleName::MovesText, style(StyleName::MovesText), moves_line(&props.moves))],
    );

    let weaknesses = Node::view(
        StyleName::WeaknessContainer,
        style(StyleName::WeaknessContainer),
        vec![Node::text(
            StyleName::WeaknessText,
            style(StyleName::WeaknessText),
            weakness_line(&props.weaknesses),
        )],
    );

    Node::view(
        StyleName::Card,
        style(StyleName::Card),
        vec![header, image, type_row, moves, weaknesses],
    )
}
