//! Declarative view tree handed to the host rendering framework.
//!
//! The tree is plain data. It is serialized with a `kind` tag per node so a
//! host can walk it without knowing any Rust types.

use serde::Serialize;

use super::style::{ResizeMode, Style};
use super::stylesheet::StyleName;
use crate::cards::ImageSource;

/// A node in the view tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    /// Layout container.
    View {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<StyleName>,
        style: Style,
        children: Vec<Node>,
    },
    /// A run of text.
    Text {
        name: StyleName,
        style: Style,
        content: String,
    },
    /// An image loaded by the host.
    #[serde(rename_all = "camelCase")]
    Image {
        name: StyleName,
        style: Style,
        source: ImageSource,
        resize_mode: ResizeMode,
        accessibility_label: String,
    },
    /// Vertically scrolling container.
    ScrollView { children: Vec<Node> },
}

impl Node {
    /// Create a named view.
    #[must_use]
    pub fn view(name: StyleName, style: Style, children: Vec<Node>) -> Self {
        Node::View {
            name: Some(name),
            style,
            children,
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(name: StyleName, style: Style, content: impl Into<String>) -> Self {
        Node::Text {
            name,
            style,
            content: content.into(),
        }
    }

    /// Style name of this node, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<StyleName> {
        match self {
            Node::View { name, .. } => *name,
            Node::Text { name, .. } | Node::Image { name, .. } => Some(*name),
            Node::ScrollView { .. } => None,
        }
    }

    /// Style of this node. Scroll views carry none.
    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::View { style, .. } | Node::Text { style, .. } | Node::Image { style, .. } => {
                Some(style)
            }
            Node::ScrollView { .. } => None,
        }
    }

    /// Child nodes. Leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View { children, .. } | Node::ScrollView { children } => children,
            Node::Text { .. } | Node::Image { .. } => &[],
        }
    }

    /// Depth-first search for the first node with the given style name.
    #[must_use]
    pub fn find(&self, target: StyleName) -> Option<&Node> {
        if self.name() == Some(target) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(target))
    }

    /// Content of the first text node with the given style name.
    #[must_use]
    pub fn find_text(&self, target: StyleName) -> Option<&str> {
        match self.find(target)? {
            Node::Text { content, .. } => Some(content.as_str()),
            _ => None,
        }
    }

    /// All text content in depth-first order.
    #[must_use]
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Node::Text { content, .. } = self {
            out.push(content.as_str());
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}
