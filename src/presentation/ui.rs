/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a UI message
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiTextType {
    /// Informational message
    #[default]
    Info,
    /// Something went wrong, e.g. a wrong password
    Error,
    /// Operation succeeded
    Success,
    /// A severity this client does not know yet
    #[serde(untagged)]
    Other(String),
}

/// A message rendered to the end user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiText {
    /// Values interpolated into the message, keyed by placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    /// Stable message id, usable for translations
    pub id: i64,
    /// Message in English
    pub text: String,
    /// Message severity
    #[serde(rename = "type")]
    pub text_type: UiTextType,
}

/// Kind of UI node
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UiNodeType {
    /// Form input
    Input,
    /// Static text, e.g. lookup secrets
    Text,
    /// Image, e.g. a TOTP QR code
    Img,
    /// Anchor
    A,
    /// Script, e.g. WebAuthn helpers
    Script,
    /// Container element
    Div,
    /// A node type this client does not know yet
    #[serde(untagged)]
    Other(String),
}

impl UiNodeType {
    /// Wire name of the node type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            UiNodeType::Input => "input",
            UiNodeType::Text => "text",
            UiNodeType::Img => "img",
            UiNodeType::A => "a",
            UiNodeType::Script => "script",
            UiNodeType::Div => "div",
            UiNodeType::Other(other) => other,
        }
    }
}

/// Metadata attached to a node
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UiNodeMeta {
    /// Label of the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<UiText>,
}

/// One element of a flow's UI
///
/// Attributes depend on the node type and are kept as raw JSON.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiNode {
    /// Type specific attributes
    pub attributes: Value,
    /// Method group the node belongs to, e.g. `default`, `password`, `oidc`
    pub group: String,
    /// Messages for this node
    #[serde(default)]
    pub messages: Vec<UiText>,
    /// Node metadata
    #[serde(default)]
    pub meta: UiNodeMeta,
    /// Node type
    #[serde(rename = "type")]
    pub node_type: UiNodeType,
}

impl UiNode {
    /// The `name` attribute of input nodes
    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }

    /// The `value` attribute as a string, when it is one
    #[must_use]
    pub fn attribute_value(&self) -> Option<&str> {
        self.attributes.get("value").and_then(Value::as_str)
    }

    /// Label text of the node
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.meta.label.as_ref().map(|label| label.text.as_str())
    }
}

/// The UI of a self-service flow: where to submit and what to render
#[derive(DebugPretty, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiContainer {
    /// URL the form must be submitted to
    pub action: String,
    /// Flow level messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<UiText>>,
    /// HTTP method of the form
    pub method: String,
    /// Nodes to render
    pub nodes: Vec<UiNode>,
}

impl UiContainer {
    /// Nodes belonging to the given group
    pub fn nodes_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a UiNode> {
        self.nodes.iter().filter(move |node| node.group == group)
    }

    /// First node whose `name` attribute matches
    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&UiNode> {
        self.nodes
            .iter()
            .find(|node| node.attribute_name() == Some(name))
    }

    /// All messages of the container and its nodes
    pub fn all_messages(&self) -> impl Iterator<Item = &UiText> {
        self.messages
            .iter()
            .flatten()
            .chain(self.nodes.iter().flat_map(|node| node.messages.iter()))
    }
}

impl std::fmt::Display for UiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        writeln!(f, "{} {}", self.method, self.action)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("GROUP"),
            Cell::new("TYPE"),
            Cell::new("NAME"),
            Cell::new("LABEL"),
            Cell::new("MESSAGES"),
        ]));

        for node in &self.nodes {
            let messages = node
                .messages
                .iter()
                .map(|m| m.text.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            table.add_row(Row::new(vec![
                Cell::new(&node.group),
                Cell::new(node.node_type.as_str()),
                Cell::new(node.attribute_name().unwrap_or("-")),
                Cell::new(node.label().unwrap_or("-")),
                Cell::new(&messages),
            ]));
        }

        write!(f, "{}", table)
    }
}
